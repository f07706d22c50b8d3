//! In-memory integration tests for task lifecycle operations.

use std::sync::Arc;

use taskboard::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{TaskDomainError, TaskId, TaskStatus},
    services::{CreateTaskRequest, TaskLifecycleError, TaskLifecycleService, UpdateTaskRequest},
};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

type TestService = TaskLifecycleService<InMemoryTaskRepository, DefaultClock>;

#[fixture]
fn service() -> TestService {
    TaskLifecycleService::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(DefaultClock),
    )
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn advancing_walks_each_status_then_refuses(service: TestService) {
    let created = service
        .create_task(CreateTaskRequest::new("Write onboarding guide"))
        .await
        .expect("task creation should succeed");
    assert_eq!(created.status(), TaskStatus::Todo);

    let started = service
        .advance_status(created.id())
        .await
        .expect("advance to in_progress should succeed");
    assert_eq!(started.status(), TaskStatus::InProgress);

    let finished = service
        .advance_status(created.id())
        .await
        .expect("advance to done should succeed");
    assert_eq!(finished.status(), TaskStatus::Done);

    let refused = service.advance_status(created.id()).await;
    assert!(matches!(
        refused,
        Err(TaskLifecycleError::Domain(TaskDomainError::AlreadyTerminal {
            status: TaskStatus::Done,
            ..
        }))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn editing_a_done_task_back_to_todo_is_rejected(service: TestService) {
    let created = service
        .create_task(CreateTaskRequest::new("Close quarter"))
        .await
        .expect("task creation should succeed");
    service
        .update_task(UpdateTaskRequest::new(created.id()).with_status("done"))
        .await
        .expect("edit to done should succeed");

    let result = service
        .update_task(UpdateTaskRequest::new(created.id()).with_status("todo"))
        .await;

    assert!(matches!(
        result,
        Err(TaskLifecycleError::Domain(
            TaskDomainError::InvalidStatusTransition { .. }
        ))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn edit_skips_ahead_but_advance_moves_one_step(service: TestService) {
    let edited = service
        .create_task(CreateTaskRequest::new("Quick fix"))
        .await
        .expect("task creation should succeed");
    let advanced = service
        .create_task(CreateTaskRequest::new("Slow fix"))
        .await
        .expect("task creation should succeed");

    let skipped = service
        .update_task(UpdateTaskRequest::new(edited.id()).with_status("done"))
        .await
        .expect("skip to done should succeed");
    let stepped = service
        .advance_status(advanced.id())
        .await
        .expect("advance should succeed");

    assert_eq!(skipped.status(), TaskStatus::Done);
    assert_eq!(stepped.status(), TaskStatus::InProgress);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn edit_changes_other_fields_alongside_unchanged_status(service: TestService) {
    let created = service
        .create_task(CreateTaskRequest::new("Draft memo").with_assigned_to("alice"))
        .await
        .expect("task creation should succeed");

    let updated = service
        .update_task(
            UpdateTaskRequest::new(created.id())
                .with_title("Final memo")
                .with_description("Ready for review")
                .with_assigned_to("bob")
                .with_status("todo"),
        )
        .await
        .expect("edit with unchanged status should succeed");

    assert_eq!(updated.status(), TaskStatus::Todo);
    assert_eq!(updated.title().as_str(), "Final memo");
    assert_eq!(updated.description(), Some("Ready for review"));
    assert_eq!(updated.assigned_to(), Some("bob"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_task_is_not_found_rather_than_rejected(service: TestService) {
    let missing = TaskId::new();

    let fetched = service.get_task(missing).await;
    let deleted = service.delete_task(missing).await;
    let edited = service
        .update_task(UpdateTaskRequest::new(missing).with_status("banana"))
        .await;

    assert!(matches!(fetched, Err(TaskLifecycleError::NotFound(_))));
    assert!(matches!(deleted, Err(TaskLifecycleError::NotFound(_))));
    assert!(matches!(edited, Err(TaskLifecycleError::NotFound(_))));
}
