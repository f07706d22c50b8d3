//! SQLite integration tests for the task repository.

use super::helpers::{clock, new_task, open_repository};
use mockable::DefaultClock;
use rstest::rstest;
use taskboard::task::{
    adapters::sqlite::{IN_MEMORY_URL, SqliteTaskRepository, build_pool},
    domain::{NewTask, Task, TaskEdit, TaskId, TaskStatus},
    ports::{TaskRepository, TaskRepositoryError},
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn stored_task_round_trips_every_field() {
    let repository = open_repository().await;
    let task = Task::new(
        NewTask::new("Renew certificates")
            .expect("valid task data")
            .with_description("Before the end of the month")
            .with_assigned_to("ops"),
        &DefaultClock,
    );

    repository.store(&task).await.expect("store should succeed");
    let fetched = repository
        .find_by_id(task.id())
        .await
        .expect("lookup should succeed")
        .expect("task should exist");

    assert_eq!(fetched.id(), task.id());
    assert_eq!(fetched.title(), task.title());
    assert_eq!(fetched.description(), Some("Before the end of the month"));
    assert_eq!(fetched.assigned_to(), Some("ops"));
    assert_eq!(fetched.status(), TaskStatus::Todo);
    assert_eq!(fetched.version(), Task::INITIAL_VERSION);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn storing_the_same_task_twice_is_a_duplicate() {
    let repository = open_repository().await;
    let task = new_task("Only once");

    repository.store(&task).await.expect("store should succeed");
    let result = repository.store(&task).await;

    assert!(matches!(
        result,
        Err(TaskRepositoryError::DuplicateTask(id)) if id == task.id()
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_persists_status_and_version(clock: DefaultClock) {
    let repository = open_repository().await;
    let mut task = new_task("Roll out release");
    repository.store(&task).await.expect("store should succeed");

    let expected_version = task.version();
    task.advance(&clock).expect("todo task should advance");
    repository
        .update(&task, expected_version)
        .await
        .expect("update should succeed");

    let fetched = repository
        .find_by_id(task.id())
        .await
        .expect("lookup should succeed")
        .expect("task should exist");
    assert_eq!(fetched.status(), TaskStatus::InProgress);
    assert_eq!(fetched.version(), Task::INITIAL_VERSION + 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn stale_version_is_a_conflict_and_leaves_row_untouched(clock: DefaultClock) {
    let repository = open_repository().await;
    let original = new_task("Shared task");
    repository
        .store(&original)
        .await
        .expect("store should succeed");

    let mut first_writer = original.clone();
    first_writer
        .apply_edit(TaskEdit::new().with_status("done"), &clock)
        .expect("skip to done should succeed");
    repository
        .update(&first_writer, original.version())
        .await
        .expect("first update should succeed");

    let mut second_writer = original.clone();
    second_writer
        .apply_edit(TaskEdit::new().with_title("Overwritten"), &clock)
        .expect("title edit should succeed");
    let result = repository
        .update(&second_writer, original.version())
        .await;

    assert!(matches!(
        result,
        Err(TaskRepositoryError::Conflict { id, expected_version })
            if id == original.id() && expected_version == original.version()
    ));
    let fetched = repository
        .find_by_id(original.id())
        .await
        .expect("lookup should succeed")
        .expect("task should exist");
    assert_eq!(fetched.status(), TaskStatus::Done);
    assert_eq!(fetched.title().as_str(), "Shared task");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_of_missing_task_is_not_found(clock: DefaultClock) {
    let repository = open_repository().await;
    let mut task = new_task("Never stored");
    let expected_version = task.version();
    task.advance(&clock).expect("todo task should advance");

    let result = repository.update(&task, expected_version).await;

    assert!(matches!(result, Err(TaskRepositoryError::NotFound(id)) if id == task.id()));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_returns_tasks_in_creation_order() {
    let repository = open_repository().await;
    let first = new_task("First");
    let second = new_task("Second");
    let third = new_task("Third");
    for task in [&first, &second, &third] {
        repository.store(task).await.expect("store should succeed");
    }

    let listed = repository.list().await.expect("listing should succeed");

    assert_eq!(listed.len(), 3);
    assert!(listed.windows(2).all(|pair| match pair {
        [earlier, later] => (earlier.created_at(), earlier.id()) <= (later.created_at(), later.id()),
        _ => true,
    }));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_removes_task_and_reports_missing_ones() {
    let repository = open_repository().await;
    let task = new_task("Temporary");
    repository.store(&task).await.expect("store should succeed");

    repository
        .delete(task.id())
        .await
        .expect("delete should succeed");
    let lookup = repository
        .find_by_id(task.id())
        .await
        .expect("lookup should succeed");
    let second_delete = repository.delete(task.id()).await;
    let unknown_delete = repository.delete(TaskId::new()).await;

    assert!(lookup.is_none());
    assert!(matches!(second_delete, Err(TaskRepositoryError::NotFound(_))));
    assert!(matches!(unknown_delete, Err(TaskRepositoryError::NotFound(_))));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn migration_is_idempotent() {
    let repository = open_repository().await;
    let task = new_task("Survives remigration");
    repository.store(&task).await.expect("store should succeed");

    repository
        .migrate()
        .await
        .expect("second migration should succeed");

    let listed = repository.list().await.expect("listing should succeed");
    assert_eq!(listed.len(), 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn in_memory_pool_serves_concurrent_reads_from_one_database() {
    let pool = build_pool(IN_MEMORY_URL, 8).expect("in-memory pool should open");
    assert_eq!(pool.max_size(), 1);
    let repository = SqliteTaskRepository::new(pool);
    repository
        .migrate()
        .await
        .expect("schema migration should succeed");
    repository
        .store(&new_task("Visible to every request"))
        .await
        .expect("store should succeed");

    let (first, second, third) =
        tokio::join!(repository.list(), repository.list(), repository.list());

    for listing in [first, second, third] {
        assert_eq!(listing.expect("listing should succeed").len(), 1);
    }
}

#[rstest]
fn zero_pool_size_is_raised_to_one() {
    let path = std::env::temp_dir().join(format!("taskboard-{}.db", TaskId::new()));
    let url = path.to_str().expect("temp path should be UTF-8");

    let pool = build_pool(url, 0).expect("file pool should open");
    let max_size = pool.max_size();
    drop(pool);
    std::fs::remove_file(&path).expect("temp database should be removable");

    assert_eq!(max_size, 1);
}
