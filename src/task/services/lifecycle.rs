//! Service layer for task creation, editing, status advancement and removal.

use crate::task::{
    domain::{NewTask, Task, TaskDomainError, TaskEdit, TaskId},
    ports::{TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: Option<String>,
    assigned_to: Option<String>,
}

impl CreateTaskRequest {
    /// Creates a request with the required title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            assigned_to: None,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the task assignee.
    #[must_use]
    pub fn with_assigned_to(mut self, assignee: impl Into<String>) -> Self {
        self.assigned_to = Some(assignee.into());
        self
    }
}

/// Request payload for editing an existing task.
///
/// Omitted fields, including `status`, keep their stored values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    task_id: TaskId,
    edit: TaskEdit,
}

impl UpdateTaskRequest {
    /// Creates a request that leaves every field unchanged.
    #[must_use]
    pub fn new(task_id: TaskId) -> Self {
        Self {
            task_id,
            edit: TaskEdit::new(),
        }
    }

    /// Replaces the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.edit = self.edit.with_title(title);
        self
    }

    /// Replaces the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.edit = self.edit.with_description(description);
        self
    }

    /// Replaces the assignee.
    #[must_use]
    pub fn with_assigned_to(mut self, assignee: impl Into<String>) -> Self {
        self.edit = self.edit.with_assigned_to(assignee);
        self
    }

    /// Requests a status change using the raw status token.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.edit = self.edit.with_status(status);
        self
    }
}

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// No task exists with the given identifier.
    #[error("task not found: {0}")]
    NotFound(TaskId),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(TaskRepositoryError),
}

impl From<TaskRepositoryError> for TaskLifecycleError {
    fn from(err: TaskRepositoryError) -> Self {
        match err {
            TaskRepositoryError::NotFound(id) => Self::NotFound(id),
            other => Self::Repository(other),
        }
    }
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task lifecycle orchestration service.
///
/// Each mutating operation reads the current task, lets the domain decide,
/// then saves against the version it read.
pub struct TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> Clone for TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R, C> TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates a task in the `todo` status.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Domain`] for a blank title or
    /// [`TaskLifecycleError::Repository`] when persistence fails.
    pub async fn create_task(&self, request: CreateTaskRequest) -> TaskLifecycleResult<Task> {
        let mut data = NewTask::new(request.title)?;
        if let Some(description) = request.description {
            data = data.with_description(description);
        }
        if let Some(assignee) = request.assigned_to {
            data = data.with_assigned_to(assignee);
        }

        let task = Task::new(data, &*self.clock);
        self.repository.store(&task).await?;
        info!(task_id = %task.id(), "task created");
        Ok(task)
    }

    /// Returns every task, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the lookup fails.
    pub async fn list_tasks(&self) -> TaskLifecycleResult<Vec<Task>> {
        let tasks = self.repository.list().await?;
        debug!(count = tasks.len(), "listed tasks");
        Ok(tasks)
    }

    /// Retrieves a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when the task does not exist.
    pub async fn get_task(&self, task_id: TaskId) -> TaskLifecycleResult<Task> {
        debug!(%task_id, "fetching task");
        self.repository
            .find_by_id(task_id)
            .await?
            .ok_or(TaskLifecycleError::NotFound(task_id))
    }

    /// Applies an edit, validating any requested status change.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] for an unknown task,
    /// [`TaskLifecycleError::Domain`] when the edit is rejected, or
    /// [`TaskLifecycleError::Repository`] on a concurrent modification or
    /// persistence failure.
    pub async fn update_task(&self, request: UpdateTaskRequest) -> TaskLifecycleResult<Task> {
        let UpdateTaskRequest { task_id, edit } = request;
        let mut task = self.get_task(task_id).await?;
        let expected_version = task.version();
        debug!(%task_id, requested_status = edit.status(), "applying task edit");

        if let Err(err) = task.apply_edit(edit, &*self.clock) {
            warn!(%task_id, error = %err, "task edit rejected");
            return Err(err.into());
        }

        self.repository.update(&task, expected_version).await?;
        info!(%task_id, status = %task.status(), "task updated");
        Ok(task)
    }

    /// Moves a task to the next status in the lifecycle.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] for an unknown task,
    /// [`TaskLifecycleError::Domain`] when the task is already done, or
    /// [`TaskLifecycleError::Repository`] on a concurrent modification or
    /// persistence failure.
    pub async fn advance_status(&self, task_id: TaskId) -> TaskLifecycleResult<Task> {
        let mut task = self.get_task(task_id).await?;
        let expected_version = task.version();
        let previous = task.status();

        if let Err(err) = task.advance(&*self.clock) {
            warn!(%task_id, error = %err, "task advance refused");
            return Err(err.into());
        }

        self.repository.update(&task, expected_version).await?;
        info!(%task_id, from = %previous, to = %task.status(), "task advanced");
        Ok(task)
    }

    /// Permanently removes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] for an unknown task or
    /// [`TaskLifecycleError::Repository`] when persistence fails.
    pub async fn delete_task(&self, task_id: TaskId) -> TaskLifecycleResult<()> {
        self.repository.delete(task_id).await?;
        info!(%task_id, "task deleted");
        Ok(())
    }
}
