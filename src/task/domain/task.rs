//! Task aggregate root and the edit and advance operations it guards.

use super::{TaskDomainError, TaskId, TaskStatus, TaskTitle, ids::normalize_optional_text};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::Serialize;

/// Task aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    id: TaskId,
    title: TaskTitle,
    description: Option<String>,
    status: TaskStatus,
    assigned_to: Option<String>,
    version: u64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    title: TaskTitle,
    description: Option<String>,
    assigned_to: Option<String>,
}

impl NewTask {
    /// Creates task data with the required title.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] if the title is blank.
    pub fn new(title: impl Into<String>) -> Result<Self, TaskDomainError> {
        Ok(Self {
            title: TaskTitle::new(title)?,
            description: None,
            assigned_to: None,
        })
    }

    /// Sets the task description. Blank values are dropped.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = normalize_optional_text(description);
        self
    }

    /// Sets the task assignee. Blank values are dropped.
    #[must_use]
    pub fn with_assigned_to(mut self, assignee: impl Into<String>) -> Self {
        self.assigned_to = normalize_optional_text(assignee);
        self
    }
}

/// Requested changes to an existing task.
///
/// Fields left as `None` keep their stored value, including `status`.
/// Supplying a blank description or assignee clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskEdit {
    title: Option<String>,
    description: Option<String>,
    assigned_to: Option<String>,
    status: Option<String>,
}

impl TaskEdit {
    /// Creates an edit that changes nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Replaces the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Replaces the assignee.
    #[must_use]
    pub fn with_assigned_to(mut self, assignee: impl Into<String>) -> Self {
        self.assigned_to = Some(assignee.into());
        self
    }

    /// Requests a status change using the raw status token.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Returns the requested status token, if any.
    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: TaskTitle,
    /// Persisted description, if any.
    pub description: Option<String>,
    /// Persisted lifecycle status.
    pub status: TaskStatus,
    /// Persisted assignee, if any.
    pub assigned_to: Option<String>,
    /// Persisted optimistic-concurrency version.
    pub version: u64,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Version assigned to freshly created tasks.
    pub const INITIAL_VERSION: u64 = 1;

    /// Creates a new task in the [`TaskStatus::Todo`] status.
    #[must_use]
    pub fn new(data: NewTask, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: TaskId::new(),
            title: data.title,
            description: data.description,
            status: TaskStatus::Todo,
            assigned_to: data.assigned_to,
            version: Self::INITIAL_VERSION,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            status: data.status,
            assigned_to: data.assigned_to,
            version: data.version,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the task description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the task lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the task assignee, if any.
    #[must_use]
    pub fn assigned_to(&self) -> Option<&str> {
        self.assigned_to.as_deref()
    }

    /// Returns the optimistic-concurrency version.
    #[must_use]
    pub const fn version(&self) -> u64 {
        self.version
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Applies an edit after validating any requested status change.
    ///
    /// The requested status must be a recognised token and, when it differs
    /// from the current status, must lie strictly after it. Skipping ahead is
    /// permitted. Nothing is modified when validation fails.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidStatus`] for an unrecognised status,
    /// [`TaskDomainError::InvalidStatusTransition`] for a non-forward move, or
    /// [`TaskDomainError::EmptyTitle`] for a blank replacement title.
    pub fn apply_edit(&mut self, edit: TaskEdit, clock: &impl Clock) -> Result<(), TaskDomainError> {
        let status = match edit.status.as_deref() {
            Some(token) => self.resolve_requested_status(token)?,
            None => self.status,
        };
        let title = edit.title.map(TaskTitle::new).transpose()?;

        if let Some(replacement) = title {
            self.title = replacement;
        }
        if let Some(description) = edit.description {
            self.description = normalize_optional_text(description);
        }
        if let Some(assignee) = edit.assigned_to {
            self.assigned_to = normalize_optional_text(assignee);
        }
        self.status = status;
        self.touch(clock);
        Ok(())
    }

    /// Moves the task to the status immediately after its current one.
    ///
    /// Never skips a status.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::AlreadyTerminal`] when the task is done.
    pub fn advance(&mut self, clock: &impl Clock) -> Result<TaskStatus, TaskDomainError> {
        let next = self
            .status
            .next()
            .ok_or(TaskDomainError::AlreadyTerminal {
                task_id: self.id,
                status: self.status,
            })?;
        self.status = next;
        self.touch(clock);
        Ok(next)
    }

    fn resolve_requested_status(&self, token: &str) -> Result<TaskStatus, TaskDomainError> {
        let requested = TaskStatus::from_token(token)
            .ok_or_else(|| TaskDomainError::InvalidStatus(token.to_owned()))?;
        if requested != self.status && !self.status.can_transition_to(requested) {
            return Err(TaskDomainError::InvalidStatusTransition {
                task_id: self.id,
                from: self.status,
                to: requested,
            });
        }
        Ok(requested)
    }

    /// Records a successful mutation.
    fn touch(&mut self, clock: &impl Clock) {
        self.version = self.version.saturating_add(1);
        self.updated_at = clock.utc();
    }
}
