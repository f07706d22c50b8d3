//! Error types for task domain validation and parsing.

use super::{TaskId, TaskStatus};
use thiserror::Error;

/// Errors returned while constructing or mutating domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The requested status is not a recognised token.
    #[error("invalid status: '{0}'")]
    InvalidStatus(String),

    /// The requested status does not lie strictly after the current one.
    #[error("invalid status transition for task {task_id}: {from} -> {to}")]
    InvalidStatusTransition {
        /// Task whose status change was rejected.
        task_id: TaskId,
        /// Stored status at the time of the request.
        from: TaskStatus,
        /// Requested status.
        to: TaskStatus,
    },

    /// The task has already reached the terminal status.
    #[error("task {task_id} is already {status}")]
    AlreadyTerminal {
        /// Task that cannot advance.
        task_id: TaskId,
        /// Terminal status the task holds.
        status: TaskStatus,
    },
}

/// Error returned while parsing task statuses from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);
