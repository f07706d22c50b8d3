//! Domain model for task status lifecycle management.
//!
//! The domain owns the closed status set, the forward-only transition rule,
//! and the task aggregate that applies it. Storage and transport concerns stay
//! outside this boundary.

mod error;
mod ids;
mod status;
mod task;

pub use error::{ParseTaskStatusError, TaskDomainError};
pub use ids::{TaskId, TaskTitle};
pub use status::{TaskStatus, can_transition, is_valid_status, next_status};
pub use task::{NewTask, PersistedTaskData, Task, TaskEdit};
