//! Task status lifecycle.
//!
//! The status set is closed and totally ordered: `todo` < `in_progress` <
//! `done`. Every function here is pure; callers decide how a refusal is
//! reported.

use super::ParseTaskStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a task.
///
/// The canonical tokens are persisted and exposed to clients, so renaming or
/// reordering variants is a breaking change.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Work has not started.
    #[default]
    Todo,
    /// Work is underway.
    InProgress,
    /// Work is finished. Terminal.
    Done,
}

impl TaskStatus {
    /// Every status in lifecycle order.
    pub const SEQUENCE: [Self; 3] = [Self::Todo, Self::InProgress, Self::Done];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in_progress",
            Self::Done => "done",
        }
    }

    /// Returns the position of this status within [`Self::SEQUENCE`].
    #[must_use]
    pub const fn rank(self) -> usize {
        match self {
            Self::Todo => 0,
            Self::InProgress => 1,
            Self::Done => 2,
        }
    }

    /// Parses an exact, case-sensitive status token.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        Self::SEQUENCE
            .into_iter()
            .find(|status| status.as_str() == token)
    }

    /// Returns `true` when moving to `next` is a strictly forward move.
    ///
    /// Skipping intermediate statuses is allowed; staying put is not.
    #[must_use]
    pub const fn can_transition_to(self, next: Self) -> bool {
        next.rank() > self.rank()
    }

    /// Returns the status immediately after this one, or `None` when terminal.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        Self::SEQUENCE.get(self.rank() + 1).copied()
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::from_token(value).ok_or_else(|| ParseTaskStatusError(value.to_owned()))
    }
}

/// Returns `true` iff `token` is one of the recognised status tokens.
#[must_use]
pub fn is_valid_status(token: &str) -> bool {
    TaskStatus::from_token(token).is_some()
}

/// Returns `true` iff both tokens are recognised and `to` lies strictly after
/// `from` in the lifecycle.
#[must_use]
pub fn can_transition(from: &str, to: &str) -> bool {
    match (TaskStatus::from_token(from), TaskStatus::from_token(to)) {
        (Some(current), Some(requested)) => current.can_transition_to(requested),
        _ => false,
    }
}

/// Returns the status immediately following `token`.
///
/// Returns `None` when `token` is terminal or unrecognised.
#[must_use]
pub fn next_status(token: &str) -> Option<TaskStatus> {
    TaskStatus::from_token(token).and_then(TaskStatus::next)
}
