//! Request and response bodies for the task HTTP API.

use crate::task::{
    domain::{Task, TaskId, TaskStatus},
    services::{CreateTaskRequest, UpdateTaskRequest},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body of `POST /api/tasks`.
///
/// Any client-supplied status is ignored; new tasks always start as `todo`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskBody {
    /// Required task title.
    pub title: String,
    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
    /// Optional assignee.
    #[serde(default)]
    pub assigned_to: Option<String>,
}

impl From<CreateTaskBody> for CreateTaskRequest {
    fn from(body: CreateTaskBody) -> Self {
        let mut request = Self::new(body.title);
        if let Some(description) = body.description {
            request = request.with_description(description);
        }
        if let Some(assignee) = body.assigned_to {
            request = request.with_assigned_to(assignee);
        }
        request
    }
}

/// Body of `PUT /api/tasks/{id}`.
///
/// Absent fields keep their stored values.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskBody {
    /// Replacement title.
    #[serde(default)]
    pub title: Option<String>,
    /// Replacement description; an empty string clears it.
    #[serde(default)]
    pub description: Option<String>,
    /// Replacement assignee; an empty string clears it.
    #[serde(default)]
    pub assigned_to: Option<String>,
    /// Requested status token.
    #[serde(default)]
    pub status: Option<String>,
}

impl UpdateTaskBody {
    /// Builds the service request for the given task.
    #[must_use]
    pub fn into_request(self, task_id: TaskId) -> UpdateTaskRequest {
        let mut request = UpdateTaskRequest::new(task_id);
        if let Some(title) = self.title {
            request = request.with_title(title);
        }
        if let Some(description) = self.description {
            request = request.with_description(description);
        }
        if let Some(assignee) = self.assigned_to {
            request = request.with_assigned_to(assignee);
        }
        if let Some(status) = self.status {
            request = request.with_status(status);
        }
        request
    }
}

/// Task representation returned by every task endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskResponse {
    /// Task identifier.
    pub id: TaskId,
    /// Task title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Lifecycle status.
    pub status: TaskStatus,
    /// Optional assignee.
    pub assigned_to: Option<String>,
    /// Optimistic-concurrency version.
    pub version: u64,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl From<&Task> for TaskResponse {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id(),
            title: task.title().as_str().to_owned(),
            description: task.description().map(str::to_owned),
            status: task.status(),
            assigned_to: task.assigned_to().map(str::to_owned),
            version: task.version(),
            created_at: task.created_at(),
            updated_at: task.updated_at(),
        }
    }
}

/// Error body returned for every failed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable failure description.
    pub error: String,
}
