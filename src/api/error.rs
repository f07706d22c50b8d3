//! Mapping from service failures to HTTP responses.

use super::dto::ErrorBody;
use crate::task::{
    domain::TaskDomainError, ports::TaskRepositoryError, services::TaskLifecycleError,
};
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

/// Client-facing API failure.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The request body or a field in it is malformed.
    #[error("{0}")]
    BadRequest(String),
    /// No task matches the requested identifier.
    #[error("task not found")]
    NotFound,
    /// The request is well formed but the lifecycle forbids it.
    #[error("{0}")]
    Unprocessable(String),
    /// The task changed between read and write.
    #[error("{0}")]
    Conflict(String),
    /// Unexpected server-side failure; details are logged, not returned.
    #[error("internal server error")]
    Internal,
}

impl ApiError {
    /// Returns the HTTP status code for this failure.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<TaskLifecycleError> for ApiError {
    fn from(err: TaskLifecycleError) -> Self {
        match err {
            TaskLifecycleError::NotFound(_) => Self::NotFound,
            TaskLifecycleError::Domain(domain) => domain.into(),
            TaskLifecycleError::Repository(conflict @ TaskRepositoryError::Conflict { .. }) => {
                Self::Conflict(conflict.to_string())
            }
            TaskLifecycleError::Repository(TaskRepositoryError::NotFound(_)) => Self::NotFound,
            TaskLifecycleError::Repository(other) => {
                error!(error = %other, "task repository failure");
                Self::Internal
            }
        }
    }
}

impl From<TaskDomainError> for ApiError {
    fn from(err: TaskDomainError) -> Self {
        match err {
            TaskDomainError::EmptyTitle | TaskDomainError::InvalidStatus(_) => {
                Self::BadRequest(err.to_string())
            }
            TaskDomainError::InvalidStatusTransition { from, to, .. } => {
                Self::Unprocessable(format!("invalid status transition: {from} -> {to}"))
            }
            TaskDomainError::AlreadyTerminal { status, .. } => {
                Self::Unprocessable(format!("task is already {status}"))
            }
        }
    }
}
