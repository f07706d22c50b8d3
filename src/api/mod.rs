//! HTTP resource API for tasks.
//!
//! Handlers translate requests into [`TaskLifecycleService`] calls and map
//! failures onto status codes:
//!
//! | Failure | Status |
//! |---------|--------|
//! | malformed body, blank title, unrecognised status | 400 |
//! | unknown task id | 404 |
//! | concurrent modification | 409 |
//! | backward transition, advancing a done task | 422 |
//!
//! Cross-origin requests are accepted from any origin.

mod dto;
mod error;
mod handlers;

pub use dto::{CreateTaskBody, ErrorBody, TaskResponse, UpdateTaskBody};
pub use error::ApiError;

use crate::task::{ports::TaskRepository, services::TaskLifecycleService};
use axum::{
    Router,
    http::{Method, header},
    routing::{get, patch, post},
};
use mockable::Clock;
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};

/// How long browsers may cache a preflight response.
const CORS_MAX_AGE: Duration = Duration::from_secs(12 * 60 * 60);

/// Builds the CORS policy: any origin, the task API's methods, and the
/// headers a JSON client sends. Credentials are not allowed.
#[must_use]
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::HEAD,
            Method::OPTIONS,
        ])
        .allow_headers([header::ORIGIN, header::CONTENT_LENGTH, header::CONTENT_TYPE])
        .max_age(CORS_MAX_AGE)
}

/// Builds the task API router around a lifecycle service.
pub fn router<R, C>(service: TaskLifecycleService<R, C>) -> Router
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/api/tasks",
            post(handlers::create_task::<R, C>).get(handlers::list_tasks::<R, C>),
        )
        .route(
            "/api/tasks/{id}",
            get(handlers::get_task::<R, C>)
                .put(handlers::update_task::<R, C>)
                .delete(handlers::delete_task::<R, C>),
        )
        .route(
            "/api/tasks/{id}/status",
            patch(handlers::advance_task_status::<R, C>),
        )
        .with_state(service)
        .layer(cors_layer())
}
