//! Axum handlers for the task endpoints.

use super::{
    dto::{CreateTaskBody, TaskResponse, UpdateTaskBody},
    error::ApiError,
};
use crate::task::{domain::TaskId, ports::TaskRepository, services::TaskLifecycleService};
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use mockable::Clock;
use serde_json::{Value, json};

/// Shared handler state.
pub type AppState<R, C> = TaskLifecycleService<R, C>;

/// Parses a path identifier. Identifiers that are not UUIDs cannot name a
/// task, so they are reported as missing.
fn parse_task_id(raw: &str) -> Result<TaskId, ApiError> {
    raw.parse::<TaskId>().map_err(|_| ApiError::NotFound)
}

/// `GET /health`
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// `POST /api/tasks`
pub async fn create_task<R, C>(
    State(service): State<AppState<R, C>>,
    payload: Result<Json<CreateTaskBody>, JsonRejection>,
) -> Result<(StatusCode, Json<TaskResponse>), ApiError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let Json(body) = payload?;
    let task = service.create_task(body.into()).await?;
    Ok((StatusCode::CREATED, Json(TaskResponse::from(&task))))
}

/// `GET /api/tasks`
pub async fn list_tasks<R, C>(
    State(service): State<AppState<R, C>>,
) -> Result<Json<Vec<TaskResponse>>, ApiError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let tasks = service.list_tasks().await?;
    Ok(Json(tasks.iter().map(TaskResponse::from).collect()))
}

/// `GET /api/tasks/{id}`
pub async fn get_task<R, C>(
    State(service): State<AppState<R, C>>,
    Path(raw_id): Path<String>,
) -> Result<Json<TaskResponse>, ApiError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let task = service.get_task(parse_task_id(&raw_id)?).await?;
    Ok(Json(TaskResponse::from(&task)))
}

/// `PUT /api/tasks/{id}`
pub async fn update_task<R, C>(
    State(service): State<AppState<R, C>>,
    Path(raw_id): Path<String>,
    payload: Result<Json<UpdateTaskBody>, JsonRejection>,
) -> Result<Json<TaskResponse>, ApiError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    // Unknown ids take precedence over malformed bodies.
    let task_id = parse_task_id(&raw_id)?;
    let Json(body) = payload?;
    let task = service.update_task(body.into_request(task_id)).await?;
    Ok(Json(TaskResponse::from(&task)))
}

/// `PATCH /api/tasks/{id}/status`
pub async fn advance_task_status<R, C>(
    State(service): State<AppState<R, C>>,
    Path(raw_id): Path<String>,
) -> Result<Json<TaskResponse>, ApiError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let task = service.advance_status(parse_task_id(&raw_id)?).await?;
    Ok(Json(TaskResponse::from(&task)))
}

/// `DELETE /api/tasks/{id}`
pub async fn delete_task<R, C>(
    State(service): State<AppState<R, C>>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, ApiError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    service.delete_task(parse_task_id(&raw_id)?).await?;
    Ok(StatusCode::NO_CONTENT)
}
