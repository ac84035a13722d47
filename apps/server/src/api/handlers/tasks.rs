//! Task handlers (`/api/tasks`)
//!
//! Unlike events, tasks are accepted without any field validation and a
//! status update reports success whether or not the task exists.

use crate::{
    api::extractors::ApiJson,
    error::PersistenceContext,
    models::{CreatedTask, NewTask, Task, TaskStatusInput},
    state::AppState,
    Result,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value as JsonValue};

use super::parse_id;

/// POST /api/tasks
pub async fn create_task(
    State(state): State<AppState>,
    ApiJson(task): ApiJson<NewTask>,
) -> Result<(StatusCode, Json<CreatedTask>)> {
    let id = state
        .store
        .insert_task(&task)
        .await
        .persistence("Error adding task")?;

    tracing::info!(task_id = id, event_id = ?task.event_id, "Task created");
    Ok((StatusCode::CREATED, Json(task.with_id(id))))
}

/// GET /api/tasks/:event_id
pub async fn list_tasks_for_event(
    State(state): State<AppState>,
    Path(raw_event_id): Path<String>,
) -> Result<Json<Vec<Task>>> {
    let Some(event_id) = parse_id(&raw_event_id) else {
        return Ok(Json(Vec::new()));
    };

    let tasks = state
        .store
        .list_tasks_for_event(event_id)
        .await
        .persistence("Error fetching tasks for event")?;

    Ok(Json(tasks))
}

/// PUT /api/tasks/:id
///
/// Echoes `{id, status}`. An id that cannot name a row is echoed verbatim.
pub async fn update_task_status(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    ApiJson(input): ApiJson<TaskStatusInput>,
) -> Result<Json<JsonValue>> {
    let Some(id) = parse_id(&raw_id) else {
        return Ok(Json(json!({ "id": raw_id, "status": input.status })));
    };

    let affected = state
        .store
        .update_task_status(id, input.status.as_text().as_deref())
        .await
        .persistence("Error updating task status")?;

    tracing::debug!(task_id = id, affected, "Task status updated");
    Ok(Json(json!({ "id": id, "status": input.status })))
}
