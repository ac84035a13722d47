//! Join-row handlers: attendee-to-event and attendee-to-task.

use crate::{
    api::extractors::ApiJson,
    error::PersistenceContext,
    models::{EventAssignment, MessageResponse, TaskAssignment},
    state::AppState,
    Result,
};
use axum::{extract::State, Json};

/// POST /api/assign-attendee
pub async fn assign_attendee_to_event(
    State(state): State<AppState>,
    ApiJson(assignment): ApiJson<EventAssignment>,
) -> Result<Json<MessageResponse>> {
    state
        .store
        .assign_attendee_to_event(&assignment)
        .await
        .persistence("Error assigning attendee to event")?;

    tracing::info!(
        attendee_id = ?assignment.attendee_id,
        event_id = ?assignment.event_id,
        "Attendee assigned to event"
    );
    Ok(Json(MessageResponse::new("Attendee assigned to event")))
}

/// POST /api/assign-attendee-task
pub async fn assign_attendee_to_task(
    State(state): State<AppState>,
    ApiJson(assignment): ApiJson<TaskAssignment>,
) -> Result<Json<MessageResponse>> {
    state
        .store
        .assign_attendee_to_task(&assignment)
        .await
        .persistence("Error assigning attendee to task")?;

    tracing::info!(
        attendee_id = ?assignment.attendee_id,
        task_id = ?assignment.task_id,
        "Attendee assigned to task"
    );
    Ok(Json(MessageResponse::new("Attendee assigned to task")))
}
