//! Event handlers (`/api/events`)

use crate::{
    api::extractors::ApiJson,
    error::PersistenceContext,
    models::{Event, EventInput},
    state::AppState,
    Error, Result,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::parse_id;

const EVENT_NOT_FOUND: &str = "Event not found";

/// GET /api/events
pub async fn list_events(State(state): State<AppState>) -> Result<Json<Vec<Event>>> {
    let events = state
        .store
        .list_events()
        .await
        .persistence("Error fetching events from database")?;

    Ok(Json(events))
}

/// POST /api/events
pub async fn create_event(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<EventInput>,
) -> Result<(StatusCode, Json<Event>)> {
    let event = input.into_new_event()?;

    let id = state
        .store
        .insert_event(&event)
        .await
        .persistence("Error adding event to database")?;

    tracing::info!(event_id = id, "Event created");
    Ok((StatusCode::CREATED, Json(event.with_id(id))))
}

/// PUT /api/events/:id
///
/// Field validation runs before the lookup, so an incomplete body is a 400
/// even for an unknown id.
pub async fn update_event(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    ApiJson(input): ApiJson<EventInput>,
) -> Result<Json<Event>> {
    let event = input.into_new_event()?;
    let id = parse_id(&raw_id).ok_or_else(|| Error::NotFound(EVENT_NOT_FOUND.to_string()))?;

    let affected = state
        .store
        .update_event(id, &event)
        .await
        .persistence("Error updating event in database")?;
    if affected == 0 {
        return Err(Error::NotFound(EVENT_NOT_FOUND.to_string()));
    }

    tracing::info!(event_id = id, "Event updated");
    Ok(Json(event.with_id(id)))
}

/// DELETE /api/events/:id
pub async fn delete_event(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode> {
    let id = parse_id(&raw_id).ok_or_else(|| Error::NotFound(EVENT_NOT_FOUND.to_string()))?;

    let affected = state
        .store
        .delete_event(id)
        .await
        .persistence("Error deleting event from database")?;
    if affected == 0 {
        return Err(Error::NotFound(EVENT_NOT_FOUND.to_string()));
    }

    tracing::info!(event_id = id, "Event deleted");
    Ok(StatusCode::NO_CONTENT)
}
