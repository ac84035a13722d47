//! Attendee handlers (`/api/attendees`)

use crate::{
    api::extractors::ApiJson,
    error::PersistenceContext,
    models::{Attendee, AttendeeInput},
    state::AppState,
    Error, Result,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::parse_id;

const ATTENDEE_NOT_FOUND: &str = "Attendee not found";

/// POST /api/attendees
pub async fn create_attendee(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<AttendeeInput>,
) -> Result<(StatusCode, Json<Attendee>)> {
    let name = input.into_name()?;

    let id = state
        .store
        .insert_attendee(&name)
        .await
        .persistence("Error adding attendee to database")?;

    Ok((StatusCode::CREATED, Json(Attendee { id, name })))
}

/// GET /api/attendees
pub async fn list_attendees(State(state): State<AppState>) -> Result<Json<Vec<Attendee>>> {
    let attendees = state
        .store
        .list_attendees()
        .await
        .persistence("Error fetching attendees from database")?;

    Ok(Json(attendees))
}

/// DELETE /api/attendees/:id
pub async fn delete_attendee(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode> {
    let id =
        parse_id(&raw_id).ok_or_else(|| Error::NotFound(ATTENDEE_NOT_FOUND.to_string()))?;

    let affected = state
        .store
        .delete_attendee(id)
        .await
        .persistence("Error deleting attendee from database")?;
    if affected == 0 {
        return Err(Error::NotFound(ATTENDEE_NOT_FOUND.to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}
