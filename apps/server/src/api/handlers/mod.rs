//! Request handlers for API endpoints
//!
//! Each handler validates its input, issues one store operation, and shapes
//! the JSON response.

pub mod assignments;
pub mod attendees;
pub mod auth;
pub mod events;
pub mod metrics;
pub mod tasks;

/// Parse a path id. Anything that is not an `i32` cannot match a row.
pub(crate) fn parse_id(raw: &str) -> Option<i32> {
    raw.parse().ok()
}
