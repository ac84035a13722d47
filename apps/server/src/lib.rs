//! Event Manager Server
//!
//! HTTP/JSON service over a relational store of events, attendees, tasks
//! and user accounts:
//! - CRUD endpoints for events and attendees
//! - Tasks per event with independent status updates
//! - Attendee assignment to events and tasks through join tables
//! - Signup, login and password reset
//! - Static manager pages

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod state;

pub use config::Config;
pub use error::{Error, Result};
pub use state::AppState;
