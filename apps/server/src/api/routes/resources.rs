//! JSON API routes, nested under `/api`
//!
//! `GET /tasks/:id` lists the tasks of event `:id`, while `PUT /tasks/:id`
//! updates the status of task `:id`. Both share one route because the
//! router does not allow differently named parameters in the same position.

use crate::api::handlers::{assignments, attendees, auth, events, tasks};
use crate::state::AppState;
use axum::{
    routing::{get, post, put},
    Router,
};

pub fn resource_routes() -> Router<AppState> {
    Router::new()
        // Events
        .route("/events", get(events::list_events).post(events::create_event))
        .route(
            "/events/:id",
            put(events::update_event).delete(events::delete_event),
        )
        // Attendees
        .route(
            "/attendees",
            get(attendees::list_attendees).post(attendees::create_attendee),
        )
        .route(
            "/attendees/:id",
            axum::routing::delete(attendees::delete_attendee),
        )
        // Tasks
        .route("/tasks", post(tasks::create_task))
        .route(
            "/tasks/:id",
            get(tasks::list_tasks_for_event).put(tasks::update_task_status),
        )
        // Join rows
        .route(
            "/assign-attendee",
            post(assignments::assign_attendee_to_event),
        )
        .route(
            "/assign-attendee-task",
            post(assignments::assign_attendee_to_task),
        )
        // Accounts
        .route("/signup", post(auth::signup))
        .route("/login", post(auth::login))
        .route("/forgot", post(auth::forgot_password))
}
