//! Core trait for the relational store

use super::StoreResult;
use crate::models::{
    Attendee, Event, EventAssignment, ForgotPasswordRequest, LoginRequest, NewEvent, NewTask,
    NewUser, Task, TaskAssignment, User,
};
use async_trait::async_trait;

/// Storage operations backing the HTTP API.
///
/// Every method is a single statement against the store. Mutations that
/// target a row by id report the number of affected rows; interpreting zero
/// is left to the caller.
#[async_trait]
pub trait Store: Send + Sync {
    /// Round-trip check used by the health endpoint
    async fn ping(&self) -> StoreResult<()>;

    // Events

    async fn list_events(&self) -> StoreResult<Vec<Event>>;

    /// Insert an event and return its generated id
    async fn insert_event(&self, event: &NewEvent) -> StoreResult<i32>;

    /// Overwrite all fields of an event. Returns affected rows.
    async fn update_event(&self, id: i32, event: &NewEvent) -> StoreResult<u64>;

    async fn delete_event(&self, id: i32) -> StoreResult<u64>;

    // Attendees

    async fn list_attendees(&self) -> StoreResult<Vec<Attendee>>;

    async fn insert_attendee(&self, name: &str) -> StoreResult<i32>;

    async fn delete_attendee(&self, id: i32) -> StoreResult<u64>;

    // Tasks

    async fn insert_task(&self, task: &NewTask) -> StoreResult<i32>;

    async fn list_tasks_for_event(&self, event_id: i32) -> StoreResult<Vec<Task>>;

    /// Overwrite only the status column. Returns affected rows.
    async fn update_task_status(&self, id: i32, status: Option<&str>) -> StoreResult<u64>;

    // Join rows. Ids arrive as submitted and are converted by the store.

    async fn assign_attendee_to_event(&self, assignment: &EventAssignment) -> StoreResult<()>;

    async fn assign_attendee_to_task(&self, assignment: &TaskAssignment) -> StoreResult<()>;

    // Users

    async fn insert_user(&self, user: &NewUser) -> StoreResult<()>;

    /// Find the user whose username and password both match exactly.
    async fn find_user_by_credentials(&self, credentials: &LoginRequest)
        -> StoreResult<Option<User>>;

    /// Set the password of the user whose username matches and whose
    /// `security_question` equals the submitted answer. Returns affected rows.
    async fn reset_password(&self, request: &ForgotPasswordRequest) -> StoreResult<u64>;
}
