//! Domain entities and request payloads

pub mod assignment;
pub mod attendee;
pub mod event;
pub mod param;
pub mod task;
pub mod user;

pub use assignment::{EventAssignment, TaskAssignment};
pub use attendee::{Attendee, AttendeeInput};
pub use event::{Event, EventInput, NewEvent};
pub use param::Param;
pub use task::{CreatedTask, NewTask, Task, TaskStatusInput};
pub use user::{ForgotPasswordRequest, LoginRequest, NewUser, User};

use serde::{Deserialize, Serialize};

/// Body of the endpoints that answer with a human-readable confirmation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
