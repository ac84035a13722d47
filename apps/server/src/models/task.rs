use super::Param;
use serde::{Deserialize, Serialize};

/// A task row. Every column except `id` is nullable: task creation performs
/// no field validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Task {
    pub id: i32,
    pub name: Option<String>,
    pub status: Option<String>,
    /// Calendar date, `YYYY-MM-DD`
    pub deadline: Option<String>,
    pub event_id: Option<i32>,
    pub attendee_id: Option<i32>,
}

/// Body of `POST /api/tasks`. Every field is optional and taken as sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewTask {
    pub name: Param,
    pub status: Param,
    pub deadline: Param,
    pub event_id: Param,
    pub attendee_id: Param,
}

/// Answer to `POST /api/tasks`: the generated id and the submitted fields.
#[derive(Debug, Clone, Serialize)]
pub struct CreatedTask {
    pub id: i32,
    #[serde(flatten)]
    pub task: NewTask,
}

impl NewTask {
    pub fn with_id(self, id: i32) -> CreatedTask {
        CreatedTask { id, task: self }
    }
}

/// Body of `PUT /api/tasks/:id`. The status is stored as given.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TaskStatusInput {
    pub status: Param,
}
