use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use validator::Validate;

pub const EVENT_FIELDS_REQUIRED: &str = "All fields are required!";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Event {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub location: String,
    /// Calendar date, `YYYY-MM-DD`
    pub date: String,
}

/// Body of `POST /api/events` and `PUT /api/events/:id`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct EventInput {
    #[validate(required, length(min = 1))]
    #[serde(deserialize_with = "super::param::text")]
    pub name: Option<String>,
    #[validate(required, length(min = 1))]
    #[serde(deserialize_with = "super::param::text")]
    pub description: Option<String>,
    #[validate(required, length(min = 1))]
    #[serde(deserialize_with = "super::param::text")]
    pub location: Option<String>,
    #[validate(required, length(min = 1))]
    #[serde(deserialize_with = "super::param::text")]
    pub date: Option<String>,
}

/// Event fields that passed presence validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEvent {
    pub name: String,
    pub description: String,
    pub location: String,
    pub date: String,
}

impl EventInput {
    /// Every field must be present and non-empty.
    pub fn into_new_event(self) -> Result<NewEvent> {
        if self.validate().is_err() {
            return Err(Error::Validation(EVENT_FIELDS_REQUIRED.to_string()));
        }
        match (self.name, self.description, self.location, self.date) {
            (Some(name), Some(description), Some(location), Some(date)) => Ok(NewEvent {
                name,
                description,
                location,
                date,
            }),
            _ => Err(Error::Validation(EVENT_FIELDS_REQUIRED.to_string())),
        }
    }
}

impl NewEvent {
    pub fn with_id(self, id: i32) -> Event {
        Event {
            id,
            name: self.name,
            description: self.description,
            location: self.location,
            date: self.date,
        }
    }
}
