use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Attendee {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct AttendeeInput {
    #[validate(required, length(min = 1))]
    #[serde(deserialize_with = "super::param::text")]
    pub name: Option<String>,
}

impl AttendeeInput {
    pub fn into_name(self) -> Result<String> {
        if self.validate().is_err() {
            return Err(Error::Validation("Attendee name is required!".to_string()));
        }
        self.name
            .ok_or_else(|| Error::Validation("Attendee name is required!".to_string()))
    }
}
