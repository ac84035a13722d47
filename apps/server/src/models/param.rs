//! Loosely typed body fields.
//!
//! The JSON payloads of tasks, assignments and accounts are bound to SQL as
//! submitted. A number sent for a text column or a numeric string sent for
//! an id is converted by the store, and a value the store cannot convert is
//! a store error, never a rejected request.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A body field kept exactly as submitted. Missing and `null` are the same.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Param(Value);

impl Param {
    pub fn is_null(&self) -> bool {
        self.0.is_null()
    }

    /// Text bound to a statement. Strings are taken verbatim; other values
    /// are written in their JSON form.
    pub fn as_text(&self) -> Option<String> {
        match &self.0 {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// The value read as an integer column would read it. `Err` carries the
    /// text that could not be converted.
    pub fn as_int(&self) -> Result<Option<i32>, String> {
        match &self.0 {
            Value::Null => Ok(None),
            Value::Number(n) => n
                .as_i64()
                .and_then(|v| i32::try_from(v).ok())
                .map(Some)
                .ok_or_else(|| n.to_string()),
            Value::String(s) => s.trim().parse().map(Some).map_err(|_| s.clone()),
            other => Err(other.to_string()),
        }
    }
}

impl From<Value> for Param {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl From<&str> for Param {
    fn from(value: &str) -> Self {
        Self(Value::String(value.to_string()))
    }
}

impl From<i32> for Param {
    fn from(value: i32) -> Self {
        Self(Value::from(value))
    }
}

/// `deserialize_with` helper reading any JSON value as optional text.
pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Param::deserialize(deserializer).map(|param| param.as_text())
}
