//! Error types for the event manager API

use crate::db::StoreError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// A required field is missing, or a reset did not match any account
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Unauthorized(String),

    /// A targeted update or delete affected no rows
    #[error("{0}")]
    NotFound(String),

    /// Any store-level failure. `message` is what the client sees.
    #[error("{message}")]
    Persistence {
        message: String,
        #[source]
        source: StoreError,
    },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    pub fn status(&self) -> StatusCode {
        match self {
            Error::Validation(_) => StatusCode::BAD_REQUEST,
            Error::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::Persistence { .. } | Error::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message exposed to clients; internal details never leave the process.
    fn public_message(&self) -> String {
        match self {
            Error::Other(e) => {
                tracing::error!(error = %e, "Internal error");
                "Internal server error".to_string()
            }
            other => other.to_string(),
        }
    }

    fn into_body(self, key: &'static str) -> Response {
        let status = self.status();
        let mut body = serde_json::Map::new();
        body.insert(key.to_string(), Value::String(self.public_message()));
        (status, Json(Value::Object(body))).into_response()
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        self.into_body("error")
    }
}

/// Renders an [`Error`] as `{"message": ...}`, the shape used by the
/// authentication endpoints.
#[derive(Debug)]
pub struct MessageError(pub Error);

impl From<Error> for MessageError {
    fn from(error: Error) -> Self {
        Self(error)
    }
}

impl IntoResponse for MessageError {
    fn into_response(self) -> Response {
        self.0.into_body("message")
    }
}

/// Attach a client-facing message to a store failure.
pub trait PersistenceContext<T> {
    fn persistence(self, message: &str) -> Result<T>;
}

impl<T> PersistenceContext<T> for std::result::Result<T, StoreError> {
    fn persistence(self, message: &str) -> Result<T> {
        self.map_err(|source| {
            tracing::error!(error = %source, "{}", message);
            Error::Persistence {
                message: message.to_string(),
                source,
            }
        })
    }
}
