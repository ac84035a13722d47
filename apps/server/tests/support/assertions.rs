use anyhow::Context as _;
use axum::http::{Method, StatusCode};
use serde_json::Value;

use super::TestApp;

pub fn assert_status(actual: StatusCode, expected: StatusCode, context: &str) {
    assert_eq!(actual, expected, "{context}: unexpected status");
}

/// Assert an `{"error": ...}` body with the given message
pub fn assert_error(body: &Value, message: &str) {
    assert_eq!(
        body.get("error").and_then(Value::as_str),
        Some(message),
        "expected error '{message}', got {body}"
    );
}

/// Assert a `{"message": ...}` body with the given message
pub fn assert_message(body: &Value, message: &str) {
    assert_eq!(
        body.get("message").and_then(Value::as_str),
        Some(message),
        "expected message '{message}', got {body}"
    );
}

pub fn id_of(value: &Value) -> anyhow::Result<i64> {
    value
        .get("id")
        .and_then(Value::as_i64)
        .with_context(|| format!("numeric id in {value}"))
}

/// POST a resource and return its generated id
pub async fn create(app: &TestApp, path: &str, body: &Value) -> anyhow::Result<i64> {
    let (status, created) = app.json(Method::POST, path, Some(body)).await?;
    assert_status(status, StatusCode::CREATED, path);
    id_of(&created)
}

/// GET a JSON array
pub async fn list(app: &TestApp, path: &str) -> anyhow::Result<Vec<Value>> {
    let (status, body) = app.json(Method::GET, path, None).await?;
    assert_status(status, StatusCode::OK, path);
    body.as_array()
        .cloned()
        .with_context(|| format!("array body from {path}"))
}
