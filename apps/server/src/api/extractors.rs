//! Custom Axum extractors for JSON request bodies.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;

/// JSON body extractor with lenient framing.
///
/// A request without a JSON content type, or with an empty body, is read as
/// the empty object `{}`; field-level checks are left to the handlers.
/// Malformed JSON is rejected with 400 and an `{"error": ...}` body.
pub struct ApiJson<T>(pub T);

/// [`ApiJson`] for endpoints that answer with `{"message": ...}`; a
/// rejected body is reported under that key too.
pub struct MessageJson<T>(pub T);

/// Error type for [`ApiJson`] and [`MessageJson`] extraction failures.
pub struct ApiJsonRejection {
    status: StatusCode,
    key: &'static str,
    message: String,
}

impl ApiJsonRejection {
    fn new(status: StatusCode, message: String) -> Self {
        Self {
            status,
            key: "error",
            message,
        }
    }

    fn with_key(self, key: &'static str) -> Self {
        Self { key, ..self }
    }
}

impl IntoResponse for ApiJsonRejection {
    fn into_response(self) -> Response {
        let mut body = serde_json::Map::new();
        body.insert(self.key.to_string(), serde_json::Value::String(self.message));
        (self.status, axum::Json(serde_json::Value::Object(body))).into_response()
    }
}

#[async_trait]
impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiJsonRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = is_json_content_type(req.headers());

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| {
                ApiJsonRejection::new(
                    e.status(),
                    format!("Failed to read request body: {}", e.body_text()),
                )
            })?;

        let raw: &[u8] = if is_json && !bytes.iter().all(u8::is_ascii_whitespace) {
            &bytes[..]
        } else {
            b"{}"
        };

        serde_json::from_slice(raw)
            .map(ApiJson)
            .map_err(|e| {
                ApiJsonRejection::new(
                    StatusCode::BAD_REQUEST,
                    format!("Invalid JSON in request body: {}", e),
                )
            })
    }
}

#[async_trait]
impl<T, S> FromRequest<S> for MessageJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiJsonRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        ApiJson::from_request(req, state)
            .await
            .map(|ApiJson(value)| MessageJson(value))
            .map_err(|rejection| rejection.with_key("message"))
    }
}

/// `application/json` and any `+json` media type.
fn is_json_content_type(headers: &HeaderMap) -> bool {
    let ct = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    let media_type = ct.split(';').next().unwrap_or("").trim().to_lowercase();
    media_type == "application/json" || media_type.ends_with("+json")
}
