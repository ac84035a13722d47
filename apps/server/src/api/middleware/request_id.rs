//! Request ID middleware with trace context in response headers

use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};
use opentelemetry::trace::TraceContextExt;
use std::time::Instant;
use tracing::Span;
use tracing_opentelemetry::OpenTelemetrySpanExt;
use uuid::Uuid;

/// Opens the root span of every request and:
/// - generates a server request id, exposed as `x-request-id`
/// - echoes a differing client `x-request-id` as `x-correlation-id`
/// - adds `x-trace-id` when an OpenTelemetry trace is active
/// - logs completion with status and duration
#[tracing::instrument(
    name = "http_request",
    skip_all,
    fields(
        http.method = %req.method(),
        http.route = %req.uri().path(),
        otel.kind = "server",
        http.response.status_code = tracing::field::Empty,
        api.resource = tracing::field::Empty,
        request_id = tracing::field::Empty,
    )
)]
pub async fn request_id_middleware(req: Request, next: Next) -> Response {
    let current_span = Span::current();
    let start = Instant::now();

    let client_id = req
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .map(String::from);

    let server_id = Uuid::new_v4().to_string();
    current_span.record("request_id", server_id.as_str());

    let path = req.uri().path().to_string();
    let method = req.method().clone();
    if let Some(resource) = crate::metrics::extract_resource(&path) {
        current_span.record("api.resource", resource);
    }

    tracing::debug!(method = %method, path = %path, "Incoming request");

    let mut response = next.run(req).await;

    let status = response.status();
    current_span.record("http.response.status_code", status.as_u16());
    tracing::info!(
        method = %method,
        path = %path,
        status = status.as_u16(),
        duration_ms = start.elapsed().as_millis() as u64,
        "Request completed"
    );

    let headers = response.headers_mut();
    if let Ok(value) = HeaderValue::from_str(&server_id) {
        headers.insert("x-request-id", value);
    }

    let span_context = current_span.context().span().span_context().clone();
    if span_context.is_valid() {
        if let Ok(value) = HeaderValue::from_str(&span_context.trace_id().to_string()) {
            headers.insert("x-trace-id", value);
        }
    }

    if let Some(client_id) = client_id.filter(|id| *id != server_id) {
        if let Ok(value) = HeaderValue::from_str(&client_id) {
            headers.insert("x-correlation-id", value);
        }
    }

    response
}
