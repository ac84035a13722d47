//! Prometheus metrics for the HTTP surface

use axum::http::StatusCode;
use lazy_static::lazy_static;
use prometheus::{
    register_histogram_vec, register_int_counter_vec, register_int_gauge_vec, HistogramVec,
    IntCounterVec, IntGaugeVec,
};

lazy_static! {
    /// Total HTTP requests by method, path, and status
    pub static ref HTTP_REQUESTS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "event_manager_http_requests_total",
        "Total number of HTTP requests",
        &["method", "path", "status"]
    )
    .expect("Failed to register HTTP_REQUESTS_TOTAL");

    /// HTTP request duration in seconds
    pub static ref HTTP_REQUEST_DURATION_SECONDS: HistogramVec = register_histogram_vec!(
        "event_manager_http_request_duration_seconds",
        "HTTP request duration in seconds",
        &["method", "path"],
        vec![0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0]
    )
    .expect("Failed to register HTTP_REQUEST_DURATION_SECONDS");

    /// In-flight HTTP requests
    pub static ref HTTP_REQUESTS_IN_FLIGHT: IntGaugeVec = register_int_gauge_vec!(
        "event_manager_http_requests_in_flight",
        "Number of HTTP requests currently being processed",
        &["method", "path"]
    )
    .expect("Failed to register HTTP_REQUESTS_IN_FLIGHT");

    /// `/api` calls by resource and outcome
    pub static ref API_REQUESTS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "event_manager_api_requests_total",
        "Total number of API calls by resource and outcome",
        &["resource", "outcome"]
    )
    .expect("Failed to register API_REQUESTS_TOTAL");
}

/// Outcome label for a response status.
pub fn outcome(status: StatusCode) -> &'static str {
    if status.is_success() {
        "success"
    } else if status == StatusCode::NOT_FOUND {
        "not_found"
    } else if status.is_client_error() {
        "client_error"
    } else {
        "server_error"
    }
}

/// Label used for requests that matched no route.
pub const UNMATCHED_ROUTE: &str = "unmatched";

/// First path segment of every route nested under `/api`.
pub const API_RESOURCES: [&str; 8] = [
    "events",
    "attendees",
    "tasks",
    "assign-attendee",
    "assign-attendee-task",
    "signup",
    "login",
    "forgot",
];

/// Route label for a request: the matched route template, so every id maps
/// to the same label.
pub fn route_label(matched: Option<&str>) -> &str {
    matched.unwrap_or(UNMATCHED_ROUTE)
}

/// Name of the API resource a path addresses, if it is one of
/// [`API_RESOURCES`].
pub fn extract_resource(path: &str) -> Option<&'static str> {
    let segment = path.strip_prefix("/api/")?.split('/').next()?;
    API_RESOURCES.iter().copied().find(|resource| *resource == segment)
}
