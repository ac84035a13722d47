//! Prometheus scrape endpoint

use crate::api::handlers::metrics::metrics_handler;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn metrics_routes() -> Router<AppState> {
    Router::new().route("/metrics", get(metrics_handler))
}
