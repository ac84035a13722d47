//! API layer - routes, handlers, and middleware

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod routes;

use crate::state::AppState;
use axum::{
    extract::{DefaultBodyLimit, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use serde_json::json;

/// Create the main application router
pub fn create_router(state: AppState) -> Router {
    let max_body_size = state.config.server.max_request_body_size;
    let cors_origins = state.config.server.cors_origins.clone();
    let views_dir = state.config.server.views_dir.clone();

    Router::new()
        .route("/health", get(health_check))
        .route("/", get(root))
        // Returns 204 so browsers asking for a favicon do not clutter logs
        .route("/favicon.ico", get(favicon))
        .merge(routes::metrics::metrics_routes())
        .merge(routes::pages::page_routes(&views_dir))
        .nest("/api", routes::resources::resource_routes())
        .with_state(state)
        // Applied in reverse order
        .layer(axum::middleware::from_fn(middleware::request_id_middleware))
        .layer(axum::middleware::from_fn(middleware::metrics_middleware))
        .layer(middleware::compression())
        .layer(middleware::cors(&cors_origins))
        .layer(DefaultBodyLimit::max(max_body_size))
}

async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    match state.store.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "service": "event-manager"
            })),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "Health check failed to reach the store");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "unavailable",
                    "service": "event-manager"
                })),
            )
        }
    }
}

async fn root() -> impl IntoResponse {
    Json(json!({
        "server": "Event Manager",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running"
    }))
}

async fn favicon() -> impl IntoResponse {
    StatusCode::NO_CONTENT
}
