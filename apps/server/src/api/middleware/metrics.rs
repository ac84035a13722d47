//! Request metrics: per-route latency and status counts, plus an outcome
//! count for each `/api` resource.
//!
//! Labels come from the matched route template, never from the raw path,
//! so the number of label sets is bounded by the route table.

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use std::time::Instant;

use crate::metrics::{
    extract_resource, outcome, route_label, API_REQUESTS_TOTAL, HTTP_REQUESTS_IN_FLIGHT,
    HTTP_REQUESTS_TOTAL, HTTP_REQUEST_DURATION_SECONDS,
};

pub async fn metrics_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().to_string();
    let matched = req
        .extensions()
        .get::<MatchedPath>()
        .map(|path| path.as_str().to_string());
    let route = route_label(matched.as_deref()).to_string();

    let in_flight = HTTP_REQUESTS_IN_FLIGHT.with_label_values(&[&method, &route]);
    in_flight.inc();

    let response = next.run(req).await;

    in_flight.dec();
    let status = response.status();

    HTTP_REQUESTS_TOTAL
        .with_label_values(&[&method, &route, status.as_str()])
        .inc();
    HTTP_REQUEST_DURATION_SECONDS
        .with_label_values(&[&method, &route])
        .observe(start.elapsed().as_secs_f64());

    if let Some(resource) = matched.as_deref().and_then(extract_resource) {
        API_REQUESTS_TOTAL
            .with_label_values(&[resource, outcome(status)])
            .inc();
    }

    response
}
