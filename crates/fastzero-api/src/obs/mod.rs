//! Lightweight in-process metrics and request tracking.
//!
//! Metrics are stored as atomics, updated by [`track_requests`], and rendered
//! by the `/metrics` handler.

pub mod metrics;

use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request, State},
    middleware::Next,
    response::Response,
};

use crate::app_state::AppState;

pub use metrics::ApiMetrics;

/// Count and time every request by method, matched route, and status.
pub async fn track_requests(State(app): State<AppState>, req: Request, next: Next) -> Response {
    let method = req.method().as_str().to_owned();
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| "unmatched".to_owned());

    let started = Instant::now();
    let res = next.run(req).await;
    let elapsed = started.elapsed();
    let status = res.status();

    let metrics = app.metrics();
    metrics.http_requests.inc(&[
        ("method", method.as_str()),
        ("route", route.as_str()),
        ("status", status.as_str()),
    ]);
    metrics.http_duration.observe(
        &[("method", method.as_str()), ("route", route.as_str())],
        elapsed,
    );

    let elapsed_us = u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX);
    tracing::debug!(%method, %route, status = status.as_u16(), elapsed_us, "request");
    res
}
