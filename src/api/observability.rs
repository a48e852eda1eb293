//! Request logging, request metrics and the Prometheus scrape endpoint.

use axum::{
    extract::{MatchedPath, Request, State},
    http::{Method, StatusCode},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{Instrument, info, info_span, warn};
use uuid::Uuid;

use super::{ApiError, AppState};
use crate::constants::metric_names;

/// Renders every recorded metric, including the `anime_*` collection metrics.
pub async fn get_metrics(State(state): State<Arc<AppState>>) -> Result<String, ApiError> {
    let handle = state
        .prometheus_handle
        .as_ref()
        .ok_or_else(|| ApiError::NotFound("Metrics are disabled".to_string()))?;
    Ok(handle.render())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Success,
    Rejected,
    Failed,
}

impl Outcome {
    fn of(status: StatusCode) -> Self {
        if status.is_server_error() {
            Self::Failed
        } else if status.is_client_error() {
            Self::Rejected
        } else {
            Self::Success
        }
    }

    const fn label(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Rejected => "rejected",
            Self::Failed => "failed",
        }
    }
}

fn record_request(method: &Method, route: &str, status: StatusCode, elapsed: Duration) {
    let labels = [
        ("method", method.as_str().to_owned()),
        ("route", route.to_owned()),
        ("status", status.as_str().to_owned()),
    ];
    metrics::counter!(metric_names::API_REQUESTS, &labels).increment(1);
    metrics::histogram!(metric_names::API_REQUEST_SECONDS, &labels)
        .record(elapsed.as_secs_f64());
}

/// Wraps each request in a span tagged with a fresh request id and the
/// matched route template, then logs and counts the result.
pub async fn track_requests(req: Request, next: Next) -> Response {
    let started = Instant::now();
    let method = req.method().clone();
    // Templates, not raw paths, so `/animes/{id}` stays one series.
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map_or_else(|| "unmatched".to_owned(), |p| p.as_str().to_owned());

    let span = info_span!("http", request_id = %Uuid::new_v4(), %method, %route);
    let response = next.run(req).instrument(span.clone()).await;

    let elapsed = started.elapsed();
    let status = response.status();
    let outcome = Outcome::of(status);
    record_request(&method, &route, status, elapsed);

    span.in_scope(|| {
        let elapsed_ms = elapsed.as_secs_f64() * 1000.0;
        if outcome == Outcome::Failed {
            warn!(status = status.as_u16(), elapsed_ms, outcome = outcome.label(), "Request failed");
        } else {
            info!(status = status.as_u16(), elapsed_ms, outcome = outcome.label(), "Request served");
        }
    });

    response
}
