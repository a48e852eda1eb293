use axum::{Json, extract::State, http::Uri};
use std::sync::Arc;

use super::{ApiError, AppState, MessageResponse, SystemStatus};
use crate::constants::LIVENESS_MESSAGE;

pub async fn liveness() -> Json<MessageResponse> {
    Json(MessageResponse::new(LIVENESS_MESSAGE))
}

pub async fn get_status(State(state): State<Arc<AppState>>) -> Json<SystemStatus> {
    Json(SystemStatus {
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        anime_count: state.anime_service.count().await,
    })
}

pub async fn fallback(uri: Uri) -> ApiError {
    ApiError::not_found("Route", uri.path())
}
