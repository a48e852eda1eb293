use axum::{
    Router,
    http::HeaderValue,
    middleware,
    routing::{MethodRouter, get},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::db::Store;
use crate::services::{AnimeService, InMemoryAnimeService, record_collection_size};

mod anime;
mod error;
mod observability;
mod system;
mod types;
mod validation;

pub use error::ApiError;
pub use types::*;

use metrics_exporter_prometheus::PrometheusHandle;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,

    pub anime_service: Arc<dyn AnimeService>,

    pub start_time: std::time::Instant,

    pub prometheus_handle: Option<PrometheusHandle>,
}

impl AppState {
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }
}

pub fn create_app_state(
    config: Config,
    store: Store,
    prometheus_handle: Option<PrometheusHandle>,
) -> Arc<AppState> {
    Arc::new(AppState {
        config: Arc::new(config),
        anime_service: Arc::new(InMemoryAnimeService::new(store)),
        start_time: std::time::Instant::now(),
        prometheus_handle,
    })
}

/// Builds the store described by `config` and wraps it in fresh state.
pub async fn create_app_state_from_config(
    config: Config,
    prometheus_handle: Option<PrometheusHandle>,
) -> anyhow::Result<Arc<AppState>> {
    let store = if config.general.seed_data {
        Store::seeded().await?
    } else {
        Store::new()
    };
    record_collection_size(store.count().await);
    Ok(create_app_state(config, store, prometheus_handle))
}

pub fn router(state: Arc<AppState>) -> Router {
    let cors_origins = &state.config().server.cors_allowed_origins;

    let cors_layer = if cors_origins.iter().any(|o| o == "*") {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> =
            cors_origins.iter().filter_map(|s| s.parse().ok()).collect();
        CorsLayer::new().allow_origin(origins)
    };

    Router::new()
        .route("/", get(system::liveness))
        .route("/animes", collection_routes())
        .route("/animes/", collection_routes())
        .route("/animes/{id}", record_routes())
        .route("/animes/{id}/", record_routes())
        .route("/system/status", get(system::get_status))
        .route("/metrics", get(observability::get_metrics))
        .fallback(system::fallback)
        .layer(middleware::from_fn(observability::track_requests))
        .layer(cors_layer.allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// Registered with and without a trailing slash; both forms are served.
fn collection_routes() -> MethodRouter<Arc<AppState>> {
    get(anime::list_anime).post(anime::create_anime)
}

fn record_routes() -> MethodRouter<Arc<AppState>> {
    get(anime::get_anime)
        .put(anime::update_anime)
        .delete(anime::delete_anime)
}
