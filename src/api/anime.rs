use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use std::sync::Arc;

use super::{ApiError, AppState, MessageResponse};
use crate::api::validation::parse_anime_id;
use crate::models::anime::{AnimeFields, AnimeRecord};

pub async fn list_anime(State(state): State<Arc<AppState>>) -> Json<Vec<AnimeRecord>> {
    Json(state.anime_service.list_anime().await)
}

pub async fn get_anime(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<AnimeRecord>, ApiError> {
    let id = parse_anime_id(&id)?;
    let anime = state.anime_service.get_anime(id).await?;
    Ok(Json(anime))
}

pub async fn create_anime(
    State(state): State<Arc<AppState>>,
    Json(fields): Json<AnimeFields>,
) -> Result<(StatusCode, Json<AnimeRecord>), ApiError> {
    let anime = state.anime_service.create_anime(fields).await?;
    Ok((StatusCode::CREATED, Json(anime)))
}

/// Fields that are empty, zero or null are left unchanged.
pub async fn update_anime(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(fields): Json<AnimeFields>,
) -> Result<Json<AnimeRecord>, ApiError> {
    let id = parse_anime_id(&id)?;
    let anime = state.anime_service.update_anime(id, fields).await?;
    Ok(Json(anime))
}

pub async fn delete_anime(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_anime_id(&id)?;
    state.anime_service.delete_anime(id).await?;
    Ok(Json(MessageResponse::new(format!("Anime {id} deleted"))))
}
