use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::json;
use uuid::Uuid;

use movie_favorites_core::models::{AddMovieOutcome, FavoriteList, FavoriteMovie};

use crate::{ApiError, ApiResult, AppState};

#[derive(Debug, Serialize)]
pub struct FavoriteMovieResponse {
    pub id: i64,
    pub tmdb_movie_id: i64,
}

impl From<&FavoriteMovie> for FavoriteMovieResponse {
    fn from(movie: &FavoriteMovie) -> Self {
        Self {
            id: movie.id,
            tmdb_movie_id: movie.tmdb_movie_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FavoriteListResponse {
    pub share_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub movies: Vec<FavoriteMovieResponse>,
    pub share_url: String,
}

impl FavoriteListResponse {
    fn new(list: &FavoriteList, movies: &[FavoriteMovie], share_url_template: &str) -> Self {
        Self {
            share_id: list.share_id,
            created_at: list.created_at,
            movies: movies.iter().map(FavoriteMovieResponse::from).collect(),
            share_url: list.share_url(share_url_template),
        }
    }
}

/// Share ids are only accepted in canonical lowercase hyphenated form, the
/// same form used in `share_url`. `Uuid` alone would also accept the simple,
/// braced and URN spellings.
fn parse_share_id(raw: &str) -> ApiResult<Uuid> {
    Uuid::try_parse(raw)
        .ok()
        .filter(|share_id| share_id.hyphenated().to_string() == raw)
        .ok_or_else(|| ApiError::bad_request(format!("Invalid share id: {}", raw)))
}

pub async fn create(State(state): State<Arc<AppState>>) -> ApiResult<impl IntoResponse> {
    let list = state.favorites_service.create_list().await?;
    let response = FavoriteListResponse::new(&list, &[], &state.share_url_template);
    Ok((StatusCode::CREATED, Json(response)))
}

pub async fn get(
    State(state): State<Arc<AppState>>,
    path: Result<Path<String>, PathRejection>,
) -> ApiResult<impl IntoResponse> {
    let Path(share_id) = path?;
    let share_id = parse_share_id(&share_id)?;
    let details = state.favorites_service.get_list(share_id).await?;
    let response =
        FavoriteListResponse::new(&details.list, &details.movies, &state.share_url_template);
    Ok((StatusCode::OK, Json(response)))
}

pub async fn add_movie(
    State(state): State<Arc<AppState>>,
    path: Result<Path<(String, u32)>, PathRejection>,
) -> ApiResult<impl IntoResponse> {
    let Path((share_id, tmdb_movie_id)) = path?;
    let share_id = parse_share_id(&share_id)?;
    let outcome = state
        .favorites_service
        .add_movie(share_id, i64::from(tmdb_movie_id))
        .await?;

    let response = match outcome {
        AddMovieOutcome::Added(movie) => (
            StatusCode::CREATED,
            Json(json!(FavoriteMovieResponse::from(&movie))),
        ),
        AddMovieOutcome::AlreadyPresent(_) => (
            StatusCode::OK,
            Json(json!({ "message": "Movie is already in the favorite list." })),
        ),
    };
    Ok(response)
}

pub async fn remove_movie(
    State(state): State<Arc<AppState>>,
    path: Result<Path<(String, u32)>, PathRejection>,
) -> ApiResult<impl IntoResponse> {
    let Path((share_id, tmdb_movie_id)) = path?;
    let share_id = parse_share_id(&share_id)?;
    state
        .favorites_service
        .remove_movie(share_id, i64::from(tmdb_movie_id))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
