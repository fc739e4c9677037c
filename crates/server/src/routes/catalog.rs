use std::sync::Arc;

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{PathRejection, QueryRejection},
    },
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use movie_favorites_core::services::CatalogResponse;

use crate::{ApiResult, AppState};

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

fn relay(response: CatalogResponse) -> impl IntoResponse {
    let status = StatusCode::from_u16(response.status).unwrap_or(StatusCode::OK);
    (status, Json(response.body))
}

pub async fn search(
    State(state): State<Arc<AppState>>,
    query: Result<Query<SearchQuery>, QueryRejection>,
) -> ApiResult<impl IntoResponse> {
    let Query(params) = query?;
    let query = params.q.unwrap_or_default();
    let response = state.tmdb_service.search_movies(&query).await?;
    Ok(relay(response))
}

pub async fn get_movie(
    State(state): State<Arc<AppState>>,
    path: Result<Path<u32>, PathRejection>,
) -> ApiResult<impl IntoResponse> {
    let Path(tmdb_movie_id) = path?;
    let response = state
        .tmdb_service
        .get_movie_details(i64::from(tmdb_movie_id))
        .await?;
    Ok(relay(response))
}
