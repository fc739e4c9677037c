#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_test::TestServer;
use serde_json::json;

use movie_favorites_core::{
    db::create_in_memory_pool,
    services::{FavoritesService, TmdbService},
};
use movie_favorites_server::{AppState, create_router};

pub const TEST_API_KEY: &str = "test-api-key";
pub const SHARE_URL_TEMPLATE: &str = "http://localhost:3000/favorites/{share_id}";

/// Builds a test server backed by a fresh in-memory database
pub async fn test_server(tmdb_service: TmdbService) -> TestServer {
    let pool = create_in_memory_pool()
        .await
        .expect("Failed to create test database");

    let state = Arc::new(AppState {
        favorites_service: FavoritesService::new(pool),
        tmdb_service,
        share_url_template: SHARE_URL_TEMPLATE.to_string(),
    });

    TestServer::new(create_router(state)).expect("Failed to start test server")
}

/// Test server whose catalog proxy points at an address nothing listens on
pub async fn offline_server() -> TestServer {
    test_server(TmdbService::new(
        Some(TEST_API_KEY.to_string()),
        unreachable_base_url().await,
    ))
    .await
}

/// Test server with a fake TMDB upstream that echoes the query parameters it received
pub async fn server_with_fake_tmdb() -> TestServer {
    let base_url = spawn_fake_tmdb().await;
    test_server(TmdbService::new(Some(TEST_API_KEY.to_string()), base_url)).await
}

pub async fn spawn_fake_tmdb() -> String {
    let app = Router::new()
        .route("/search/movie", get(fake_search))
        .route("/movie/{id}", get(fake_movie));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind fake TMDB");
    let addr = listener.local_addr().expect("Fake TMDB has no address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.ok();
    });

    format!("http://{}", addr)
}

async fn unreachable_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("No address");
    drop(listener);
    format!("http://{}", addr)
}

async fn fake_search(Query(params): Query<HashMap<String, String>>) -> impl IntoResponse {
    if params.get("query").map(String::as_str) == Some("upstream-failure") {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "status_message": "Internal error." })),
        );
    }

    (
        StatusCode::OK,
        Json(json!({
            "page": 1,
            "results": [{ "id": 603, "title": "Matrix" }],
            "total_results": 1,
            "received": params,
        })),
    )
}

async fn fake_movie(
    Path(id): Path<i64>,
    Query(params): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    if id != 603 {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({ "status_message": "The resource you requested could not be found." })),
        );
    }

    (
        StatusCode::OK,
        Json(json!({
            "id": 603,
            "title": "Matrix",
            "runtime": 136,
            "received": params,
        })),
    )
}
