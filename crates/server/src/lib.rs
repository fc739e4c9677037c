use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use movie_favorites_core::{
    Config,
    db::create_pool,
    services::{FavoritesService, TmdbService},
};

pub mod error;
pub mod routes;

pub use error::{ApiError, ApiResult};

use routes::{catalog, favorites};

pub struct AppState {
    pub favorites_service: FavoritesService,
    pub tmdb_service: TmdbService,
    /// Template used to derive each list's `share_url`
    pub share_url_template: String,
}

/// Creates the application state with all services initialized
pub async fn create_app_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let pool = create_pool(&config.database_url).await?;
    tracing::info!("Database connected");

    if config.tmdb_api_key().is_none() {
        tracing::warn!("TMDB_API_KEY is not set, catalog endpoints will return 500");
    }

    let state = Arc::new(AppState {
        favorites_service: FavoritesService::new(pool),
        tmdb_service: TmdbService::from_config(config),
        share_url_template: config.share_url_template.clone(),
    });

    Ok(state)
}

/// Creates the router with all routes configured
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        // Catalog proxy
        .route("/search", get(catalog::search))
        .route("/movie/{tmdb_movie_id}", get(catalog::get_movie))
        // Favorites
        .route("/favorites", post(favorites::create))
        .route("/favorites/{share_id}", get(favorites::get))
        .route(
            "/favorites/{share_id}/movie/{tmdb_movie_id}",
            post(favorites::add_movie).delete(favorites::remove_movie),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

/// Starts the server and blocks until shutdown
pub async fn start_server(config: Config) -> anyhow::Result<()> {
    tracing::info!("Starting movie favorites server...");

    let state = create_app_state(&config).await?;
    let app = create_router(state);

    let addr = config.server_addr();
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
