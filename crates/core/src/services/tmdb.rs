use serde::Serialize;

use crate::config::Config;
use crate::error::{Error, Result};

/// Response locale requested from TMDB for every call
pub const TMDB_LANGUAGE: &str = "pt-BR";

/// Thin relay in front of TMDB that keeps the API key on the server
pub struct TmdbService {
    client: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
}

/// Upstream status and JSON body, relayed unchanged to the caller
#[derive(Debug, Clone, Serialize)]
pub struct CatalogResponse {
    pub status: u16,
    pub body: serde_json::Value,
}

impl TmdbService {
    pub fn new(api_key: Option<String>, base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.tmdb_api_key(), config.tmdb_base_url.clone())
    }

    fn api_key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .ok_or_else(|| Error::Configuration("TMDB API key is not configured.".to_string()))
    }

    pub async fn search_movies(&self, query: &str) -> Result<CatalogResponse> {
        if query.is_empty() {
            return Err(Error::Validation(
                "The 'q' (query) parameter is required.".to_string(),
            ));
        }

        let url = self.search_url(self.api_key()?, query);
        tracing::debug!(query, "Searching TMDB");
        self.relay(&url).await
    }

    pub async fn get_movie_details(&self, tmdb_movie_id: i64) -> Result<CatalogResponse> {
        let url = self.details_url(self.api_key()?, tmdb_movie_id);
        tracing::debug!(tmdb_movie_id, "Fetching TMDB movie details");
        self.relay(&url).await
    }

    fn search_url(&self, api_key: &str, query: &str) -> String {
        format!(
            "{}/search/movie?api_key={}&query={}&language={}&include_adult=false",
            self.base_url,
            urlencoding::encode(api_key),
            urlencoding::encode(query),
            TMDB_LANGUAGE
        )
    }

    fn details_url(&self, api_key: &str, tmdb_movie_id: i64) -> String {
        format!(
            "{}/movie/{}?api_key={}&language={}",
            self.base_url,
            tmdb_movie_id,
            urlencoding::encode(api_key),
            TMDB_LANGUAGE
        )
    }

    async fn relay(&self, url: &str) -> Result<CatalogResponse> {
        // without_url keeps the api_key query parameter out of messages
        let response = self.client.get(url).send().await.map_err(|e| {
            let e = e.without_url();
            tracing::warn!(error = %e, "TMDB request failed");
            Error::ExternalApi(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, "TMDB returned an error status");
            return Err(Error::ExternalApi(format!("TMDB API error: {}", status)));
        }

        let body = response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| Error::ExternalApi(e.without_url().to_string()))?;

        Ok(CatalogResponse {
            status: status.as_u16(),
            body,
        })
    }
}
