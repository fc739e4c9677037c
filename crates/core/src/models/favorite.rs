use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::SHARE_ID_PLACEHOLDER;

/// An anonymous favorites list, addressed publicly only through its share id
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct FavoriteList {
    #[serde(skip)]
    pub id: i64,
    pub share_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl FavoriteList {
    /// Builds the shareable link by substituting the share id into `template`
    pub fn share_url(&self, template: &str) -> String {
        template.replace(SHARE_ID_PLACEHOLDER, &self.share_id.to_string())
    }
}

/// A TMDB movie inside one favorites list
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct FavoriteMovie {
    pub id: i64,
    pub list_id: i64,
    pub tmdb_movie_id: i64,
    pub added_at: DateTime<Utc>,
}

/// A list together with its movies, in insertion order
#[derive(Debug, Clone)]
pub struct FavoriteListDetails {
    pub list: FavoriteList,
    pub movies: Vec<FavoriteMovie>,
}

/// Result of adding a movie; re-adding an existing movie is not an error
#[derive(Debug, Clone)]
pub enum AddMovieOutcome {
    Added(FavoriteMovie),
    AlreadyPresent(FavoriteMovie),
}

impl AddMovieOutcome {
    pub fn movie(&self) -> &FavoriteMovie {
        match self {
            AddMovieOutcome::Added(movie) | AddMovieOutcome::AlreadyPresent(movie) => movie,
        }
    }

    pub fn is_new(&self) -> bool {
        matches!(self, AddMovieOutcome::Added(_))
    }
}
