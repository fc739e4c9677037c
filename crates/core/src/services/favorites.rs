use chrono::Utc;
use uuid::Uuid;

use crate::db::DbPool;
use crate::error::{Error, Result};
use crate::models::{AddMovieOutcome, FavoriteList, FavoriteListDetails, FavoriteMovie};

const LIST_NOT_FOUND: &str = "Favorite list not found.";
const MOVIE_NOT_FOUND: &str = "Movie not found in this favorite list.";

pub struct FavoritesService {
    pool: DbPool,
}

impl FavoritesService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn create_list(&self) -> Result<FavoriteList> {
        let share_id = Uuid::new_v4();
        let now = Utc::now();

        sqlx::query("INSERT INTO favorite_lists (share_id, created_at) VALUES (?, ?)")
            .bind(share_id)
            .bind(now)
            .execute(&self.pool)
            .await?;

        tracing::info!(%share_id, "Created favorite list");

        self.find_list(share_id).await
    }

    pub async fn get_list(&self, share_id: Uuid) -> Result<FavoriteListDetails> {
        let list = self.find_list(share_id).await?;

        let movies = sqlx::query_as::<_, FavoriteMovie>(
            "SELECT * FROM favorite_movies WHERE list_id = ? ORDER BY id",
        )
        .bind(list.id)
        .fetch_all(&self.pool)
        .await?;

        Ok(FavoriteListDetails { list, movies })
    }

    /// Adds a movie to the list. The unique (list_id, tmdb_movie_id) constraint
    /// decides whether the row is new. The insert and the lookup of an existing
    /// row share one write transaction, so a concurrent remove cannot delete the
    /// row in between.
    pub async fn add_movie(&self, share_id: Uuid, tmdb_movie_id: i64) -> Result<AddMovieOutcome> {
        let list = self.find_list(share_id).await?;

        let mut tx = self.pool.begin().await?;

        let inserted = sqlx::query_as::<_, FavoriteMovie>(
            r#"
            INSERT INTO favorite_movies (list_id, tmdb_movie_id, added_at)
            VALUES (?, ?, ?)
            ON CONFLICT (list_id, tmdb_movie_id) DO NOTHING
            RETURNING *
            "#,
        )
        .bind(list.id)
        .bind(tmdb_movie_id)
        .bind(Utc::now())
        .fetch_optional(&mut *tx)
        .await?;

        let outcome = match inserted {
            Some(movie) => AddMovieOutcome::Added(movie),
            None => {
                let existing = sqlx::query_as::<_, FavoriteMovie>(
                    "SELECT * FROM favorite_movies WHERE list_id = ? AND tmdb_movie_id = ?",
                )
                .bind(list.id)
                .bind(tmdb_movie_id)
                .fetch_one(&mut *tx)
                .await?;
                AddMovieOutcome::AlreadyPresent(existing)
            }
        };

        tx.commit().await?;

        if outcome.is_new() {
            tracing::info!(%share_id, tmdb_movie_id, "Added movie to favorite list");
        } else {
            tracing::debug!(%share_id, tmdb_movie_id, "Movie already in favorite list");
        }
        Ok(outcome)
    }

    pub async fn remove_movie(&self, share_id: Uuid, tmdb_movie_id: i64) -> Result<()> {
        let list = self.find_list(share_id).await?;

        let result =
            sqlx::query("DELETE FROM favorite_movies WHERE list_id = ? AND tmdb_movie_id = ?")
                .bind(list.id)
                .bind(tmdb_movie_id)
                .execute(&self.pool)
                .await?;

        if result.rows_affected() == 0 {
            return Err(Error::NotFound(MOVIE_NOT_FOUND.to_string()));
        }

        tracing::info!(%share_id, tmdb_movie_id, "Removed movie from favorite list");
        Ok(())
    }

    async fn find_list(&self, share_id: Uuid) -> Result<FavoriteList> {
        sqlx::query_as::<_, FavoriteList>("SELECT * FROM favorite_lists WHERE share_id = ?")
            .bind(share_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Error::NotFound(LIST_NOT_FOUND.to_string()))
    }
}
