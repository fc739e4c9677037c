//! Test helpers for creating test databases

use tempfile::TempDir;

use crate::db::{DbPool, create_in_memory_pool, create_pool};

/// Creates an in-memory SQLite database with all migrations applied
pub async fn create_test_db() -> DbPool {
    create_in_memory_pool()
        .await
        .expect("Failed to create test database")
}

/// Creates a file-backed database served by several connections, for tests
/// that need requests to actually overlap. Keep the `TempDir` alive for the
/// duration of the test.
pub async fn create_test_file_db() -> (TempDir, DbPool) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let url = format!("sqlite:{}", dir.path().join("favorites.db").display());
    let pool = create_pool(&url)
        .await
        .expect("Failed to create test database");
    (dir, pool)
}
