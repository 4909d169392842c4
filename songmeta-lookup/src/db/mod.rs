//! Local song store
//!
//! SQLite database holding previously resolved songs.

pub mod songs;

use anyhow::Result;
use sqlx::SqlitePool;

/// Initialize database connection pool
///
/// Accepts any sqlx SQLite URL (`sqlite://path?mode=rwc`, `sqlite::memory:`).
pub async fn init_database_pool(database_url: &str) -> Result<SqlitePool> {
    tracing::debug!("Connecting to database: {}", database_url);

    let pool = SqlitePool::connect(database_url).await?;

    init_tables(&pool).await?;

    Ok(pool)
}

/// Create the songs table if it doesn't exist
///
/// Title and artist use NOCASE collation so both the uniqueness constraint
/// and lookups ignore case.
pub async fn init_tables(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS songs (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL COLLATE NOCASE,
            artist TEXT NOT NULL COLLATE NOCASE,
            album TEXT,
            year INTEGER,
            duration_ms INTEGER,
            genre TEXT,
            created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
            UNIQUE (title, artist)
        )
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("Database tables initialized (songs)");

    Ok(())
}
