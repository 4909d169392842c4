//! Song database operations

use sqlx::{Row, SqlitePool};

use crate::models::ResolvedSong;
use crate::resolution::UNKNOWN;

/// Find a stored song by title and artist, ignoring case
pub async fn find_song(
    pool: &SqlitePool,
    title: &str,
    artist: &str,
) -> Result<Option<ResolvedSong>, sqlx::Error> {
    let row = sqlx::query(
        r#"
        SELECT title, artist, album, year, duration_ms, genre
        FROM songs
        WHERE title = ? AND artist = ?
        "#,
    )
    .bind(title)
    .bind(artist)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|row| {
        let album: Option<String> = row.get("album");
        let genre: Option<String> = row.get("genre");

        ResolvedSong {
            title: row.get("title"),
            artist: row.get("artist"),
            album: album.unwrap_or_else(|| UNKNOWN.to_string()),
            year: row.get("year"),
            duration_ms: row.get("duration_ms"),
            genre: genre.unwrap_or_else(|| UNKNOWN.to_string()),
        }
    }))
}

/// Store a resolved song
///
/// An existing row for the same title and artist is left untouched. Returns
/// whether a row was inserted.
pub async fn insert_song(pool: &SqlitePool, song: &ResolvedSong) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        INSERT INTO songs (title, artist, album, year, duration_ms, genre)
        VALUES (?, ?, ?, ?, ?, ?)
        ON CONFLICT (title, artist) DO NOTHING
        "#,
    )
    .bind(&song.title)
    .bind(&song.artist)
    .bind(&song.album)
    .bind(song.year)
    .bind(song.duration_ms)
    .bind(&song.genre)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
