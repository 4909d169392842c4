//! Song record returned by lookups and kept in the local store

use serde::{Deserialize, Serialize};

/// Resolved metadata for one (title, artist) pair
///
/// `album` and `genre` are never empty; they default to "Unknown".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedSong {
    pub title: String,
    pub artist: String,
    pub album: String,
    pub year: Option<i32>,
    pub duration_ms: Option<i64>,
    pub genre: String,
}
