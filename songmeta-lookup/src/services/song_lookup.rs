//! Local-first song lookup
//!
//! A stored song short-circuits the external search. On a miss the search
//! results are resolved and the result is stored for next time. Store
//! failures degrade the lookup but never fail it.

use sqlx::SqlitePool;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{debug, error, info, warn};

use super::musicbrainz_client::{RecordingSearch, SearchError};
use crate::db::songs;
use crate::models::ResolvedSong;
use crate::resolution::resolve_song;

/// Lookup outcome other than a resolved song
#[derive(Debug, Error)]
pub enum LookupError {
    /// The search returned no candidate recordings
    #[error("Song not found for title: {title}, artist: {artist}")]
    NotFound { title: String, artist: String },

    /// The search itself failed
    #[error("Song not found for title: {title}, artist: {artist}, external service error: {source}")]
    Upstream {
        title: String,
        artist: String,
        #[source]
        source: SearchError,
    },
}

/// Lookup orchestration over the local store and a recording search
#[derive(Clone)]
pub struct SongLookup {
    db: SqlitePool,
    search: Arc<dyn RecordingSearch>,
    last_error: Arc<RwLock<Option<String>>>,
}

impl SongLookup {
    pub fn new(
        db: SqlitePool,
        search: Arc<dyn RecordingSearch>,
        last_error: Arc<RwLock<Option<String>>>,
    ) -> Self {
        Self {
            db,
            search,
            last_error,
        }
    }

    /// Resolve metadata for a title and artist
    pub async fn lookup(&self, title: &str, artist: &str) -> Result<ResolvedSong, LookupError> {
        match songs::find_song(&self.db, title, artist).await {
            Ok(Some(song)) => {
                info!(title = %title, artist = %artist, "Song found in local store");
                return Ok(song);
            }
            Ok(None) => debug!(title = %title, artist = %artist, "Song not in local store"),
            Err(e) => {
                error!("Database query failed: {}", e);
                self.record_error(format!("Database query failed: {}", e)).await;
            }
        }

        let response = self
            .search
            .search_recordings(title, artist)
            .await
            .map_err(|source| {
                warn!(title = %title, artist = %artist, error = %source, "Recording search failed");
                LookupError::Upstream {
                    title: title.to_string(),
                    artist: artist.to_string(),
                    source,
                }
            })?;

        let song = resolve_song(title, artist, &response.recordings).ok_or_else(|| {
            info!(title = %title, artist = %artist, "Search returned no recordings");
            LookupError::NotFound {
                title: title.to_string(),
                artist: artist.to_string(),
            }
        })?;

        match songs::insert_song(&self.db, &song).await {
            Ok(true) => info!(title = %title, artist = %artist, album = %song.album, "Stored resolved song"),
            Ok(false) => debug!(title = %title, artist = %artist, "Song already stored"),
            Err(e) => {
                warn!("Insert failed, returning unsaved song: {}", e);
                self.record_error(format!("Insert failed: {}", e)).await;
            }
        }

        Ok(song)
    }

    async fn record_error(&self, message: String) {
        *self.last_error.write().await = Some(message);
    }
}
