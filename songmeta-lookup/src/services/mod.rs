//! Service layer for songmeta-lookup
//!
//! External recording search and the local-first lookup built on it.

pub mod musicbrainz_client;
pub mod song_lookup;

pub use musicbrainz_client::{MusicBrainzClient, RecordingSearch, SearchConfig, SearchError};
pub use song_lookup::{LookupError, SongLookup};
