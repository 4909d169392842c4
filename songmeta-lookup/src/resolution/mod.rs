//! Search result disambiguation
//!
//! Turns an unordered, sparsely populated list of candidate recordings into a
//! single [`ResolvedSong`]: the best recording is chosen by studio tier and
//! earliest release year, then the best release of that recording supplies the
//! album and year, and tags supply the genre.
//!
//! Everything here is pure and synchronous; no I/O happens in this module.

pub mod candidates;
pub mod classifier;
pub mod genre;
pub mod ranking;
pub mod year;

pub use candidates::{CandidateRecording, CandidateRelease, SearchResponse, Tag};
pub use classifier::{classify, ReleaseClass};
pub use genre::resolve_genre;
pub use ranking::{select_best, select_recording, select_release, Rank};
pub use year::extract_year;

use tracing::debug;

use crate::models::ResolvedSong;

/// Placeholder for album and genre when nothing usable was found
pub const UNKNOWN: &str = "Unknown";

/// Resolve one song from search candidates
///
/// Returns `None` only when there are no candidates at all ("not found").
pub fn resolve_song(title: &str, artist: &str, recordings: &[CandidateRecording]) -> Option<ResolvedSong> {
    let recording = select_recording(recordings)?;

    let (album, year) = match select_release(&recording.releases) {
        Some(release) => (
            release.title.clone().unwrap_or_else(|| UNKNOWN.to_string()),
            extract_year(release.date.as_deref()),
        ),
        None => {
            debug!("Selected recording has no releases");
            (UNKNOWN.to_string(), None)
        }
    };

    let duration_ms = recording.duration_ms.and_then(|ms| i64::try_from(ms).ok());
    let genre = resolve_genre(recording, recordings);

    debug!(
        candidates = recordings.len(),
        album = %album,
        year = ?year,
        genre = %genre,
        "Resolved search candidates"
    );

    Some(ResolvedSong {
        title: title.to_string(),
        artist: artist.to_string(),
        album,
        year,
        duration_ms,
        genre,
    })
}
