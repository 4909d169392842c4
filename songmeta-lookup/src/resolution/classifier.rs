//! Studio vs. live release classification
//!
//! Heuristic only. A release counts as live when its lower-cased title
//! contains one of [`LIVE_KEYWORDS`], or when its date carries day precision
//! (`YYYY-MM-DD`), which in search results mostly marks concert bootlegs.

use once_cell::sync::Lazy;
use regex::Regex;

use super::candidates::CandidateRelease;
use super::year::extract_year;

/// Title substrings that mark a live/concert release
pub const LIVE_KEYWORDS: [&str; 4] = ["live", "concert", "stage", "tour"];

static FULL_CALENDAR_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]{4}-[0-9]{2}-[0-9]{2}").unwrap());

/// Classification of a single release
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReleaseClass {
    /// Dated with a parseable year and not flagged live
    pub is_studio: bool,
    pub year: Option<i32>,
}

/// Classify one release
///
/// Undated releases are unusable for ranking and come back as
/// `{ is_studio: false, year: None }`.
pub fn classify(release: &CandidateRelease) -> ReleaseClass {
    let Some(date) = release.date.as_deref() else {
        return ReleaseClass {
            is_studio: false,
            year: None,
        };
    };

    let year = extract_year(Some(date));
    ReleaseClass {
        is_studio: year.is_some() && !is_live(release.title.as_deref(), date),
        year,
    }
}

fn is_live(title: Option<&str>, date: &str) -> bool {
    let title = title.unwrap_or("").to_lowercase();
    LIVE_KEYWORDS.iter().any(|keyword| title.contains(keyword)) || FULL_CALENDAR_DATE.is_match(date)
}
