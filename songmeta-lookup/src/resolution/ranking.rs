//! Best-candidate selection
//!
//! Releases and recordings are ranked by the same two-key policy: studio tier
//! first, then earliest year. [`select_best`] is a single greedy pass over the
//! candidates in input order, so on ties the earlier candidate is kept.

use super::candidates::{CandidateRecording, CandidateRelease};
use super::classifier::classify;

/// Ranking key of one candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rank {
    pub is_studio: bool,
    pub year: i32,
}

impl Rank {
    /// Whether a candidate with this rank replaces the running best
    fn displaces(&self, best: &Rank) -> bool {
        if self.is_studio && !best.is_studio {
            return true;
        }
        self.is_studio == best.is_studio && self.year < best.year
    }
}

/// Pick the best candidate by tier, then earliest year
///
/// `rank` returns `None` for candidates that cannot be ranked; those are
/// skipped. When nothing is rankable the first candidate is returned, so the
/// result is `None` only for empty input.
pub fn select_best<T, F>(candidates: &[T], rank: F) -> Option<&T>
where
    F: Fn(&T) -> Option<Rank>,
{
    candidates
        .iter()
        .filter_map(|candidate| rank(candidate).map(|r| (candidate, r)))
        .fold(None::<(&T, Rank)>, |best, (candidate, r)| match best {
            Some((_, best_rank)) if !r.displaces(&best_rank) => best,
            _ => Some((candidate, r)),
        })
        .map(|(candidate, _)| candidate)
        .or_else(|| candidates.first())
}

/// Rank of a release; undated or yearless releases are unrankable
pub fn release_rank(release: &CandidateRelease) -> Option<Rank> {
    let class = classify(release);
    class.year.map(|year| Rank {
        is_studio: class.is_studio,
        year,
    })
}

/// Rank of a recording across all of its releases
///
/// Studio if any release is studio; year is the earliest year of any release,
/// studio or not.
pub fn recording_rank(recording: &CandidateRecording) -> Option<Rank> {
    recording
        .releases
        .iter()
        .filter_map(release_rank)
        .reduce(|acc, r| Rank {
            is_studio: acc.is_studio || r.is_studio,
            year: acc.year.min(r.year),
        })
}

/// Best release of one recording, falling back to the first release
pub fn select_release(releases: &[CandidateRelease]) -> Option<&CandidateRelease> {
    select_best(releases, release_rank)
}

/// Best recording of a search result, falling back to the first recording
pub fn select_recording(recordings: &[CandidateRecording]) -> Option<&CandidateRecording> {
    select_best(recordings, recording_rank)
}
