//! Genre lookup from recording tags

use super::candidates::CandidateRecording;
use super::UNKNOWN;

/// First tag of the selected recording, else the first tag found scanning
/// all candidates in order, else "Unknown"
pub fn resolve_genre(selected: &CandidateRecording, candidates: &[CandidateRecording]) -> String {
    selected
        .tags
        .first()
        .or_else(|| candidates.iter().find_map(|c| c.tags.first()))
        .map(|tag| tag.name.clone())
        .unwrap_or_else(|| UNKNOWN.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolution::candidates::Tag;

    fn tagged(names: &[&str]) -> CandidateRecording {
        CandidateRecording {
            tags: names
                .iter()
                .map(|n| Tag { name: n.to_string() })
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_selected_tags_win() {
        let candidates = vec![tagged(&["pop"]), tagged(&["grunge", "rock"])];
        assert_eq!(resolve_genre(&candidates[1], &candidates), "grunge");
    }

    #[test]
    fn test_falls_back_to_first_tagged_candidate() {
        let candidates = vec![tagged(&[]), tagged(&[]), tagged(&["alternative rock"]), tagged(&["pop"])];
        assert_eq!(resolve_genre(&candidates[0], &candidates), "alternative rock");
    }

    #[test]
    fn test_unknown_when_no_tags_anywhere() {
        let candidates = vec![tagged(&[]), tagged(&[])];
        assert_eq!(resolve_genre(&candidates[1], &candidates), "Unknown");
    }
}
