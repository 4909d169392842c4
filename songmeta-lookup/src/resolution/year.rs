//! Release year extraction from free-form dates

use tracing::debug;

/// Extract a 4-digit year from "YYYY", "YYYY-MM" or "YYYY-MM-DD"
///
/// Only the segment before the first `-` is considered, and only when it is
/// exactly four characters long. Month and day are not validated and trailing
/// garbage is ignored. Returns `None` for blank input or anything unparseable.
pub fn extract_year(date: Option<&str>) -> Option<i32> {
    let date = date?;
    if date.trim().is_empty() {
        return None;
    }

    let first = date.split('-').next()?;
    if first.chars().count() != 4 {
        debug!(date = %date, "Date does not start with a 4-character year");
        return None;
    }

    match first.parse::<i32>() {
        Ok(year) => Some(year),
        Err(_) => {
            debug!(date = %date, "Could not parse year from date string");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_only() {
        for year in [1000, 1967, 1991, 2024, 9999] {
            assert_eq!(extract_year(Some(&year.to_string())), Some(year));
        }
    }

    #[test]
    fn test_partial_and_full_dates() {
        assert_eq!(extract_year(Some("1991-09")), Some(1991));
        assert_eq!(extract_year(Some("1991-06-15")), Some(1991));
        assert_eq!(extract_year(Some("2003-6-1")), Some(2003));
        // Month/day are never validated
        assert_eq!(extract_year(Some("1991-99-99")), Some(1991));
        assert_eq!(extract_year(Some("1991-xx")), Some(1991));
    }

    #[test]
    fn test_blank_and_absent() {
        assert_eq!(extract_year(None), None);
        assert_eq!(extract_year(Some("")), None);
        assert_eq!(extract_year(Some("   ")), None);
    }

    #[test]
    fn test_malformed() {
        assert_eq!(extract_year(Some("91")), None);
        assert_eq!(extract_year(Some("19910")), None);
        assert_eq!(extract_year(Some("abcd")), None);
        assert_eq!(extract_year(Some("19x1-01-01")), None);
        assert_eq!(extract_year(Some("-1991")), None);
        assert_eq!(extract_year(Some("1991/09/24")), None);
        assert_eq!(extract_year(Some(" 1991")), None);
    }
}
