use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use crate::platform::Platform;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    #[default]
    NewestFirst,
    OldestFirst,
    HighestRating,
    LowestRating,
}

/// Immutable per-request filter specification.
///
/// Built fresh from caller-supplied parameters for each query and never
/// persisted. Malformed inputs are treated as "no constraint" rather than
/// rejected, so the lenient `parse_*` constructors never fail.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewFilter {
    /// None means all platforms.
    pub platform: Option<Platform>,
    /// 0 means no rating filter; 1-5 means exact match, not "at least".
    pub rating: u8,
    /// Inclusive lower bound on review date.
    pub date_from: Option<DateTime<Utc>>,
    /// Inclusive upper bound on review date.
    pub date_to: Option<DateTime<Utc>>,
    /// Some(true) keeps only replied-to reviews, Some(false) the opposite,
    /// None applies no constraint.
    pub has_response: Option<bool>,
    pub sort: SortOrder,
}

impl ReviewFilter {
    /// Build a filter from raw string parameters, e.g. HTTP query values.
    pub fn from_params(platform: &str, rating: &str, date_from: &str, date_to: &str) -> Self {
        Self {
            platform: Self::parse_platform(platform),
            rating: Self::parse_rating(rating),
            date_from: Self::parse_date_from(date_from),
            date_to: Self::parse_date_to(date_to),
            has_response: None,
            sort: SortOrder::default(),
        }
    }

    /// "all", empty, or unknown tags mean no platform constraint.
    pub fn parse_platform(s: &str) -> Option<Platform> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("all") {
            return None;
        }
        s.parse().ok()
    }

    /// Anything outside 1-5 (including garbage) means no rating filter.
    pub fn parse_rating(s: &str) -> u8 {
        match s.trim().parse::<u8>() {
            Ok(r @ 1..=5) => r,
            _ => 0,
        }
    }

    /// Lower bound: a bare date means the start of that day (UTC).
    pub fn parse_date_from(s: &str) -> Option<DateTime<Utc>> {
        parse_date_bound(s, false)
    }

    /// Upper bound: a bare date means the end of that day, keeping the
    /// bound inclusive for same-day reviews.
    pub fn parse_date_to(s: &str) -> Option<DateTime<Utc>> {
        parse_date_bound(s, true)
    }
}

fn parse_date_bound(s: &str, end_of_day: bool) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    let date: NaiveDate = s.parse().ok()?;
    let time = if end_of_day {
        date.and_hms_opt(23, 59, 59)?
    } else {
        date.and_hms_opt(0, 0, 0)?
    };
    Some(Utc.from_utc_datetime(&time))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_platform_all_and_garbage() {
        assert_eq!(ReviewFilter::parse_platform("all"), None);
        assert_eq!(ReviewFilter::parse_platform(""), None);
        assert_eq!(ReviewFilter::parse_platform("myspace"), None);
        assert_eq!(ReviewFilter::parse_platform("google"), Some(Platform::Google));
    }

    #[test]
    fn test_parse_rating_lenient() {
        assert_eq!(ReviewFilter::parse_rating("4"), 4);
        assert_eq!(ReviewFilter::parse_rating("0"), 0);
        assert_eq!(ReviewFilter::parse_rating("9"), 0);
        assert_eq!(ReviewFilter::parse_rating("five"), 0);
        assert_eq!(ReviewFilter::parse_rating(""), 0);
    }

    #[test]
    fn test_parse_date_bounds() {
        let from = ReviewFilter::parse_date_from("2024-03-01").unwrap();
        assert_eq!(from.to_rfc3339(), "2024-03-01T00:00:00+00:00");

        let to = ReviewFilter::parse_date_to("2024-03-01").unwrap();
        assert_eq!(to.to_rfc3339(), "2024-03-01T23:59:59+00:00");

        let rfc = ReviewFilter::parse_date_from("2024-03-01T12:30:00Z").unwrap();
        assert_eq!(rfc.to_rfc3339(), "2024-03-01T12:30:00+00:00");
    }

    #[test]
    fn test_parse_date_garbage_means_unbounded() {
        assert_eq!(ReviewFilter::parse_date_from("last tuesday"), None);
        assert_eq!(ReviewFilter::parse_date_to("03/01/2024"), None);
        assert_eq!(ReviewFilter::parse_date_from(""), None);
    }

    #[test]
    fn test_from_params() {
        let filter = ReviewFilter::from_params("facebook", "5", "2024-01-01", "bogus");
        assert_eq!(filter.platform, Some(Platform::Facebook));
        assert_eq!(filter.rating, 5);
        assert!(filter.date_from.is_some());
        assert_eq!(filter.date_to, None);
        assert_eq!(filter.has_response, None);
        assert_eq!(filter.sort, SortOrder::NewestFirst);
    }
}
