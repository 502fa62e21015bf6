use chrono::{DateTime, Utc};
use review_agg_models::{BusinessSummary, Platform, Review};
use tracing::{debug, warn};

use crate::facebook::api::{FacebookRating, PageRatingsResponse};
use crate::traits::ProviderSnapshot;

/// Graph timestamps come as "2024-02-10T09:15:00+0000" (no colon in the
/// offset), which is not strict RFC 3339. Accept both forms.
fn parse_created_time(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%z")
        .or_else(|_| DateTime::parse_from_rfc3339(s))
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Map one raw page rating to the canonical shape.
///
/// Fails closed like the Google normalizer: entries without a 1-5 star
/// rating (Facebook's recommendation-only entries) or without a parseable
/// created time are dropped.
pub fn normalize_rating(raw: &FacebookRating, business_id: &str) -> Option<Review> {
    let rating = match raw.rating {
        Some(r @ 1..=5) => r as u8,
        _ => return None,
    };

    let date = parse_created_time(raw.created_time.as_deref()?)?;

    // Prefer the open graph story id; it survives edits to the rating.
    // Same-second ratings without one would collide, which the per-business
    // id uniqueness tolerates only because the story id is almost always set.
    let native_id = raw
        .open_graph_story
        .as_ref()
        .and_then(|story| story.id.clone())
        .unwrap_or_else(|| date.timestamp().to_string());

    let reviewer = raw.reviewer.as_ref();

    Some(Review {
        id: format!("{}_{}", Platform::Facebook.as_str(), native_id),
        author: reviewer
            .and_then(|r| r.name.clone())
            .unwrap_or_default(),
        content: raw.review_text.clone().unwrap_or_default(),
        rating,
        date,
        platform: Platform::Facebook,
        business_id: business_id.to_string(),
        profile_photo: reviewer
            .and_then(|r| r.picture.as_ref())
            .and_then(|p| p.data.as_ref())
            .and_then(|d| d.url.clone()),
        // The ratings edge does not expose page replies.
        response: None,
    })
}

/// Convert one Graph response into a provider snapshot. A body-level Graph
/// error degrades to the empty snapshot, like a non-2xx status would.
pub fn snapshot_from_page(resp: &PageRatingsResponse, business_id: &str) -> ProviderSnapshot {
    if let Some(error) = &resp.error {
        warn!(
            "Facebook Graph returned error {:?} for {}: {}; returning empty result",
            error.code,
            business_id,
            error.message.as_deref().unwrap_or("unknown")
        );
        return ProviderSnapshot::empty();
    }

    let business = BusinessSummary {
        name: resp.name.clone().unwrap_or_default(),
        rating: resp.overall_star_rating.unwrap_or(0.0),
        review_count: resp.rating_count.unwrap_or(0),
    };

    let mut reviews = Vec::new();
    let mut skipped = 0;
    if let Some(ratings) = &resp.ratings {
        for raw in &ratings.data {
            match normalize_rating(raw, business_id) {
                Some(review) => reviews.push(review),
                None => skipped += 1,
            }
        }
    }

    if skipped > 0 {
        debug!(
            "Skipped {} recommendation-only or malformed Facebook ratings for {}",
            skipped, business_id
        );
    }

    ProviderSnapshot { business, reviews }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facebook::api::{
        FacebookReviewer, GraphError, OpenGraphStory, Picture, PictureData, RatingsConnection,
    };
    use chrono::TimeZone;

    fn raw_rating() -> FacebookRating {
        FacebookRating {
            rating: Some(4),
            review_text: Some("Lovely spot".to_string()),
            created_time: Some("2024-02-10T09:15:00+0000".to_string()),
            reviewer: Some(FacebookReviewer {
                name: Some("Sam".to_string()),
                picture: Some(Picture {
                    data: Some(PictureData {
                        url: Some("https://example.com/sam.jpg".to_string()),
                    }),
                }),
            }),
            open_graph_story: Some(OpenGraphStory {
                id: Some("10158000000000001".to_string()),
            }),
        }
    }

    #[test]
    fn test_normalize_rating() {
        let review = normalize_rating(&raw_rating(), "biz-1").unwrap();

        assert_eq!(review.id, "facebook_10158000000000001");
        assert_eq!(review.author, "Sam");
        assert_eq!(review.rating, 4);
        assert_eq!(
            review.date,
            Utc.with_ymd_and_hms(2024, 2, 10, 9, 15, 0).unwrap()
        );
        assert_eq!(review.platform, Platform::Facebook);
        assert_eq!(
            review.profile_photo.as_deref(),
            Some("https://example.com/sam.jpg")
        );
        assert_eq!(review.response, None);
    }

    #[test]
    fn test_created_time_accepts_both_offset_forms() {
        let graph_style = parse_created_time("2024-02-10T09:15:00+0000").unwrap();
        let rfc_style = parse_created_time("2024-02-10T09:15:00+00:00").unwrap();
        assert_eq!(graph_style, rfc_style);
        assert_eq!(parse_created_time("yesterday"), None);
    }

    #[test]
    fn test_recommendation_without_star_rating_is_dropped() {
        let mut raw = raw_rating();
        raw.rating = None;
        assert_eq!(normalize_rating(&raw, "biz-1"), None);
    }

    #[test]
    fn test_missing_story_id_falls_back_to_epoch() {
        let mut raw = raw_rating();
        raw.open_graph_story = None;
        let review = normalize_rating(&raw, "biz-1").unwrap();
        assert_eq!(review.id, format!("facebook_{}", review.date.timestamp()));
    }

    #[test]
    fn test_graph_error_degrades_to_empty() {
        let resp = PageRatingsResponse {
            name: None,
            overall_star_rating: None,
            rating_count: None,
            ratings: None,
            error: Some(GraphError {
                message: Some("Invalid OAuth access token".to_string()),
                code: Some(190),
            }),
        };
        assert_eq!(snapshot_from_page(&resp, "biz-1"), ProviderSnapshot::empty());
    }

    #[test]
    fn test_snapshot_from_page() {
        let mut unrated = raw_rating();
        unrated.rating = None;

        let resp = PageRatingsResponse {
            name: Some("Cafe Luna".to_string()),
            overall_star_rating: Some(4.4),
            rating_count: Some(57),
            ratings: Some(RatingsConnection {
                data: vec![raw_rating(), unrated],
            }),
            error: None,
        };

        let snapshot = snapshot_from_page(&resp, "biz-1");
        assert_eq!(snapshot.business.name, "Cafe Luna");
        assert_eq!(snapshot.business.review_count, 57);
        assert_eq!(snapshot.reviews.len(), 1);
        assert_eq!(snapshot.reviews[0].business_id, "biz-1");
    }
}
