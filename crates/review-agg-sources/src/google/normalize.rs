use chrono::{DateTime, Utc};
use review_agg_models::{BusinessSummary, Platform, Review, ReviewResponse};
use tracing::{debug, warn};

use crate::google::api::{GoogleReview, PlaceDetailsResponse};
use crate::traits::ProviderSnapshot;

/// Map one raw Places review to the canonical shape.
///
/// Fails closed: a record missing its rating (or carrying one outside 1-5)
/// or missing a usable timestamp is dropped, never emitted half-populated.
pub fn normalize_review(raw: &GoogleReview, business_id: &str) -> Option<Review> {
    let rating = match raw.rating {
        Some(r @ 1..=5) => r as u8,
        _ => return None,
    };

    let time = raw.time?;
    let date = DateTime::<Utc>::from_timestamp(time, 0)?;

    // The reply sub-object maps to a response only when it carries text;
    // an empty reply never becomes a placeholder response.
    let response = raw.author_reply.as_ref().and_then(|reply| {
        let content = reply.text.clone().filter(|t| !t.is_empty())?;
        let reply_date = reply
            .time
            .and_then(|t| DateTime::<Utc>::from_timestamp(t, 0))
            .unwrap_or(date);
        Some(ReviewResponse {
            content,
            date: reply_date,
        })
    });

    Some(Review {
        id: format!("{}_{}", Platform::Google.as_str(), time),
        author: raw.author_name.clone().unwrap_or_default(),
        content: raw.text.clone().unwrap_or_default(),
        rating,
        date,
        platform: Platform::Google,
        business_id: business_id.to_string(),
        profile_photo: raw.profile_photo_url.clone(),
        response,
    })
}

/// Convert one Places response into a provider snapshot.
///
/// A non-OK provider status degrades to the empty snapshot. Reviews are
/// normalized whenever the response itself carries a review array;
/// individual malformed records are skipped without invalidating the batch.
pub fn snapshot_from_details(resp: &PlaceDetailsResponse, business_id: &str) -> ProviderSnapshot {
    if resp.status != "OK" {
        warn!(
            "Google Places returned status {} for {}{}; returning empty result",
            resp.status,
            business_id,
            resp.error_message
                .as_deref()
                .map(|m| format!(" ({})", m))
                .unwrap_or_default()
        );
        return ProviderSnapshot::empty();
    }

    let Some(result) = &resp.result else {
        warn!("Google Places returned OK without a result for {}", business_id);
        return ProviderSnapshot::empty();
    };

    let business = BusinessSummary {
        name: result.name.clone().unwrap_or_default(),
        rating: result.rating.unwrap_or(0.0),
        review_count: result.user_ratings_total.unwrap_or(0),
    };

    let mut reviews = Vec::new();
    let mut skipped = 0;
    if let Some(raw_reviews) = &result.reviews {
        for raw in raw_reviews {
            match normalize_review(raw, business_id) {
                Some(review) => reviews.push(review),
                None => skipped += 1,
            }
        }
    }

    if skipped > 0 {
        debug!(
            "Skipped {} malformed Google reviews for {}",
            skipped, business_id
        );
    }

    ProviderSnapshot { business, reviews }
}
