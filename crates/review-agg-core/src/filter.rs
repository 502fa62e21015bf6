use review_agg_models::{Review, ReviewFilter, SortOrder};

/// Apply a filter specification to a review collection.
///
/// Predicates are conjunctive: a review passes only if every active
/// (non-default) field matches. The input is never mutated; a freshly
/// ordered copy comes back.
pub fn apply_filter(reviews: &[Review], filter: &ReviewFilter) -> Vec<Review> {
    let mut out: Vec<Review> = reviews
        .iter()
        .filter(|review| matches_filter(review, filter))
        .cloned()
        .collect();
    sort_reviews(&mut out, filter.sort);
    out
}

pub fn matches_filter(review: &Review, filter: &ReviewFilter) -> bool {
    if let Some(platform) = filter.platform {
        if review.platform != platform {
            return false;
        }
    }
    // Exact match, not "at least"; 0 means the filter is off.
    if filter.rating != 0 && review.rating != filter.rating {
        return false;
    }
    if let Some(from) = filter.date_from {
        if review.date < from {
            return false;
        }
    }
    if let Some(to) = filter.date_to {
        if review.date > to {
            return false;
        }
    }
    if let Some(wants_response) = filter.has_response {
        if review.response.is_some() != wants_response {
            return false;
        }
    }
    true
}

/// Sorts are stable so same-key reviews keep their fetch order.
pub fn sort_reviews(reviews: &mut [Review], order: SortOrder) {
    match order {
        SortOrder::NewestFirst => reviews.sort_by(|a, b| b.date.cmp(&a.date)),
        SortOrder::OldestFirst => reviews.sort_by(|a, b| a.date.cmp(&b.date)),
        SortOrder::HighestRating => reviews.sort_by(|a, b| b.rating.cmp(&a.rating)),
        SortOrder::LowestRating => reviews.sort_by(|a, b| a.rating.cmp(&b.rating)),
    }
}
