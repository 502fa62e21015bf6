use review_agg_config::BusinessEntry;
use review_agg_models::{BusinessSummary, Platform, Review, ReviewFilter};
use review_agg_sources::{ReviewSource, SourceError};
use serde::Serialize;
use tracing::debug;

use crate::filter;

/// The `{ business, reviews }` payload handed back to callers, already
/// filtered and sorted.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AggregatedReviews {
    pub business: BusinessSummary,
    pub reviews: Vec<Review>,
}

/// Merges per-provider snapshots for one business. Stateless across
/// requests: each `fetch_business` call stands alone.
pub struct ReviewAggregator {
    sources: Vec<Box<dyn ReviewSource>>,
}

impl ReviewAggregator {
    pub fn new(sources: Vec<Box<dyn ReviewSource>>) -> Self {
        Self { sources }
    }

    pub fn platforms(&self) -> Vec<Platform> {
        self.sources.iter().map(|s| s.platform()).collect()
    }

    /// Fetch every provider the business is linked to and return the
    /// merged, filtered, sorted collection.
    ///
    /// Providers without a stored identifier are skipped as "not linked".
    /// Provider-side failures already degraded to empty snapshots inside
    /// the source clients, so the only errors escaping here are
    /// configuration problems (missing credential, empty identifier).
    pub async fn fetch_business(
        &self,
        entry: &BusinessEntry,
        filter_spec: &ReviewFilter,
    ) -> Result<AggregatedReviews, SourceError> {
        let mut business = BusinessSummary::default();
        let mut reviews = Vec::new();

        for source in &self.sources {
            let platform = source.platform();
            let Some(native_id) = native_id_for(entry, platform) else {
                debug!("Business {} is not linked to {}", entry.id, platform);
                continue;
            };

            let snapshot = source.fetch(native_id, &entry.id).await?;
            debug!(
                "Fetched {} reviews from {} for {}",
                snapshot.reviews.len(),
                platform,
                entry.id
            );

            // Summary is read-through from the first provider that has one,
            // in registration order.
            if business.is_empty() && !snapshot.business.is_empty() {
                business = snapshot.business;
            }
            reviews.extend(snapshot.reviews);
        }

        let reviews = filter::apply_filter(&reviews, filter_spec);
        Ok(AggregatedReviews { business, reviews })
    }
}

/// Map a platform tag to the business's stored provider identifier.
fn native_id_for(entry: &BusinessEntry, platform: Platform) -> Option<&str> {
    match platform {
        Platform::Google => entry.place_id.as_deref(),
        Platform::Facebook => entry.facebook_page_id.as_deref(),
        Platform::Trustpilot | Platform::Yelp => None,
    }
}
