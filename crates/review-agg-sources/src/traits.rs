use async_trait::async_trait;
use review_agg_models::{BusinessSummary, Platform, Review};
use crate::error::SourceError;

/// One provider's view of a business: the read-through summary plus the
/// canonical reviews normalized from this fetch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProviderSnapshot {
    pub business: BusinessSummary,
    pub reviews: Vec<Review>,
}

impl ProviderSnapshot {
    /// The degrade-to-empty result: zeroed summary, no reviews.
    pub fn empty() -> Self {
        Self::default()
    }
}

#[async_trait]
pub trait ReviewSource: Send + Sync {
    fn platform(&self) -> Platform;

    /// Fetch and normalize reviews for one business.
    ///
    /// `native_id` is the provider's identifier for the business (a Places
    /// place_id, a Facebook page id). Provider-side failures yield an empty
    /// snapshot so one flaky upstream cannot fail the whole aggregation;
    /// only a missing credential or empty identifier returns an error.
    async fn fetch(
        &self,
        native_id: &str,
        business_id: &str,
    ) -> Result<ProviderSnapshot, SourceError>;
}
