pub mod aggregate;
pub mod filter;

pub use aggregate::{AggregatedReviews, ReviewAggregator};
pub use filter::{apply_filter, matches_filter, sort_reviews};
