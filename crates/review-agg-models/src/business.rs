use serde::{Deserialize, Serialize};

/// Aggregate metrics as reported by the provider. This is a read-through
/// projection: `review_count` is the provider's total, which may exceed
/// the number of reviews actually returned in one fetch.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BusinessSummary {
    pub name: String,
    pub rating: f64,
    pub review_count: u32,
}

impl BusinessSummary {
    /// The zeroed summary produced when a provider fetch degrades to empty.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.review_count == 0
    }
}
