use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::platform::Platform;

/// Canonical review record. Every provider's raw shape is normalized into
/// this before the rest of the system touches it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Review {
    /// "{platform}_{provider-native timestamp or id}"; stable across re-fetches.
    pub id: String,
    pub author: String,
    pub content: String,
    /// Always 1-5. Records without a usable rating never make it here.
    pub rating: u8,
    pub date: DateTime<Utc>,
    pub platform: Platform,
    pub business_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_photo: Option<String>,
    /// The business's reply, if the provider reports one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<ReviewResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReviewResponse {
    pub content: String,
    pub date: DateTime<Utc>,
}
