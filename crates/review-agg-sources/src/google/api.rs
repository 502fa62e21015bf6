use anyhow::{anyhow, Result};
use reqwest::Client;
use serde::Deserialize;

pub const DEFAULT_API_BASE: &str = "https://maps.googleapis.com/maps/api/place";

/// Wire shape of a Places Details response. Everything below `status` is
/// optional; the normalizer decides what is usable.
#[derive(Debug, Deserialize)]
pub struct PlaceDetailsResponse {
    pub status: String,
    #[serde(default)]
    pub result: Option<PlaceDetails>,
    #[serde(default)]
    pub error_message: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PlaceDetails {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub user_ratings_total: Option<u32>,
    #[serde(default)]
    pub reviews: Option<Vec<GoogleReview>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GoogleReview {
    #[serde(default)]
    pub author_name: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub rating: Option<i64>,
    /// Epoch seconds.
    #[serde(default)]
    pub time: Option<i64>,
    #[serde(default)]
    pub profile_photo_url: Option<String>,
    #[serde(default)]
    pub author_reply: Option<GoogleAuthorReply>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GoogleAuthorReply {
    #[serde(default)]
    pub text: Option<String>,
    /// Epoch seconds.
    #[serde(default)]
    pub time: Option<i64>,
}

/// Fetch place details including the review list in a single request.
///
/// A non-success HTTP status is an error here; the client layer absorbs it
/// into an empty snapshot.
pub async fn get_place_details(
    client: &Client,
    api_base: &str,
    place_id: &str,
    api_key: &str,
) -> Result<PlaceDetailsResponse> {
    let url = format!(
        "{}/details/json?place_id={}&fields=name,rating,user_ratings_total,reviews&key={}",
        api_base,
        urlencoding::encode(place_id),
        urlencoding::encode(api_key)
    );

    let response = client.get(&url).send().await?;

    if !response.status().is_success() {
        let status = response.status();
        let error_text = response.text().await.unwrap_or_default();
        return Err(anyhow!(
            "Place details request failed: {} - {}",
            status,
            error_text
        ));
    }

    Ok(response.json().await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_details_payload() {
        let body = r#"{
            "status": "OK",
            "result": {
                "name": "Cafe Luna",
                "rating": 4.6,
                "user_ratings_total": 128,
                "reviews": [
                    {
                        "author_name": "Jane",
                        "text": "Great coffee",
                        "rating": 5,
                        "time": 1700000000,
                        "profile_photo_url": "https://example.com/jane.jpg"
                    }
                ]
            }
        }"#;

        let parsed: PlaceDetailsResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.status, "OK");
        let result = parsed.result.unwrap();
        assert_eq!(result.name.as_deref(), Some("Cafe Luna"));
        assert_eq!(result.user_ratings_total, Some(128));
        let reviews = result.reviews.unwrap();
        assert_eq!(reviews.len(), 1);
        assert_eq!(reviews[0].time, Some(1_700_000_000));
        assert!(reviews[0].author_reply.is_none());
    }

    #[test]
    fn test_parse_denied_payload_without_result() {
        let body = r#"{"status": "REQUEST_DENIED", "error_message": "Invalid key"}"#;
        let parsed: PlaceDetailsResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.status, "REQUEST_DENIED");
        assert!(parsed.result.is_none());
        assert_eq!(parsed.error_message.as_deref(), Some("Invalid key"));
    }
}
