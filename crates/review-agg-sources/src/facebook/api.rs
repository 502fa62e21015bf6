use anyhow::{anyhow, Result};
use reqwest::Client;
use serde::Deserialize;

pub const DEFAULT_API_BASE: &str = "https://graph.facebook.com/v19.0";

/// Wire shape of a Graph API page-with-ratings response. The Graph API
/// reports errors either as a non-2xx status or as an `error` object in an
/// otherwise normal body; both are checked.
#[derive(Debug, Deserialize)]
pub struct PageRatingsResponse {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub overall_star_rating: Option<f64>,
    #[serde(default)]
    pub rating_count: Option<u32>,
    #[serde(default)]
    pub ratings: Option<RatingsConnection>,
    #[serde(default)]
    pub error: Option<GraphError>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RatingsConnection {
    #[serde(default)]
    pub data: Vec<FacebookRating>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FacebookRating {
    /// Star rating 1-5. Recommendation-style entries omit this and are
    /// dropped by the normalizer.
    #[serde(default)]
    pub rating: Option<i64>,
    #[serde(default)]
    pub review_text: Option<String>,
    /// RFC 3339 timestamp.
    #[serde(default)]
    pub created_time: Option<String>,
    #[serde(default)]
    pub reviewer: Option<FacebookReviewer>,
    #[serde(default)]
    pub open_graph_story: Option<OpenGraphStory>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FacebookReviewer {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub picture: Option<Picture>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Picture {
    #[serde(default)]
    pub data: Option<PictureData>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PictureData {
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OpenGraphStory {
    #[serde(default)]
    pub id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GraphError {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub code: Option<i64>,
}

/// Fetch a page's summary fields and ratings edge in a single request.
pub async fn get_page_ratings(
    client: &Client,
    api_base: &str,
    page_id: &str,
    access_token: &str,
) -> Result<PageRatingsResponse> {
    let url = format!(
        "{}/{}?fields=name,overall_star_rating,rating_count,ratings{{rating,review_text,created_time,reviewer{{name,picture}},open_graph_story}}&access_token={}",
        api_base,
        urlencoding::encode(page_id),
        urlencoding::encode(access_token)
    );

    let response = client.get(&url).send().await?;

    if !response.status().is_success() {
        let status = response.status();
        let error_text = response.text().await.unwrap_or_default();
        return Err(anyhow!(
            "Page ratings request failed: {} - {}",
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
    fn test_parse_page_ratings_payload() {
        let body = r#"{
            "name": "Cafe Luna",
            "overall_star_rating": 4.4,
            "rating_count": 57,
            "ratings": {
                "data": [
                    {
                        "rating": 4,
                        "review_text": "Lovely spot",
                        "created_time": "2024-02-10T09:15:00+0000",
                        "reviewer": {"name": "Sam", "picture": {"data": {"url": "https://example.com/sam.jpg"}}},
                        "open_graph_story": {"id": "10158000000000001"}
                    }
                ]
            }
        }"#;

        let parsed: PageRatingsResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.name.as_deref(), Some("Cafe Luna"));
        assert_eq!(parsed.rating_count, Some(57));
        assert!(parsed.error.is_none());
        let data = parsed.ratings.unwrap().data;
        assert_eq!(data.len(), 1);
        assert_eq!(data[0].rating, Some(4));
        assert_eq!(
            data[0].open_graph_story.as_ref().unwrap().id.as_deref(),
            Some("10158000000000001")
        );
    }

    #[test]
    fn test_parse_graph_error_payload() {
        let body = r#"{"error": {"message": "Invalid OAuth access token", "code": 190}}"#;
        let parsed: PageRatingsResponse = serde_json::from_str(body).unwrap();
        let error = parsed.error.unwrap();
        assert_eq!(error.code, Some(190));
        assert!(parsed.ratings.is_none());
    }
}
