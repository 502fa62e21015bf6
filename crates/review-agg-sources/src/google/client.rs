use async_trait::async_trait;
use reqwest::Client;
use review_agg_models::Platform;
use std::time::Duration;
use tracing::warn;

use crate::error::SourceError;
use crate::google::{api, normalize};
use crate::http::create_http_client;
use crate::traits::{ProviderSnapshot, ReviewSource};

pub struct GoogleClient {
    client: Client,
    api_key: String,
    api_base: String,
}

impl GoogleClient {
    pub fn new(api_key: String, timeout: Duration) -> Self {
        Self {
            client: create_http_client(timeout),
            api_key,
            api_base: api::DEFAULT_API_BASE.to_string(),
        }
    }

    /// Point the client at a different endpoint (tests, proxies).
    pub fn with_api_base(mut self, api_base: String) -> Self {
        self.api_base = api_base;
        self
    }
}

#[async_trait]
impl ReviewSource for GoogleClient {
    fn platform(&self) -> Platform {
        Platform::Google
    }

    async fn fetch(
        &self,
        native_id: &str,
        business_id: &str,
    ) -> Result<ProviderSnapshot, SourceError> {
        if self.api_key.is_empty() {
            return Err(SourceError::MissingCredential {
                platform: Platform::Google,
            });
        }
        if native_id.is_empty() {
            return Err(SourceError::EmptyIdentifier {
                platform: Platform::Google,
            });
        }

        match api::get_place_details(&self.client, &self.api_base, native_id, &self.api_key).await {
            Ok(resp) => Ok(normalize::snapshot_from_details(&resp, business_id)),
            Err(e) => {
                warn!(
                    "Google Places fetch failed for {}: {}; returning empty result",
                    business_id, e
                );
                Ok(ProviderSnapshot::empty())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_with_key(key: &str) -> GoogleClient {
        GoogleClient::new(key.to_string(), Duration::from_secs(1))
    }

    #[tokio::test]
    async fn test_missing_credential_short_circuits() {
        let client = client_with_key("");
        let err = client.fetch("ChIJtest123", "biz-1").await.unwrap_err();
        assert!(matches!(err, SourceError::MissingCredential { .. }));
    }

    #[tokio::test]
    async fn test_empty_identifier_is_an_error() {
        let client = client_with_key("AIzaTestKey");
        let err = client.fetch("", "biz-1").await.unwrap_err();
        assert!(matches!(err, SourceError::EmptyIdentifier { .. }));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_degrades_to_empty() {
        // Port 9 (discard) is not listening; the request fails immediately
        // and the failure must be absorbed, not propagated.
        let client =
            client_with_key("AIzaTestKey").with_api_base("http://127.0.0.1:9".to_string());
        let snapshot = client.fetch("ChIJtest123", "biz-1").await.unwrap();
        assert_eq!(snapshot, ProviderSnapshot::empty());
    }
}
