use async_trait::async_trait;
use reqwest::Client;
use review_agg_models::Platform;
use std::time::Duration;
use tracing::warn;

use crate::error::SourceError;
use crate::facebook::{api, normalize};
use crate::http::create_http_client;
use crate::traits::{ProviderSnapshot, ReviewSource};

pub struct FacebookClient {
    client: Client,
    access_token: String,
    api_base: String,
}

impl FacebookClient {
    pub fn new(access_token: String, timeout: Duration) -> Self {
        Self {
            client: create_http_client(timeout),
            access_token,
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
impl ReviewSource for FacebookClient {
    fn platform(&self) -> Platform {
        Platform::Facebook
    }

    async fn fetch(
        &self,
        native_id: &str,
        business_id: &str,
    ) -> Result<ProviderSnapshot, SourceError> {
        if self.access_token.is_empty() {
            return Err(SourceError::MissingCredential {
                platform: Platform::Facebook,
            });
        }
        if native_id.is_empty() {
            return Err(SourceError::EmptyIdentifier {
                platform: Platform::Facebook,
            });
        }

        match api::get_page_ratings(&self.client, &self.api_base, native_id, &self.access_token)
            .await
        {
            Ok(resp) => Ok(normalize::snapshot_from_page(&resp, business_id)),
            Err(e) => {
                warn!(
                    "Facebook Graph fetch failed for {}: {}; returning empty result",
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

    #[tokio::test]
    async fn test_missing_credential_short_circuits() {
        let client = FacebookClient::new(String::new(), Duration::from_secs(1));
        let err = client.fetch("1234567890", "biz-1").await.unwrap_err();
        assert!(matches!(err, SourceError::MissingCredential { .. }));
    }

    #[tokio::test]
    async fn test_empty_identifier_is_an_error() {
        let client = FacebookClient::new("EAAGtoken".to_string(), Duration::from_secs(1));
        let err = client.fetch("", "biz-1").await.unwrap_err();
        assert!(matches!(err, SourceError::EmptyIdentifier { .. }));
    }
}
