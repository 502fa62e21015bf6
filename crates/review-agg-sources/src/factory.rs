//! Source factory pattern for creating review sources from configuration.
//!
//! Centralizes source construction so credentials are resolved once, at
//! process start, and injected into the clients rather than read per call.

use anyhow::Result;
use review_agg_config::{Config, CredentialStore};
use review_agg_models::Platform;
use std::time::Duration;

use crate::ReviewSource;

pub trait SourceFactory: Send + Sync {
    /// The platform this factory creates a source for
    fn platform(&self) -> Platform;

    /// Create a source instance from configuration
    /// Returns None if the platform is not enabled in the config
    fn create_source(
        &self,
        config: &Config,
        credentials: &CredentialStore,
    ) -> Result<Option<Box<dyn ReviewSource>>>;

    /// Validate that the source configuration is usable before fetching
    fn validate_config(&self, config: &Config, credentials: &CredentialStore) -> Result<()>;
}

/// Ordered registry of source factories. Registration order matters: the
/// aggregator takes its business summary from the first provider that
/// returns a non-empty one.
pub struct SourceRegistry {
    factories: Vec<Box<dyn SourceFactory>>,
}

impl SourceRegistry {
    /// Create a new registry with all built-in factories registered
    pub fn new() -> Self {
        let mut registry = Self {
            factories: Vec::new(),
        };

        registry.register(Box::new(google::GoogleSourceFactory));
        registry.register(Box::new(facebook::FacebookSourceFactory));

        registry
    }

    pub fn register(&mut self, factory: Box<dyn SourceFactory>) {
        self.factories.push(factory);
    }

    /// Create all enabled sources from configuration
    pub fn create_enabled_sources(
        &self,
        config: &Config,
        credentials: &CredentialStore,
    ) -> Result<Vec<Box<dyn ReviewSource>>> {
        let mut sources = Vec::new();

        for factory in &self.factories {
            if let Some(source) = factory.create_source(config, credentials)? {
                sources.push(source);
            }
        }

        Ok(sources)
    }

    /// Validate all source configurations
    pub fn validate_all_configs(
        &self,
        config: &Config,
        credentials: &CredentialStore,
    ) -> Result<()> {
        for factory in &self.factories {
            factory.validate_config(config, credentials)?;
        }
        Ok(())
    }

    pub fn registered_platforms(&self) -> Vec<Platform> {
        self.factories.iter().map(|f| f.platform()).collect()
    }
}

impl Default for SourceRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn fetch_timeout(config: &Config) -> Duration {
    Duration::from_secs(config.fetch.timeout_secs)
}

// Factory implementations for each platform
mod google {
    use super::*;
    use crate::google::GoogleClient;

    pub struct GoogleSourceFactory;

    impl SourceFactory for GoogleSourceFactory {
        fn platform(&self) -> Platform {
            Platform::Google
        }

        fn create_source(
            &self,
            config: &Config,
            credentials: &CredentialStore,
        ) -> Result<Option<Box<dyn ReviewSource>>> {
            let Some(google_config) = &config.google else {
                return Ok(None);
            };
            if !google_config.enabled {
                return Ok(None);
            }

            let api_key = credentials
                .get_google_api_key()
                .ok_or_else(|| {
                    anyhow::anyhow!(
                        "Google Places API key not found in credentials. Run 'reviewdeck config google' first"
                    )
                })?
                .clone();

            let mut client = GoogleClient::new(api_key, fetch_timeout(config));
            if let Some(api_base) = &google_config.api_base {
                client = client.with_api_base(api_base.clone());
            }
            Ok(Some(Box::new(client)))
        }

        fn validate_config(&self, config: &Config, credentials: &CredentialStore) -> Result<()> {
            if let Some(google_config) = &config.google {
                if google_config.enabled {
                    let key_present = credentials
                        .get_google_api_key()
                        .map(|k| !k.is_empty())
                        .unwrap_or(false);
                    if !key_present {
                        return Err(anyhow::anyhow!(
                            "Google is enabled but no API key is configured"
                        ));
                    }
                }
            }
            Ok(())
        }
    }
}

mod facebook {
    use super::*;
    use crate::facebook::FacebookClient;

    pub struct FacebookSourceFactory;

    impl SourceFactory for FacebookSourceFactory {
        fn platform(&self) -> Platform {
            Platform::Facebook
        }

        fn create_source(
            &self,
            config: &Config,
            credentials: &CredentialStore,
        ) -> Result<Option<Box<dyn ReviewSource>>> {
            let Some(facebook_config) = &config.facebook else {
                return Ok(None);
            };
            if !facebook_config.enabled {
                return Ok(None);
            }

            let access_token = credentials
                .get_facebook_access_token()
                .ok_or_else(|| {
                    anyhow::anyhow!(
                        "Facebook access token not found in credentials. Run 'reviewdeck config facebook' first"
                    )
                })?
                .clone();

            let mut client = FacebookClient::new(access_token, fetch_timeout(config));
            if let Some(api_base) = &facebook_config.api_base {
                client = client.with_api_base(api_base.clone());
            }
            Ok(Some(Box::new(client)))
        }

        fn validate_config(&self, config: &Config, credentials: &CredentialStore) -> Result<()> {
            if let Some(facebook_config) = &config.facebook {
                if facebook_config.enabled {
                    let token_present = credentials
                        .get_facebook_access_token()
                        .map(|t| !t.is_empty())
                        .unwrap_or(false);
                    if !token_present {
                        return Err(anyhow::anyhow!(
                            "Facebook is enabled but no access token is configured"
                        ));
                    }
                }
            }
            Ok(())
        }
    }
}
