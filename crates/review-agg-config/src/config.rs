use review_agg_models::Platform;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub google: Option<GoogleConfig>,
    #[serde(default)]
    pub facebook: Option<FacebookConfig>,
    #[serde(default)]
    pub fetch: FetchOptions,
    /// Linked businesses. This doubles as the business directory: the
    /// per-provider identifiers here decide which providers get fetched.
    #[serde(default)]
    pub businesses: Vec<BusinessEntry>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GoogleConfig {
    pub enabled: bool,
    /// Override the Places API base URL (used in tests).
    #[serde(default)]
    pub api_base: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct FacebookConfig {
    pub enabled: bool,
    /// Override the Graph API base URL (used in tests).
    #[serde(default)]
    pub api_base: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct FetchOptions {
    /// Outbound request timeout. A timed-out provider degrades to an
    /// empty result, same as any other upstream failure.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    5
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct BusinessEntry {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub place_id: Option<String>,
    #[serde(default)]
    pub facebook_page_id: Option<String>,
}

impl BusinessEntry {
    pub fn linked_platforms(&self) -> Vec<Platform> {
        let mut platforms = Vec::new();
        if self.place_id.is_some() {
            platforms.push(Platform::Google);
        }
        if self.facebook_page_id.is_some() {
            platforms.push(Platform::Facebook);
        }
        platforms
    }
}

impl Config {
    pub fn load_from_file(path: &PathBuf) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to_file(&self, path: &PathBuf) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.fetch.timeout_secs == 0 {
            return Err(anyhow::anyhow!("fetch.timeout_secs must be greater than zero"));
        }

        for business in &self.businesses {
            if business.id.trim().is_empty() {
                return Err(anyhow::anyhow!("Business entries must have a non-empty id"));
            }
        }

        let mut ids: Vec<&str> = self.businesses.iter().map(|b| b.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        if ids.len() != self.businesses.len() {
            return Err(anyhow::anyhow!("Business ids must be unique"));
        }

        Ok(())
    }

    /// Directory lookup: business id -> stored provider identifiers.
    pub fn find_business(&self, id: &str) -> Option<&BusinessEntry> {
        self.businesses.iter().find(|b| b.id == id)
    }

    pub fn is_google_enabled(&self) -> bool {
        self.google.as_ref().map(|g| g.enabled).unwrap_or(false)
    }

    pub fn is_facebook_enabled(&self) -> bool {
        self.facebook.as_ref().map(|f| f.enabled).unwrap_or(false)
    }

    /// Get list of enabled platforms
    pub fn enabled_platforms(&self) -> Vec<Platform> {
        let mut platforms = Vec::new();
        if self.is_google_enabled() {
            platforms.push(Platform::Google);
        }
        if self.is_facebook_enabled() {
            platforms.push(Platform::Facebook);
        }
        platforms
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn sample_config() -> Config {
        Config {
            google: Some(GoogleConfig {
                enabled: true,
                api_base: None,
            }),
            facebook: None,
            fetch: FetchOptions::default(),
            businesses: vec![BusinessEntry {
                id: "cafe-luna".to_string(),
                name: "Cafe Luna".to_string(),
                place_id: Some("ChIJtest123".to_string()),
                facebook_page_id: None,
            }],
        }
    }

    #[test]
    fn test_config_load_and_save() {
        let file = NamedTempFile::new().unwrap();
        let config = sample_config();

        let path = file.path().to_path_buf();
        config.save_to_file(&path).unwrap();

        let loaded = Config::load_from_file(&path).unwrap();
        assert!(loaded.is_google_enabled());
        assert!(!loaded.is_facebook_enabled());
        assert_eq!(loaded.fetch.timeout_secs, 5);
        assert_eq!(loaded.businesses.len(), 1);
        assert_eq!(
            loaded.find_business("cafe-luna").unwrap().place_id.as_deref(),
            Some("ChIJtest123")
        );
        assert_eq!(loaded.find_business("unknown"), None);
    }

    #[test]
    fn test_config_validate() {
        let mut config = sample_config();
        assert!(config.validate().is_ok());

        config.fetch.timeout_secs = 0;
        assert!(config.validate().is_err());
        config.fetch.timeout_secs = 5;

        config.businesses.push(config.businesses[0].clone());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_linked_platforms() {
        let mut entry = sample_config().businesses[0].clone();
        assert_eq!(entry.linked_platforms(), vec![Platform::Google]);

        entry.facebook_page_id = Some("1234567890".to_string());
        assert_eq!(
            entry.linked_platforms(),
            vec![Platform::Google, Platform::Facebook]
        );
    }

    #[test]
    fn test_enabled_platforms() {
        let mut config = sample_config();
        assert_eq!(config.enabled_platforms(), vec![Platform::Google]);

        config.facebook = Some(FacebookConfig {
            enabled: true,
            api_base: None,
        });
        assert_eq!(
            config.enabled_platforms(),
            vec![Platform::Google, Platform::Facebook]
        );
    }
}
