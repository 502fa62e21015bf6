use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed set of review providers. The tag doubles as the prefix of
/// canonical review ids, so renaming a variant changes ids on re-fetch.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Google,
    Facebook,
    Trustpilot,
    Yelp,
}

impl Platform {
    pub const ALL: [Platform; 4] = [
        Platform::Google,
        Platform::Facebook,
        Platform::Trustpilot,
        Platform::Yelp,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Google => "google",
            Platform::Facebook => "facebook",
            Platform::Trustpilot => "trustpilot",
            Platform::Yelp => "yelp",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "google" => Ok(Platform::Google),
            "facebook" => Ok(Platform::Facebook),
            "trustpilot" => Ok(Platform::Trustpilot),
            "yelp" => Ok(Platform::Yelp),
            _ => Err(format!("Unknown platform: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_round_trip() {
        for platform in Platform::ALL {
            assert_eq!(platform.as_str().parse::<Platform>().unwrap(), platform);
        }
    }

    #[test]
    fn test_platform_parse_case_insensitive() {
        assert_eq!("Google".parse::<Platform>().unwrap(), Platform::Google);
        assert!("instagram".parse::<Platform>().is_err());
    }

    #[test]
    fn test_platform_serde_tag() {
        let json = serde_json::to_string(&Platform::Google).unwrap();
        assert_eq!(json, "\"google\"");
        let back: Platform = serde_json::from_str("\"yelp\"").unwrap();
        assert_eq!(back, Platform::Yelp);
    }
}
