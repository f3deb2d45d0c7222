//! # Client configuration — `atlas.toml`
//!
//! Defines the TOML configuration file the app reads at startup to know which
//! server to talk to (filename: [`ClientConfig::filename`] = `"atlas.toml"`).
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:8001"
//! ```
//!
//! All structs derive `Default` so that a missing or empty config file is
//! equivalent to the default configuration.

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `atlas.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
}

/// API endpoint configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the backend service.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:8001".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl ClientConfig {
    /// Create a config pointing at the given base URL.
    pub fn new(base_url: String) -> Self {
        Self {
            api: ApiConfig { base_url },
        }
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "atlas.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = ClientConfig::from_toml("").unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.api.base_url, "http://localhost:8001");
    }

    #[test]
    fn test_roundtrip() {
        let config = ClientConfig::new("https://api.example.com".to_string());
        let toml = config.to_toml().unwrap();
        assert_eq!(ClientConfig::from_toml(&toml).unwrap(), config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config = ClientConfig::from_toml("[api]\n").unwrap();
        assert_eq!(config.api.base_url, "http://localhost:8001");
    }
}
