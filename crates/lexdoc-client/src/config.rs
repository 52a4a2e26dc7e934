//! Configuration for the client

use crate::error::ClientError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default backend address
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Default AI model tag forwarded to the backend
pub const DEFAULT_AI_MODEL: &str = "gemini";

const MIN_PROBE_TIMEOUT_MS: u64 = 1_000;
const MAX_PROBE_TIMEOUT_MS: u64 = 3_000;

/// Configuration for the Orchestrator and DocumentClient
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Backend base URL, without trailing slash
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Health probe timeout (milliseconds)
    #[serde(default = "default_probe_timeout_ms")]
    pub probe_timeout_ms: u64,

    /// Analyze request timeout (seconds)
    #[serde(default = "default_dispatch_timeout_secs")]
    pub dispatch_timeout_secs: u64,

    /// Remote generation timeout (seconds)
    #[serde(default = "default_generate_timeout_secs")]
    pub generate_timeout_secs: u64,

    /// Model tag sent as the `ai_model` query parameter
    #[serde(default = "default_ai_model")]
    pub ai_model: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_probe_timeout_ms() -> u64 {
    2_000
}

fn default_dispatch_timeout_secs() -> u64 {
    30
}

fn default_generate_timeout_secs() -> u64 {
    10
}

fn default_ai_model() -> String {
    DEFAULT_AI_MODEL.to_string()
}

impl ClientConfig {
    /// Create a configuration for a backend address
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Set the health probe timeout
    pub fn with_probe_timeout_ms(mut self, ms: u64) -> Self {
        self.probe_timeout_ms = ms;
        self
    }

    /// Set the AI model tag
    pub fn with_ai_model(mut self, model: impl Into<String>) -> Self {
        self.ai_model = model.into();
        self
    }

    /// Get the probe timeout as a Duration
    pub fn probe_timeout(&self) -> Duration {
        Duration::from_millis(self.probe_timeout_ms)
    }

    /// Get the dispatch timeout as a Duration
    pub fn dispatch_timeout(&self) -> Duration {
        Duration::from_secs(self.dispatch_timeout_secs)
    }

    /// Get the generation timeout as a Duration
    pub fn generate_timeout(&self) -> Duration {
        Duration::from_secs(self.generate_timeout_secs)
    }

    /// Base URL with any trailing slash removed
    pub fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Endpoint URL under the base
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base(), path.trim_start_matches('/'))
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(format!("base_url must be an http(s) URL, got '{}'", self.base_url));
        }
        if !(MIN_PROBE_TIMEOUT_MS..=MAX_PROBE_TIMEOUT_MS).contains(&self.probe_timeout_ms) {
            return Err(format!(
                "probe_timeout_ms must be between {} and {}",
                MIN_PROBE_TIMEOUT_MS, MAX_PROBE_TIMEOUT_MS
            ));
        }
        if self.dispatch_timeout_secs == 0 {
            return Err("dispatch_timeout_secs must be greater than 0".to_string());
        }
        if self.generate_timeout_secs == 0 {
            return Err("generate_timeout_secs must be greater than 0".to_string());
        }
        if self.probe_timeout() >= self.dispatch_timeout() {
            return Err("probe timeout must be shorter than dispatch timeout".to_string());
        }
        if self.ai_model.trim().is_empty() {
            return Err("ai_model cannot be empty".to_string());
        }
        Ok(())
    }

    pub(crate) fn checked(self) -> Result<Self, ClientError> {
        self.validate().map_err(ClientError::Config)?;
        Ok(self)
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            probe_timeout_ms: default_probe_timeout_ms(),
            dispatch_timeout_secs: default_dispatch_timeout_secs(),
            generate_timeout_secs: default_generate_timeout_secs(),
            ai_model: default_ai_model(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ClientConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.probe_timeout(), Duration::from_millis(2_000));
        assert_eq!(config.dispatch_timeout(), Duration::from_secs(30));
        assert_eq!(config.generate_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_probe_timeout_range() {
        assert!(ClientConfig::default().with_probe_timeout_ms(1_000).validate().is_ok());
        assert!(ClientConfig::default().with_probe_timeout_ms(3_000).validate().is_ok());
        assert!(ClientConfig::default().with_probe_timeout_ms(999).validate().is_err());
        assert!(ClientConfig::default().with_probe_timeout_ms(5_000).validate().is_err());
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(ClientConfig::new("localhost:8000").validate().is_err());
    }

    #[test]
    fn test_endpoint_joins_cleanly() {
        let config = ClientConfig::new("http://10.0.2.2:8000/");
        assert_eq!(config.endpoint("/health"), "http://10.0.2.2:8000/health");
        assert_eq!(config.endpoint("process_document"), "http://10.0.2.2:8000/process_document");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = ClientConfig::from_toml("base_url = \"http://example.com\"").unwrap();
        assert_eq!(config.base_url, "http://example.com");
        assert_eq!(config.probe_timeout_ms, 2_000);
        assert_eq!(config.ai_model, "gemini");
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = ClientConfig::new("http://example.com").with_ai_model("local");
        let parsed = ClientConfig::from_toml(&config.to_toml().unwrap()).unwrap();
        assert_eq!(parsed, config);
    }
}
