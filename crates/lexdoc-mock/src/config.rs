//! Configuration file parsing for the mock backend.
//!
//! Loads bind address, response delay and response mode from TOML.

use crate::error::MockError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

const MAX_RESPONSE_DELAY_MS: u64 = 120_000;

/// What `POST /process_document` answers with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseMode {
    /// The fixed service-agreement summary
    #[default]
    Fixed,
    /// A random sample from the demo catalog
    Demo,
    /// An analysis that reports its own failure
    Failing,
}

/// Mock backend configuration loaded from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MockConfig {
    /// Bind address (e.g., "127.0.0.1")
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// Bind port (default: 8000)
    #[serde(default = "default_bind_port")]
    pub bind_port: u16,

    /// Simulated processing time for `/process_document` (milliseconds)
    #[serde(default = "default_response_delay_ms")]
    pub response_delay_ms: u64,

    /// Response mode
    #[serde(default)]
    pub mode: ResponseMode,
}

fn default_bind_address() -> String {
    "127.0.0.1".to_string()
}

fn default_bind_port() -> u16 {
    8000
}

/// Default delay: 2 seconds
fn default_response_delay_ms() -> u64 {
    2_000
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            bind_port: default_bind_port(),
            response_delay_ms: default_response_delay_ms(),
            mode: ResponseMode::default(),
        }
    }
}

impl MockConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, MockError> {
        let contents = std::fs::read_to_string(path)?;
        let config: MockConfig = toml::from_str(&contents)?;
        config.validate().map_err(MockError::InvalidConfig)?;
        Ok(config)
    }

    /// Configuration for tests: ephemeral port, no delay
    pub fn default_test_config() -> Self {
        Self {
            bind_port: 0,
            response_delay_ms: 0,
            ..Self::default()
        }
    }

    /// Set the response mode
    pub fn with_mode(mut self, mode: ResponseMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the simulated processing delay
    pub fn with_delay_ms(mut self, ms: u64) -> Self {
        self.response_delay_ms = ms;
        self
    }

    /// Get the response delay as a Duration
    pub fn response_delay(&self) -> Duration {
        Duration::from_millis(self.response_delay_ms)
    }

    /// Get the full bind address (address:port)
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.bind_port)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.bind_address.trim().is_empty() {
            return Err("bind_address cannot be empty".to_string());
        }
        if self.response_delay_ms > MAX_RESPONSE_DELAY_MS {
            return Err(format!(
                "response_delay_ms must be at most {}",
                MAX_RESPONSE_DELAY_MS
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MockConfig::default();
        assert_eq!(config.bind_addr(), "127.0.0.1:8000");
        assert_eq!(config.response_delay(), Duration::from_secs(2));
        assert_eq!(config.mode, ResponseMode::Fixed);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_toml() {
        let toml = r#"
            bind_address = "0.0.0.0"
            bind_port = 9000
            response_delay_ms = 250
            mode = "demo"
        "#;

        let config: MockConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.bind_addr(), "0.0.0.0:9000");
        assert_eq!(config.response_delay_ms, 250);
        assert_eq!(config.mode, ResponseMode::Demo);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: MockConfig = toml::from_str("mode = \"failing\"").unwrap();
        assert_eq!(config.bind_port, 8000);
        assert_eq!(config.mode, ResponseMode::Failing);
    }

    #[test]
    fn test_validate_rejects_huge_delay() {
        let config = MockConfig::default().with_delay_ms(600_000);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_mode_rejected() {
        assert!(toml::from_str::<MockConfig>("mode = \"random\"").is_err());
    }
}
