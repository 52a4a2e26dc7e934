//! Configuration for the Generator

use serde::{Deserialize, Serialize};

/// Configuration for the Generator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Refuse to generate while required fields are blank
    #[serde(default = "default_true")]
    pub enforce_required_fields: bool,

    /// Scan sample text for names, dates and amounts before falling back
    /// to the static schema
    #[serde(default = "default_true")]
    pub scan_content: bool,

    /// Maximum sample text length (characters)
    #[serde(default = "default_max_sample_length")]
    pub max_sample_length: usize,
}

fn default_true() -> bool {
    true
}

fn default_max_sample_length() -> usize {
    200_000
}

impl GeneratorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_sample_length == 0 {
            return Err("max_sample_length must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Lenient preset: render whatever has been filled in, placeholders for the rest
    pub fn lenient() -> Self {
        Self {
            enforce_required_fields: false,
            ..Self::default()
        }
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str)
            .map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            enforce_required_fields: true,
            scan_content: true,
            max_sample_length: default_max_sample_length(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(GeneratorConfig::default().validate().is_ok());
        assert!(GeneratorConfig::lenient().validate().is_ok());
    }

    #[test]
    fn test_invalid_max_sample_length() {
        let mut config = GeneratorConfig::default();
        config.max_sample_length = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = GeneratorConfig::from_toml("enforce_required_fields = false").unwrap();
        assert!(!config.enforce_required_fields);
        assert!(config.scan_content);
        assert_eq!(config.max_sample_length, 200_000);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = GeneratorConfig::lenient();
        let parsed = GeneratorConfig::from_toml(&config.to_toml().unwrap()).unwrap();
        assert_eq!(config.enforce_required_fields, parsed.enforce_required_fields);
        assert_eq!(config.max_sample_length, parsed.max_sample_length);
    }
}
