//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use lexdoc_client::{ClientConfig, DEFAULT_AI_MODEL, DEFAULT_BASE_URL};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Active profile name
    #[serde(default = "default_profile")]
    pub active_profile: String,

    /// Available profiles
    #[serde(default)]
    pub profiles: BTreeMap<String, Profile>,

    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

/// Backend profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Backend base URL
    pub backend_url: String,

    /// AI model tag sent with analysis requests
    #[serde(default = "default_ai_model")]
    pub ai_model: String,
}

impl Profile {
    /// Create a profile
    pub fn new(backend_url: impl Into<String>, ai_model: impl Into<String>) -> Self {
        Self {
            backend_url: backend_url.into(),
            ai_model: ai_model.into(),
        }
    }
}

/// Global CLI settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,

    /// Health probe timeout (milliseconds)
    #[serde(default = "default_probe_timeout_ms")]
    pub probe_timeout_ms: u64,

    /// Analysis request timeout (seconds)
    #[serde(default = "default_dispatch_timeout_secs")]
    pub dispatch_timeout_secs: u64,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

impl Config {
    /// Get the default configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".lexdoc").join("config.toml"))
    }

    /// Load configuration from a file, falling back to defaults when it does not exist.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            let contents = fs::read_to_string(path)?;
            let config: Config = toml::from_str(&contents)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to a file.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Get the active profile.
    pub fn get_active_profile(&self) -> Result<&Profile> {
        self.profiles.get(&self.active_profile).ok_or_else(|| {
            CliError::Config(format!("Profile '{}' not found", self.active_profile))
        })
    }

    /// Add or update a profile.
    pub fn set_profile(&mut self, name: String, profile: Profile) {
        self.profiles.insert(name, profile);
    }

    /// Switch to a different profile.
    pub fn switch_profile(&mut self, name: String) -> Result<()> {
        if !self.profiles.contains_key(&name) {
            return Err(CliError::Config(format!("Profile '{}' does not exist", name)));
        }
        self.active_profile = name;
        Ok(())
    }

    /// Client configuration for the active profile
    ///
    /// `url_override` replaces the profile's backend URL.
    pub fn client_config(&self, url_override: Option<&str>) -> Result<ClientConfig> {
        let profile = self.get_active_profile()?;
        let base_url = url_override.unwrap_or(&profile.backend_url);

        let config = ClientConfig {
            probe_timeout_ms: self.settings.probe_timeout_ms,
            dispatch_timeout_secs: self.settings.dispatch_timeout_secs,
            ..ClientConfig::new(base_url).with_ai_model(profile.ai_model.clone())
        };
        config.validate().map_err(CliError::Config)?;
        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        let mut profiles = BTreeMap::new();
        profiles.insert(
            default_profile(),
            Profile::new(DEFAULT_BASE_URL, DEFAULT_AI_MODEL),
        );

        Self {
            active_profile: default_profile(),
            profiles,
            settings: Settings::default(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
            probe_timeout_ms: default_probe_timeout_ms(),
            dispatch_timeout_secs: default_dispatch_timeout_secs(),
        }
    }
}

fn default_profile() -> String {
    "default".to_string()
}

fn default_ai_model() -> String {
    DEFAULT_AI_MODEL.to_string()
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}

fn default_probe_timeout_ms() -> u64 {
    2_000
}

fn default_dispatch_timeout_secs() -> u64 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.active_profile, "default");
        assert!(config.profiles.contains_key("default"));
        assert!(config.settings.color);
        assert_eq!(config.settings.probe_timeout_ms, 2_000);
    }

    #[test]
    fn test_profile_management() {
        let mut config = Config::default();
        config.set_profile(
            "staging".to_string(),
            Profile::new("http://staging:8000", "local"),
        );
        assert!(config.profiles.contains_key("staging"));

        config.switch_profile("staging".to_string()).unwrap();
        assert_eq!(config.active_profile, "staging");
        assert_eq!(config.get_active_profile().unwrap().ai_model, "local");
    }

    #[test]
    fn test_switch_to_nonexistent_profile() {
        let mut config = Config::default();
        assert!(config.switch_profile("nonexistent".to_string()).is_err());
    }

    #[test]
    fn test_client_config_from_profile() {
        let mut config = Config::default();
        config.settings.probe_timeout_ms = 1_500;

        let client = config.client_config(None).unwrap();
        assert_eq!(client.base_url, DEFAULT_BASE_URL);
        assert_eq!(client.probe_timeout_ms, 1_500);
        assert_eq!(client.ai_model, DEFAULT_AI_MODEL);

        let overridden = config.client_config(Some("http://10.0.0.2:8000")).unwrap();
        assert_eq!(overridden.base_url, "http://10.0.0.2:8000");
    }

    #[test]
    fn test_client_config_rejects_bad_timeout() {
        let mut config = Config::default();
        config.settings.probe_timeout_ms = 50;
        assert!(matches!(config.client_config(None), Err(CliError::Config(_))));
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: Config = toml::from_str(
            r#"
            active_profile = "default"

            [profiles.default]
            backend_url = "http://localhost:9000"
            "#,
        )
        .unwrap();
        let profile = config.get_active_profile().unwrap();
        assert_eq!(profile.ai_model, DEFAULT_AI_MODEL);
        assert_eq!(config.settings.format, OutputFormat::Table);
    }
}
