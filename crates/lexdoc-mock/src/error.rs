//! Error types for the mock backend.

use thiserror::Error;

/// Mock backend errors
#[derive(Debug, Error)]
pub enum MockError {
    /// Failed to bind or serve
    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Configuration failed validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
