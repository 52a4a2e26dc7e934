//! Error types for the LexDoc client

use thiserror::Error;

/// Failure categories of a remote analysis or generation attempt
///
/// Only [`ClientError::Validation`] and [`ClientError::Config`] reach callers
/// of [`crate::Orchestrator::analyze`]; the rest are recovered by falling back
/// to local results and reported as the fallback reason.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClientError {
    /// Health probe timed out, was refused, or returned a non-2xx status
    #[error("Backend unreachable: {0}")]
    Unreachable(String),

    /// Upload rejected before any network attempt
    #[error("Invalid upload: {0}")]
    Validation(String),

    /// Request failed after the backend was found reachable
    #[error("Transfer failed: {0}")]
    Transfer(String),

    /// Backend answered, but the analysis itself reports failure
    #[error("Analysis failed: {0}")]
    ContentFailure(String),

    /// Invalid client configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// Whether the error is recovered by local substitution
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ClientError::Unreachable(_) | ClientError::Transfer(_) | ClientError::ContentFailure(_)
        )
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_connect() || e.is_timeout() {
            ClientError::Unreachable(e.to_string())
        } else if e.is_decode() {
            ClientError::Transfer(format!("Malformed response: {}", e))
        } else if let Some(status) = e.status() {
            ClientError::Transfer(format!("HTTP {}", status))
        } else {
            ClientError::Transfer(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recoverable_categories() {
        assert!(ClientError::Unreachable("x".into()).is_recoverable());
        assert!(ClientError::Transfer("x".into()).is_recoverable());
        assert!(ClientError::ContentFailure("x".into()).is_recoverable());
        assert!(!ClientError::Validation("x".into()).is_recoverable());
        assert!(!ClientError::Config("x".into()).is_recoverable());
    }
}
