//! LexDoc Mock Backend
//!
//! Stand-in for the document-analysis service. Answers `/health`,
//! `/process_document` and `/generate_document` with canned or templated
//! content so the client can be exercised end to end.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod handlers;

pub use config::{MockConfig, ResponseMode};
pub use error::MockError;

use handlers::{create_router, AppState};
use tokio::net::TcpListener;
use tracing::info;

/// Bind to the configured address and serve until shutdown
pub async fn start_server(config: MockConfig) -> Result<(), MockError> {
    config.validate().map_err(MockError::InvalidConfig)?;

    let listener = TcpListener::bind(&config.bind_addr()).await?;
    serve(listener, config).await
}

/// Serve on an already bound listener
///
/// Useful with port 0 when the caller needs the assigned address first.
pub async fn serve(listener: TcpListener, config: MockConfig) -> Result<(), MockError> {
    info!("Starting LexDoc mock backend");
    info!("Listening on {}", listener.local_addr()?);
    info!(
        "Mode: {:?}, response delay: {} ms",
        config.mode, config.response_delay_ms
    );

    let app = create_router(AppState::new(config));
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_invalid_config_rejected_before_bind() {
        let config = MockConfig {
            bind_address: " ".to_string(),
            ..MockConfig::default_test_config()
        };
        assert!(matches!(
            start_server(config).await,
            Err(MockError::InvalidConfig(_))
        ));
    }
}
