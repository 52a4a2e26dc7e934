//! Remote document generation with local fallback

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::response::{GenerateRequest, GenerateResponse};
use lexdoc_domain::{DocumentType, FormValues, GeneratedDocument};
use lexdoc_generator::{canonical_values, render};
use std::fmt;
use tokio::time::timeout;
use tracing::{info, warn};

/// How a document was produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationMethod {
    /// Backend-generated, with the backend's method label
    Remote(String),
    /// Rendered locally from the fixed template
    LocalTemplate,
}

impl fmt::Display for GenerationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationMethod::Remote(label) => write!(f, "{}", label),
            GenerationMethod::LocalTemplate => f.write_str("Local Template"),
        }
    }
}

/// Result of [`DocumentClient::generate`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationOutcome {
    /// Generated document
    pub document: GeneratedDocument,

    /// Method used
    pub method: GenerationMethod,

    /// Why the backend was not used, if it was not
    pub fallback: Option<ClientError>,
}

/// Client for the `/generate_document` endpoint
#[derive(Debug, Clone)]
pub struct DocumentClient {
    config: ClientConfig,
    http: reqwest::Client,
}

impl DocumentClient {
    /// Create a new DocumentClient
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let config = config.checked()?;
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| ClientError::Config(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { config, http })
    }

    /// Generate a document, rendering locally when the backend fails
    pub async fn generate(
        &self,
        document_type: DocumentType,
        values: &FormValues,
    ) -> GenerationOutcome {
        match self.generate_remote(document_type, values).await {
            Ok((text, label)) => {
                info!("Generated {} remotely via {}", document_type, label);
                GenerationOutcome {
                    document: GeneratedDocument::new(document_type, text),
                    method: GenerationMethod::Remote(label),
                    fallback: None,
                }
            }
            Err(reason) => {
                warn!("Remote generation unavailable, rendering locally: {}", reason);
                GenerationOutcome {
                    document: render(document_type, values),
                    method: GenerationMethod::LocalTemplate,
                    fallback: Some(reason),
                }
            }
        }
    }

    async fn generate_remote(
        &self,
        document_type: DocumentType,
        values: &FormValues,
    ) -> Result<(String, String), ClientError> {
        let body = GenerateRequest {
            document_type: document_type.as_str().to_string(),
            form_data: canonical_values(document_type, values),
        };
        let request = self.http.post(self.config.endpoint("generate_document")).json(&body);

        let response: GenerateResponse = timeout(self.config.generate_timeout(), async {
            let response = request.send().await?.error_for_status()?;
            let parsed = response.json::<GenerateResponse>().await?;
            Ok::<_, ClientError>(parsed)
        })
        .await
        .map_err(|_| {
            ClientError::Unreachable(format!(
                "No response within {} s",
                self.config.generate_timeout_secs
            ))
        })??;

        if response.generated_document.trim().is_empty() {
            return Err(ClientError::ContentFailure("Backend returned an empty document".to_string()));
        }

        let label = response
            .metadata
            .and_then(|m| m.generation_method)
            .unwrap_or_else(|| "Remote".to_string());
        Ok((response.generated_document, label))
    }
}
