//! Remote analysis with demo fallback
//!
//! One probe, one dispatch, no retries. Each network step is raced against
//! its own timer, so an unreachable backend costs at most the probe timeout.

use crate::config::ClientConfig;
use crate::demo::{DemoCatalog, ThreadRngSource, DEMO_PROCESSING_METHOD};
use crate::error::ClientError;
use crate::response::{is_failed_analysis, ProcessResponse};
use crate::upload::{ImageSource, ImageUpload};
use lexdoc_domain::traits::RandomSource;
use lexdoc_domain::AnalysisResult;
use std::sync::Mutex;
use tokio::time::timeout;
use tracing::{debug, info, warn};

/// Result of [`Orchestrator::analyze`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisOutcome {
    /// Always populated
    pub result: AnalysisResult,

    /// Why the remote result was replaced, if it was
    pub fallback: Option<ClientError>,
}

impl AnalysisOutcome {
    /// Result produced by the backend
    pub fn remote(result: AnalysisResult) -> Self {
        Self {
            result,
            fallback: None,
        }
    }

    /// Demo result substituted for a failed attempt
    pub fn substituted(result: AnalysisResult, reason: ClientError) -> Self {
        Self {
            result,
            fallback: Some(reason),
        }
    }

    /// Whether the result is a canned demo sample
    pub fn is_demo(&self) -> bool {
        self.fallback.is_some() || self.result.processing_method == DEMO_PROCESSING_METHOD
    }
}

/// Sequences health probe, upload and fallback
pub struct Orchestrator {
    config: ClientConfig,
    http: reqwest::Client,
    demo: DemoCatalog,
    rng: Mutex<Box<dyn RandomSource + Send>>,
}

impl Orchestrator {
    /// Create a new Orchestrator
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let config = config.checked()?;
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| ClientError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            config,
            http,
            demo: DemoCatalog::builtin(),
            rng: Mutex::new(Box::new(ThreadRngSource)),
        })
    }

    /// Use a specific random source for demo selection
    pub fn with_random_source(mut self, source: impl RandomSource + Send + 'static) -> Self {
        self.rng = Mutex::new(Box::new(source));
        self
    }

    /// Get the configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Check that the backend answers `/health` within the probe timeout
    pub async fn probe(&self) -> Result<(), ClientError> {
        let url = self.config.endpoint("health");
        debug!("Probing {}", url);

        match timeout(self.config.probe_timeout(), self.http.get(&url).send()).await {
            Err(_) => Err(ClientError::Unreachable(format!(
                "Health check timed out after {} ms",
                self.config.probe_timeout_ms
            ))),
            Ok(Err(e)) => Err(ClientError::Unreachable(e.to_string())),
            Ok(Ok(response)) if !response.status().is_success() => Err(ClientError::Unreachable(
                format!("Health check returned HTTP {}", response.status()),
            )),
            Ok(Ok(_)) => Ok(()),
        }
    }

    /// Upload an image for analysis
    ///
    /// Returns `ContentFailure` when the backend answers but its result
    /// matches [`is_failed_analysis`].
    pub async fn dispatch(
        &self,
        upload: &ImageUpload,
        ai_model: &str,
    ) -> Result<AnalysisResult, ClientError> {
        let url = self.config.endpoint("process_document");
        let form = upload.to_form()?;
        info!(
            "Uploading {} ({} bytes) to {} with model '{}'",
            upload.file_name(),
            upload.bytes().len(),
            url,
            ai_model
        );

        let request = self
            .http
            .post(&url)
            .query(&[("ai_model", ai_model)])
            .multipart(form);

        let response: ProcessResponse = timeout(self.config.dispatch_timeout(), async {
            let response = request
                .send()
                .await
                .map_err(|e| ClientError::Transfer(e.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                return Err(ClientError::Transfer(format!("HTTP {}", status)));
            }

            response
                .json::<ProcessResponse>()
                .await
                .map_err(|e| ClientError::Transfer(format!("Malformed response: {}", e)))
        })
        .await
        .map_err(|_| {
            ClientError::Transfer(format!(
                "No response within {} s",
                self.config.dispatch_timeout_secs
            ))
        })??;

        let result = response.into_result(ai_model);
        if is_failed_analysis(&result) {
            return Err(ClientError::ContentFailure(
                "Backend returned an empty or failed analysis".to_string(),
            ));
        }
        Ok(result)
    }

    /// Obtain an analysis, preferring the backend
    ///
    /// Errors only for an invalid upload. Every
    /// other failure yields a demo result with the reason attached.
    pub async fn analyze(
        &self,
        source: ImageSource,
        ai_model: &str,
    ) -> Result<AnalysisOutcome, ClientError> {
        // 1. Validate the upload
        let upload = source.into_upload()?;

        // 2. Probe, then dispatch
        let attempt = match self.probe().await {
            Ok(()) => self.dispatch(&upload, ai_model).await,
            Err(reason) => Err(reason),
        };

        // 3. Fall back on anything the demo catalog can stand in for
        match attempt {
            Ok(result) => {
                info!(
                    "Analysis complete: {} key points via {}",
                    result.key_points.len(),
                    result.processing_method
                );
                Ok(AnalysisOutcome::remote(result))
            }
            Err(reason) if reason.is_recoverable() => {
                warn!("Remote analysis unusable, using demo result: {}", reason);
                Ok(self.fallback(reason))
            }
            Err(reason) => Err(reason),
        }
    }

    /// A demo result, without contacting the backend
    pub fn demo(&self) -> AnalysisResult {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        self.demo.pick(&mut **rng)
    }

    fn fallback(&self, reason: ClientError) -> AnalysisOutcome {
        AnalysisOutcome::substituted(self.demo(), reason)
    }
}

impl std::fmt::Debug for Orchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Orchestrator")
            .field("config", &self.config)
            .field("demo_samples", &self.demo.len())
            .finish()
    }
}
