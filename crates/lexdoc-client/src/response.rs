//! Wire types for the backend HTTP API
//!
//! Shared with `lexdoc-mock` so both ends agree on the JSON shapes.

use lexdoc_domain::{AnalysisResult, FormValues};
use serde::{Deserialize, Serialize};

/// Case-insensitive substrings that mark a backend analysis as failed
///
/// Matching is heuristic: a genuine summary that mentions "error" is also
/// treated as a failure and replaced by a demo result.
pub const FAILURE_MARKERS: &[&str] = &["failed", "error"];

/// Whether a backend result is unusable and should be replaced
///
/// True when the summary is blank, there are no key points, or the summary
/// or any key point contains one of [`FAILURE_MARKERS`].
pub fn is_failed_analysis(result: &AnalysisResult) -> bool {
    let has_marker = |text: &str| {
        let lower = text.to_lowercase();
        FAILURE_MARKERS.iter().any(|m| lower.contains(m))
    };

    result.summary.trim().is_empty()
        || result.key_points.is_empty()
        || has_marker(&result.summary)
        || result.key_points.iter().any(|p| has_marker(p))
}

/// `GET /health` response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status, e.g. "healthy"
    pub status: String,

    /// Human-readable status message
    #[serde(default)]
    pub message: String,

    /// Whether an AI model is configured on the backend
    #[serde(default)]
    pub llm_available: bool,

    /// Backend version
    #[serde(default)]
    pub version: String,
}

/// Optional metadata attached to an analysis response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessMetadata {
    /// How the backend produced the result
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processing_method: Option<String>,
}

/// `POST /process_document` response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessResponse {
    /// Prose summary
    #[serde(default)]
    pub summary: String,

    /// Ordered key points
    #[serde(default)]
    pub key_points: Vec<String>,

    /// Optional metadata
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ProcessMetadata>,
}

impl ProcessResponse {
    /// Convert to an AnalysisResult, defaulting the processing method to the
    /// upper-cased model tag
    pub fn into_result(self, ai_model: &str) -> AnalysisResult {
        let processing_method = self
            .metadata
            .and_then(|m| m.processing_method)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| ai_model.to_uppercase());
        AnalysisResult::new(self.summary, self.key_points, processing_method)
    }
}

impl From<AnalysisResult> for ProcessResponse {
    fn from(result: AnalysisResult) -> Self {
        Self {
            summary: result.summary,
            key_points: result.key_points,
            metadata: Some(ProcessMetadata {
                processing_method: Some(result.processing_method),
            }),
        }
    }
}

/// `POST /generate_document` request body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// Document type tag
    pub document_type: String,

    /// Canonical form values
    pub form_data: FormValues,
}

/// Metadata attached to a generated document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateMetadata {
    /// How the document was produced
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generation_method: Option<String>,

    /// Template the backend used
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_used: Option<String>,

    /// Review notice
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disclaimer: Option<String>,
}

/// `POST /generate_document` response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// Full document text
    pub generated_document: String,

    /// Document type tag echoed back
    #[serde(default)]
    pub document_type: String,

    /// Optional metadata
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<GenerateMetadata>,
}

/// Error body returned for unknown routes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
