//! Analysis result for an uploaded document

use serde::{Deserialize, Serialize};

/// Summary and key points for an analyzed document
///
/// Produced either by the remote analyze service or by the local demo
/// fallback. Once produced it is never modified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Prose summary
    pub summary: String,

    /// Ordered key points
    pub key_points: Vec<String>,

    /// Tag describing how the result was produced
    pub processing_method: String,
}

impl AnalysisResult {
    /// Create a new analysis result
    pub fn new(
        summary: impl Into<String>,
        key_points: Vec<String>,
        processing_method: impl Into<String>,
    ) -> Self {
        Self {
            summary: summary.into(),
            key_points,
            processing_method: processing_method.into(),
        }
    }

    /// Whether both the summary and the key points carry content
    pub fn is_populated(&self) -> bool {
        !self.summary.trim().is_empty()
            && !self.key_points.is_empty()
            && self.key_points.iter().all(|p| !p.trim().is_empty())
    }
}
