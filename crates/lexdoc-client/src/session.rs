//! Analysis session state
//!
//! Remembers the last outcome of one user's analyze flow, whether it came
//! from the demo catalog, and what the last health probe said. A new analysis
//! overwrites the previous one.

use crate::error::ClientError;
use crate::orchestrator::{AnalysisOutcome, Orchestrator};
use crate::upload::ImageSource;
use tracing::debug;

/// Single-user analysis session
#[derive(Debug)]
pub struct AnalysisSession {
    orchestrator: Orchestrator,
    last: Option<AnalysisOutcome>,
    backend_reachable: Option<bool>,
}

impl AnalysisSession {
    /// Start an empty session
    pub fn new(orchestrator: Orchestrator) -> Self {
        Self {
            orchestrator,
            last: None,
            backend_reachable: None,
        }
    }

    /// Probe the backend and remember the answer
    pub async fn check_backend(&mut self) -> bool {
        let reachable = self.orchestrator.probe().await.is_ok();
        debug!("Backend reachable: {}", reachable);
        self.backend_reachable = Some(reachable);
        reachable
    }

    /// Analyze an image and keep the outcome
    ///
    /// An invalid upload leaves the previous outcome in place.
    pub async fn analyze(
        &mut self,
        source: ImageSource,
        ai_model: &str,
    ) -> Result<&AnalysisOutcome, ClientError> {
        let outcome = self.orchestrator.analyze(source, ai_model).await?;
        self.backend_reachable = Some(!matches!(
            outcome.fallback,
            Some(ClientError::Unreachable(_))
        ));
        Ok(self.last.insert(outcome))
    }

    /// Show a demo result without contacting the backend
    pub fn run_demo(&mut self) -> &AnalysisOutcome {
        let outcome = AnalysisOutcome::remote(self.orchestrator.demo());
        self.last.insert(outcome)
    }

    /// Last outcome, if any
    pub fn last_outcome(&self) -> Option<&AnalysisOutcome> {
        self.last.as_ref()
    }

    /// Whether the visible result is a demo sample
    pub fn is_demo_mode(&self) -> bool {
        self.last.as_ref().is_some_and(AnalysisOutcome::is_demo)
    }

    /// Result of the last probe, `None` before any probe
    pub fn backend_reachable(&self) -> Option<bool> {
        self.backend_reachable
    }

    /// Forget the last outcome
    pub fn clear(&mut self) {
        self.last = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;
    use lexdoc_domain::traits::FixedIndex;

    fn session() -> AnalysisSession {
        let orchestrator = Orchestrator::new(ClientConfig::default())
            .unwrap()
            .with_random_source(FixedIndex(1));
        AnalysisSession::new(orchestrator)
    }

    #[test]
    fn test_manual_demo_is_flagged() {
        let mut session = session();
        assert!(!session.is_demo_mode());

        let outcome = session.run_demo();
        assert!(outcome.fallback.is_none());
        assert!(session.is_demo_mode());
        assert!(session.last_outcome().unwrap().result.summary.starts_with("RENTAL"));

        session.clear();
        assert!(session.last_outcome().is_none());
    }

    #[tokio::test]
    async fn test_invalid_upload_keeps_previous_outcome() {
        let mut session = session();
        session.run_demo();

        let err = session
            .analyze(ImageSource::from_reference("contract.pdf"), "gemini")
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Validation(_)));
        assert!(session.last_outcome().is_some());
        assert_eq!(session.backend_reachable(), None);
    }
}
