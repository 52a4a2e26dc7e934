//! LexDoc Client
//!
//! Talks to the document-analysis backend and always comes back with a
//! usable answer.
//!
//! # Overview
//!
//! [`Orchestrator::analyze`] validates the image, probes `GET /health` with a
//! short timeout, uploads the image to `POST /process_document` with a long
//! timeout, and checks the returned analysis for failure markers. Any failure
//! after validation is replaced by a canned demo result from
//! [`DemoCatalog`], with the reason kept on the [`AnalysisOutcome`].
//!
//! [`DocumentClient::generate`] does the same for document drafting: it asks
//! `POST /generate_document` first and renders the local template otherwise.
//!
//! # Error Taxonomy
//!
//! - **Unreachable**: probe timed out, was refused, or got a non-2xx status
//! - **Validation**: bad file extension or unreadable image, raised before any request
//! - **Transfer**: upload failed, timed out, or returned malformed JSON
//! - **ContentFailure**: the backend answered with an empty or failed analysis
//!
//! # Example Usage
//!
//! ```no_run
//! use lexdoc_client::{ClientConfig, ImageSource, Orchestrator};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let orchestrator = Orchestrator::new(ClientConfig::default())?;
//! let outcome = orchestrator
//!     .analyze(ImageSource::from_reference("lease.jpg"), "gemini")
//!     .await?;
//!
//! println!("{}", outcome.result.summary);
//! if let Some(reason) = &outcome.fallback {
//!     println!("(demo result: {})", reason);
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod demo;
mod error;
mod generate;
mod orchestrator;
mod session;
mod upload;

pub mod response;

pub use config::{ClientConfig, DEFAULT_AI_MODEL, DEFAULT_BASE_URL};
pub use demo::{DemoCatalog, SeededSource, ThreadRngSource, DEMO_PROCESSING_METHOD};
pub use error::ClientError;
pub use generate::{DocumentClient, GenerationMethod, GenerationOutcome};
pub use orchestrator::{AnalysisOutcome, Orchestrator};
pub use response::{is_failed_analysis, FAILURE_MARKERS};
pub use session::AnalysisSession;
pub use upload::{
    normalize_extension, ImageFormat, ImageSource, ImageUpload, ALLOWED_EXTENSIONS, UPLOAD_FIELD,
};
