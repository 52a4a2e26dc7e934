//! LexDoc Domain Layer
//!
//! Core vocabulary shared by every other LexDoc crate: the document kinds a user
//! can draft, the form-field schema extracted for each kind, the values a user
//! fills in, and the two immutable products of the system.
//!
//! ## Key Concepts
//!
//! - **DocumentType**: One of five legal document kinds (rental, nda, service, employment, purchase)
//! - **FieldSpec**: A single form field (name, label, kind, required)
//! - **FormValues**: User-entered values keyed by field name
//! - **AnalysisResult**: Summary + key points for an uploaded document, remote or demo
//! - **GeneratedDocument**: The full rendered text of a drafted agreement
//!
//! ## Architecture
//!
//! This crate holds plain data and boundary traits only. Network access lives in
//! `lexdoc-client`, template rendering in `lexdoc-generator`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod document;
pub mod document_type;
pub mod field;
pub mod traits;

// Re-exports for convenience
pub use analysis::AnalysisResult;
pub use document::GeneratedDocument;
pub use document_type::DocumentType;
pub use field::{FieldKind, FieldSpec, FormValues};
