//! Error types for the Generator

use lexdoc_domain::DocumentType;
use thiserror::Error;

/// Errors that can occur while preparing or generating a document
///
/// Rendering itself never fails; these cover sample validation and form
/// completeness checks that happen before it.
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// Sample text has neither domain vocabulary nor legal structure
    #[error(
        "This document doesn't appear to be a legal {} document. Please upload a proper {} document with relevant legal content.",
        .0.display_name(),
        .0.display_name()
    )]
    ImplausibleSample(DocumentType),

    /// No form fields could be derived from the sample
    #[error("Could not extract fields from this document. Please upload a proper {} with clear field structure.", .0.display_name())]
    NoFieldsExtracted(DocumentType),

    /// Required fields are blank
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingRequiredFields(Vec<String>),

    /// Sample text exceeds the configured maximum length
    #[error("Sample too long: {0} chars (max: {1})")]
    TextTooLong(usize, usize),

    /// Draft has no document type selected yet
    #[error("No document type selected")]
    NoDocumentType,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
