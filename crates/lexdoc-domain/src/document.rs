//! Generated document value

use crate::DocumentType;
use serde::Serialize;
use std::fmt;

/// Full text of a rendered agreement
///
/// Produced once per generation request and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedDocument {
    document_type: DocumentType,
    text: String,
}

impl GeneratedDocument {
    /// Wrap rendered text
    pub fn new(document_type: DocumentType, text: String) -> Self {
        Self { document_type, text }
    }

    /// Document type the text was rendered for
    pub fn document_type(&self) -> DocumentType {
        self.document_type
    }

    /// Rendered text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Consume and return the rendered text
    pub fn into_text(self) -> String {
        self.text
    }
}

impl fmt::Display for GeneratedDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for GeneratedDocument {
    fn as_ref(&self) -> &str {
        &self.text
    }
}
