//! Document type module - the kinds of agreement LexDoc can draft

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of legal document
///
/// The tag is chosen by the user and never changes for the lifetime of a draft.
/// Every kind has exactly one template and one set of field schemas.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum DocumentType {
    /// Residential lease between landlord and tenant
    Rental,

    /// Mutual non-disclosure agreement
    Nda,

    /// Professional service agreement between provider and client
    #[default]
    Service,

    /// Employment contract between employer and employee
    Employment,

    /// Purchase agreement between seller and buyer
    Purchase,
}

impl DocumentType {
    /// All document types, in display order
    pub const ALL: [DocumentType; 5] = [
        DocumentType::Rental,
        DocumentType::Nda,
        DocumentType::Service,
        DocumentType::Employment,
        DocumentType::Purchase,
    ];

    /// Get the tag as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::Rental => "rental",
            DocumentType::Nda => "nda",
            DocumentType::Service => "service",
            DocumentType::Employment => "employment",
            DocumentType::Purchase => "purchase",
        }
    }

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            DocumentType::Rental => "Rental Agreement",
            DocumentType::Nda => "Non-Disclosure Agreement",
            DocumentType::Service => "Service Agreement",
            DocumentType::Employment => "Employment Contract",
            DocumentType::Purchase => "Purchase Agreement",
        }
    }

    /// Parse a tag (case-insensitive, surrounding whitespace ignored)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "rental" => Some(DocumentType::Rental),
            "nda" => Some(DocumentType::Nda),
            "service" => Some(DocumentType::Service),
            "employment" => Some(DocumentType::Employment),
            "purchase" => Some(DocumentType::Purchase),
            _ => None,
        }
    }

    /// Parse a tag, mapping anything unrecognized to [`DocumentType::Service`]
    pub fn parse_or_default(s: &str) -> Self {
        Self::parse(s).unwrap_or_default()
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DocumentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid document type: {}", s))
    }
}
