//! LexDoc Generator
//!
//! Drafts legal documents locally from a document type and a flat map of form
//! values. No network access and no clock: the same input always renders the
//! same text.
//!
//! # Overview
//!
//! Every document type has exactly one fixed template of numbered clauses.
//! Values are read into a typed record per type ([`AgreementTerms`]), with a
//! few derived values along the way (lease end date, utilities and pet policy
//! inferred from special terms, security deposit defaulting to the rent).
//! Missing values become bracketed placeholders such as `[LANDLORD NAME]`.
//!
//! # Architecture
//!
//! ```text
//! sample text → plausibility check → content scan / static schema → FieldSpec[]
//! FormValues  → AgreementTerms → template → GeneratedDocument
//! ```
//!
//! # Example Usage
//!
//! ```
//! use lexdoc_domain::{DocumentType, FormValues};
//! use lexdoc_generator::render;
//!
//! let values = FormValues::new()
//!     .with("landlordName", "Alice")
//!     .with("tenantName", "Bob")
//!     .with("monthlyRent", "2000")
//!     .with("leaseStartDate", "2024-01-01")
//!     .with("leaseDuration", "12 months");
//!
//! let doc = render(DocumentType::Rental, &values);
//! assert!(doc.text().contains("December 31, 2024"));
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod generator;
mod scan;
mod session;

pub mod dates;
pub mod plausibility;
pub mod schema;
pub mod templates;
pub mod terms;


pub use config::GeneratorConfig;
pub use dates::{lease_end_date, END_DATE_PLACEHOLDER};
pub use error::GeneratorError;
pub use generator::{missing_required, render, render_tag, Generator};
pub use plausibility::{check_plausibility, PlausibilityReport};
pub use scan::scan_content;
pub use schema::{basic_fields, detailed_schema, ExtractedSchema};
pub use session::{DraftSession, DraftStep};
pub use templates::{canonical_values, DISCLAIMER};
pub use terms::AgreementTerms;
