//! Typed agreement records
//!
//! Form values are loose string maps; before rendering they are read into one
//! typed record per document kind. Each record owns its slot lookups and
//! cross-field defaults, so the renderer only ever sees resolved values.

use crate::templates::{
    employment::EmploymentTerms, nda::NdaTerms, purchase::PurchaseTerms, rental::RentalTerms,
    service::ServiceTerms,
};
use lexdoc_domain::{DocumentType, FormValues, GeneratedDocument};

/// Agreement contents for one of the five document kinds
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AgreementTerms {
    /// Residential lease
    Rental(RentalTerms),
    /// Mutual non-disclosure agreement
    Nda(NdaTerms),
    /// Professional service agreement
    Service(ServiceTerms),
    /// Employment contract
    Employment(EmploymentTerms),
    /// Purchase agreement
    Purchase(PurchaseTerms),
}

impl AgreementTerms {
    /// Read the record for `document_type` out of form values
    pub fn from_values(document_type: DocumentType, values: &FormValues) -> Self {
        match document_type {
            DocumentType::Rental => AgreementTerms::Rental(RentalTerms::from_values(values)),
            DocumentType::Nda => AgreementTerms::Nda(NdaTerms::from_values(values)),
            DocumentType::Service => AgreementTerms::Service(ServiceTerms::from_values(values)),
            DocumentType::Employment => {
                AgreementTerms::Employment(EmploymentTerms::from_values(values))
            }
            DocumentType::Purchase => AgreementTerms::Purchase(PurchaseTerms::from_values(values)),
        }
    }

    /// Document kind of this record
    pub fn document_type(&self) -> DocumentType {
        match self {
            AgreementTerms::Rental(_) => DocumentType::Rental,
            AgreementTerms::Nda(_) => DocumentType::Nda,
            AgreementTerms::Service(_) => DocumentType::Service,
            AgreementTerms::Employment(_) => DocumentType::Employment,
            AgreementTerms::Purchase(_) => DocumentType::Purchase,
        }
    }

    /// Render the full document text
    pub fn render(&self) -> GeneratedDocument {
        let text = match self {
            AgreementTerms::Rental(terms) => terms.render(),
            AgreementTerms::Nda(terms) => terms.render(),
            AgreementTerms::Service(terms) => terms.render(),
            AgreementTerms::Employment(terms) => terms.render(),
            AgreementTerms::Purchase(terms) => terms.render(),
        };
        GeneratedDocument::new(self.document_type(), text)
    }
}
