//! Sample-document plausibility check
//!
//! A keyword filter, not a classifier: a sample is accepted when it mentions
//! any word from the selected type's vocabulary or any generic legal-structure
//! word. False positives and negatives are expected.

use lexdoc_domain::DocumentType;

/// Generic words that indicate legal structure regardless of document type
pub const LEGAL_STRUCTURE_WORDS: &[&str] = &[
    "agreement",
    "contract",
    "party",
    "parties",
    "terms",
    "conditions",
    "whereas",
    "therefore",
];

/// Domain vocabulary for a document type
pub fn domain_keywords(document_type: DocumentType) -> &'static [&'static str] {
    match document_type {
        DocumentType::Rental => &[
            "landlord", "tenant", "rent", "lease", "property", "premises", "rental",
            "agreement", "renter", "lessor", "lessee", "apartment", "house", "dwelling",
        ],
        DocumentType::Nda => &[
            "non-disclosure", "confidential", "proprietary", "confidentiality", "party",
            "agreement", "information", "secret", "private", "disclosure", "receiving",
            "disclosing",
        ],
        DocumentType::Service => &[
            "service", "contractor", "client", "work", "payment", "agreement", "project",
            "provider", "professional", "consulting", "freelance",
        ],
        DocumentType::Employment => &[
            "employee", "employer", "employment", "salary", "job", "work", "contract",
            "position", "hire", "wage", "compensation", "duties",
        ],
        DocumentType::Purchase => &[
            "purchase", "buyer", "seller", "price", "goods", "sale", "agreement", "buy",
            "sell", "product", "merchandise", "transaction",
        ],
    }
}

/// Outcome of checking a sample against a document type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlausibilityReport {
    /// Type the sample was checked against
    pub document_type: DocumentType,

    /// Domain words found in the sample
    pub matching_keywords: Vec<&'static str>,

    /// Legal-structure words found in the sample
    pub legal_words: Vec<&'static str>,
}

impl PlausibilityReport {
    /// Accept unless the sample has neither domain nor legal-structure words
    pub fn is_plausible(&self) -> bool {
        !self.matching_keywords.is_empty() || !self.legal_words.is_empty()
    }
}

/// Check whether sample text plausibly belongs to the given document type
pub fn check_plausibility(text: &str, document_type: DocumentType) -> PlausibilityReport {
    let lower = text.to_lowercase();
    let found = |words: &'static [&'static str]| -> Vec<&'static str> {
        words.iter().copied().filter(|w| lower.contains(w)).collect()
    };

    PlausibilityReport {
        document_type,
        matching_keywords: found(domain_keywords(document_type)),
        legal_words: found(LEGAL_STRUCTURE_WORDS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_words_are_matched_case_insensitively() {
        let report = check_plausibility("The LANDLORD and the Tenant", DocumentType::Rental);
        assert!(report.is_plausible());
        assert_eq!(report.matching_keywords, vec!["landlord", "tenant"]);
    }

    #[test]
    fn test_legal_structure_alone_is_enough() {
        let report = check_plausibility("WHEREAS the undersigned", DocumentType::Employment);
        assert!(report.matching_keywords.is_empty());
        assert_eq!(report.legal_words, vec!["whereas"]);
        assert!(report.is_plausible());
    }

    #[test]
    fn test_unrelated_text_is_rejected() {
        let report = check_plausibility("Grocery list: eggs, milk, bread", DocumentType::Nda);
        assert!(!report.is_plausible());
    }

    #[test]
    fn test_empty_text_is_rejected() {
        for doc_type in DocumentType::ALL {
            assert!(!check_plausibility("", doc_type).is_plausible());
        }
    }
}
