//! Fixed document templates
//!
//! Each document type has one template made of numbered clauses with named
//! slots. A slot reads the first non-blank value among its field names and
//! falls back to a bracketed placeholder (or default clause text) otherwise,
//! so rendering never fails and never leaves a raw template token behind.

#![allow(missing_docs)]

pub mod employment;
pub mod nda;
pub mod purchase;
pub mod rental;
pub mod service;

use lexdoc_domain::{DocumentType, FormValues};

/// Closing clause appended verbatim to every generated document
pub const DISCLAIMER: &str = "LEGAL DISCLAIMER: This document is a template for informational purposes only and does not constitute legal advice. This agreement should be reviewed by a qualified attorney before execution to ensure compliance with applicable laws and regulations.";

const WITNESS_LINE: &str =
    "IN WITNESS WHEREOF, the parties have executed this Agreement as of the date first written above.";

const SIGNATURE_LINE: &str = "_________________________________ Date: ___________";

/// A named insertion point in a template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    /// Canonical field name shared across document types
    pub key: &'static str,

    /// Type-specific field names, checked before `key`
    pub aliases: &'static [&'static str],

    /// Text used when no value is supplied
    pub fallback: &'static str,
}

impl Slot {
    /// Define a slot
    pub const fn new(
        key: &'static str,
        aliases: &'static [&'static str],
        fallback: &'static str,
    ) -> Self {
        Self { key, aliases, fallback }
    }

    /// First non-blank value among the aliases and the key
    pub fn read(&self, values: &FormValues) -> Option<String> {
        self.aliases
            .iter()
            .chain(std::iter::once(&self.key))
            .find_map(|name| values.get(name))
            .map(str::to_string)
    }

    /// Whether a form field feeds this slot
    pub fn accepts(&self, field: &str) -> bool {
        self.key == field || self.aliases.contains(&field)
    }

    /// Whether the fallback is a bracketed placeholder rather than default text
    pub fn is_placeholder(&self) -> bool {
        self.fallback.starts_with('[')
    }
}

/// Value or the slot's fallback
pub(crate) fn fill<'a>(value: &'a Option<String>, slot: &'a Slot) -> &'a str {
    value.as_deref().unwrap_or(slot.fallback)
}

/// Dollar amount, without doubling a sign the user already typed
pub(crate) fn money(value: &Option<String>, slot: &Slot) -> String {
    let text = fill(value, slot);
    if text.starts_with('$') {
        text.to_string()
    } else {
        format!("${}", text)
    }
}

/// All slots of a document type's template
pub fn slots(document_type: DocumentType) -> &'static [Slot] {
    match document_type {
        DocumentType::Rental => rental::SLOTS,
        DocumentType::Nda => nda::SLOTS,
        DocumentType::Service => service::SLOTS,
        DocumentType::Employment => employment::SLOTS,
        DocumentType::Purchase => purchase::SLOTS,
    }
}

/// The slot a form field feeds, if any
pub fn slot_for_field(document_type: DocumentType, field: &str) -> Option<&'static Slot> {
    slots(document_type).iter().find(|s| s.accepts(field))
}

/// Map type-specific field names onto canonical slot keys
///
/// Blank values and fields that feed no slot are dropped. Rendering the
/// result gives the same text as rendering the original values.
pub fn canonical_values(document_type: DocumentType, values: &FormValues) -> FormValues {
    slots(document_type)
        .iter()
        .filter_map(|slot| slot.read(values).map(|v| (slot.key, v)))
        .collect()
}

/// Assembles title, preamble, numbered clauses, signatures and disclaimer
pub(crate) struct DocumentBuilder {
    text: String,
    clause: usize,
}

impl DocumentBuilder {
    pub fn new(title: &str) -> Self {
        Self {
            text: format!("{}\n\n", title),
            clause: 0,
        }
    }

    pub fn paragraph(&mut self, body: &str) -> &mut Self {
        self.text.push_str(body);
        self.text.push_str("\n\n");
        self
    }

    /// Append the next numbered clause
    pub fn clause(&mut self, heading: &str, body: &str) -> &mut Self {
        self.clause += 1;
        self.text
            .push_str(&format!("{}. {}\n{}\n\n", self.clause, heading, body));
        self
    }

    /// Witness line followed by one signature block per (role, name)
    pub fn signatures(&mut self, blocks: &[(&str, &str)]) -> &mut Self {
        self.paragraph(WITNESS_LINE);
        for (role, name) in blocks {
            self.text
                .push_str(&format!("{}:\n\n{}\n{}\n\n", role, SIGNATURE_LINE, name));
        }
        self
    }

    pub fn finish(mut self) -> String {
        self.text.push_str(DISCLAIMER);
        self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAME: Slot = Slot::new("party1Name", &["landlordName"], "[LANDLORD NAME]");

    #[test]
    fn test_slot_prefers_aliases() {
        let values = FormValues::new()
            .with("party1Name", "Generic")
            .with("landlordName", "Specific");
        assert_eq!(NAME.read(&values).as_deref(), Some("Specific"));
    }

    #[test]
    fn test_slot_skips_blank_alias() {
        let values = FormValues::new()
            .with("landlordName", "  ")
            .with("party1Name", "Generic");
        assert_eq!(NAME.read(&values).as_deref(), Some("Generic"));
    }

    #[test]
    fn test_money_does_not_double_sign() {
        assert_eq!(money(&Some("$2,000".to_string()), &NAME), "$2,000");
        assert_eq!(money(&Some("2000".to_string()), &NAME), "$2000");
        assert_eq!(money(&None, &NAME), "$[LANDLORD NAME]");
    }

    #[test]
    fn test_builder_numbers_clauses_in_order() {
        let mut doc = DocumentBuilder::new("TITLE");
        doc.paragraph("Preamble.")
            .clause("FIRST", "One.")
            .clause("SECOND", "Two.");
        let text = doc.finish();
        assert!(text.starts_with("TITLE\n\nPreamble.\n\n1. FIRST\nOne.\n\n2. SECOND\nTwo."));
        assert!(text.ends_with(DISCLAIMER));
    }

    #[test]
    fn test_canonical_values_use_slot_keys() {
        let values = FormValues::new()
            .with("landlordName", "Alice")
            .with("monthlyRent", "2000")
            .with("unrelated", "x")
            .with("tenantName", " ");
        let canonical = canonical_values(DocumentType::Rental, &values);
        assert_eq!(canonical.get("party1Name"), Some("Alice"));
        assert_eq!(canonical.get("amount"), Some("2000"));
        assert_eq!(canonical.get("unrelated"), None);
        assert_eq!(canonical.len(), 2);
    }

    #[test]
    fn test_canonical_values_render_identically() {
        let values = FormValues::new()
            .with("serviceProvider", "Studio Nine")
            .with("clientName", "Acme")
            .with("projectFee", "$4,000")
            .with("projectStartDate", "2024-02-01");
        let canonical = canonical_values(DocumentType::Service, &values);
        assert_eq!(
            crate::render(DocumentType::Service, &values),
            crate::render(DocumentType::Service, &canonical)
        );
    }

    #[test]
    fn test_every_slot_key_is_unique_per_type() {
        for doc_type in DocumentType::ALL {
            let all = slots(doc_type);
            for (i, slot) in all.iter().enumerate() {
                assert!(
                    all[i + 1..].iter().all(|other| !other.accepts(slot.key)),
                    "{}: field {} feeds two slots",
                    doc_type,
                    slot.key
                );
            }
        }
    }
}
