//! Form field schema and user-entered values

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Input widget kind for a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Single-line text
    Text,
    /// Multi-line text
    Textarea,
    /// Calendar date
    Date,
}

impl FieldKind {
    /// Get the kind name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Textarea => "textarea",
            FieldKind::Date => "date",
        }
    }
}

/// A single field of a document form
///
/// Produced once per document type, either from a static schema or from a
/// heuristic scan of a sample document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Identifier used as the key in [`FormValues`]
    pub name: String,

    /// Display label
    pub label: String,

    /// Widget kind
    pub kind: FieldKind,

    /// Whether generation requires a non-blank value
    pub required: bool,

    /// Whether the field came out of sample-document analysis
    #[serde(default)]
    pub ai_extracted: bool,

    /// Value found in the sample document, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extracted_value: Option<String>,
}

impl FieldSpec {
    /// Create a required field
    pub fn required(name: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            kind,
            required: true,
            ai_extracted: false,
            extracted_value: None,
        }
    }

    /// Create an optional field
    pub fn optional(name: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            required: false,
            ..Self::required(name, label, kind)
        }
    }

    /// Attach a value found in the sample document
    pub fn with_extracted_value(mut self, value: impl Into<String>) -> Self {
        self.ai_extracted = true;
        self.extracted_value = Some(value.into());
        self
    }
}

/// Values entered for a form, keyed by [`FieldSpec::name`]
///
/// Blank values (empty or whitespace only) are treated exactly like absent ones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormValues(BTreeMap<String, String>);

impl FormValues {
    /// Create an empty value map
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a value map with an empty entry for every field, prefilled with
    /// any extracted values
    pub fn for_fields(fields: &[FieldSpec]) -> Self {
        fields
            .iter()
            .map(|f| (f.name.clone(), f.extracted_value.clone().unwrap_or_default()))
            .collect()
    }

    /// Set a value, replacing any previous one
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    /// Builder-style [`FormValues::set`]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Get a trimmed, non-blank value
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .get(name)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    /// Iterate over all raw entries in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of entries, blank ones included
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no entries at all
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn rental_fields() -> Vec<FieldSpec> {
        vec![
            FieldSpec::required("landlordName", "Landlord Name", FieldKind::Text),
            FieldSpec::required("leaseStartDate", "Lease Start Date", FieldKind::Date),
            FieldSpec::optional("petPolicy", "Pet Policy", FieldKind::Text),
        ]
    }

    #[test]
    fn test_blank_values_read_as_absent() {
        let values = FormValues::new()
            .with("a", "   ")
            .with("b", "")
            .with("c", "  value ");
        assert_eq!(values.get("a"), None);
        assert_eq!(values.get("b"), None);
        assert_eq!(values.get("c"), Some("value"));
        assert_eq!(values.get("missing"), None);
    }

    #[test]
    fn test_for_fields_creates_empty_entries() {
        let values = FormValues::for_fields(&rental_fields());
        assert_eq!(values.len(), 3);
        assert!(values.iter().all(|(_, v)| v.is_empty()));
    }

    #[test]
    fn test_for_fields_prefills_extracted_values() {
        let fields = vec![FieldSpec::required("amount", "Amount", FieldKind::Text)
            .with_extracted_value("$1,500")];
        let values = FormValues::for_fields(&fields);
        assert_eq!(values.get("amount"), Some("$1,500"));
    }

    #[test]
    fn test_serializes_as_plain_map() {
        let values = FormValues::new().with("amount", "2000");
        let json = serde_json::to_string(&values).unwrap();
        assert_eq!(json, r#"{"amount":"2000"}"#);
    }

    proptest! {
        #[test]
        fn prop_get_is_trimmed_and_never_blank(value in "[ \t]{0,3}[a-z0-9 ]{0,10}[ \t]{0,3}") {
            let values = FormValues::new().with("k", value.clone());
            match values.get("k") {
                Some(v) => {
                    prop_assert_eq!(v, value.trim());
                    prop_assert!(!v.is_empty());
                }
                None => prop_assert!(value.trim().is_empty()),
            }
        }
    }
}
