//! Drafting session state
//!
//! Holds everything one user needs while drafting: the chosen document type,
//! the active form schema, the values typed so far, analyzed samples saved as
//! reusable templates, and the last generated document. A new selection or
//! sample simply overwrites earlier state.

use crate::error::GeneratorError;
use crate::generator::Generator;
use crate::schema::ExtractedSchema;
use lexdoc_domain::{DocumentType, FieldSpec, FormValues, GeneratedDocument};
use std::collections::BTreeMap;
use tracing::debug;

/// Where a draft currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftStep {
    /// No document type chosen yet
    SelectType,
    /// Schema loaded, collecting values
    FillForm,
    /// Document rendered
    Generated,
}

/// Single-user drafting session
#[derive(Debug)]
pub struct DraftSession {
    generator: Generator,
    step: DraftStep,
    document_type: Option<DocumentType>,
    fields: Vec<FieldSpec>,
    values: FormValues,
    saved_templates: BTreeMap<DocumentType, ExtractedSchema>,
    document: Option<GeneratedDocument>,
}

impl DraftSession {
    /// Start an empty session
    pub fn new(generator: Generator) -> Self {
        Self {
            generator,
            step: DraftStep::SelectType,
            document_type: None,
            fields: Vec::new(),
            values: FormValues::new(),
            saved_templates: BTreeMap::new(),
            document: None,
        }
    }

    /// Current step
    pub fn step(&self) -> DraftStep {
        self.step
    }

    /// Selected document type
    pub fn document_type(&self) -> Option<DocumentType> {
        self.document_type
    }

    /// Active form schema
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Values entered so far
    pub fn values(&self) -> &FormValues {
        &self.values
    }

    /// Last generated document
    pub fn document(&self) -> Option<&GeneratedDocument> {
        self.document.as_ref()
    }

    /// Saved template for a type, if a sample was analyzed earlier
    pub fn saved_template(&self, document_type: DocumentType) -> Option<&ExtractedSchema> {
        self.saved_templates.get(&document_type)
    }

    /// Choose the document type, discarding any form in progress
    pub fn select_type(&mut self, document_type: DocumentType) {
        debug!("Draft type selected: {}", document_type);
        self.document_type = Some(document_type);
        self.fields.clear();
        self.values = FormValues::new();
        self.document = None;
        self.step = DraftStep::SelectType;
    }

    fn require_type(&self) -> Result<DocumentType, GeneratorError> {
        self.document_type.ok_or(GeneratorError::NoDocumentType)
    }

    fn load_fields(&mut self, fields: Vec<FieldSpec>) {
        self.values = FormValues::for_fields(&fields);
        self.fields = fields;
        self.document = None;
        self.step = DraftStep::FillForm;
    }

    /// One-off draft using the basic form
    pub fn use_basic_fields(&mut self) -> Result<&[FieldSpec], GeneratorError> {
        let document_type = self.require_type()?;
        let fields = self.generator.fields(document_type);
        self.load_fields(fields);
        Ok(&self.fields)
    }

    /// Analyze a sample, save it as the type's template and load its fields
    ///
    /// A rejected sample leaves the session unchanged.
    pub fn load_sample(&mut self, text: &str) -> Result<&ExtractedSchema, GeneratorError> {
        let document_type = self.require_type()?;
        let schema = self.generator.analyze_sample(document_type, text)?;
        self.load_fields(schema.fields.clone());
        self.saved_templates.insert(document_type, schema);
        Ok(&self.saved_templates[&document_type])
    }

    /// Reload the saved template for the selected type
    ///
    /// Returns `Ok(false)` when no sample has been analyzed for it yet.
    pub fn use_saved_template(&mut self) -> Result<bool, GeneratorError> {
        let document_type = self.require_type()?;
        let Some(schema) = self.saved_templates.get(&document_type) else {
            return Ok(false);
        };
        let fields = schema.fields.clone();
        self.load_fields(fields);
        Ok(true)
    }

    /// Record a value typed by the user
    pub fn set_value(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.set(name, value);
    }

    /// Render the current form
    pub fn generate(&mut self) -> Result<&GeneratedDocument, GeneratorError> {
        let document_type = self.require_type()?;
        let document = self
            .generator
            .generate(document_type, &self.values, &self.fields)?;
        self.step = DraftStep::Generated;
        Ok(self.document.insert(document))
    }

    /// Start over, keeping saved templates
    pub fn reset(&mut self) {
        self.step = DraftStep::SelectType;
        self.document_type = None;
        self.fields.clear();
        self.values = FormValues::new();
        self.document = None;
    }
}

impl Default for DraftSession {
    fn default() -> Self {
        Self::new(Generator::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "this lease agreement is made on 01/01/2024 between John Smith \
        and Jane Doe for the premises at 42 Oak Street, rent is $1,800 per month.";

    #[test]
    fn test_actions_need_a_type() {
        let mut session = DraftSession::default();
        assert!(matches!(session.use_basic_fields(), Err(GeneratorError::NoDocumentType)));
        assert!(matches!(session.generate(), Err(GeneratorError::NoDocumentType)));
    }

    #[test]
    fn test_basic_flow() {
        let mut session = DraftSession::default();
        session.select_type(DocumentType::Nda);
        let count = session.use_basic_fields().unwrap().len();
        assert_eq!(count, 4);
        assert_eq!(session.step(), DraftStep::FillForm);

        session.set_value("disclosingParty", "Acme Inc");
        session.set_value("receivingParty", "Widget LLC");
        session.set_value("effectiveDate", "2024-05-01");
        session.set_value("duration", "2 years");

        let text = session.generate().unwrap().text().to_string();
        assert!(text.contains("Acme Inc"));
        assert_eq!(session.step(), DraftStep::Generated);
        assert!(session.document().is_some());
    }

    #[test]
    fn test_missing_fields_block_generation() {
        let mut session = DraftSession::default();
        session.select_type(DocumentType::Rental);
        session.use_basic_fields().unwrap();
        session.set_value("landlordName", "Alice");

        match session.generate() {
            Err(GeneratorError::MissingRequiredFields(labels)) => {
                assert!(labels.contains(&"Tenant Name".to_string()));
                assert!(!labels.contains(&"Landlord Name".to_string()));
            }
            other => panic!("unexpected: {:?}", other),
        }
        assert_eq!(session.step(), DraftStep::FillForm);
    }

    #[test]
    fn test_sample_prefills_and_is_saved() {
        let mut session = DraftSession::default();
        session.select_type(DocumentType::Rental);
        let schema = session.load_sample(SAMPLE).unwrap();
        assert!(schema.from_content);

        assert_eq!(session.values().get("party1Name"), Some("John Smith"));
        assert_eq!(session.values().get("propertyAddress"), Some("42 Oak Street"));

        let text = session.generate().unwrap().text().to_string();
        assert!(text.contains("John Smith"));
        assert!(text.contains("$1,800"));
        assert!(!text.contains("[LANDLORD NAME]"));

        session.reset();
        session.select_type(DocumentType::Rental);
        assert!(session.use_saved_template().unwrap());
        assert_eq!(session.values().get("party2Name"), Some("Jane Doe"));
    }

    #[test]
    fn test_edited_date_replaces_scanned_date() {
        let mut session = DraftSession::default();
        session.select_type(DocumentType::Rental);
        session.load_sample(SAMPLE).unwrap();
        assert_eq!(session.values().get("date"), Some("01/01/2024"));

        session.set_value("date", "2025-03-01");
        let text = session.generate().unwrap().text().to_string();
        assert!(text.contains("2025-03-01"));
        assert!(!text.contains("01/01/2024"));
    }

    #[test]
    fn test_rejected_sample_keeps_state() {
        let mut session = DraftSession::default();
        session.select_type(DocumentType::Purchase);
        session.use_basic_fields().unwrap();

        let err = session.load_sample("lorem ipsum dolor sit amet").unwrap_err();
        assert!(matches!(err, GeneratorError::ImplausibleSample(DocumentType::Purchase)));
        assert_eq!(session.fields().len(), 5);
        assert!(session.saved_template(DocumentType::Purchase).is_none());
    }

    #[test]
    fn test_no_saved_template() {
        let mut session = DraftSession::default();
        session.select_type(DocumentType::Service);
        assert!(!session.use_saved_template().unwrap());
    }
}
