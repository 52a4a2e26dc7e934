//! Core Generator implementation

use crate::config::GeneratorConfig;
use crate::error::GeneratorError;
use crate::plausibility::check_plausibility;
use crate::scan::scan_content;
use crate::schema::{basic_fields, detailed_schema, ExtractedSchema};
use crate::templates::slot_for_field;
use crate::terms::AgreementTerms;
use lexdoc_domain::{DocumentType, FieldSpec, FormValues, GeneratedDocument};
use tracing::{debug, info, warn};

/// Render a document of the given type
///
/// Never fails: absent or blank values become bracketed placeholders, and
/// identical input always produces identical text.
pub fn render(document_type: DocumentType, values: &FormValues) -> GeneratedDocument {
    AgreementTerms::from_values(document_type, values).render()
}

/// Render from a raw type tag; unknown tags use the service template
pub fn render_tag(tag: &str, values: &FormValues) -> GeneratedDocument {
    render(DocumentType::parse_or_default(tag), values)
}

/// Required fields the renderer would fill with a placeholder
///
/// A field counts as supplied when any name feeding its slot has a value,
/// so canonical keys satisfy type-specific fields and vice versa.
pub fn missing_required<'a>(
    document_type: DocumentType,
    values: &FormValues,
    fields: &'a [FieldSpec],
) -> Vec<&'a FieldSpec> {
    fields
        .iter()
        .filter(|f| f.required)
        .filter(|f| {
            slot_for_field(document_type, &f.name)
                .map_or_else(|| values.get(&f.name).is_none(), |slot| slot.read(values).is_none())
        })
        .collect()
}

/// Prepares form schemas and renders documents
#[derive(Debug, Clone)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    /// Create a new Generator
    pub fn new(config: GeneratorConfig) -> Result<Self, GeneratorError> {
        config.validate().map_err(GeneratorError::Config)?;
        Ok(Self { config })
    }

    /// Create a Generator with default configuration
    pub fn default_config() -> Self {
        Self {
            config: GeneratorConfig::default(),
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Basic form for drafting without a sample document
    pub fn fields(&self, document_type: DocumentType) -> Vec<FieldSpec> {
        basic_fields(document_type)
    }

    /// Derive a form schema from a sample document
    ///
    /// Fields found by scanning the text itself take precedence; otherwise the
    /// detailed schema for the type is returned.
    pub fn analyze_sample(
        &self,
        document_type: DocumentType,
        text: &str,
    ) -> Result<ExtractedSchema, GeneratorError> {
        // 1. Length limit
        let length = text.chars().count();
        if length > self.config.max_sample_length {
            return Err(GeneratorError::TextTooLong(length, self.config.max_sample_length));
        }

        // 2. Keyword plausibility
        let report = check_plausibility(text, document_type);
        if !report.is_plausible() {
            warn!(
                "Sample rejected for {}: no domain or legal-structure words",
                document_type
            );
            return Err(GeneratorError::ImplausibleSample(document_type));
        }
        debug!(
            "Sample plausible for {}: {} domain words, {} legal words",
            document_type,
            report.matching_keywords.len(),
            report.legal_words.len()
        );

        // 3. Content scan, then static fallback
        let schema = match self.scan(document_type, text) {
            Some(scanned) => scanned,
            None => detailed_schema(document_type),
        };

        if schema.fields.is_empty() {
            return Err(GeneratorError::NoFieldsExtracted(document_type));
        }

        info!(
            "Extracted {} fields for {} (from content: {})",
            schema.fields.len(),
            document_type,
            schema.from_content
        );
        Ok(schema)
    }

    fn scan(&self, document_type: DocumentType, text: &str) -> Option<ExtractedSchema> {
        if !self.config.scan_content || text.trim().is_empty() {
            return None;
        }
        let scanned = scan_content(text, document_type);
        if scanned.fields.is_empty() {
            None
        } else {
            Some(scanned)
        }
    }

    /// Check required fields, then render
    pub fn generate(
        &self,
        document_type: DocumentType,
        values: &FormValues,
        fields: &[FieldSpec],
    ) -> Result<GeneratedDocument, GeneratorError> {
        if self.config.enforce_required_fields {
            let missing: Vec<String> = missing_required(document_type, values, fields)
                .into_iter()
                .map(|f| f.label.clone())
                .collect();
            if !missing.is_empty() {
                warn!("Generation blocked, {} required fields blank", missing.len());
                return Err(GeneratorError::MissingRequiredFields(missing));
            }
        }

        let document = render(document_type, values);
        info!(
            "Generated {} ({} chars, {} values)",
            document_type.display_name(),
            document.text().len(),
            values.len()
        );
        Ok(document)
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::default_config()
    }
}
