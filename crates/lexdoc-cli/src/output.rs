//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use lexdoc_client::AnalysisOutcome;
use lexdoc_domain::{FieldSpec, GeneratedDocument};
use lexdoc_generator::PlausibilityReport;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format an analysis outcome.
    pub fn format_analysis(&self, outcome: &AnalysisOutcome) -> Result<String> {
        let result = &outcome.result;
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "summary": result.summary,
                "key_points": result.key_points,
                "processing_method": result.processing_method,
                "demo": outcome.is_demo(),
                "fallback_reason": outcome.fallback.as_ref().map(|e| e.to_string()),
            }))?),
            OutputFormat::Quiet => {
                let mut lines = vec![result.summary.clone()];
                lines.extend(result.key_points.iter().cloned());
                Ok(lines.join("\n"))
            }
            OutputFormat::Table => {
                let mut out = String::new();
                if let Some(reason) = &outcome.fallback {
                    out.push_str(&self.warning(&format!("Demo result shown: {}", reason)));
                    out.push('\n');
                }
                out.push_str(&self.colorize("Summary", "cyan"));
                out.push('\n');
                out.push_str(&result.summary);
                out.push_str("\n\n");

                let mut builder = Builder::default();
                builder.push_record(["#", "Key Point"]);
                for (idx, point) in result.key_points.iter().enumerate() {
                    builder.push_record([(idx + 1).to_string(), point.clone()]);
                }
                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()));
                out.push_str(&table.to_string());
                out.push('\n');
                out.push_str(&self.info(&format!("Processed by {}", result.processing_method)));
                Ok(out)
            }
        }
    }

    /// Format form fields.
    pub fn format_fields(&self, fields: &[FieldSpec]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(fields)?),
            OutputFormat::Quiet => Ok(fields
                .iter()
                .map(|f| f.name.as_str())
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => {
                if fields.is_empty() {
                    return Ok(self.colorize("No fields found.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["Name", "Label", "Kind", "Required", "Found Value"]);
                for field in fields {
                    builder.push_record([
                        field.name.as_str(),
                        field.label.as_str(),
                        field.kind.as_str(),
                        if field.required { "yes" } else { "no" },
                        field.extracted_value.as_deref().unwrap_or(""),
                    ]);
                }

                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()));
                Ok(table.to_string())
            }
        }
    }

    /// Format a plausibility report.
    pub fn format_plausibility(&self, report: &PlausibilityReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "document_type": report.document_type,
                "plausible": report.is_plausible(),
                "matching_keywords": report.matching_keywords,
                "legal_words": report.legal_words,
            }))?),
            OutputFormat::Quiet => Ok(report.is_plausible().to_string()),
            OutputFormat::Table => {
                let verdict = if report.is_plausible() {
                    self.success(&format!(
                        "Looks like a {}",
                        report.document_type.display_name()
                    ))
                } else {
                    self.error(&format!(
                        "Does not look like a {}",
                        report.document_type.display_name()
                    ))
                };
                Ok(format!(
                    "{}\n  Domain keywords: {}\n  Legal words: {}",
                    verdict,
                    list_or_none(&report.matching_keywords),
                    list_or_none(&report.legal_words)
                ))
            }
        }
    }

    /// Format a generated document with the method that produced it.
    pub fn format_document(&self, document: &GeneratedDocument, method: &str) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "document_type": document.document_type(),
                "generation_method": method,
                "generated_document": document.text(),
            }))?),
            OutputFormat::Table | OutputFormat::Quiet => Ok(document.text().to_string()),
        }
    }

    /// Whether extra status lines should be printed.
    pub fn is_quiet(&self) -> bool {
        !matches!(self.format, OutputFormat::Table)
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

fn list_or_none(words: &[&str]) -> String {
    if words.is_empty() {
        "(none)".to_string()
    } else {
        words.join(", ")
    }
}
