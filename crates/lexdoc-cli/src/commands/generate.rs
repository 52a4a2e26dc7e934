//! Generate command implementation.

use crate::cli::GenerateArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use lexdoc_client::{DocumentClient, GenerationMethod};
use lexdoc_domain::{DocumentType, FormValues};
use lexdoc_generator::{DraftSession, Generator, GeneratorConfig};
use std::fs;
use std::path::Path;

/// Execute the generate command.
pub async fn execute_generate(
    args: GenerateArgs,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    let document_type: DocumentType = args.document_type.into();

    // 1. Collect values, --set wins over the file
    let mut values = match &args.values {
        Some(path) => load_values(path)?,
        None => FormValues::new(),
    };
    for assignment in &args.set {
        let (name, value) = parse_assignment(assignment)?;
        values.set(name, value);
    }

    // 2. Load the form
    let generator_config = if args.allow_missing {
        GeneratorConfig::lenient()
    } else {
        GeneratorConfig::default()
    };
    let mut session = DraftSession::new(Generator::new(generator_config)?);
    session.select_type(document_type);
    match &args.sample {
        Some(path) => {
            let text = fs::read_to_string(path)?;
            session.load_sample(&text)?;
        }
        None => {
            session.use_basic_fields()?;
        }
    }
    for (name, value) in values.iter() {
        session.set_value(name, value);
    }

    // 3. Render locally, which also checks required fields
    let local = session.generate()?.clone();

    // 4. Optionally prefer the backend
    let (document, method) = if args.remote {
        let client = DocumentClient::new(config.client_config(None)?)?;
        let outcome = client.generate(document_type, session.values()).await;
        if let Some(reason) = &outcome.fallback {
            if !formatter.is_quiet() {
                eprintln!(
                    "{}",
                    formatter.warning(&format!("Backend generation failed, using local template: {}", reason))
                );
            }
        }
        (outcome.document, outcome.method.to_string())
    } else {
        (local, GenerationMethod::LocalTemplate.to_string())
    };

    let rendered = formatter.format_document(&document, &method)?;
    match &args.output {
        Some(path) => {
            fs::write(path, rendered)?;
            if !formatter.is_quiet() {
                println!(
                    "{}",
                    formatter.success(&format!(
                        "Wrote {} to {} ({})",
                        document_type.display_name(),
                        path,
                        method
                    ))
                );
            }
        }
        None => println!("{}", rendered),
    }

    Ok(())
}

/// Split `name=value`; the value may itself contain `=`.
pub fn parse_assignment(assignment: &str) -> Result<(String, String)> {
    let (name, value) = assignment.split_once('=').ok_or_else(|| {
        CliError::InvalidInput(format!("Expected NAME=VALUE, got '{}'", assignment))
    })?;
    let name = name.trim();
    if name.is_empty() {
        return Err(CliError::InvalidInput(format!(
            "Missing field name in '{}'",
            assignment
        )));
    }
    Ok((name.to_string(), value.to_string()))
}

/// Read field values from a flat JSON object or TOML table.
pub fn load_values(path: impl AsRef<Path>) -> Result<FormValues> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let is_toml = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

    if is_toml {
        Ok(toml::from_str(&contents)?)
    } else {
        Ok(serde_json::from_str(&contents)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_assignment() {
        assert_eq!(
            parse_assignment("monthlyRent=2000").unwrap(),
            ("monthlyRent".to_string(), "2000".to_string())
        );
        assert_eq!(
            parse_assignment("customTerms=a=b").unwrap().1,
            "a=b"
        );
        assert!(parse_assignment("no-equals").is_err());
        assert!(parse_assignment(" =value").is_err());
    }

    #[test]
    fn test_load_values_json() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"landlordName": "Alice", "tenantName": "Bob"}}"#).unwrap();

        let values = load_values(file.path()).unwrap();
        assert_eq!(values.get("landlordName"), Some("Alice"));
        assert_eq!(values.len(), 2);
    }

    #[test]
    fn test_load_values_toml() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "salary = \"$85,000\"\njobTitle = \"Engineer\"").unwrap();

        let values = load_values(file.path()).unwrap();
        assert_eq!(values.get("jobTitle"), Some("Engineer"));
    }

    #[test]
    fn test_load_values_rejects_nested_json() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"party": {{"name": "Alice"}}}}"#).unwrap();
        assert!(matches!(load_values(file.path()), Err(CliError::Serialization(_))));
    }
}
