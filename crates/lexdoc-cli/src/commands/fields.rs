//! Fields command implementation.

use crate::cli::FieldsArgs;
use crate::error::Result;
use crate::output::Formatter;
use lexdoc_domain::DocumentType;
use lexdoc_generator::Generator;
use std::fs;

/// Execute the fields command.
pub fn execute_fields(args: FieldsArgs, formatter: &Formatter) -> Result<()> {
    let document_type: DocumentType = args.document_type.into();
    let generator = Generator::default();

    let fields = match &args.sample {
        Some(path) => {
            let text = fs::read_to_string(path)?;
            let schema = generator.analyze_sample(document_type, &text)?;
            if !formatter.is_quiet() && !schema.clauses.is_empty() {
                println!(
                    "{}",
                    formatter.info(&format!("Clauses: {}", schema.clauses.join(", ")))
                );
            }
            schema.fields
        }
        None => generator.fields(document_type),
    };

    println!("{}", formatter.format_fields(&fields)?);
    Ok(())
}
