//! Check command implementation.

use crate::cli::CheckArgs;
use crate::error::Result;
use crate::output::Formatter;
use lexdoc_generator::check_plausibility;
use std::fs;

/// Execute the check command.
pub fn execute_check(args: CheckArgs, formatter: &Formatter) -> Result<()> {
    let text = fs::read_to_string(&args.sample)?;
    let report = check_plausibility(&text, args.document_type.into());
    println!("{}", formatter.format_plausibility(&report)?);
    Ok(())
}
