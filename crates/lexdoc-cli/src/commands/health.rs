//! Health command implementation.

use crate::cli::HealthArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use lexdoc_client::Orchestrator;

/// Execute the health command.
///
/// An unreachable backend is reported as an error so scripts see a non-zero exit.
pub async fn execute_health(args: HealthArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let client_config = config.client_config(args.url.as_deref())?;
    let base = client_config.base().to_string();
    let orchestrator = Orchestrator::new(client_config)?;

    orchestrator.probe().await?;
    println!("{}", formatter.success(&format!("Backend at {} is healthy", base)));
    Ok(())
}
