//! LexDoc CLI - Command-line interface for document analysis and drafting.

use clap::Parser;
use lexdoc_cli::commands;
use lexdoc_cli::{Cli, Command, Config, Formatter};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> lexdoc_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Logs to stderr
    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(std::io::stderr)
        .init();

    // Load config
    let config_path = match &cli.config {
        Some(path) => PathBuf::from(path),
        None => Config::path()?,
    };
    let mut config = Config::load_from(&config_path)?;

    // Override profile if specified
    if let Some(profile_name) = cli.profile {
        config.switch_profile(profile_name)?;
    }

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Command::Analyze(args) => commands::execute_analyze(args, &config, &formatter).await?,
        Command::Generate(args) => commands::execute_generate(args, &config, &formatter).await?,
        Command::Fields(args) => commands::execute_fields(args, &formatter)?,
        Command::Check(args) => commands::execute_check(args, &formatter)?,
        Command::Health(args) => commands::execute_health(args, &config, &formatter).await?,
        Command::Profile(args) => {
            commands::execute_profile(args, &mut config, &config_path, &formatter)?
        }
    }

    Ok(())
}
