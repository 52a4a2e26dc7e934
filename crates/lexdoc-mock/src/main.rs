//! LexDoc mock backend
//!
//! Starts the mock HTTP server.

use lexdoc_mock::{start_server, MockConfig, MockError};
use std::env;
use std::process;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run() -> Result<(), MockError> {
    let args: Vec<String> = env::args().collect();

    let config = if args.len() > 2 && args[1] == "--config" {
        MockConfig::from_file(&args[2])?
    } else if args.len() > 1 && args[1] == "--help" {
        print_help();
        process::exit(0);
    } else {
        MockConfig::default()
    };

    start_server(config).await
}

fn print_help() {
    println!("LexDoc Mock Backend - canned document analysis for demos and tests");
    println!();
    println!("USAGE:");
    println!("    lexdoc-mock [--config <path-to-config.toml>]");
    println!();
    println!("OPTIONS:");
    println!("    --config <file>    Load configuration from TOML file");
    println!("    --help             Print this help message");
    println!();
    println!("CONFIGURATION:");
    println!("    - bind_address: IP address to bind (default '127.0.0.1')");
    println!("    - bind_port: Port number (default 8000)");
    println!("    - response_delay_ms: Simulated processing time (default 2000)");
    println!("    - mode: 'fixed', 'demo' or 'failing' (default 'fixed')");
    println!();
}
