//! Analyze command implementation.

use crate::cli::AnalyzeArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use lexdoc_client::{AnalysisSession, ImageSource, Orchestrator};

/// Execute the analyze command.
pub async fn execute_analyze(args: AnalyzeArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let client_config = config.client_config(args.url.as_deref())?;
    let model = args
        .model
        .unwrap_or_else(|| client_config.ai_model.clone());
    let mut session = AnalysisSession::new(Orchestrator::new(client_config)?);

    let outcome = if args.demo {
        session.run_demo()
    } else {
        session
            .analyze(ImageSource::from_reference(&args.image), &model)
            .await?
    };

    println!("{}", formatter.format_analysis(outcome)?);
    Ok(())
}
