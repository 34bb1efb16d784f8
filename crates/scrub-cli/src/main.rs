mod cli;
mod commands;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use scrub_config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing (stderr, so stdout stays machine-readable)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::Cli::parse();

    if let cli::Commands::Completions { shell } = cli.command {
        let mut cmd = cli::Cli::command();
        clap_complete::generate(shell, &mut cmd, "scrub", &mut std::io::stdout());
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.command {
        cli::Commands::Scan {
            file,
            entities,
            show_values,
        } => commands::scan::handle(&config, file, entities, show_values).await,
        cli::Commands::Redact {
            file,
            entities,
            output_dir,
        } => commands::redact::handle(&config, file, entities, output_dir).await,
        cli::Commands::Config { path } => commands::config::handle(&config, cli.config, path),
        cli::Commands::Completions { .. } => Ok(()),
    }
}
