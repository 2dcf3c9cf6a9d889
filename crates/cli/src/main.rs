//! FAQ Bot CLI
//!
//! Main entry point for the interactive FAQ assistant. Questions are
//! answered from the FAQ table, then the LLM, then a web search snippet.

mod commands;

use anyhow::Context;
use clap::Parser;
use commands::ChatCommand;
use faqbot_core::{config::AppConfig, logging};
use std::path::PathBuf;

/// FAQ Bot - answers questions from a FAQ table, an LLM and the web
#[derive(Parser, Debug)]
#[command(name = "faqbot")]
#[command(about = "Interactive FAQ assistant with LLM and web search fallback", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the FAQ CSV file (default: faq.csv)
    #[arg(short, long, env = "FAQBOT_FAQ_PATH")]
    faq: Option<PathBuf>,

    /// Path to config file (default: faqbot.yaml if present)
    #[arg(short, long, env = "FAQBOT_CONFIG")]
    config: Option<PathBuf>,

    /// Model identifier
    #[arg(short, long, env = "FAQBOT_MODEL")]
    model: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, env = "RUST_LOG")]
    log_level: Option<String>,

    /// Enable verbose output (sets log level to debug)
    #[arg(short, long)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, env = "NO_COLOR")]
    no_color: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command-line arguments first (needed for logging config)
    let cli = Cli::parse();

    let config = AppConfig::load(cli.config).context("Failed to load configuration")?;

    let config = config.with_overrides(
        cli.faq,
        cli.model,
        cli.log_level,
        cli.verbose,
        cli.no_color,
    );

    logging::init_logging(config.log_level.as_deref(), config.no_color)?;

    tracing::info!("FAQ Bot starting");
    tracing::debug!("FAQ file: {:?}", config.faq_path);
    tracing::debug!("Provider: {}", config.llm.provider);
    tracing::debug!("Model: {}", config.llm.model);

    let _span = tracing::info_span!("session").entered();

    let mut command = ChatCommand::prepare(&config).context("Failed to start chat session")?;
    let result = command.execute().await;

    match &result {
        Ok(_) => tracing::info!("Session closed"),
        Err(e) => tracing::error!("Session failed: {}", e),
    }

    Ok(result?)
}
