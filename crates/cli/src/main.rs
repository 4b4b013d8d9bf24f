//! Equipment RUL prediction CLI
//!
//! Terminal front for the session core: select an equipment model, run
//! an analysis, and render the predicted RUL with its priority tier,
//! alongside the catalog and maintenance-history surfaces.

mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use rul_session::SessionSettings;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Equipment RUL prediction CLI
#[derive(Parser)]
#[command(name = "rul")]
#[command(author, version, about = "CLI for the equipment RUL prediction dashboard", long_about = None)]
pub struct Cli {
    /// Inference API base URL (can also be set via RUL_API_URL env var)
    #[arg(long, env = "RUL_API_URL")]
    pub api_url: Option<String>,

    /// Sample dataset URL (can also be set via RUL_DATASET_URL env var)
    #[arg(long, env = "RUL_DATASET_URL")]
    pub dataset_url: Option<String>,

    /// Output format
    #[arg(long, short, global = true, default_value = "table")]
    pub format: output::OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run an analysis for an equipment model
    Analyze {
        /// Equipment model to analyze (e.g. "X9 1000")
        model: String,

        /// Telemetry signal to select for visualization
        #[arg(long)]
        signal: Option<String>,
    },

    /// List the equipment model catalog
    Models,

    /// List the telemetry signal catalog
    Signals,

    /// Show past maintenance history
    History,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(fmt::layer())
        .init();

    let cli = Cli::parse();

    let mut settings = SessionSettings::load()?;
    if let Some(api_url) = cli.api_url {
        settings.api_url = api_url;
    }
    if let Some(dataset_url) = cli.dataset_url {
        settings.dataset_url = dataset_url;
    }

    match cli.command {
        Commands::Analyze { model, signal } => {
            commands::analyze::run(&settings, &model, signal.as_deref(), cli.format).await?;
        }
        Commands::Models => commands::catalog::list_models(cli.format),
        Commands::Signals => commands::catalog::list_signals(cli.format),
        Commands::History => commands::history::show(cli.format),
    }

    Ok(())
}
