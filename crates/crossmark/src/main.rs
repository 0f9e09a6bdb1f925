//! Crossmark - two-player tic-tac-toe in the terminal.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use crossmark::{AppConfig, Cli, ConsolePrompt, ConsoleView, Session};
use crossmark_core::TurnError;
use std::io;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(&cli.log_filter);

    let config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?
        .with_cli(&cli)
        .context("applying command-line options")?;

    play(config)
}

/// Sends logs to stderr so they never interleave with the board.
fn init_tracing(fallback_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(fallback_filter)),
        )
        .with_writer(io::stderr)
        .init();
}

#[instrument(skip_all)]
fn play(config: AppConfig) -> Result<()> {
    let prompt = ConsolePrompt::new(io::stdin().lock(), io::stdout());
    let view = ConsoleView::new(io::stdout(), *config.clear_screen());
    let mut session = Session::new(config, prompt, view);

    match session.run() {
        Ok(scoreboard) => {
            info!(games = scoreboard.games(), "Goodbye");
            Ok(())
        }
        Err(TurnError::InputClosed) => {
            info!("Input closed, exiting");
            Ok(())
        }
        Err(e) => Err(e).context("game aborted"),
    }
}
