//! Command-line interface for crossmark.

use crate::console::parse_marker;
use clap::Parser;
use crossmark_core::Marker;
use std::path::PathBuf;

/// Crossmark - two-player tic-tac-toe in the terminal
#[derive(Parser, Debug, Clone)]
#[command(name = "crossmark")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (ignored if missing)
    #[arg(short, long, default_value = "crossmark.toml")]
    pub config: PathBuf,

    /// Name of the first player (skips the name prompt)
    #[arg(long)]
    pub first_player: Option<String>,

    /// Name of the second player (skips the name prompt)
    #[arg(long)]
    pub second_player: Option<String>,

    /// Marker for the first player, x or o (skips the marker prompt)
    #[arg(long, value_parser = parse_marker_arg)]
    pub first_marker: Option<Marker>,

    /// Do not clear the screen before drawing the board
    #[arg(long)]
    pub no_clear: bool,

    /// Play a single game without offering a rematch
    #[arg(long)]
    pub single: bool,

    /// Log filter used when RUST_LOG is unset (logs go to stderr)
    #[arg(long, default_value = "warn")]
    pub log_filter: String,
}

fn parse_marker_arg(text: &str) -> Result<Marker, String> {
    parse_marker(text).ok_or_else(|| format!("expected x or o, got {text:?}"))
}
