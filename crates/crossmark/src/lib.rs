//! Crossmark - two-player tic-tac-toe in the terminal
//!
//! Wires the [`crossmark_core`] turn controller to a console front end.
//!
//! # Architecture
//!
//! - **Console**: line-based prompts and board drawing
//! - **Config**: optional TOML file plus command-line overrides
//! - **Session**: consecutive games with an in-memory scoreboard

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod console;
mod session;

// Crate-level exports - CLI and configuration
pub use cli::Cli;
pub use config::{AppConfig, ConfigError};

// Crate-level exports - Console collaborator
pub use console::{ConsolePrompt, ConsoleView, board_text, parse_marker};

// Crate-level exports - Session management
pub use session::{Scoreboard, Session};
