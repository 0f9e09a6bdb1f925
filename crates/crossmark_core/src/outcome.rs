//! Derived game results.

use super::Marker;
use serde::{Deserialize, Serialize};

/// Result of evaluating a grid at any point of the game.
///
/// Never stored: [`Grid::evaluate`](crate::Grid::evaluate) recomputes it
/// after each move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// No line is complete and at least one cell is open.
    InProgress,
    /// The marker holds a complete line.
    Win(Marker),
    /// Every cell is occupied and no line is complete.
    Draw,
}

impl GameResult {
    /// Returns the terminal outcome, or `None` while the game is in progress.
    pub fn outcome(self) -> Option<Outcome> {
        match self {
            GameResult::InProgress => None,
            GameResult::Win(marker) => Some(Outcome::Win(marker)),
            GameResult::Draw => Some(Outcome::Draw),
        }
    }

    /// Returns true once the game cannot continue.
    pub fn is_terminal(self) -> bool {
        self.outcome().is_some()
    }
}

impl From<Outcome> for GameResult {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Win(marker) => GameResult::Win(marker),
            Outcome::Draw => GameResult::Draw,
        }
    }
}

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Marker completed a line.
    Win(Marker),
    /// Grid filled with no complete line.
    Draw,
}

impl Outcome {
    /// Returns the winning marker if there is one.
    pub fn winner(&self) -> Option<Marker> {
        match self {
            Outcome::Win(marker) => Some(*marker),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Win(marker) => write!(f, "{} wins", marker),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}
