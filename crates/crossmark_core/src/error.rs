//! Error types for grid placement and turn control.

use super::{Coordinate, Marker};
use derive_more::{Display, Error};

/// Attempted placement on a cell that already holds a marker.
///
/// The grid is left unchanged; the turn controller re-prompts the same
/// player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Cell at {} is already occupied by {}", at, occupant)]
pub struct OccupiedError {
    /// Where the placement was attempted.
    pub at: Coordinate,
    /// Marker already holding the cell.
    pub occupant: Marker,
}

/// The input source ended before supplying a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Input source closed")]
pub struct InputClosed;

/// Errors that stop the turn controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum TurnError {
    /// A move was requested after the game finished.
    #[display("Game is already over")]
    GameOver,

    /// The input collaborator can no longer supply moves.
    #[display("Input source closed mid-game")]
    InputClosed,
}

impl From<InputClosed> for TurnError {
    fn from(_: InputClosed) -> Self {
        TurnError::InputClosed
    }
}
