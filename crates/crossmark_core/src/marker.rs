//! The two markers players place on the grid.

use serde::{Deserialize, Serialize};

/// Symbol identifying which player occupies a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Marker {
    /// Marker X (moves first).
    #[serde(alias = "x")]
    X,
    /// Marker O (moves second).
    #[serde(alias = "o")]
    O,
}

impl Marker {
    /// The marker whose holder makes the opening move.
    pub const FIRST_TO_MOVE: Marker = Marker::X;

    /// Returns the opposing marker.
    pub fn opponent(self) -> Self {
        match self {
            Marker::X => Marker::O,
            Marker::O => Marker::X,
        }
    }

    /// Printable glyph for this marker.
    pub fn glyph(self) -> char {
        match self {
            Marker::X => 'X',
            Marker::O => 'O',
        }
    }
}

impl std::fmt::Display for Marker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.glyph())
    }
}
