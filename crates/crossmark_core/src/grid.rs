//! The 3x3 grid and its placement/evaluation contract.

use super::coordinate::{CELL_COUNT, Coordinate, SIDE};
use super::{GameResult, Marker, OccupiedError, rules};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A single grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Unplayed.
    #[default]
    Empty,
    /// Held by a marker for the rest of the game.
    Occupied(Marker),
}

impl Cell {
    /// Marker in this cell, if any.
    pub fn marker(self) -> Option<Marker> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(marker) => Some(marker),
        }
    }

    /// Returns true if no marker has been placed here.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Glyph for display; a blank for empty cells.
    pub fn glyph(self) -> char {
        self.marker().map_or(' ', Marker::glyph)
    }
}

/// 3x3 tic-tac-toe grid.
///
/// Cells only ever go from [`Cell::Empty`] to [`Cell::Occupied`], and only
/// through [`Grid::place`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Grid {
    /// Cells in row-major order (0-8).
    cells: [Cell; CELL_COUNT],
}

impl Grid {
    /// Creates a grid with all 9 cells unoccupied.
    pub fn empty() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// Places `marker` at `at`.
    ///
    /// # Errors
    ///
    /// Returns [`OccupiedError`] if the cell already holds a marker; the grid
    /// is not modified.
    #[instrument(skip(self))]
    pub fn place(&mut self, at: Coordinate, marker: Marker) -> Result<(), OccupiedError> {
        let cell = &mut self.cells[at.index()];
        if let Cell::Occupied(occupant) = *cell {
            return Err(OccupiedError { at, occupant });
        }
        *cell = Cell::Occupied(marker);
        debug!(index = at.index(), "Cell occupied");
        Ok(())
    }

    /// Evaluates the grid from scratch.
    ///
    /// Lines are scanned rows top-to-bottom, then columns left-to-right,
    /// then the two diagonals; the first complete line decides the winner.
    #[instrument(skip(self), ret)]
    pub fn evaluate(&self) -> GameResult {
        if let Some(marker) = rules::winning_marker(self) {
            GameResult::Win(marker)
        } else if rules::is_full(self) {
            GameResult::Draw
        } else {
            GameResult::InProgress
        }
    }

    /// Cell at the given coordinate.
    pub fn cell(&self, at: Coordinate) -> Cell {
        self.cells[at.index()]
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Returns true if every cell is occupied.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Coordinates of unoccupied cells, row-major.
    pub fn open_cells(&self) -> Vec<Coordinate> {
        Coordinate::ALL
            .into_iter()
            .filter(|at| self.cell(*at).is_empty())
            .collect()
    }

    /// Number of cells held by `marker`.
    pub fn count(&self, marker: Marker) -> usize {
        self.cells
            .iter()
            .filter(|cell| cell.marker() == Some(marker))
            .count()
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.cells.chunks(SIDE).enumerate() {
            if row > 0 {
                writeln!(f, "---+---+---")?;
            }
            writeln!(
                f,
                " {} | {} | {} ",
                cells[0].glyph(),
                cells[1].glyph(),
                cells[2].glyph()
            )?;
        }
        Ok(())
    }
}
