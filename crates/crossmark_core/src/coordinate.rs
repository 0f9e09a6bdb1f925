//! Row/column addressing for the 3x3 grid.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Number of rows (and columns) on the grid.
pub const SIDE: usize = 3;

/// Number of cells on the grid.
pub const CELL_COUNT: usize = SIDE * SIDE;

/// A cell address: `row` and `col` are both in `0..3`.
///
/// Cells are numbered row-major, so the index of a coordinate is
/// `row * 3 + col`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    row: usize,
    col: usize,
}

impl Coordinate {
    /// All 9 coordinates in row-major order.
    pub const ALL: [Coordinate; CELL_COUNT] = [
        Coordinate { row: 0, col: 0 },
        Coordinate { row: 0, col: 1 },
        Coordinate { row: 0, col: 2 },
        Coordinate { row: 1, col: 0 },
        Coordinate { row: 1, col: 1 },
        Coordinate { row: 1, col: 2 },
        Coordinate { row: 2, col: 0 },
        Coordinate { row: 2, col: 1 },
        Coordinate { row: 2, col: 2 },
    ];

    /// Creates a coordinate from a row and column.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is outside `0..3`. Input collaborators only
    /// ever hand out values in range, so this is a caller bug.
    #[track_caller]
    pub fn new(row: usize, col: usize) -> Self {
        match Self::try_new(row, col) {
            Some(at) => at,
            None => panic!("coordinate ({row}, {col}) is off the grid"),
        }
    }

    /// Creates a coordinate, or `None` if either axis is out of range.
    pub fn try_new(row: usize, col: usize) -> Option<Self> {
        (row < SIDE && col < SIDE).then_some(Self { row, col })
    }

    /// Creates a coordinate from a row-major cell index (0-8).
    #[instrument]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Row-major cell index (0-8).
    pub fn index(self) -> usize {
        self.row * SIDE + self.col
    }

    /// Row (0-2).
    pub fn row(self) -> usize {
        self.row
    }

    /// Column (0-2).
    pub fn col(self) -> usize {
        self.col
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "row {}, column {}", self.row, self.col)
    }
}
