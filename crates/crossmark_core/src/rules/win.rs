//! Win detection.

use crate::{CELL_COUNT, Cell, Grid, Marker};
use tracing::trace;

/// Three cell indices that win when held by one marker.
pub type Line = [usize; 3];

/// The eight winning lines, in scan order: rows top-to-bottom, columns
/// left-to-right, then the main and anti diagonals.
pub const LINES: [Line; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Returns the marker holding the first complete line, if any.
///
/// Does not assume only one marker can be winning; the scan order of
/// [`LINES`] decides which is reported.
pub fn winning_marker(grid: &Grid) -> Option<Marker> {
    let cells = grid.cells();
    LINES.iter().find_map(|&line| {
        let marker = line_owner(cells, line)?;
        trace!(?line, %marker, "Complete line");
        Some(marker)
    })
}

/// The marker holding all three cells of `line`, if one does.
pub fn line_owner(cells: &[Cell; CELL_COUNT], [a, b, c]: Line) -> Option<Marker> {
    match cells[a] {
        Cell::Occupied(marker) if cells[b] == cells[a] && cells[c] == cells[a] => Some(marker),
        _ => None,
    }
}
