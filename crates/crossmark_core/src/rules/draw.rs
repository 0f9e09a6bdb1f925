//! Draw detection.

use crate::Grid;

/// Checks if every cell is occupied.
///
/// A full grid with no winning line is a draw.
pub fn is_full(grid: &Grid) -> bool {
    grid.cells().iter().all(|cell| !cell.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::winning_marker;
    use crate::script::grid;

    fn is_draw(grid: &Grid) -> bool {
        is_full(grid) && winning_marker(grid).is_none()
    }

    #[test]
    fn test_empty_grid_not_full() {
        assert!(!is_full(&Grid::empty()));
    }

    #[test]
    fn test_partial_grid_not_full() {
        assert!(!is_full(&grid("XO.OX....")));
    }

    #[test]
    fn test_draw_detection() {
        assert!(is_draw(&grid("XOXOXOOXO")));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let full_with_win = grid("XXXOOXOXO");
        assert!(is_full(&full_with_win));
        assert!(!is_draw(&full_with_win));
    }
}
