//! Properties that hold for every grid reachable by legal play.
//!
//! The turn controller checks these after each placement in debug builds.
//! They are plain predicates, so tests can also apply them to hand-built
//! grids.

use super::rules::{LINES, line_owner};
use super::{Cell, Grid, Marker};
use tracing::warn;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants checked together.
pub trait InvariantSet<S> {
    /// Checks every invariant in the set, collecting all violations.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Grid invariants
// ─────────────────────────────────────────────────────────────

/// Invariant: X has the same number of cells as O, or one more.
///
/// X always moves first and players alternate.
pub struct BalancedMarkers;

impl Invariant<Grid> for BalancedMarkers {
    fn holds(grid: &Grid) -> bool {
        let x_count = grid.count(Marker::X);
        let o_count = grid.count(Marker::O);
        let valid = x_count == o_count || x_count == o_count + 1;
        if !valid {
            warn!(x_count, o_count, "Marker balance violated");
        }
        valid
    }

    fn description() -> &'static str {
        "X holds as many cells as O, or one more"
    }
}

/// Invariant: at most one marker holds a complete line.
///
/// The game stops at the first completed line, so two winners are
/// unreachable.
pub struct SingleWinner;

impl Invariant<Grid> for SingleWinner {
    fn holds(grid: &Grid) -> bool {
        let cells = grid.cells();
        let mut winners = LINES.iter().filter_map(|&line| line_owner(cells, line));
        match winners.next() {
            Some(first) => winners.all(|marker| marker == first),
            None => true,
        }
    }

    fn description() -> &'static str {
        "At most one marker holds a complete line"
    }
}

/// All invariants of a single grid.
pub type GridInvariants = (BalancedMarkers, SingleWinner);

// ─────────────────────────────────────────────────────────────
//  Placement invariants
// ─────────────────────────────────────────────────────────────

/// A grid before and after one successful placement.
#[derive(Debug, Clone, Copy)]
pub struct Placement<'a> {
    /// Grid before the move.
    pub before: &'a Grid,
    /// Grid after the move.
    pub after: &'a Grid,
}

/// Invariant: occupied cells are never cleared or overwritten, and a
/// placement fills exactly one new cell.
pub struct MonotonicGrid;

impl<'a> Invariant<Placement<'a>> for MonotonicGrid {
    fn holds(placement: &Placement<'a>) -> bool {
        let mut newly_filled = 0;
        for (before, after) in placement.before.cells().iter().zip(placement.after.cells()) {
            match (before, after) {
                (Cell::Occupied(_), _) if before != after => return false,
                (Cell::Empty, Cell::Occupied(_)) => newly_filled += 1,
                _ => {}
            }
        }
        newly_filled == 1
    }

    fn description() -> &'static str {
        "Occupied cells never change and each placement fills exactly one cell"
    }
}

/// Checks every invariant over a placement.
pub fn check_placement(placement: &Placement<'_>) -> Result<(), Vec<InvariantViolation>> {
    let mut violations = GridInvariants::check_all(placement.after).err().unwrap_or_default();
    if !MonotonicGrid::holds(placement) {
        violations.push(InvariantViolation::new(MonotonicGrid::description()));
    }
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}
