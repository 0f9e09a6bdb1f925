//! Capabilities the turn controller needs from the outside world.
//!
//! The core never reads a terminal or prints. It asks an [`InputProvider`]
//! for choices and hands grids and results to a [`Presenter`]. Console,
//! scripted, and any other front ends plug in here.

use super::{Grid, InputClosed, Marker, OccupiedError, Outcome};
use serde::{Deserialize, Serialize};

/// Which half of a coordinate is being requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// Row (0 = top).
    Row,
    /// Column (0 = left).
    Column,
}

impl Axis {
    /// Label shown in prompts.
    pub fn label(self) -> &'static str {
        match self {
            Axis::Row => "row",
            Axis::Column => "column",
        }
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Source of player choices.
///
/// Implementations must not return until they have a well-formed value.
/// Malformed or out-of-range input is re-prompted internally and never
/// reaches the core.
pub trait InputProvider {
    /// Asks `player_name` for one axis of their next move.
    ///
    /// Returns a value in `0..3`.
    fn request_cell_choice(&mut self, player_name: &str, axis: Axis) -> Result<usize, InputClosed>;

    /// Asks `player_name` which marker they want to play.
    fn request_marker_choice(&mut self, player_name: &str) -> Result<Marker, InputClosed>;
}

/// Sink for game state and results.
pub trait Presenter {
    /// Shows the grid. Called before the first move and after every
    /// successful placement.
    fn render(&mut self, grid: &Grid);

    /// Tells `player_name` their chosen cell is taken, before re-prompting.
    fn reject(&mut self, _player_name: &str, _err: &OccupiedError) {}

    /// Reports the final result. Called exactly once per game.
    fn announce(&mut self, outcome: Outcome, winner_name: Option<&str>);
}

impl<T: InputProvider + ?Sized> InputProvider for &mut T {
    fn request_cell_choice(&mut self, player_name: &str, axis: Axis) -> Result<usize, InputClosed> {
        (**self).request_cell_choice(player_name, axis)
    }

    fn request_marker_choice(&mut self, player_name: &str) -> Result<Marker, InputClosed> {
        (**self).request_marker_choice(player_name)
    }
}

impl<T: Presenter + ?Sized> Presenter for &mut T {
    fn render(&mut self, grid: &Grid) {
        (**self).render(grid)
    }

    fn reject(&mut self, player_name: &str, err: &OccupiedError) {
        (**self).reject(player_name, err)
    }

    fn announce(&mut self, outcome: Outcome, winner_name: Option<&str>) {
        (**self).announce(outcome, winner_name)
    }
}
