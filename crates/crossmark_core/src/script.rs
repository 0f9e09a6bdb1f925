//! Deterministic collaborators for tests and replays.

use super::{
    Axis, Coordinate, Grid, InputClosed, InputProvider, Marker, OccupiedError, Outcome, Presenter,
};
use derive_getters::Getters;
use std::collections::VecDeque;
use tracing::trace;

/// Input provider that answers from pre-recorded queues.
///
/// Once a queue is exhausted the provider reports [`InputClosed`], the same
/// as a terminal reaching end of file.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    axes: VecDeque<usize>,
    markers: VecDeque<Marker>,
    cell_requests: Vec<(String, Axis)>,
    marker_requests: Vec<String>,
}

impl ScriptedInput {
    /// Creates a provider with nothing queued.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a move: the row answer followed by the column answer.
    pub fn play(mut self, row: usize, col: usize) -> Self {
        self.axes.extend([row, col]);
        self
    }

    /// Queues a sequence of moves.
    pub fn moves(self, moves: &[(usize, usize)]) -> Self {
        moves.iter().fold(self, |input, &(row, col)| input.play(row, col))
    }

    /// Queues a marker-choice answer.
    pub fn marker(mut self, marker: Marker) -> Self {
        self.markers.push_back(marker);
        self
    }

    /// Every cell request received, in order.
    pub fn cell_requests(&self) -> &[(String, Axis)] {
        &self.cell_requests
    }

    /// Names of players asked for a marker, in order.
    pub fn marker_requests(&self) -> &[String] {
        &self.marker_requests
    }

    /// Row/column answers not yet consumed.
    pub fn remaining(&self) -> usize {
        self.axes.len()
    }
}

impl InputProvider for ScriptedInput {
    fn request_cell_choice(&mut self, player_name: &str, axis: Axis) -> Result<usize, InputClosed> {
        self.cell_requests.push((player_name.to_string(), axis));
        let value = self.axes.pop_front().ok_or(InputClosed)?;
        trace!(player_name, %axis, value, "Scripted answer");
        Ok(value)
    }

    fn request_marker_choice(&mut self, player_name: &str) -> Result<Marker, InputClosed> {
        self.marker_requests.push(player_name.to_string());
        self.markers.pop_front().ok_or(InputClosed)
    }
}

/// Presenter that records everything it is shown.
#[derive(Debug, Clone, Default, Getters)]
pub struct RecordingPresenter {
    /// Snapshot of every rendered grid.
    renders: Vec<Grid>,
    /// Every rejected placement with the player it was reported to.
    rejections: Vec<(String, OccupiedError)>,
    /// Every announcement with the winner's name, if any.
    announcements: Vec<(Outcome, Option<String>)>,
}

impl RecordingPresenter {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Presenter for RecordingPresenter {
    fn render(&mut self, grid: &Grid) {
        self.renders.push(grid.clone());
    }

    fn reject(&mut self, player_name: &str, err: &OccupiedError) {
        self.rejections.push((player_name.to_string(), *err));
    }

    fn announce(&mut self, outcome: Outcome, winner_name: Option<&str>) {
        self.announcements
            .push((outcome, winner_name.map(str::to_string)));
    }
}

/// Builds a grid from a 9-character row-major pattern of `X`, `O` and `.`.
///
/// # Panics
///
/// Panics on a pattern of the wrong length or with other characters.
#[track_caller]
pub fn grid(pattern: &str) -> Grid {
    let symbols: Vec<char> = pattern.chars().collect();
    assert_eq!(symbols.len(), 9, "pattern {pattern:?} must have 9 cells");
    let mut grid = Grid::empty();
    for (at, symbol) in Coordinate::ALL.into_iter().zip(symbols) {
        let marker = match symbol {
            'X' => Marker::X,
            'O' => Marker::O,
            '.' => continue,
            other => panic!("unexpected {other:?} in pattern {pattern:?}"),
        };
        if let Err(err) = grid.place(at, marker) {
            panic!("{err}");
        }
    }
    grid
}
