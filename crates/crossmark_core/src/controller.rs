//! Turn controller: the state machine that drives a game to completion.
//!
//! ```text
//! AwaitingMove(X) ──place ok, in progress──▶ AwaitingMove(O) ──▶ …
//!        │  ▲
//!        │  └── cell occupied: re-prompt the same player
//!        └────── place ok, win/draw ──▶ Finished(outcome)
//! ```

#[cfg(debug_assertions)]
use super::invariants::{Placement, check_placement};
use super::{
    Axis, Coordinate, Grid, InputProvider, Marker, Outcome, Player, Players, Presenter, TurnError,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Where the controller is in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnState {
    /// Waiting for the player holding this marker to move.
    AwaitingMove(Marker),
    /// Game over. Terminal: no further moves are accepted.
    Finished(Outcome),
}

impl TurnState {
    /// Returns true once the game has finished.
    pub fn is_finished(self) -> bool {
        matches!(self, TurnState::Finished(_))
    }
}

/// Owns the grid for one game and alternates the two players until a win
/// or draw.
///
/// The player holding [`Marker::FIRST_TO_MOVE`] always moves first.
pub struct TurnController<I, P> {
    grid: Grid,
    players: Players,
    state: TurnState,
    announced: bool,
    input: I,
    presenter: P,
}

impl<I: InputProvider, P: Presenter> TurnController<I, P> {
    /// Creates a controller with an empty grid, awaiting the first move.
    #[instrument(
        skip_all,
        fields(first = %players.first().name(), second = %players.second().name())
    )]
    pub fn new(players: Players, input: I, presenter: P) -> Self {
        Self {
            grid: Grid::empty(),
            players,
            state: TurnState::AwaitingMove(Marker::FIRST_TO_MOVE),
            announced: false,
            input,
            presenter,
        }
    }

    /// Current state.
    pub fn state(&self) -> TurnState {
        self.state
    }

    /// The grid as it stands.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Both participants.
    pub fn players(&self) -> &Players {
        &self.players
    }

    /// The player whose move is awaited, or `None` once finished.
    pub fn active_player(&self) -> Option<&Player> {
        match self.state {
            TurnState::AwaitingMove(marker) => Some(self.players.by_marker(marker)),
            TurnState::Finished(_) => None,
        }
    }

    /// Plays one successful move for the active player.
    ///
    /// Occupied cells are reported to the presenter and the same player is
    /// asked again; the turn only ends once a placement succeeds. The grid
    /// is rendered after the placement.
    ///
    /// # Errors
    ///
    /// - [`TurnError::GameOver`] if the game has already finished.
    /// - [`TurnError::InputClosed`] if the input source ends mid-turn.
    #[instrument(skip(self), fields(state = ?self.state))]
    pub fn play_turn(&mut self) -> Result<TurnState, TurnError> {
        let marker = match self.state {
            TurnState::AwaitingMove(marker) => marker,
            TurnState::Finished(_) => return Err(TurnError::GameOver),
        };
        let player = self.players.by_marker(marker);

        loop {
            let row = self.input.request_cell_choice(player.name(), Axis::Row)?;
            let col = self.input.request_cell_choice(player.name(), Axis::Column)?;
            let at = Coordinate::new(row, col);

            #[cfg(debug_assertions)]
            let before = self.grid.clone();
            match self.grid.place(at, marker) {
                Ok(()) => {
                    #[cfg(debug_assertions)]
                    assert_eq!(
                        check_placement(&Placement {
                            before: &before,
                            after: &self.grid,
                        }),
                        Ok(()),
                        "grid invariants violated"
                    );
                    debug!(player = %player.name(), %marker, %at, "Move placed");
                    break;
                }
                Err(err) => {
                    warn!(player = %player.name(), %err, "Cell occupied, asking again");
                    self.presenter.reject(player.name(), &err);
                }
            }
        }

        self.presenter.render(&self.grid);

        self.state = match self.grid.evaluate().outcome() {
            Some(outcome) => {
                info!(%outcome, "Game finished");
                TurnState::Finished(outcome)
            }
            None => TurnState::AwaitingMove(marker.opponent()),
        };
        Ok(self.state)
    }

    /// Drives the game to completion and announces the result.
    ///
    /// Renders the grid once up front, plays turns until the game finishes,
    /// then calls [`Presenter::announce`] exactly once.
    ///
    /// # Errors
    ///
    /// Returns [`TurnError::InputClosed`] if the input source ends before
    /// the game does. Nothing is announced in that case.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<Outcome, TurnError> {
        if !self.state.is_finished() {
            info!("Game started");
            self.presenter.render(&self.grid);
        }

        let outcome = loop {
            if let TurnState::Finished(outcome) = self.state {
                break outcome;
            }
            self.play_turn()?;
        };

        if !self.announced {
            let winner_name = outcome
                .winner()
                .map(|marker| self.players.by_marker(marker).name().as_str());
            self.presenter.announce(outcome, winner_name);
            self.announced = true;
        }
        Ok(outcome)
    }

    /// Releases the grid and collaborators.
    pub fn into_parts(self) -> (Grid, I, P) {
        (self.grid, self.input, self.presenter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::{RecordingPresenter, ScriptedInput};
    use crate::{Cell, OccupiedError};

    fn players() -> Players {
        Players::new("Ada", Marker::X, "Grace")
    }

    #[test]
    fn test_starts_awaiting_first_marker() {
        let controller =
            TurnController::new(players(), ScriptedInput::new(), RecordingPresenter::new());
        assert_eq!(controller.state(), TurnState::AwaitingMove(Marker::X));
        assert_eq!(controller.active_player().map(|p| p.name().as_str()), Some("Ada"));
    }

    #[test]
    fn test_o_chooser_moves_second() {
        let players = Players::new("Ada", Marker::O, "Grace");
        let controller =
            TurnController::new(players, ScriptedInput::new(), RecordingPresenter::new());
        assert_eq!(controller.active_player().map(|p| p.name().as_str()), Some("Grace"));
    }

    #[test]
    fn test_turn_switches_player() {
        let input = ScriptedInput::new().play(1, 1);
        let mut controller = TurnController::new(players(), input, RecordingPresenter::new());
        assert_eq!(controller.play_turn(), Ok(TurnState::AwaitingMove(Marker::O)));
        assert_eq!(
            controller.grid().cell(Coordinate::new(1, 1)),
            Cell::Occupied(Marker::X)
        );
    }

    #[test]
    fn test_occupied_cell_reprompts_same_player() {
        let input = ScriptedInput::new().moves(&[(0, 0), (0, 0), (2, 2)]);
        let mut presenter = RecordingPresenter::new();
        let mut controller = TurnController::new(players(), input, &mut presenter);

        controller.play_turn().expect("X moves");
        assert_eq!(controller.play_turn(), Ok(TurnState::AwaitingMove(Marker::X)));
        assert_eq!(
            controller.grid().cell(Coordinate::new(0, 0)),
            Cell::Occupied(Marker::X)
        );
        assert_eq!(
            controller.grid().cell(Coordinate::new(2, 2)),
            Cell::Occupied(Marker::O)
        );
        drop(controller);

        assert_eq!(
            presenter.rejections(),
            &vec![(
                "Grace".to_string(),
                OccupiedError {
                    at: Coordinate::new(0, 0),
                    occupant: Marker::X,
                }
            )]
        );
    }

    #[test]
    fn test_play_turn_after_finish_is_rejected() {
        let input = ScriptedInput::new().moves(&[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2), (2, 2)]);
        let mut controller = TurnController::new(players(), input, RecordingPresenter::new());
        let outcome = controller.run().expect("scripted game");
        assert_eq!(outcome, Outcome::Win(Marker::X));

        let before = controller.grid().clone();
        assert_eq!(controller.play_turn(), Err(TurnError::GameOver));
        assert_eq!(controller.grid(), &before);
        assert_eq!(controller.active_player(), None);
    }

    #[test]
    fn test_closed_input_stops_without_announcing() {
        let input = ScriptedInput::new().play(1, 1);
        let mut presenter = RecordingPresenter::new();
        let mut controller = TurnController::new(players(), input, &mut presenter);
        assert_eq!(controller.run(), Err(TurnError::InputClosed));
        assert_eq!(controller.state(), TurnState::AwaitingMove(Marker::O));
        drop(controller);
        assert!(presenter.announcements().is_empty());
    }
}
