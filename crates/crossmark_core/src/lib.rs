//! Crossmark core - tic-tac-toe game logic
//!
//! Pure, I/O-free game engine for two players on a 3x3 grid.
//!
//! # Architecture
//!
//! - **Marker**: the two symbols, `X` (moves first) and `O`
//! - **Grid**: owns the 9 cells; placement and win/draw evaluation
//! - **Rules**: the eight winning lines and the full-board check
//! - **Turn Controller**: alternates players until a win or draw
//! - **Collaborators**: traits the controller uses to ask for moves and
//!   show results
//!
//! # Example
//!
//! ```
//! use crossmark_core::script::{RecordingPresenter, ScriptedInput};
//! use crossmark_core::{Marker, Outcome, Players, TurnController};
//!
//! let players = Players::new("Ada", Marker::X, "Grace");
//! let input = ScriptedInput::new().moves(&[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
//! let mut controller = TurnController::new(players, input, RecordingPresenter::new());
//!
//! assert_eq!(controller.run(), Ok(Outcome::Win(Marker::X)));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod collaborator;
mod controller;
mod coordinate;
mod error;
mod grid;
mod marker;
mod outcome;
mod player;

pub mod invariants;
pub mod rules;
pub mod script;

pub use collaborator::{Axis, InputProvider, Presenter};
pub use controller::{TurnController, TurnState};
pub use coordinate::{CELL_COUNT, Coordinate, SIDE};
pub use error::{InputClosed, OccupiedError, TurnError};
pub use grid::{Cell, Grid};
pub use marker::Marker;
pub use outcome::{GameResult, Outcome};
pub use player::{Player, Players};
