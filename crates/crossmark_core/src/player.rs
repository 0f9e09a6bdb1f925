//! Participants and their marker assignment.

use super::{InputClosed, InputProvider, Marker};
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A named participant bound to a marker for the whole game.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters, new)]
pub struct Player {
    /// Display name.
    #[new(into)]
    name: String,
    /// Marker this player places.
    marker: Marker,
}

/// The two participants of a game, always holding opposite markers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Players {
    first: Player,
    second: Player,
}

impl Players {
    /// Binds the first participant to `first_marker` and the second to its
    /// opponent.
    pub fn new(
        first_name: impl Into<String>,
        first_marker: Marker,
        second_name: impl Into<String>,
    ) -> Self {
        Self {
            first: Player::new(first_name, first_marker),
            second: Player::new(second_name, first_marker.opponent()),
        }
    }

    /// Sets up players, asking the first participant for a marker unless one
    /// was pre-assigned. The second participant is never asked.
    #[instrument(skip(input))]
    pub fn choose<I: InputProvider + ?Sized>(
        first_name: &str,
        second_name: &str,
        preassigned: Option<Marker>,
        input: &mut I,
    ) -> Result<Self, InputClosed> {
        let first_marker = match preassigned {
            Some(marker) => marker,
            None => input.request_marker_choice(first_name)?,
        };
        debug!(%first_marker, "Markers assigned");
        Ok(Self::new(first_name, first_marker, second_name))
    }

    /// The participant who set up the game.
    pub fn first(&self) -> &Player {
        &self.first
    }

    /// The other participant.
    pub fn second(&self) -> &Player {
        &self.second
    }

    /// The participant holding `marker`.
    pub fn by_marker(&self, marker: Marker) -> &Player {
        if self.first.marker == marker {
            &self.first
        } else {
            &self.second
        }
    }

    /// Both participants, the one who moves first leading.
    pub fn in_turn_order(&self) -> [&Player; 2] {
        let leader = self.by_marker(Marker::FIRST_TO_MOVE);
        [leader, self.by_marker(Marker::FIRST_TO_MOVE.opponent())]
    }
}
