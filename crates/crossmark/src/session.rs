//! A run of consecutive games between the same two people.

use crate::config::AppConfig;
use crate::console::{ConsolePrompt, ConsoleView};
use crossmark_core::{Marker, Outcome, Players, TurnController, TurnError};
use std::collections::BTreeMap;
use std::io::{BufRead, Write};
use tracing::{info, instrument};

const DEFAULT_FIRST_NAME: &str = "Player 1";
const DEFAULT_SECOND_NAME: &str = "Player 2";

/// Results for the current session. Kept in memory only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scoreboard {
    wins: BTreeMap<String, u32>,
    draws: u32,
    games: u32,
}

impl Scoreboard {
    /// Records a finished game.
    pub fn record(&mut self, outcome: Outcome, winner_name: Option<&str>) {
        self.games += 1;
        match (outcome, winner_name) {
            (Outcome::Win(_), Some(name)) => *self.wins.entry(name.to_string()).or_default() += 1,
            (Outcome::Win(_), None) => {}
            (Outcome::Draw, _) => self.draws += 1,
        }
    }

    /// Games won by `name`.
    pub fn wins(&self, name: &str) -> u32 {
        self.wins.get(name).copied().unwrap_or_default()
    }

    /// Games drawn.
    pub fn draws(&self) -> u32 {
        self.draws
    }

    /// Games played.
    pub fn games(&self) -> u32 {
        self.games
    }

    /// One line summary, players in turn order.
    pub fn summary(&self, players: &Players) -> String {
        let [leader, follower] = players.in_turn_order();
        format!(
            "Score after {} game{}: {} {} - {} {}, draws {}",
            self.games,
            if self.games == 1 { "" } else { "s" },
            leader.name(),
            self.wins(leader.name()),
            self.wins(follower.name()),
            follower.name(),
            self.draws,
        )
    }
}

/// Plays games on the console until the players stop or input ends.
pub struct Session<R, W, V> {
    config: AppConfig,
    prompt: ConsolePrompt<R, W>,
    view: ConsoleView<V>,
    scoreboard: Scoreboard,
}

impl<R: BufRead, W: Write, V: Write> Session<R, W, V> {
    /// Creates a session with an empty scoreboard.
    pub fn new(config: AppConfig, prompt: ConsolePrompt<R, W>, view: ConsoleView<V>) -> Self {
        Self {
            config,
            prompt,
            view,
            scoreboard: Scoreboard::default(),
        }
    }

    /// Scores so far.
    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// Sets up the players, then plays until no rematch is wanted.
    ///
    /// # Errors
    ///
    /// Returns [`TurnError::InputClosed`] if input ends; games already
    /// finished stay on the scoreboard.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<&Scoreboard, TurnError> {
        let players = self.setup_players()?;
        info!(
            x = %players.by_marker(Marker::X).name(),
            o = %players.by_marker(Marker::O).name(),
            "Session started"
        );

        loop {
            let mut controller =
                TurnController::new(players.clone(), &mut self.prompt, &mut self.view);
            let outcome = controller.run()?;

            let winner_name = outcome.winner().map(|m| players.by_marker(m).name().as_str());
            self.scoreboard.record(outcome, winner_name);
            self.view.message(&self.scoreboard.summary(&players));

            if !*self.config.rematch_prompt() || !self.prompt.confirm("Play again?")? {
                break;
            }
        }

        info!(games = self.scoreboard.games(), "Session over");
        Ok(&self.scoreboard)
    }

    fn setup_players(&mut self) -> Result<Players, TurnError> {
        let first = match self.config.first_player() {
            Some(name) => name.clone(),
            None => self
                .prompt
                .request_name("First player, enter your name", DEFAULT_FIRST_NAME)?,
        };
        let second = match self.config.second_player() {
            Some(name) => name.clone(),
            None => {
                let default = if first == DEFAULT_SECOND_NAME {
                    DEFAULT_FIRST_NAME
                } else {
                    DEFAULT_SECOND_NAME
                };
                self.prompt
                    .request_name("Second player, enter your name", default)?
            }
        };
        let second = if second == first {
            format!("{second} (2)")
        } else {
            second
        };

        Ok(Players::choose(
            &first,
            &second,
            *self.config.first_marker(),
            &mut self.prompt,
        )?)
    }

    /// Releases the console streams.
    pub fn into_parts(self) -> (ConsolePrompt<R, W>, ConsoleView<V>, Scoreboard) {
        (self.prompt, self.view, self.scoreboard)
    }
}
