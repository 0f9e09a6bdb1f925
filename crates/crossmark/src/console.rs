//! Terminal collaborator: prompts on one stream, board drawing on another.

use crossmark_core::{
    Axis, Grid, InputClosed, InputProvider, Marker, OccupiedError, Outcome, Presenter, SIDE,
};
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use std::io::{self, BufRead, Write};
use tracing::{debug, instrument, warn};

/// Parses a marker choice: `x`/`o` in any case, or `0`/`1`.
pub fn parse_marker(text: &str) -> Option<Marker> {
    match text.trim().to_ascii_lowercase().as_str() {
        "x" | "0" => Some(Marker::X),
        "o" | "1" => Some(Marker::O),
        _ => None,
    }
}

/// Reads player choices line by line, re-prompting until the answer is
/// well-formed.
///
/// End of input (or a broken stream) is reported as [`InputClosed`].
pub struct ConsolePrompt<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> ConsolePrompt<R, W> {
    /// Creates a prompt over the given streams.
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Prints `prompt` and returns the next line, trimmed.
    ///
    /// A line that is not valid UTF-8 has already been consumed when the
    /// read fails, so it is reported and the prompt repeated.
    fn ask(&mut self, prompt: &str) -> Result<String, InputClosed> {
        loop {
            write!(self.writer, "{prompt}").map_err(|_| InputClosed)?;
            self.writer.flush().map_err(|_| InputClosed)?;

            let mut line = String::new();
            match self.reader.read_line(&mut line) {
                Ok(0) => {
                    debug!("End of input");
                    return Err(InputClosed);
                }
                Ok(_) => return Ok(line.trim().to_string()),
                Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                    debug!(error = %e, "Discarding unreadable line");
                    self.say("Please enter valid text.")?;
                }
                Err(e) => {
                    warn!(error = %e, "Failed to read input");
                    return Err(InputClosed);
                }
            }
        }
    }

    fn say(&mut self, message: &str) -> Result<(), InputClosed> {
        writeln!(self.writer, "{message}").map_err(|_| InputClosed)
    }

    /// Asks for a display name; a blank answer takes `default`.
    #[instrument(skip(self))]
    pub fn request_name(&mut self, prompt: &str, default: &str) -> Result<String, InputClosed> {
        let answer = self.ask(&format!("{prompt} [{default}]: "))?;
        if answer.is_empty() {
            Ok(default.to_string())
        } else {
            Ok(answer)
        }
    }

    /// Asks a yes/no question until the answer is one of them.
    #[instrument(skip(self))]
    pub fn confirm(&mut self, prompt: &str) -> Result<bool, InputClosed> {
        loop {
            match self.ask(&format!("{prompt} [y/n]: "))?.to_ascii_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => self.say("Please answer y or n.")?,
            }
        }
    }

    /// Releases the underlying streams.
    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

impl<R: BufRead, W: Write> InputProvider for ConsolePrompt<R, W> {
    fn request_cell_choice(&mut self, player_name: &str, axis: Axis) -> Result<usize, InputClosed> {
        let prompt = format!("{player_name}, choose a {axis} (0-{}): ", SIDE - 1);
        loop {
            let answer = self.ask(&prompt)?;
            match answer.parse::<usize>() {
                Ok(value) if value < SIDE => return Ok(value),
                Ok(_) => self.say(&format!("The {axis} must be between 0 and {}.", SIDE - 1))?,
                Err(_) => self.say("Please enter a number.")?,
            }
        }
    }

    fn request_marker_choice(&mut self, player_name: &str) -> Result<Marker, InputClosed> {
        let prompt = format!("{player_name}, play X or O? (X moves first) [x/o]: ");
        loop {
            let answer = self.ask(&prompt)?;
            match parse_marker(&answer) {
                Some(marker) => return Ok(marker),
                None => self.say("Please enter x or o.")?,
            }
        }
    }
}

/// Draws the board and results.
pub struct ConsoleView<W> {
    writer: W,
    clear_screen: bool,
}

impl<W: Write> ConsoleView<W> {
    /// Creates a view; with `clear_screen` the terminal is wiped before each
    /// board.
    pub fn new(writer: W, clear_screen: bool) -> Self {
        Self {
            writer,
            clear_screen,
        }
    }

    /// Prints a line of text.
    pub fn message(&mut self, text: &str) {
        if let Err(e) = writeln!(self.writer, "{text}") {
            warn!(error = %e, "Failed to write to terminal");
        }
    }

    /// Releases the underlying stream.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn draw(&mut self, grid: &Grid) -> io::Result<()> {
        if self.clear_screen {
            execute!(self.writer, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        write!(self.writer, "{}", board_text(grid))?;
        self.writer.flush()
    }
}

impl<W: Write> Presenter for ConsoleView<W> {
    fn render(&mut self, grid: &Grid) {
        if let Err(e) = self.draw(grid) {
            warn!(error = %e, "Failed to draw board");
        }
    }

    fn reject(&mut self, player_name: &str, err: &OccupiedError) {
        self.message(&format!(
            "{player_name}, {} is already taken by {}. Pick another cell.",
            err.at, err.occupant
        ));
    }

    fn announce(&mut self, outcome: Outcome, winner_name: Option<&str>) {
        let text = match (outcome, winner_name) {
            (Outcome::Win(marker), Some(name)) => format!("{name} ({marker}) wins!"),
            (Outcome::Win(marker), None) => format!("{marker} wins!"),
            (Outcome::Draw, _) => "It's a draw!".to_string(),
        };
        self.message(&text);
    }
}

/// Board with row and column numbers; blank cells are spaces.
///
/// ```text
///    0   1   2
/// 0  X |   | O
///   ---+---+---
/// 1    | X |
///   ---+---+---
/// 2    |   |
/// ```
pub fn board_text(grid: &Grid) -> String {
    let mut text = String::from("   0   1   2\n");
    for (row, cells) in grid.cells().chunks(SIDE).enumerate() {
        if row > 0 {
            text.push_str("  ---+---+---\n");
        }
        let line = format!(
            "{row}  {} | {} | {}",
            cells[0].glyph(),
            cells[1].glyph(),
            cells[2].glyph()
        );
        text.push_str(line.trim_end());
        text.push('\n');
    }
    text
}
