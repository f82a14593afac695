//! Line-based terminal game loop.
//!
//! This is a presentation layer only: it parses input lines, forwards
//! moves to the core controller and prints whatever state comes back.

use crate::config::AppConfig;
use derive_more::Display;
use std::io::{BufRead, Write};
use std::str::FromStr;
use strictly_minimax::{GameMode, GameState, Position, Square, new_game, play, reset, set_mode};
use tracing::{debug, instrument, warn};

const HELP: &str = "\
Commands:
  <row> <col>     place your mark, rows and columns count from 0
  1-9             place your mark on the numbered square
  <label>         place your mark by name, e.g. center, top-left
  reset           start over in the current mode
  mode <mode>     switch to human_vs_ai or human_vs_human (starts over)
  help            show this message
  quit            leave the game";

/// One parsed line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Place the current player's mark.
    Place(Position),
    /// Start over in the current mode.
    Reset,
    /// Switch mode, starting over.
    Mode(GameMode),
    /// Show the command list.
    Help,
    /// Leave the game.
    Quit,
}

/// Input that could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum CommandError {
    /// Nothing but whitespace.
    #[display("Empty command")]
    Empty,
    /// A row/column pair outside the board.
    #[display("Row and column must be between 0 and 2")]
    OffBoard,
    /// Unknown mode name.
    #[display("Unknown mode {:?}, expected human_vs_ai or human_vs_human", _0)]
    UnknownMode(String),
    /// Anything else.
    #[display("Unrecognized command {:?}, type 'help' for a list", _0)]
    Unrecognized(String),
}

impl std::error::Error for CommandError {}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let words: Vec<&str> = line.split_whitespace().collect();
        match words.as_slice() {
            [] => Err(CommandError::Empty),
            ["quit" | "exit" | "q"] => Ok(Command::Quit),
            ["help" | "?"] => Ok(Command::Help),
            ["reset"] => Ok(Command::Reset),
            ["mode", name] => name
                .parse()
                .map(Command::Mode)
                .map_err(|_| CommandError::UnknownMode(name.to_string())),
            [row, col] => match (row.parse::<usize>(), col.parse::<usize>()) {
                (Ok(row), Ok(col)) => Position::from_coords(row, col)
                    .map(Command::Place)
                    .ok_or(CommandError::OffBoard),
                _ => place_by_name(line),
            },
            _ => place_by_name(line),
        }
    }
}

fn place_by_name(line: &str) -> Result<Command, CommandError> {
    Position::from_label_or_number(line)
        .map(Command::Place)
        .ok_or_else(|| CommandError::Unrecognized(line.trim().to_string()))
}

/// Renders the board, marking winning squares with brackets.
pub fn render_board(state: &GameState, show_coordinates: bool) -> String {
    let line = state.winning_line();
    let highlighted = |pos: Position| line.is_some_and(|line| line.contains(&pos));

    let mut out = String::new();
    if show_coordinates {
        out.push_str("     0   1   2\n");
    }
    for row in 0..3 {
        if show_coordinates {
            out.push_str(&format!("{row}  "));
        }
        for col in 0..3 {
            let Some(pos) = Position::from_coords(row, col) else {
                continue;
            };
            let symbol = match state.board().get(pos) {
                Square::Empty => (pos.to_index() + 1).to_string(),
                Square::Occupied(player) => player.to_string(),
            };
            if highlighted(pos) {
                out.push_str(&format!("[{symbol}]"));
            } else {
                out.push_str(&format!(" {symbol} "));
            }
            if col < 2 {
                out.push('|');
            }
        }
        out.push('\n');
        if row < 2 {
            if show_coordinates {
                out.push_str("   ");
            }
            out.push_str("---+---+---\n");
        }
    }
    out
}

/// Interactive game over any reader/writer pair.
pub struct Terminal<R, W> {
    input: R,
    output: W,
    state: GameState,
    show_coordinates: bool,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    /// Creates a terminal session starting a game in the configured mode.
    pub fn new(input: R, output: W, config: &AppConfig) -> Self {
        Self {
            input,
            output,
            state: new_game(*config.mode()),
            show_coordinates: *config.show_coordinates(),
        }
    }

    /// Current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Reads commands until `quit` or end of input.
    ///
    /// # Errors
    ///
    /// Returns an error only when reading input or writing output fails;
    /// bad commands and rejected moves are reported to the player.
    #[instrument(skip(self), fields(mode = %self.state.mode()))]
    pub fn run(&mut self) -> anyhow::Result<()> {
        writeln!(self.output, "Tic-Tac-Toe ({})", self.state.mode())?;
        writeln!(self.output, "Type 'help' for commands.")?;
        self.show()?;

        let mut line = String::new();
        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                debug!("End of input");
                writeln!(self.output)?;
                return Ok(());
            }

            match line.parse::<Command>() {
                Ok(Command::Quit) => return Ok(()),
                Ok(command) => self.handle(command)?,
                Err(CommandError::Empty) => {}
                Err(e) => writeln!(self.output, "{e}")?,
            }
        }
    }

    fn handle(&mut self, command: Command) -> anyhow::Result<()> {
        match command {
            Command::Place(pos) => match play(&self.state, pos.row(), pos.col()) {
                Ok(next) => {
                    if let Some(reply) = next.history().get(self.state.history().len() + 1) {
                        writeln!(self.output, "Computer plays {}", reply.position())?;
                    }
                    self.state = next;
                    self.show()?;
                }
                Err(e) => {
                    warn!(error = %e, "Move rejected");
                    writeln!(self.output, "Invalid move: {e}")?;
                }
            },
            Command::Reset => {
                self.state = reset(self.state.mode());
                self.show()?;
            }
            Command::Mode(mode) => {
                self.state = set_mode(&self.state, mode);
                writeln!(self.output, "Mode: {mode}")?;
                self.show()?;
            }
            Command::Help => writeln!(self.output, "{HELP}")?,
            Command::Quit => {}
        }
        Ok(())
    }

    fn show(&mut self) -> std::io::Result<()> {
        write!(self.output, "{}", render_board(&self.state, self.show_coordinates))?;
        writeln!(self.output, "{}", self.state.message())
    }
}
