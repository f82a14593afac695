//! Error types for the tic-tac-toe core.

use super::position::Position;
use super::types::Player;

/// Error that can occur when validating or applying a move.
///
/// All variants are recoverable: the state a move was attempted on
/// is never modified when one of these is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// Row or column outside `0..=2`.
    #[display("Cell ({}, {}) is off the board", row, col)]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
}

impl std::error::Error for MoveError {}

/// Error building a board from text, from an arbitrary grid or from a
/// stored game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum BoardParseError {
    /// A character that is neither a mark, an empty marker nor a separator.
    #[display("Unexpected character {:?} in board", _0)]
    InvalidChar(char),

    /// Board text did not contain exactly nine cells.
    #[display("Expected 9 cells, found {}", _0)]
    WrongLength(usize),

    /// Mark counts that alternating play with X first cannot produce.
    #[display("Unreachable board: {} X marks and {} O marks", x, o)]
    Unbalanced {
        /// Number of X marks.
        x: usize,
        /// Number of O marks.
        o: usize,
    },

    /// Both players have a completed line.
    #[display("Unreachable board: both players have a line")]
    BothWon,

    /// The winner's line is on the board but the other side moved after it.
    #[display("Unreachable board: play continued after {} won", _0)]
    PlayedPastWin(Player),

    /// Stored state fields that disagree with the board or its history.
    #[display("Inconsistent game state: {}", _0)]
    InconsistentState(&'static str),
}

impl std::error::Error for BoardParseError {}

/// Error from session lookups and session-scoped moves.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SessionError {
    /// No session is registered under this id.
    #[display("Session {:?} not found", _0)]
    NotFound(String),

    /// A session already uses this id.
    #[display("Session {:?} already exists", _0)]
    AlreadyExists(String),

    /// The move was rejected by the game.
    #[display("{}", _0)]
    Move(MoveError),
}

impl From<MoveError> for SessionError {
    fn from(err: MoveError) -> Self {
        SessionError::Move(err)
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Move(err) => Some(err),
            _ => None,
        }
    }
}
