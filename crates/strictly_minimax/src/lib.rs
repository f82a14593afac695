//! Strictly Minimax - tic-tac-toe core with an unbeatable opponent.
//!
//! This library holds all game logic for a 3x3 tic-tac-toe game. A
//! presentation layer (terminal, web page, GUI) owns no rules of its own:
//! it calls the functions here and renders the returned `GameState`.
//!
//! # Architecture
//!
//! - **Board model**: `Board`, `Square`, `Position`
//! - **Rules**: win and draw detection over a board
//! - **Search**: exhaustive minimax with alpha-beta pruning, playing O
//! - **Controller**: turn sequencing, mode switching, reset
//! - **Sessions**: independent games keyed by client id
//!
//! # Example
//!
//! ```
//! use strictly_minimax::{GameMode, GameStatus, Position, new_game, play};
//!
//! let game = new_game(GameMode::HumanVsAi);
//! let game = play(&game, 0, 0)?;
//!
//! // The engine has already answered in the center.
//! assert_eq!(game.history()[1].position(), Position::Center);
//! assert_eq!(game.status(), GameStatus::InProgress);
//! # Ok::<(), strictly_minimax::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod controller;
mod error;
mod position;
pub mod rules;
mod search;
mod session;
mod types;

// Crate-level exports - Board model
pub use position::Position;
pub use types::{Board, GameMode, GameState, GameStatus, Player, Square};

// Crate-level exports - Moves and errors
pub use action::Move;
pub use error::{BoardParseError, MoveError, SessionError};

// Crate-level exports - Rules
pub use rules::{check_winner, evaluate_status, is_draw, is_full, is_terminal};

// Crate-level exports - Search engine
pub use search::{INF, SearchResult, Searcher, WIN_SCORE, choose_move, evaluate, minimax};

// Crate-level exports - Controller
pub use controller::{
    apply_move, current_status, load, new_game, play, replay, reset, set_mode, winning_line,
};

// Crate-level exports - Session management
pub use session::{SessionId, SessionManager};
