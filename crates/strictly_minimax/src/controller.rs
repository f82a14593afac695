//! Turn sequencing for a single game.
//!
//! Every operation takes the current `GameState` by reference and returns
//! a new one. A rejected move returns an error and leaves the caller's
//! state exactly as it was.
//!
//! In `HumanVsAi` mode the human only supplies X moves: once X has moved
//! and the game is still running, the engine answers as O before the
//! call returns.

use super::error::{BoardParseError, MoveError};
use super::search::Searcher;
use super::{Board, GameMode, GameState, GameStatus, Player, Position};
use tracing::{debug, info, instrument, warn};

/// Creates a fresh game: empty board, X to move.
#[instrument]
pub fn new_game(mode: GameMode) -> GameState {
    debug!("Starting new game");
    GameState::new(mode)
}

/// Starts over in the given mode.
#[instrument]
pub fn reset(mode: GameMode) -> GameState {
    new_game(mode)
}

/// Switches mode. Switching always starts a new game.
#[instrument(skip(state), fields(from = %state.mode()))]
pub fn set_mode(state: &GameState, mode: GameMode) -> GameState {
    if state.mode() != mode {
        info!(to = %mode, "Mode changed, resetting game");
    }
    reset(mode)
}

/// Plays the current player's mark at `(row, col)`.
///
/// # Errors
///
/// - `MoveError::OutOfBounds` if `row` or `col` is outside `0..=2`
/// - `MoveError::GameOver` if the game has been won or drawn
/// - `MoveError::SquareOccupied` if the cell already holds a mark
pub fn play(state: &GameState, row: usize, col: usize) -> Result<GameState, MoveError> {
    let pos = Position::from_coords(row, col).ok_or(MoveError::OutOfBounds { row, col })?;
    apply_move(state, pos)
}

/// Plays the current player's mark at `pos`, then lets the engine answer
/// when it is O's turn in `HumanVsAi` mode.
///
/// # Errors
///
/// - `MoveError::GameOver` if the game has been won or drawn
/// - `MoveError::SquareOccupied` if the square already holds a mark
#[instrument(skip(state), fields(mode = %state.mode(), player = %state.current_player()))]
pub fn apply_move(state: &GameState, pos: Position) -> Result<GameState, MoveError> {
    let mut next = state.clone();
    let action = next.apply_move(pos)?;
    debug!(%action, "Move applied");

    engine_turn(&mut next);
    log_outcome(&next);
    Ok(next)
}

/// Builds a game from an arbitrary board.
///
/// If the board leaves O to move in `HumanVsAi` mode, the engine moves
/// right away so the returned state is waiting on X.
///
/// # Errors
///
/// Returns a `BoardParseError` if the board could not come from
/// alternating play that stops at the first win.
#[instrument(skip(board))]
pub fn load(board: Board, mode: GameMode) -> Result<GameState, BoardParseError> {
    let mut state = GameState::from_board(board, mode)?;
    engine_turn(&mut state);
    Ok(state)
}

/// Rebuilds a game from the positions the humans played.
///
/// In `HumanVsAi` mode only X's positions are listed; the engine's
/// replies are regenerated.
///
/// # Errors
///
/// Returns the first `MoveError` hit while replaying.
#[instrument(skip(positions), fields(moves = positions.len()))]
pub fn replay(mode: GameMode, positions: &[Position]) -> Result<GameState, MoveError> {
    positions
        .iter()
        .try_fold(new_game(mode), |state, &pos| apply_move(&state, pos))
}

/// Current status of the game.
pub fn current_status(state: &GameState) -> GameStatus {
    state.status()
}

/// The three cells forming the win, for highlighting.
pub fn winning_line(state: &GameState) -> Option<[Position; 3]> {
    state.winning_line()
}

/// Lets the engine move if it is O's turn in a running `HumanVsAi` game.
fn engine_turn(state: &mut GameState) {
    if state.status() != GameStatus::InProgress
        || state.mode() != GameMode::HumanVsAi
        || state.current_player() != Player::O
    {
        return;
    }

    let result = Searcher::new().search(state.board());
    let Some(reply) = result.best_move else {
        return;
    };
    match state.apply_move(reply) {
        Ok(action) => {
            debug!(%action, score = result.score, nodes = result.nodes, "Engine replied")
        }
        Err(error) => warn!(%error, "Engine move rejected"),
    }
}

fn log_outcome(state: &GameState) {
    match state.status() {
        GameStatus::InProgress => {}
        GameStatus::Won(player) => info!(%player, moves = state.history().len(), "Game won"),
        GameStatus::Draw => info!(moves = state.history().len(), "Game drawn"),
    }
}
