//! One-shot engine query for a given board.

use anyhow::{Context, Result, bail};
use strictly_minimax::{Board, GameStatus, Player, Searcher, evaluate_status};
use tracing::{info, instrument};

/// Describes the engine's move for O on `board_text`.
///
/// # Errors
///
/// Fails when the board text does not parse, or when the position is
/// already over or has X to move.
#[instrument]
pub fn suggest(board_text: &str) -> Result<String> {
    let board: Board = board_text
        .parse()
        .with_context(|| format!("Invalid board {board_text:?}"))?;

    match evaluate_status(&board) {
        GameStatus::InProgress => {}
        GameStatus::Won(player) => bail!("Game is already over: {player} has won"),
        GameStatus::Draw => bail!("Game is already over: the board is full"),
    }
    if board.player_to_move() != Some(Player::O) {
        bail!("It is not O's turn on this board");
    }

    let result = Searcher::new().search(&board);
    let Some(best) = result.best_move else {
        bail!("No empty square left");
    };
    info!(best = %best, score = result.score, nodes = result.nodes, "Suggested move");

    let outlook = match result.score {
        s if s > 0 => "O forces a win",
        0 => "best play draws",
        _ => "X forces a win",
    };
    Ok(format!("O plays {best}: {outlook} (score {})", result.score))
}
