//! Game rules for tic-tac-toe.
//!
//! Pure functions over a `Board`. Rules are separated from board storage
//! so the controller and the search engine share one definition of
//! "game over".

mod draw;
mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, check_winner, has_line, winning_line};

use super::{Board, GameStatus};

/// A board with a winner or no empty squares left.
pub fn is_terminal(board: &Board) -> bool {
    check_winner(board).is_some() || is_full(board)
}

/// Derives the game status from the board alone.
pub fn evaluate_status(board: &Board) -> GameStatus {
    match check_winner(board) {
        Some(player) => GameStatus::Won(player),
        None if is_full(board) => GameStatus::Draw,
        None => GameStatus::InProgress,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;

    #[test]
    fn test_evaluate_status() {
        assert_eq!(evaluate_status(&Board::new()), GameStatus::InProgress);
        assert_eq!(
            evaluate_status(&"OOO XX. X..".parse().unwrap()),
            GameStatus::Won(Player::O)
        );
        assert_eq!(evaluate_status(&"XOX OXX OXO".parse().unwrap()), GameStatus::Draw);
    }

    #[test]
    fn test_is_terminal() {
        assert!(!is_terminal(&Board::new()));
        assert!(is_terminal(&"XXX OO. ...".parse().unwrap()));
        assert!(is_terminal(&"XOX OXX OXO".parse().unwrap()));
    }
}
