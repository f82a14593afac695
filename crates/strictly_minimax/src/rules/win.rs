//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};

/// The eight winning lines, scanned rows first, then columns, then diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the first completed line and its owner.
fn completed_line(board: &Board) -> Option<(Player, [Position; 3])> {
    LINES.into_iter().find_map(|line @ [a, b, c]| match board.get(a) {
        Square::Occupied(player) if board.get(b) == board.get(a) && board.get(c) == board.get(a) => {
            Some((player, line))
        }
        _ => None,
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` for the owner of the first line with three
/// identical marks, `None` otherwise. Called once per search node.
pub fn check_winner(board: &Board) -> Option<Player> {
    completed_line(board).map(|(player, _)| player)
}

/// Returns true if the player owns at least one completed line.
pub fn has_line(board: &Board, player: Player) -> bool {
    LINES
        .iter()
        .any(|line| line.iter().all(|&pos| board.get(pos) == Square::Occupied(player)))
}

/// Returns the first completed line, for highlighting a win.
pub fn winning_line(board: &Board) -> Option<[Position; 3]> {
    completed_line(board).map(|(_, line)| line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
        assert_eq!(winning_line(&board), None);
    }

    #[test]
    fn test_has_line_checks_each_player() {
        let board: Board = "XXX OOO ...".parse().unwrap();
        assert!(has_line(&board, Player::X));
        assert!(has_line(&board, Player::O));

        let board: Board = "XO. .X. O.X".parse().unwrap();
        assert!(has_line(&board, Player::X));
        assert!(!has_line(&board, Player::O));
    }

    #[test]
    fn test_winner_top_row() {
        let board: Board = "XXX OO. ...".parse().unwrap();
        assert_eq!(check_winner(&board), Some(Player::X));
        assert_eq!(
            winning_line(&board),
            Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
        );
    }

    #[test]
    fn test_winner_column() {
        let board: Board = ".OX .OX ..X".parse().unwrap();
        assert_eq!(check_winner(&board), Some(Player::X));
        assert_eq!(
            winning_line(&board),
            Some([Position::TopRight, Position::MiddleRight, Position::BottomRight])
        );
    }

    #[test]
    fn test_winner_diagonal() {
        let board: Board = "OX. XO. ..O".parse().unwrap();
        assert_eq!(check_winner(&board), Some(Player::O));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board: Board = "XXO XO. O..".parse().unwrap();
        assert_eq!(check_winner(&board), Some(Player::O));
        assert_eq!(
            winning_line(&board),
            Some([Position::TopRight, Position::Center, Position::BottomLeft])
        );
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board: Board = "XX. O.. ...".parse().unwrap();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_first_line_wins_on_double_line() {
        // Final mark at the corner completes both the top row and left column.
        let board: Board = "XXX XOO XOO".parse().unwrap();
        assert_eq!(
            winning_line(&board),
            Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
        );
    }
}
