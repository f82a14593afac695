//! Properties checked over the whole reachable game tree.

use std::collections::HashSet;
use strictly_minimax::{
    Board, GameMode, GameState, GameStatus, INF, Player, Position, Square, evaluate, is_terminal,
    minimax, new_game, play, reset,
};

/// Every board reachable from the empty board by alternating play that
/// stops at the first win.
fn reachable_boards() -> HashSet<Board> {
    fn walk(board: &mut Board, to_move: Player, seen: &mut HashSet<Board>) {
        if !seen.insert(board.clone()) || is_terminal(board) {
            return;
        }
        for pos in Position::ALL {
            if board.place(pos, to_move).is_ok() {
                walk(board, to_move.opponent(), seen);
                board.clear(pos);
            }
        }
    }

    let mut seen = HashSet::new();
    walk(&mut Board::new(), Player::X, &mut seen);
    seen
}

/// Three identical marks on a line, per player.
fn lines_won_by(board: &Board, player: Player) -> bool {
    strictly_minimax::rules::LINES
        .iter()
        .any(|line| line.iter().all(|&pos| board.get(pos) == Square::Occupied(player)))
}

#[test]
fn test_reachable_state_count() {
    // Distinct positions of tic-tac-toe, empty board included.
    assert_eq!(reachable_boards().len(), 5478);
}

#[test]
fn test_never_two_winners() {
    for board in reachable_boards() {
        assert!(
            !(lines_won_by(&board, Player::X) && lines_won_by(&board, Player::O)),
            "Both players have a line on\n{board}"
        );
    }
}

#[test]
fn test_pruning_preserves_scores() {
    for board in reachable_boards() {
        let maximizing = board.player_to_move() == Some(Player::O);
        assert_eq!(
            evaluate(&board, 0, maximizing, -INF, INF),
            minimax(&board, 0, maximizing),
            "Pruned and full search disagree on\n{board}"
        );
    }
}

/// Plays every legal X move sequence against the engine.
fn explore(state: &GameState, outcomes: &mut [usize; 2]) {
    match state.status() {
        GameStatus::Won(Player::X) => panic!("Engine lost:\n{}", state.board()),
        GameStatus::Won(Player::O) => outcomes[0] += 1,
        GameStatus::Draw => outcomes[1] += 1,
        GameStatus::InProgress => {
            for pos in state.board().empty_positions() {
                let next = play(state, pos.row(), pos.col()).expect("Empty square");
                explore(&next, outcomes);
            }
        }
    }
}

#[test]
fn test_engine_never_loses() {
    let mut outcomes = [0usize; 2];
    explore(&new_game(GameMode::HumanVsAi), &mut outcomes);

    let [wins, draws] = outcomes;
    assert!(wins > 0, "Engine should punish weak play");
    assert!(draws > 0, "Perfect play by X should draw");
}

#[test]
fn test_reset_is_idempotent() {
    for mode in [GameMode::HumanVsAi, GameMode::HumanVsHuman] {
        assert_eq!(reset(mode), reset(mode));
        assert_eq!(reset(mode), new_game(mode));
        assert_eq!(reset(mode).status(), GameStatus::InProgress);
        assert!(reset(mode).history().is_empty());
    }
}

#[test]
fn test_move_validity_matches_board() {
    let state = play(&new_game(GameMode::HumanVsHuman), 1, 1).expect("Valid move");
    for pos in Position::ALL {
        let result = play(&state, pos.row(), pos.col());
        assert_eq!(result.is_ok(), state.board().is_empty(pos), "{pos}");
    }
}
