//! Exhaustive minimax search with alpha-beta pruning.
//!
//! The engine always plays O, the maximizing side. Scores are
//! depth-adjusted: a win for O found at depth `d` is worth `10 - d` and a
//! win for X is worth `d - 10`, so the engine prefers the fastest win and
//! the slowest loss. Draws are worth 0 regardless of depth.
//!
//! The search explores every line to the end of the game, so the result
//! is exact: the engine never loses, and wins whenever a forced win exists.
//!
//! # Example
//!
//! ```
//! use strictly_minimax::{Board, Position, choose_move};
//!
//! let board: Board = "X.. ... ...".parse().unwrap();
//! assert_eq!(choose_move(&board), Some(Position::Center));
//! ```

use super::rules::{check_winner, is_full};
use super::{Board, Player, Position, Square};
use tracing::{debug, instrument};

/// Bound outside every reachable score, used as the initial search window.
pub const INF: i32 = 1_000;

/// Score of a win for O discovered at depth 0.
pub const WIN_SCORE: i32 = 10;

/// Search result containing the chosen move and associated statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move found, `None` only when the board was already full.
    pub best_move: Option<Position>,
    /// Score of the best move from O's point of view.
    pub score: i32,
    /// Total nodes searched.
    pub nodes: u64,
}

/// Minimax search engine.
///
/// Each call works on its own copy of the board, so the caller's board
/// is never touched. The searcher only keeps a node counter between calls.
#[derive(Debug, Clone)]
pub struct Searcher {
    nodes: u64,
    prune: bool,
}

impl Searcher {
    /// Creates a searcher with alpha-beta cutoffs enabled.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: 0,
            prune: true,
        }
    }

    /// Creates a searcher that visits every node (plain minimax).
    ///
    /// Returns the same scores as [`Searcher::new`], only slower.
    #[must_use]
    pub fn without_pruning() -> Self {
        Self {
            nodes: 0,
            prune: false,
        }
    }

    /// Nodes visited by the most recent search or evaluation.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Picks O's move on `board`.
    ///
    /// Every empty square is tried in row-major order and scored by a
    /// fresh full-window search from X's point of view. The first square
    /// with the strictly highest score wins ties.
    #[instrument(skip_all, fields(prune = self.prune))]
    pub fn search(&mut self, board: &Board) -> SearchResult {
        self.nodes = 0;
        let mut scratch = board.clone();
        let mut best_move = None;
        let mut best_score = -INF;

        for pos in Position::ALL {
            if !scratch.is_empty(pos) {
                continue;
            }
            scratch.set(pos, Square::Occupied(Player::O));
            let score = self.alpha_beta(&mut scratch, 0, false, -INF, INF);
            scratch.clear(pos);

            if score > best_score {
                best_score = score;
                best_move = Some(pos);
            }
        }

        let result = SearchResult {
            best_move,
            score: if best_move.is_some() { best_score } else { 0 },
            nodes: self.nodes,
        };
        debug!(
            best_move = ?result.best_move,
            score = result.score,
            nodes = result.nodes,
            "Search complete"
        );
        result
    }

    /// Scores `board` with the given window.
    ///
    /// `depth` is the ply count already played below the root and
    /// `maximizing` tells whose turn it is (true for O).
    pub fn evaluate(
        &mut self,
        board: &Board,
        depth: i32,
        maximizing: bool,
        alpha: i32,
        beta: i32,
    ) -> i32 {
        self.nodes = 0;
        let mut scratch = board.clone();
        self.alpha_beta(&mut scratch, depth, maximizing, alpha, beta)
    }

    /// Recursive minimax with place-then-revert on the scratch board.
    fn alpha_beta(
        &mut self,
        board: &mut Board,
        depth: i32,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.nodes += 1;

        match check_winner(board) {
            Some(Player::O) => return WIN_SCORE - depth,
            Some(Player::X) => return depth - WIN_SCORE,
            None => {}
        }
        if is_full(board) {
            return 0;
        }

        let (mark, mut best) = if maximizing {
            (Player::O, -INF)
        } else {
            (Player::X, INF)
        };

        for pos in Position::ALL {
            if !board.is_empty(pos) {
                continue;
            }
            board.set(pos, Square::Occupied(mark));
            let score = self.alpha_beta(board, depth + 1, !maximizing, alpha, beta);
            board.clear(pos);

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }

            if self.prune && beta <= alpha {
                break;
            }
        }

        best
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Scores `board` with alpha-beta pruning.
pub fn evaluate(board: &Board, depth: i32, maximizing: bool, alpha: i32, beta: i32) -> i32 {
    Searcher::new().evaluate(board, depth, maximizing, alpha, beta)
}

/// Scores `board` with plain minimax over the full window.
pub fn minimax(board: &Board, depth: i32, maximizing: bool) -> i32 {
    Searcher::without_pruning().evaluate(board, depth, maximizing, -INF, INF)
}

/// Picks O's optimal move, or `None` if the board is full.
pub fn choose_move(board: &Board) -> Option<Position> {
    Searcher::new().search(board).best_move
}
