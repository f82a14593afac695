//! Core domain types for tic-tac-toe.

use super::action::Move;
use super::error::{BoardParseError, MoveError};
use super::position::Position;
use super::rules;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Player in the game.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player X (goes first, minimizing side in search).
    #[display("X")]
    X,
    /// Player O (goes second, played by the engine in `HumanVsAi`).
    #[display("O")]
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Gets the square at `(row, col)`, or `None` when out of range.
    pub fn at(&self, row: usize, col: usize) -> Option<Square> {
        Position::from_coords(row, col).map(|pos| self.get(pos))
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Places a mark on an empty square.
    ///
    /// # Errors
    ///
    /// Returns `MoveError::SquareOccupied` if the square already holds a mark.
    pub fn place(&mut self, pos: Position, player: Player) -> Result<(), MoveError> {
        if !self.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }
        self.set(pos, Square::Occupied(player));
        Ok(())
    }

    /// Reverts a square to empty.
    pub fn clear(&mut self, pos: Position) {
        self.set(pos, Square::Empty);
    }

    /// Overwrites a square without checking occupancy.
    pub(crate) fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks if the board is full.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Empty positions in row-major order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL.into_iter().filter(|&pos| self.is_empty(pos))
    }

    /// Number of marks the player has on the board.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|&&sq| sq == Square::Occupied(player))
            .count()
    }

    /// Player whose turn it is, derived from mark counts.
    ///
    /// Returns `None` when the counts break strict alternation
    /// (X first, so X count is O count or O count + 1).
    pub fn player_to_move(&self) -> Option<Player> {
        let (x, o) = (self.count(Player::X), self.count(Player::O));
        if x == o {
            Some(Player::X)
        } else if x == o + 1 {
            Some(Player::O)
        } else {
            None
        }
    }

    /// Returns all squares as an array.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    /// Renders the grid with `1`-`9` placeholders on empty squares.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                match self.squares[pos] {
                    Square::Empty => write!(f, "{}", pos + 1)?,
                    Square::Occupied(player) => write!(f, "{player}")?,
                }
                if col < 2 {
                    f.write_str("|")?;
                }
            }
            if row < 2 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses nine cells in row-major order.
    ///
    /// `X`/`O` (any case) are marks; `.`, `_` and `-` are empty squares.
    /// Whitespace, `/` and `|` separate cells and are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut squares = Vec::with_capacity(9);
        for ch in s.chars() {
            let square = match ch {
                'X' | 'x' => Square::Occupied(Player::X),
                'O' | 'o' => Square::Occupied(Player::O),
                '.' | '_' | '-' => Square::Empty,
                c if c.is_whitespace() || c == '/' || c == '|' => continue,
                c => return Err(BoardParseError::InvalidChar(c)),
            };
            squares.push(square);
        }
        let squares: [Square; 9] = squares
            .try_into()
            .map_err(|cells: Vec<Square>| BoardParseError::WrongLength(cells.len()))?;
        Ok(Self { squares })
    }
}

/// Who controls the O side.
#[derive(
    Debug,
    Display,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum GameMode {
    /// Human plays X, the engine answers as O.
    #[default]
    #[display("human_vs_ai")]
    HumanVsAi,
    /// Two humans alternate X and O.
    #[display("human_vs_human")]
    HumanVsHuman,
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Returns true once the game has been won or drawn.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Complete game state.
///
/// A plain value: every controller operation takes a state by reference
/// and returns a fresh one, so each session owns its own instance.
/// Deserialized states are checked against their board and history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GameStateRepr")]
pub struct GameState {
    /// The board.
    board: Board,
    /// Current player to move.
    current_player: Player,
    /// Who plays O.
    mode: GameMode,
    /// Game status.
    status: GameStatus,
    /// Moves played so far, engine replies included.
    history: Vec<Move>,
}

impl GameState {
    /// Creates a new game in the given mode.
    pub fn new(mode: GameMode) -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            mode,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Builds a state from an arbitrary position.
    ///
    /// The player to move and the status are derived from the board;
    /// history starts empty. On a finished board the current player is
    /// the one who moved last.
    ///
    /// # Errors
    ///
    /// Returns `BoardParseError::Unbalanced` if the mark counts could not
    /// arise from alternating play, `BothWon` if both players have a line
    /// and `PlayedPastWin` if a move was made after the winning one.
    pub fn from_board(board: Board, mode: GameMode) -> Result<Self, BoardParseError> {
        let (x, o) = (board.count(Player::X), board.count(Player::O));
        let to_move = board
            .player_to_move()
            .ok_or(BoardParseError::Unbalanced { x, o })?;
        match (
            rules::has_line(&board, Player::X),
            rules::has_line(&board, Player::O),
        ) {
            (true, true) => return Err(BoardParseError::BothWon),
            (true, false) if to_move != Player::O => {
                return Err(BoardParseError::PlayedPastWin(Player::X));
            }
            (false, true) if to_move != Player::X => {
                return Err(BoardParseError::PlayedPastWin(Player::O));
            }
            _ => {}
        }

        let status = rules::evaluate_status(&board);
        let current_player = if status.is_terminal() {
            to_move.opponent()
        } else {
            to_move
        };
        Ok(Self {
            board,
            current_player,
            mode,
            status,
            history: Vec::new(),
        })
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current player.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the three winning positions, if the game has been won.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        match self.status {
            GameStatus::Won(_) => rules::winning_line(&self.board),
            _ => None,
        }
    }

    /// Status line for presentation layers.
    pub fn message(&self) -> String {
        match self.status {
            GameStatus::InProgress => format!("{}'s turn", self.current_player),
            GameStatus::Won(player) => format!("{player} wins!"),
            GameStatus::Draw => "It's a tie!".to_string(),
        }
    }

    /// Places the current player's mark and advances the turn.
    ///
    /// Validation happens before anything changes, so an error leaves
    /// the state untouched.
    pub(crate) fn apply_move(&mut self, pos: Position) -> Result<Move, MoveError> {
        if self.status.is_terminal() {
            return Err(MoveError::GameOver);
        }
        let player = self.current_player;
        self.board.place(pos, player)?;
        let action = Move::new(player, pos);
        self.history.push(action);
        self.status = rules::evaluate_status(&self.board);
        if !self.status.is_terminal() {
            self.current_player = player.opponent();
        }
        Ok(action)
    }
}

/// Wire form of `GameState` before validation.
#[derive(Deserialize)]
struct GameStateRepr {
    board: Board,
    current_player: Player,
    mode: GameMode,
    status: GameStatus,
    history: Vec<Move>,
}

impl TryFrom<GameStateRepr> for GameState {
    type Error = BoardParseError;

    /// Rebuilds the state by replaying `history` on the board it started from.
    ///
    /// The history may be a suffix of the game (a loaded position plus the
    /// moves played since), so the starting board is the stored board with
    /// the history's marks lifted off.
    fn try_from(repr: GameStateRepr) -> Result<Self, Self::Error> {
        let mut start = repr.board;
        for action in &repr.history {
            if start.get(action.position) != Square::Occupied(action.player) {
                return Err(BoardParseError::InconsistentState(
                    "history does not match the board",
                ));
            }
            start.clear(action.position);
        }

        let mut state = Self::from_board(start, repr.mode)?;
        for action in &repr.history {
            if action.player != state.current_player {
                return Err(BoardParseError::InconsistentState("history is out of turn"));
            }
            state.apply_move(action.position).map_err(|_| {
                BoardParseError::InconsistentState("history continues after the game ended")
            })?;
        }

        if state.current_player != repr.current_player {
            return Err(BoardParseError::InconsistentState("wrong player to move"));
        }
        if state.status != repr.status {
            return Err(BoardParseError::InconsistentState(
                "status does not match the board",
            ));
        }
        Ok(state)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameMode::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_rejects_occupied() {
        let mut board = Board::new();
        board.place(Position::Center, Player::X).unwrap();
        assert_eq!(
            board.place(Position::Center, Player::O),
            Err(MoveError::SquareOccupied(Position::Center))
        );
        assert_eq!(board.get(Position::Center), Square::Occupied(Player::X));
    }

    #[test]
    fn test_clear_reverts_square() {
        let mut board = Board::new();
        board.place(Position::TopRight, Player::O).unwrap();
        board.clear(Position::TopRight);
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_at_bounds() {
        let board: Board = "X.. .O. ...".parse().unwrap();
        assert_eq!(board.at(0, 0), Some(Square::Occupied(Player::X)));
        assert_eq!(board.at(1, 1), Some(Square::Occupied(Player::O)));
        assert_eq!(board.at(2, 2), Some(Square::Empty));
        assert_eq!(board.at(3, 0), None);
    }

    #[test]
    fn test_parse_board() {
        let board: Board = "X O X / O X O / O X O".parse().unwrap();
        assert!(board.is_full());
        assert_eq!(board.count(Player::X), 4);
        assert_eq!(board.count(Player::O), 5);

        assert_eq!("X..".parse::<Board>(), Err(BoardParseError::WrongLength(3)));
        assert_eq!(
            "X.. .Q. ...".parse::<Board>(),
            Err(BoardParseError::InvalidChar('Q'))
        );
    }

    #[test]
    fn test_display_uses_placeholders() {
        let board: Board = "X.. .O. ...".parse().unwrap();
        assert_eq!(board.to_string(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_player_to_move() {
        assert_eq!(Board::new().player_to_move(), Some(Player::X));
        let board: Board = "X.. ... ...".parse().unwrap();
        assert_eq!(board.player_to_move(), Some(Player::O));
        let board: Board = "O.. ... ...".parse().unwrap();
        assert_eq!(board.player_to_move(), None);
    }

    #[test]
    fn test_mode_parses_snake_case() {
        assert_eq!("human_vs_ai".parse::<GameMode>(), Ok(GameMode::HumanVsAi));
        assert_eq!("human_vs_human".parse::<GameMode>(), Ok(GameMode::HumanVsHuman));
        assert!("robot_vs_robot".parse::<GameMode>().is_err());
        assert_eq!(GameMode::HumanVsHuman.to_string(), "human_vs_human");
    }

    #[test]
    fn test_from_board_rejects_unreachable_wins() {
        let board: Board = "XXX OOO ...".parse().unwrap();
        assert_eq!(
            GameState::from_board(board, GameMode::HumanVsHuman),
            Err(BoardParseError::BothWon)
        );

        let board: Board = "XXX OO. O..".parse().unwrap();
        assert_eq!(
            GameState::from_board(board, GameMode::HumanVsHuman),
            Err(BoardParseError::PlayedPastWin(Player::X))
        );
    }

    #[test]
    fn test_finished_board_keeps_last_mover() {
        let board: Board = "XXX OO. ...".parse().unwrap();
        let state = GameState::from_board(board, GameMode::HumanVsHuman).unwrap();
        assert_eq!(state.status(), GameStatus::Won(Player::X));
        assert_eq!(state.current_player(), Player::X);
    }

    #[test]
    fn test_deserialize_replays_history_after_loaded_position() {
        let board: Board = "X.. ... ...".parse().unwrap();
        let mut state = GameState::from_board(board, GameMode::HumanVsHuman).unwrap();
        state.apply_move(Position::Center).unwrap();
        state.apply_move(Position::BottomRight).unwrap();

        let json = serde_json::to_string(&state).unwrap();
        let restored: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, state);
    }

    #[test]
    fn test_deserialize_rejects_tampered_history() {
        let mut state = GameState::new(GameMode::HumanVsHuman);
        state.apply_move(Position::TopLeft).unwrap();
        state.apply_move(Position::Center).unwrap();

        let mut value = serde_json::to_value(&state).unwrap();
        value["history"][1]["player"] = serde_json::json!("X");
        let err = serde_json::from_value::<GameState>(value).unwrap_err();
        assert!(err.to_string().contains("history does not match the board"));
    }

    #[test]
    fn test_message() {
        let state = GameState::new(GameMode::HumanVsHuman);
        assert_eq!(state.message(), "X's turn");
        let state =
            GameState::from_board("XXX OO. ...".parse().unwrap(), GameMode::HumanVsHuman).unwrap();
        assert_eq!(state.message(), "X wins!");
    }
}
