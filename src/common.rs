//! Common types for tic-tac-toe: cell tokens, players, coordinates and errors.

use core::fmt;

/// Content of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    /// Nobody has played here yet.
    #[default]
    Blank,
    X,
    O,
}

impl Cell {
    /// Character used when rendering the cell.
    pub const fn symbol(self) -> char {
        match self {
            Cell::Blank => ' ',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn is_blank(self) -> bool {
        self == Cell::Blank
    }

    /// The player owning this cell, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Blank => None,
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Player {
    X,
    O,
}

impl Player {
    /// The player who moves after `self`.
    pub const fn next(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Token this player leaves on the board.
    pub const fn cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        player.cell()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.cell().symbol())
    }
}

/// A validated (row, col) position on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.row, self.col)
    }
}

/// Reasons a typed move is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// Input is not two whitespace-separated integers.
    Syntax,
    /// Row or column lies outside the board.
    OutOfBounds,
    /// Target cell already holds a token.
    Occupied,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::Syntax => write!(f, "Invalid move! Move must have syntax \"row col\""),
            MoveError::OutOfBounds => write!(f, "Invalid move! Move must be in bounds of board"),
            MoveError::Occupied => write!(f, "Invalid move! This space is already occupied"),
        }
    }
}

/// Errors returned by grid operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Requested board dimension is negative.
    InvalidSize(isize),
    /// Coordinate lies outside an N×N board.
    OutOfBounds { row: usize, col: usize, size: usize },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvalidSize(n) => {
                write!(f, "Invalid board size {}: size must not be negative", n)
            }
            BoardError::OutOfBounds { row, col, size } => {
                write!(f, "Coordinate ({}, {}) is outside a {}x{} board", row, col, size, size)
            }
        }
    }
}

/// Errors raised while running a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Underlying grid error.
    Board(BoardError),
    /// Engine was asked to play onto a taken cell.
    Occupied(Coordinate),
    /// The game already ended in a win or tie.
    GameOver,
    /// Input stream ended before a valid move was entered.
    InputClosed,
    /// An agent was asked to move on a full board.
    NoFreeCells,
}

impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        GameError::Board(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Board(e) => write!(f, "Board error: {}", e),
            GameError::Occupied(c) => write!(f, "Cell {} is already occupied", c),
            GameError::GameOver => write!(f, "The game is already over"),
            GameError::InputClosed => write!(f, "Input closed before a valid move was entered"),
            GameError::NoFreeCells => write!(f, "No free cells left to play"),
        }
    }
}

impl core::error::Error for MoveError {}
impl core::error::Error for BoardError {}
impl core::error::Error for GameError {}
