//! Common types for Connect Four: player ids, cells, results and errors.

use alloc::string::String;
use core::fmt;

/// Identifier of one of the two players, `0` or `1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerId(u8);

impl PlayerId {
    pub const FIRST: PlayerId = PlayerId(0);
    pub const SECOND: PlayerId = PlayerId(1);

    /// Both players in check order.
    pub const ALL: [PlayerId; 2] = [PlayerId::FIRST, PlayerId::SECOND];

    /// Returns `None` for anything other than `0` or `1`.
    pub const fn new(id: u8) -> Option<Self> {
        match id {
            0 | 1 => Some(PlayerId(id)),
            _ => None,
        }
    }

    pub const fn id(self) -> u8 {
        self.0
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The opponent.
    pub const fn other(self) -> Self {
        PlayerId(1 - self.0)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A grid cell: empty, or holding a player's piece.
pub type Cell = Option<PlayerId>;

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    /// The player has four connected cells.
    Win(PlayerId),
    /// The grid is full and nobody has won.
    Tie,
    InProgress,
}

impl GameResult {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameResult::InProgress)
    }
}

/// Errors returned when building a board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Width or height is zero.
    ZeroDimension,
    /// A seeded column does not have `height` cells.
    RaggedColumn {
        column: usize,
        expected: usize,
        found: usize,
    },
    /// An occupied cell sits above an empty one.
    FloatingPiece { column: usize, row: usize },
    /// A player id other than 0 or 1.
    InvalidPlayer(u8),
    /// Notation contains something other than `0`, `1`, `.` or `/`.
    InvalidNotation(char),
    /// A notation column is taller than the board.
    ColumnTooTall { column: usize, height: usize },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::ZeroDimension => write!(f, "Board width and height must be positive"),
            BoardError::RaggedColumn {
                column,
                expected,
                found,
            } => write!(
                f,
                "Column {} has {} cells, expected {}",
                column, found, expected
            ),
            BoardError::FloatingPiece { column, row } => {
                write!(f, "Piece at column {} row {} is floating", column, row)
            }
            BoardError::InvalidPlayer(id) => write!(f, "Invalid player id {}", id),
            BoardError::InvalidNotation(ch) => write!(f, "Invalid grid notation character '{}'", ch),
            BoardError::ColumnTooTall { column, height } => {
                write!(f, "Column {} is taller than the board height {}", column, height)
            }
        }
    }
}

/// Why a line of player input was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Empty, non-digit, or too large to be a column id.
    NotANumber(String),
    /// Out of range or full column.
    InvalidColumn(usize),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::NotANumber(line) => write!(f, "'{}' is not a column id", line),
            InputError::InvalidColumn(col) => write!(f, "Column {} is out of range or full", col),
        }
    }
}

/// Errors returned by the game loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Move into a column that is out of range or full.
    InvalidColumn(usize),
    /// The game has already finished.
    GameOver,
    /// Input ran out before the game finished.
    EndOfInput,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidColumn(col) => write!(f, "Column {} is out of range or full", col),
            GameError::GameOver => write!(f, "The game is already over"),
            GameError::EndOfInput => write!(f, "Input ended before the game finished"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
#[cfg(feature = "std")]
impl std::error::Error for InputError {}
#[cfg(feature = "std")]
impl std::error::Error for GameError {}
