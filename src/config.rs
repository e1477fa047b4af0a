use alloc::string::{String, ToString};
use core::fmt;

use crate::common::{BoardError, PlayerId};
use crate::render::PlayerMarks;

pub const DEFAULT_WIDTH: usize = 7;
pub const DEFAULT_HEIGHT: usize = 6;
/// Number of connected pieces needed to win.
pub const CONNECT: usize = 4;
/// Glyph printed for empty cells; player marks may not use it.
pub const EMPTY_GLYPH: &str = ".";
pub const DEFAULT_MARKS: [&str; 2] = ["X", "O"];

/// Parameters used to build a [`crate::Game`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub width: usize,
    pub height: usize,
    pub marks: [String; 2],
    pub first_player: u8,
    /// Pre-seeded grid in notation form, see [`crate::Board::from_notation`].
    pub grid: Option<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            marks: DEFAULT_MARKS.map(|m| m.to_string()),
            first_player: PlayerId::FIRST.id(),
            grid: None,
        }
    }
}

impl GameConfig {
    /// Check marks and starting player. Board dimensions are checked when
    /// the board is built.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.player_marks()?;
        if PlayerId::new(self.first_player).is_none() {
            return Err(ConfigError::InvalidPlayer(self.first_player));
        }
        Ok(())
    }

    /// The configured marks, checked by [`PlayerMarks::new`].
    pub fn player_marks(&self) -> Result<PlayerMarks, ConfigError> {
        PlayerMarks::try_from(self.marks.clone())
    }
}

/// Errors returned when a [`GameConfig`] cannot produce a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Not exactly one character, or equal to the empty-cell glyph.
    InvalidMark(String),
    DuplicateMarks,
    InvalidPlayer(u8),
    Board(BoardError),
}

impl From<BoardError> for ConfigError {
    fn from(err: BoardError) -> Self {
        ConfigError::Board(err)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidMark(mark) => write!(
                f,
                "Invalid player mark '{}': must be a single character other than '{}'",
                mark, EMPTY_GLYPH
            ),
            ConfigError::DuplicateMarks => write!(f, "Both players have the same mark"),
            ConfigError::InvalidPlayer(id) => write!(f, "Starting player must be 0 or 1, got {}", id),
            ConfigError::Board(e) => write!(f, "Board error: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}
