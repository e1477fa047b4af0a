use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::common::{Cell, GameResult, InputError, PlayerId};
use crate::config::{ConfigError, DEFAULT_MARKS, EMPTY_GLYPH};

/// Display symbol for each player id. Each mark is a single character
/// distinct from the other mark and from the empty glyph, so a rendered row
/// is exactly as wide as the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerMarks([String; 2]);

impl PlayerMarks {
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Result<Self, ConfigError> {
        let marks = [first.into(), second.into()];
        for mark in &marks {
            if mark.chars().count() != 1 || mark == EMPTY_GLYPH {
                return Err(ConfigError::InvalidMark(mark.clone()));
            }
        }
        if marks[0] == marks[1] {
            return Err(ConfigError::DuplicateMarks);
        }
        Ok(Self(marks))
    }

    pub fn for_player(&self, player: PlayerId) -> &str {
        &self.0[player.index()]
    }

    /// Mark for a cell, or the empty glyph.
    pub fn mark(&self, cell: Cell) -> &str {
        cell.map_or(EMPTY_GLYPH, |p| self.for_player(p))
    }
}

impl Default for PlayerMarks {
    fn default() -> Self {
        Self(DEFAULT_MARKS.map(|m| m.to_string()))
    }
}

impl TryFrom<[String; 2]> for PlayerMarks {
    type Error = ConfigError;

    fn try_from([first, second]: [String; 2]) -> Result<Self, Self::Error> {
        Self::new(first, second)
    }
}

/// Text for display rows (top row first): one line per row, one mark per
/// cell, each line ending in `\n`.
pub fn format_rows(rows: &[Vec<Cell>], marks: &PlayerMarks) -> String {
    let mut out = String::new();
    for row in rows {
        for &cell in row {
            out.push_str(marks.mark(cell));
        }
        out.push('\n');
    }
    out
}

/// Output side of the game loop.
///
/// Only [`Renderer::render`] is required; the message hooks default to
/// doing nothing.
pub trait Renderer {
    /// Draw the grid. `rows` comes from [`crate::Board::display_rows`].
    fn render(&mut self, rows: &[Vec<Cell>], marks: &PlayerMarks) -> anyhow::Result<()>;

    /// Shown once when a game starts.
    fn introduce(&mut self) -> anyhow::Result<()> {
        Ok(())
    }

    /// Shown once per turn before reading input.
    fn prompt(&mut self, _player: PlayerId) -> anyhow::Result<()> {
        Ok(())
    }

    /// Shown for every rejected line of input.
    fn input_error(&mut self, _error: &InputError) -> anyhow::Result<()> {
        Ok(())
    }

    /// Shown once the game has finished.
    fn announce(&mut self, _result: GameResult) -> anyhow::Result<()> {
        Ok(())
    }
}
