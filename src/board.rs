//! Board state: gravity-filled grid, move legality and result detection.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::common::{BoardError, Cell, GameResult, PlayerId};
use crate::config::{CONNECT, DEFAULT_HEIGHT, DEFAULT_WIDTH, EMPTY_GLYPH};
use crate::lines::{self, Coord, LineKind};

/// Four connected cells and the family they were found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub player: PlayerId,
    pub kind: LineKind,
    pub cells: [Coord; CONNECT],
}

/// Grid indexed `[column][row]`, row 0 at the bottom.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    grid: Vec<Vec<Cell>>,
}

impl Board {
    /// Create an empty `width x height` board.
    pub fn new(width: usize, height: usize) -> Result<Self, BoardError> {
        if width == 0 || height == 0 {
            return Err(BoardError::ZeroDimension);
        }
        Ok(Board {
            width,
            height,
            grid: vec![vec![None; height]; width],
        })
    }

    /// Create a board from a pre-seeded grid. Every column must have the
    /// same non-zero height and no piece may float above an empty cell.
    pub fn from_grid(grid: Vec<Vec<Cell>>) -> Result<Self, BoardError> {
        let width = grid.len();
        let height = grid.first().map_or(0, Vec::len);
        if width == 0 || height == 0 {
            return Err(BoardError::ZeroDimension);
        }
        for (column, cells) in grid.iter().enumerate() {
            if cells.len() != height {
                return Err(BoardError::RaggedColumn {
                    column,
                    expected: height,
                    found: cells.len(),
                });
            }
            let filled = cells.iter().take_while(|c| c.is_some()).count();
            if let Some(row) = (filled..height).find(|&row| cells[row].is_some()) {
                return Err(BoardError::FloatingPiece { column, row });
            }
        }
        Ok(Board {
            width,
            height,
            grid,
        })
    }

    /// Parse a grid written as `/`-separated columns, each listed bottom-up
    /// with `0`, `1` or `.`. Short columns are padded with empty cells, e.g.
    /// `"01/1/"` is a three-column board whose last column is empty.
    pub fn from_notation(height: usize, notation: &str) -> Result<Self, BoardError> {
        let mut grid = Vec::new();
        for (column, text) in notation.trim().split('/').enumerate() {
            let mut cells = Vec::with_capacity(height);
            for ch in text.chars() {
                let cell = match ch {
                    '.' => None,
                    _ => {
                        let id = ch.to_digit(10).ok_or(BoardError::InvalidNotation(ch))?;
                        Some(PlayerId::new(id as u8).ok_or(BoardError::InvalidPlayer(id as u8))?)
                    }
                };
                cells.push(cell);
            }
            if cells.len() > height {
                return Err(BoardError::ColumnTooTall { column, height });
            }
            cells.resize(height, None);
            grid.push(cells);
        }
        Self::from_grid(grid)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Column-major view of the grid.
    pub fn grid(&self) -> &[Vec<Cell>] {
        &self.grid
    }

    /// Cell at `(col, row)`, `None` when out of range or empty.
    pub fn cell(&self, col: usize, row: usize) -> Cell {
        self.grid.get(col).and_then(|c| c.get(row)).copied().flatten()
    }

    /// Returns `true` when `col` is out of range or full.
    pub fn is_invalid_column(&self, col: usize) -> bool {
        col >= self.width || self.is_column_full(col)
    }

    /// Returns `true` when the column has no empty cell. Out-of-range
    /// columns count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        self.grid
            .get(col)
            .map_or(true, |cells| cells.iter().all(Option::is_some))
    }

    pub fn is_full(&self) -> bool {
        (0..self.width).all(|col| self.is_column_full(col))
    }

    /// Drop a piece into `col`, returning the row it landed on. A full or
    /// out-of-range column leaves the board untouched and returns `None`.
    pub fn place(&mut self, col: usize, player: PlayerId) -> Option<usize> {
        let cells = self.grid.get_mut(col)?;
        let row = cells.iter().position(Option::is_none)?;
        cells[row] = Some(player);
        log::debug!("player {} placed at column {} row {}", player, col, row);
        Some(row)
    }

    /// Evaluate the board. Player 0 is checked before player 1, and a tie
    /// is only reported when neither has won.
    pub fn outcome(&self) -> GameResult {
        let lines = lines::all_lines(self.width, self.height);
        for player in PlayerId::ALL {
            if lines
                .iter()
                .any(|line| self.find_window(&line.cells, player).is_some())
            {
                return GameResult::Win(player);
            }
        }
        if self.is_full() {
            GameResult::Tie
        } else {
            GameResult::InProgress
        }
    }

    /// Same as [`Board::outcome`]: `Win(player)`, `Tie` or `InProgress`.
    pub fn winner(&self) -> GameResult {
        self.outcome()
    }

    pub fn is_tie(&self) -> bool {
        self.outcome() == GameResult::Tie
    }

    pub fn is_game_over(&self) -> bool {
        self.outcome().is_terminal()
    }

    /// First four connected cells of `player`, scanning rows, columns,
    /// diagonals, then anti-diagonals.
    pub fn winning_line(&self, player: PlayerId) -> Option<WinningLine> {
        lines::all_lines(self.width, self.height)
            .into_iter()
            .find_map(|line| {
                self.find_window(&line.cells, player).map(|cells| WinningLine {
                    player,
                    kind: line.kind,
                    cells,
                })
            })
    }

    /// Grid re-oriented for display: top row first, columns left to right.
    pub fn display_rows(&self) -> Vec<Vec<Cell>> {
        (0..self.height)
            .rev()
            .map(|row| (0..self.width).map(|col| self.grid[col][row]).collect())
            .collect()
    }

    fn find_window(&self, line: &[Coord], player: PlayerId) -> Option<[Coord; CONNECT]> {
        line.windows(CONNECT)
            .find(|window| {
                window
                    .iter()
                    .all(|&(col, row)| self.grid[col][row] == Some(player))
            })
            .and_then(|window| window.try_into().ok())
    }
}

impl Default for Board {
    fn default() -> Self {
        Board {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            grid: vec![vec![None; DEFAULT_HEIGHT]; DEFAULT_WIDTH],
        }
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {}x{} {{", self.width, self.height)?;
        for row in self.display_rows() {
            write!(f, "  ")?;
            for cell in row {
                match cell {
                    Some(p) => write!(f, "{}", p)?,
                    None => write!(f, "{}", EMPTY_GLYPH)?,
                }
            }
            writeln!(f)?;
        }
        write!(f, "}}")
    }
}
