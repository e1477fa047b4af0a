//! Enumeration of the lines scanned for four-in-a-row.
//!
//! Each family is a pure function of the board dimensions and yields lines
//! as ordered `(column, row)` coordinates, so the same generators serve any
//! `width x height` board.

use alloc::vec::Vec;

/// `(column, row)`, row 0 at the bottom.
pub type Coord = (usize, usize);

/// Which family a line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    Row,
    Column,
    /// Rising left to right, constant `row - col`.
    Diagonal,
    /// Falling left to right, constant `row + col`.
    AntiDiagonal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub kind: LineKind,
    pub cells: Vec<Coord>,
}

/// One line per row, cells left to right.
pub fn rows(width: usize, height: usize) -> Vec<Line> {
    (0..height)
        .map(|row| Line {
            kind: LineKind::Row,
            cells: (0..width).map(|col| (col, row)).collect(),
        })
        .collect()
}

/// One line per column, cells bottom to top.
pub fn columns(width: usize, height: usize) -> Vec<Line> {
    (0..width)
        .map(|col| Line {
            kind: LineKind::Column,
            cells: (0..height).map(|row| (col, row)).collect(),
        })
        .collect()
}

/// One line per `row - col = k` for `k` in `[1 - width, height - 1]`,
/// cells in increasing column order.
pub fn diagonals(width: usize, height: usize) -> Vec<Line> {
    let (w, h) = (width as isize, height as isize);
    ((1 - w)..h)
        .map(|k| Line {
            kind: LineKind::Diagonal,
            cells: (0..w)
                .filter_map(|col| {
                    let row = col + k;
                    (0..h).contains(&row).then_some((col as usize, row as usize))
                })
                .collect(),
        })
        .collect()
}

/// One line per `row + col = k` for `k` in `[0, width + height - 2]`,
/// cells in increasing column order.
pub fn anti_diagonals(width: usize, height: usize) -> Vec<Line> {
    let (w, h) = (width as isize, height as isize);
    (0..(w + h - 1))
        .map(|k| Line {
            kind: LineKind::AntiDiagonal,
            cells: (0..w)
                .filter_map(|col| {
                    let row = k - col;
                    (0..h).contains(&row).then_some((col as usize, row as usize))
                })
                .collect(),
        })
        .collect()
}

/// Rows, then columns, then diagonals, then anti-diagonals.
pub fn all_lines(width: usize, height: usize) -> Vec<Line> {
    let mut lines = rows(width, height);
    lines.extend(columns(width, height));
    lines.extend(diagonals(width, height));
    lines.extend(anti_diagonals(width, height));
    lines
}
