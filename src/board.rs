//! Game board: construction, text rendering and move application.

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::common::{BoardError, Cell, Coordinate, Player};
use crate::config::DEFAULT_SIZE;

/// Render one row: every cell padded by a space on each side, joined by pipes.
///
/// ```
/// use tictactoe::{render_row, Cell};
/// assert_eq!(render_row(&[Cell::X, Cell::O, Cell::X]), " X | O | X ");
/// ```
pub fn render_row(row: &[Cell]) -> String {
    let mut out = String::new();
    for (i, cell) in row.iter().enumerate() {
        if i > 0 {
            out.push('|');
        }
        out.push(' ');
        out.push(cell.symbol());
        out.push(' ');
    }
    out
}

/// Line drawn between rendered rows, e.g. `---|---|---`.
fn separator(columns: usize) -> String {
    let mut out = String::new();
    for i in 0..columns.max(DEFAULT_SIZE) {
        if i > 0 {
            out.push('|');
        }
        out.push_str("---");
    }
    out
}

/// Render rows via [`render_row`], separated by a divider line.
///
/// The divider has one segment per column of the widest row, and never fewer
/// than the default board width. A single row renders without a divider.
pub fn render_grid<R: AsRef<[Cell]>>(rows: &[R]) -> String {
    let width = rows.iter().map(|r| r.as_ref().len()).max().unwrap_or(0);
    let divider = separator(width);
    let mut out = String::new();
    for (i, row) in rows.iter().enumerate() {
        if i > 0 {
            out.push('\n');
            out.push_str(&divider);
            out.push('\n');
        }
        out.push_str(&render_row(row.as_ref()));
    }
    out
}

/// Square tic-tac-toe board.
///
/// A `Grid` is never edited in place: [`Grid::apply_move`] returns a new
/// board and leaves the original untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    rows: Vec<Vec<Cell>>,
}

impl Grid {
    /// Create an `n`×`n` board of blank cells.
    ///
    /// `n == 0` gives a board with no rows; negative sizes are rejected.
    pub fn empty(n: isize) -> Result<Self, BoardError> {
        let size = usize::try_from(n).map_err(|_| BoardError::InvalidSize(n))?;
        Ok(Self {
            rows: vec![vec![Cell::Blank; size]; size],
        })
    }

    /// Number of rows (and columns).
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Cell at `coord`, or `None` when it lies off the board.
    pub fn cell(&self, coord: Coordinate) -> Option<Cell> {
        self.rows.get(coord.row)?.get(coord.col).copied()
    }

    /// Coordinates of every blank cell in row-major order.
    pub fn blank_cells(&self) -> Vec<Coordinate> {
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(r, row)| {
                row.iter()
                    .enumerate()
                    .filter(|(_, cell)| cell.is_blank())
                    .map(move |(c, _)| Coordinate::new(r, c))
            })
            .collect()
    }

    /// Return a copy of the board with `coord` set to `player`.
    ///
    /// Occupancy is not checked here; bounds are.
    pub fn apply_move(&self, coord: Coordinate, player: Player) -> Result<Grid, BoardError> {
        let size = self.size();
        if coord.row >= size || coord.col >= size {
            return Err(BoardError::OutOfBounds {
                row: coord.row,
                col: coord.col,
                size,
            });
        }
        let mut next = self.clone();
        next.rows[coord.row][coord.col] = player.cell();
        Ok(next)
    }

    /// Text rendering of the board, see [`render_grid`].
    pub fn render(&self) -> String {
        render_grid(&self.rows)
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            rows: vec![vec![Cell::Blank; DEFAULT_SIZE]; DEFAULT_SIZE],
        }
    }
}

impl From<Vec<Vec<Cell>>> for Grid {
    /// Wrap existing rows. Callers are responsible for keeping them square.
    fn from(rows: Vec<Vec<Cell>>) -> Self {
        Self { rows }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
