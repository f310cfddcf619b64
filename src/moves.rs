//! Parsing and validation of typed moves.

use crate::board::Grid;
use crate::common::{Coordinate, MoveError};
use crate::grid::parse_integer;

/// Turn `"row col"` into a coordinate on `grid`.
///
/// Checks happen in order: syntax, bounds, occupancy. The first failure wins.
pub fn parse_move(text: &str, grid: &Grid) -> Result<Coordinate, MoveError> {
    let mut tokens = text.split_whitespace();
    let (row, col) = match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(row), Some(col), None) => (parse_integer(row), parse_integer(col)),
        _ => return Err(MoveError::Syntax),
    };
    let (row, col) = match (row, col) {
        (Some(row), Some(col)) => (row, col),
        _ => return Err(MoveError::Syntax),
    };

    let row = in_bounds(row, grid.size()).ok_or(MoveError::OutOfBounds)?;
    let col = in_bounds(col, grid.size()).ok_or(MoveError::OutOfBounds)?;
    let coord = Coordinate::new(row, col);

    match grid.cell(coord) {
        Some(cell) if cell.is_blank() => Ok(coord),
        Some(_) => Err(MoveError::Occupied),
        None => Err(MoveError::OutOfBounds),
    }
}

fn in_bounds(value: i64, size: usize) -> Option<usize> {
    usize::try_from(value).ok().filter(|&v| v < size)
}
