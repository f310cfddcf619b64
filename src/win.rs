//! Win and tie detection.
//!
//! Every check looks at the grid as it is; nothing is cached between moves.

use crate::board::Grid;
use crate::common::{Cell, Player};
use crate::game::GameStatus;
use crate::grid::{diagonals, excludes, is_uniform, transpose};

/// `true` if `cells` is non-empty, holds no blank and every cell matches.
pub fn has_line(cells: &[Cell]) -> bool {
    !cells.is_empty() && excludes(Cell::Blank)(cells) && is_uniform(cells)
}

/// Some column is filled by a single player.
pub fn has_vertical_win(grid: &Grid) -> bool {
    transpose(grid.rows()).iter().any(|col| has_line(col))
}

/// Some row is filled by a single player.
pub fn has_horizontal_win(grid: &Grid) -> bool {
    grid.rows().iter().any(|row| has_line(row))
}

/// Either diagonal is filled by a single player.
pub fn has_diagonal_win(grid: &Grid) -> bool {
    diagonals(grid.rows()).iter().any(|d| has_line(d))
}

pub fn is_win(grid: &Grid) -> bool {
    has_vertical_win(grid) || has_horizontal_win(grid) || has_diagonal_win(grid)
}

/// The board is full. Only meaningful once [`is_win`] has been ruled out.
pub fn is_tie(grid: &Grid) -> bool {
    let no_blank = excludes(Cell::Blank);
    grid.rows().iter().all(|row| no_blank(row.as_slice()))
}

/// Player owning a completed line, if any.
pub fn winner(grid: &Grid) -> Option<Player> {
    let rows = grid.rows();
    let [main, anti] = diagonals(rows);
    rows.iter()
        .cloned()
        .chain(transpose(rows))
        .chain([main, anti])
        .find(|line| has_line(line))
        .and_then(|line| line.first().copied())
        .and_then(Cell::player)
}

/// Classify a grid: a win takes precedence over a full board.
pub fn evaluate(grid: &Grid) -> GameStatus {
    match winner(grid) {
        Some(player) => GameStatus::Won(player),
        None if is_tie(grid) => GameStatus::Tied,
        None => GameStatus::InProgress,
    }
}
