//! Generic helpers over row-major 2D grids.
//!
//! Everything here works on plain row slices so the same helpers serve the
//! board, its columns and its diagonals. Ragged input never panics: cells a
//! short row does not have are simply skipped.

use alloc::vec::Vec;
use core::num::IntErrorKind;

/// Columns of `rows`: the j-th output row holds `rows[i][j]` for every i.
///
/// The number of columns is taken from the first row.
pub fn transpose<T: Copy>(rows: &[Vec<T>]) -> Vec<Vec<T>> {
    let width = rows.first().map_or(0, Vec::len);
    (0..width)
        .map(|j| {
            rows.iter()
                .filter_map(|row| row.get(j).copied())
                .collect()
        })
        .collect()
}

/// Cells where the row index equals the column index.
pub fn main_diagonal<T: Copy>(rows: &[Vec<T>]) -> Vec<T> {
    rows.iter()
        .enumerate()
        .filter_map(|(i, row)| row.get(i).copied())
        .collect()
}

/// Cells running from the top-right corner to the bottom-left one.
pub fn anti_diagonal<T: Copy>(rows: &[Vec<T>]) -> Vec<T> {
    rows.iter()
        .enumerate()
        .filter_map(|(i, row)| {
            row.len()
                .checked_sub(i + 1)
                .and_then(|j| row.get(j).copied())
        })
        .collect()
}

/// Both diagonals, main first.
pub fn diagonals<T: Copy>(rows: &[Vec<T>]) -> [Vec<T>; 2] {
    [main_diagonal(rows), anti_diagonal(rows)]
}

/// Returns `true` when every element equals the first one.
///
/// Empty and single-element sequences are uniform.
pub fn is_uniform<T: PartialEq>(seq: &[T]) -> bool {
    match seq.split_first() {
        Some((first, rest)) => rest.iter().all(|x| x == first),
        None => true,
    }
}

/// Predicate testing that `value` does not appear in a sequence.
pub fn excludes<T: PartialEq>(value: T) -> impl Fn(&[T]) -> bool {
    move |seq: &[T]| !seq.contains(&value)
}

/// Parse a base-10 integer, surrounding whitespace allowed.
///
/// Anything that is not a number yields `None`; `"0"` is `Some(0)`.
/// Numbers too large for an `i64` saturate instead of failing.
pub fn parse_integer(text: &str) -> Option<i64> {
    match text.trim().parse::<i64>() {
        Ok(n) => Some(n),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Some(i64::MAX),
            IntErrorKind::NegOverflow => Some(i64::MIN),
            _ => None,
        },
    }
}
