#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Placement validation against the Sudoku uniqueness rules.
//!
//! A placement is legal when the digit appears nowhere else in the same row,
//! column, or 3x3 box. The probed cell itself is always excluded from the
//! comparison, so an occupied cell can be validated against its current digit
//! (or a replacement) — the solver entry point relies on this to vet the given
//! clues before searching.

use crate::sudoku::board::{BOX_SIZE, Grid, Position, SIZE};

/// Returns `true` iff placing `digit` at `pos` violates no row, column or box
/// uniqueness constraint.
///
/// Pure and O(9): three short-circuiting scans. Callers guarantee `digit` is in
/// `1..=9` and `pos` is on the board; out-of-range arguments are a contract
/// violation, not a runtime condition.
#[must_use]
pub fn is_valid(grid: &Grid, digit: u8, pos: Position) -> bool {
    debug_assert!((1..=9).contains(&digit), "digit out of range: {digit}");
    debug_assert!(pos.row < SIZE && pos.col < SIZE, "position off the board");

    let Position { row, col } = pos;

    for c in 0..SIZE {
        if grid[row][c] == digit && c != col {
            return false;
        }
    }

    for r in 0..SIZE {
        if grid[r][col] == digit && r != row {
            return false;
        }
    }

    let box_row = row / BOX_SIZE * BOX_SIZE;
    let box_col = col / BOX_SIZE * BOX_SIZE;
    for r in box_row..box_row + BOX_SIZE {
        for c in box_col..box_col + BOX_SIZE {
            if grid[r][c] == digit && (r, c) != (row, col) {
                return false;
            }
        }
    }

    true
}
