#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! The recursive backtracking search engine and the solver entry point.
//!
//! The engine owns the working grid exclusively for the duration of a solve:
//! it places a trial digit, recurses, and resets the cell on failure, so the
//! grid always satisfies row/column/box uniqueness whenever control returns
//! to a parent call. Recursion depth is bounded by the number of empty cells
//! (at most 81).

use crate::sudoku::board::{Board, EMPTY, Grid, Position, SIZE};
use crate::sudoku::select::find_best_empty;
use crate::sudoku::validate::is_valid;

/// Solves the grid in place.
///
/// Returns `true` iff a full valid assignment was found, in which case the
/// grid holds the solution. Returns `false` iff no assignment exists, in
/// which case the grid is exactly as it was on entry.
///
/// Each level selects the most constrained empty cell, tries digits `1..=9`
/// in ascending order, and propagates the first success immediately — the
/// engine never enumerates further solutions.
pub fn solve(grid: &mut Grid) -> bool {
    let Some(pos) = find_best_empty(grid) else {
        // No empty cell: complete and, by the placement invariant, valid.
        return true;
    };

    for digit in 1..=9 {
        if is_valid(grid, digit, pos) {
            grid[pos.row][pos.col] = digit;

            if solve(grid) {
                return true;
            }

            grid[pos.row][pos.col] = EMPTY;
        }
    }

    false
}

/// Checks that every pre-filled cell is consistent with its peers.
///
/// Plain backtracking never re-validates the given clues: a board seeded with
/// two identical digits in one row can otherwise be "completed" without ever
/// tripping a placement check. The validator excludes the probed cell from
/// its scans precisely so each clue can be checked against its own digit
/// here.
fn clues_consistent(grid: &Grid) -> bool {
    for row in 0..SIZE {
        for col in 0..SIZE {
            let digit = grid[row][col];
            if digit != EMPTY && !is_valid(grid, digit, Position::new(row, col)) {
                return false;
            }
        }
    }
    true
}

/// Solves a Sudoku board, returning the completed grid.
///
/// The input is never mutated: the board is copied into a working grid after
/// validation and a freshly owned solution is returned. `None` is reported
/// both for malformed input (wrong dimensions, cells outside `0..=9`,
/// inconsistent clues) and for puzzles with no solution; callers who need to
/// tell the two apart can check the shape themselves before solving.
#[must_use]
pub fn solve_sudoku(board: &Board) -> Option<Board> {
    let mut grid = board.to_grid()?;

    if !clues_consistent(&grid) {
        return None;
    }

    if solve(&mut grid) {
        Some(Board::from(grid))
    } else {
        None
    }
}
