#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Minimum-remaining-values (MRV) cell selection.
//!
//! Among all empty cells, the selector picks the one with the fewest legal
//! candidate digits, minimizing the branching factor at each level of the
//! search. Candidate counts are recomputed on demand rather than cached across
//! calls; at 9x9 scale a full rescan is at most 81 * 9 validator probes.

use crate::sudoku::board::{EMPTY, Grid, Position, SIZE};
use crate::sudoku::validate::is_valid;
use smallvec::SmallVec;

/// Collects the digits that may legally be placed at `pos`.
#[must_use]
pub fn candidates(grid: &Grid, pos: Position) -> SmallVec<[u8; 9]> {
    (1..=9).filter(|&digit| is_valid(grid, digit, pos)).collect()
}

/// Counts the digits that may legally be placed at `pos`.
#[must_use]
pub fn candidate_count(grid: &Grid, pos: Position) -> usize {
    (1..=9).filter(|&digit| is_valid(grid, digit, pos)).count()
}

/// Picks the empty cell with the fewest legal candidates.
///
/// Returns `None` when the board has no empty cell left, which is the search
/// engine's success signal. Ties are broken by row-major scan order, first
/// cell wins, so the search order is deterministic. A cell with exactly one
/// candidate is a forced move and is returned immediately; nothing can beat
/// it usefully.
///
/// A cell with zero candidates is also a valid (in fact the best possible)
/// pick: the search engine will find no digit to place there and fail fast.
#[must_use]
pub fn find_best_empty(grid: &Grid) -> Option<Position> {
    let mut best = None;
    let mut best_count = 10;

    for row in 0..SIZE {
        for col in 0..SIZE {
            if grid[row][col] != EMPTY {
                continue;
            }

            let pos = Position::new(row, col);
            let count = candidate_count(grid, pos);
            if count < best_count {
                best_count = count;
                best = Some(pos);
                if count == 1 {
                    return best;
                }
            }
        }
    }

    best
}
