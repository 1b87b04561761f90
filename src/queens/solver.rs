#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Row-by-row backtracking for the N-Queens problem.
//!
//! One queen is placed per row, so a placement is just the queen's column in
//! each row. A new queen only needs checking against the rows above it:
//! same column, or either diagonal.

/// Returns `true` iff a queen at (`row`, `col`) attacks none of the queens
/// already placed in `placed[..row]`.
fn is_safe(placed: &[usize], row: usize, col: usize) -> bool {
    placed.iter().enumerate().take(row).all(|(r, &c)| {
        c != col && row.abs_diff(r) != col.abs_diff(c)
    })
}

fn place(placed: &mut Vec<usize>, row: usize, n: usize) -> bool {
    if row >= n {
        return true;
    }

    for col in 0..n {
        if is_safe(placed, row, col) {
            placed.push(col);

            if place(placed, row + 1, n) {
                return true;
            }

            placed.pop();
        }
    }

    false
}

/// Solves the N-Queens problem for an `n` x `n` board.
///
/// Returns the column of the queen in each row for the first placement found
/// in column-ascending search order, or `None` when no placement exists
/// (`n` of 2 or 3).
#[must_use]
pub fn solve_n_queens(n: usize) -> Option<Vec<usize>> {
    let mut placed = Vec::with_capacity(n);
    if place(&mut placed, 0, n) {
        Some(placed)
    } else {
        None
    }
}
