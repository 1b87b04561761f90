#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Static complexity classification and batch solving.
//!
//! The classification is a heuristic over the empty-cell count only — it says
//! nothing about how hard a board actually is to search, and a board labeled
//! `Easy` may well be unsolvable. It is computed once per board and never
//! persisted.

use crate::sudoku::board::Board;
use crate::sudoku::search::solve_sudoku;
use rustc_hash::FxHashMap;
use std::fmt::Display;

/// A complexity label derived from the number of empty cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Complexity {
    /// Fewer than 40 empty cells.
    Easy,
    /// 40 to 49 empty cells.
    Medium,
    /// 50 to 54 empty cells.
    Hard,
    /// 55 or more empty cells.
    Expert,
}

impl Complexity {
    /// Classifies a board by its empty-cell count.
    #[must_use]
    pub const fn from_empty_count(empty_cells: usize) -> Self {
        if empty_cells < 40 {
            Self::Easy
        } else if empty_cells < 50 {
            Self::Medium
        } else if empty_cells < 55 {
            Self::Hard
        } else {
            Self::Expert
        }
    }
}

impl Display for Complexity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Easy => write!(f, "Easy"),
            Self::Medium => write!(f, "Medium"),
            Self::Hard => write!(f, "Hard"),
            Self::Expert => write!(f, "Expert"),
        }
    }
}

/// A read-only complexity summary for one board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardComplexity {
    /// The number of empty cells on the board.
    pub empty_cells: usize,
    /// The classification derived from `empty_cells`.
    pub label: Complexity,
    /// A static upper bound on the branching factor: `empty_cells * 9`.
    /// Not a measured value.
    pub branching_estimate: usize,
}

/// Computes the complexity summary for a board.
#[must_use]
pub fn analyze_board(board: &Board) -> BoardComplexity {
    let empty_cells = board.empty_cells();
    BoardComplexity {
        empty_cells,
        label: Complexity::from_empty_count(empty_cells),
        branching_estimate: empty_cells * 9,
    }
}

/// The outcome of analyzing and solving one labeled board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardReport {
    /// The solved board, or `None` for invalid or unsolvable input.
    pub solution: Option<Board>,
    /// The static complexity summary of the input board.
    pub complexity: BoardComplexity,
}

/// Analyzes and solves every board in a labeled batch.
///
/// Boards are processed independently — no state is shared between them — and
/// the result is keyed identically to the input. The complexity summary is
/// computed from the input board whether or not the solve succeeds.
#[must_use]
pub fn analyze_and_solve(boards: &FxHashMap<String, Board>) -> FxHashMap<String, BoardReport> {
    boards
        .iter()
        .map(|(label, board)| {
            let report = BoardReport {
                complexity: analyze_board(board),
                solution: solve_sudoku(board),
            };
            (label.clone(), report)
        })
        .collect()
}
