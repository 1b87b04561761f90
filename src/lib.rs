#![deny(missing_docs)]
//! This crate provides backtracking solvers for a small family of constraint-satisfaction
//! puzzles.

/// The `queens` module implements the N-Queens solver, which places N queens on an NxN
/// board so that no two attack each other.
pub mod queens;

/// The `subset_sum` module implements the subset-sum solver, which searches for a subset
/// of numbers adding up to a target value.
pub mod subset_sum;

/// The `sudoku` module implements the Sudoku puzzle solver, which completes a 9x9 grid
/// using backtracking with minimum-remaining-values cell selection.
pub mod sudoku;
