#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! This module provides functionality for solving 9x9 Sudoku puzzles with
//! recursive backtracking and minimum-remaining-values cell selection.

/// The `analyze` module classifies board complexity and batch-solves labeled boards.
pub mod analyze;

/// The `board` module defines the board representation, positions and parsing.
pub mod board;

/// The `search` module contains the backtracking search engine and the solver entry point.
pub mod search;

/// The `select` module picks the most constrained empty cell (MRV heuristic).
pub mod select;

/// The `validate` module checks row, column and box uniqueness for a candidate digit.
pub mod validate;
