#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! This module provides functionality for solving the N-Queens problem.

/// The `solver` module contains the row-by-row backtracking placement search.
pub mod solver;
