#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! This module provides functionality for solving the subset-sum problem.

/// The `solver` module contains the include/exclude backtracking search.
pub mod solver;
