//! # csp-solver
//!
//! `csp-solver` is a command-line front end for a small collection of
//! backtracking constraint-satisfaction solvers:
//!
//! -   **Sudoku**: completes a 9x9 grid using recursive backtracking with
//!     minimum-remaining-values (MRV) cell selection, and classifies each
//!     board's complexity from its empty-cell count.
//! -   **N-Queens**: places N queens on an NxN board so that no two attack
//!     each other.
//! -   **Subset sum**: searches for a subset of numbers adding up to a target.
//!
//! ## Usage
//!
//! ```sh
//! # Solve a single board file and print the solution with statistics
//! csp_solver sudoku --path puzzle.sudoku
//!
//! # Analyze and solve every .sudoku file under a directory
//! csp_solver batch --path boards/
//!
//! # Place eight queens
//! csp_solver queens --n 8
//!
//! # Find a subset of 3,34,4,12,5,2 summing to 9
//! csp_solver subset-sum --numbers 3,34,4,12,5,2 --target 9
//!
//! # Generate shell completions
//! csp_solver completions bash
//! ```
//!
//! Board files hold nine rows of nine cells; `0`, `.` and `_` denote empty
//! cells, whitespace between cells is optional and lines starting with `#`
//! are ignored.
//!
//! The statistics report includes parse and solve timing, the static
//! complexity summary, and allocator figures read through
//! `tikv-jemalloc-ctl`.

use clap::Parser;

mod command_line;

use command_line::cli::{Cli, run};

/// Global allocator using `tikv-jemallocator`, which also backs the memory
/// figures in the statistics report.
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
