#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::cast_precision_loss)]
//! The argument surface and command handlers of the binary.
//!
//! Uses `clap` for parsing arguments. Each handler prints its own report;
//! failures bubble up as strings and become the process exit status.

use clap::{Args, CommandFactory, Parser, Subcommand};
use csp_solver::queens::solver::solve_n_queens;
use csp_solver::subset_sum::solver::subset_sum;
use csp_solver::sudoku::analyze::{BoardComplexity, analyze_and_solve, analyze_board};
use csp_solver::sudoku::board::{Board, parse_board_file};
use csp_solver::sudoku::search::solve_sudoku;
use itertools::Itertools;
use rustc_hash::FxHashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tikv_jemalloc_ctl::{epoch, stats};

/// Defines the command-line interface for the solver collection.
#[derive(Parser, Debug)]
#[command(
    name = "csp_solver",
    version,
    about = "A collection of backtracking constraint-satisfaction solvers"
)]
pub(crate) struct Cli {
    /// Specifies the subcommand to execute.
    #[clap(subcommand)]
    pub command: Commands,
}

/// Enumerates the available subcommands.
#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Solve a Sudoku board file.
    Sudoku {
        /// Path to the board file. See `csp_solver --help` for the format.
        #[arg(long)]
        path: PathBuf,

        /// Common options for this subcommand.
        #[command(flatten)]
        common: CommonOptions,
    },

    /// Analyze and solve every `.sudoku` board under a directory.
    ///
    /// Each board is labeled by its file stem; the report is printed in
    /// label order.
    Batch {
        /// Path to the directory to walk for `.sudoku` files.
        #[arg(long)]
        path: PathBuf,

        /// Common options for this subcommand.
        #[command(flatten)]
        common: CommonOptions,
    },

    /// Place N queens on an NxN board so that no two attack each other.
    Queens {
        /// The board size (and number of queens).
        #[arg(short, long)]
        n: usize,
    },

    /// Find a subset of numbers summing to a target value.
    SubsetSum {
        /// The numbers to choose from, comma-separated.
        #[arg(long, num_args = 1.., value_delimiter = ',')]
        numbers: Vec<u64>,

        /// The target sum.
        #[arg(short, long)]
        target: u64,
    },

    /// Generate shell completion scripts.
    Completions {
        /// The shell to generate completions for.
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Defines common command-line options shared by the Sudoku subcommands.
#[derive(Args, Debug, Default, Clone)]
pub(crate) struct CommonOptions {
    /// Enable printing of timing, complexity and memory statistics.
    #[arg(short, long, default_value_t = true)]
    pub(crate) stats: bool,

    /// Enable printing of the solved grid.
    #[arg(short, long, default_value_t = true)]
    pub(crate) print_solution: bool,
}

/// Dispatches a parsed command line to its handler.
pub(crate) fn run(cli: Cli) -> Result<(), String> {
    match cli.command {
        Commands::Sudoku { path, common } => solve_board_file(&path, &common),
        Commands::Batch { path, common } => solve_dir(&path, &common),
        Commands::Queens { n } => {
            solve_n_queens(n).map_or_else(
                || println!("No placement exists for n = {n}"),
                |placement| println!("{}", render_queens(&placement)),
            );
            Ok(())
        }
        Commands::SubsetSum { numbers, target } => {
            subset_sum(&numbers, target).map_or_else(
                || println!("No subset sums to {target}"),
                |subset| println!("Found subset: {subset:?}"),
            );
            Ok(())
        }
        Commands::Completions { shell } => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "csp_solver",
                &mut std::io::stdout(),
            );
            Ok(())
        }
    }
}

/// Parses, analyzes and solves a single board file, then reports.
fn solve_board_file(path: &Path, common: &CommonOptions) -> Result<(), String> {
    let time = std::time::Instant::now();
    let board = parse_board_file(path)
        .map_err(|e| format!("Failed to parse board file {}: {e}", path.display()))?;
    let parse_time = time.elapsed();

    println!("Solving: {}", path.display());

    let complexity = analyze_board(&board);

    epoch::advance().unwrap();
    let time = std::time::Instant::now();
    let solution = solve_sudoku(&board);
    let elapsed = time.elapsed();

    epoch::advance().unwrap();
    let allocated_bytes = stats::allocated::mib().unwrap().read().unwrap();
    let resident_bytes = stats::resident::mib().unwrap().read().unwrap();
    let allocated_mib = allocated_bytes as f64 / (1024.0 * 1024.0);
    let resident_mib = resident_bytes as f64 / (1024.0 * 1024.0);

    if common.stats {
        print_stats(
            parse_time,
            elapsed,
            &complexity,
            allocated_mib,
            resident_mib,
        );
    }

    match solution {
        Some(solved) if common.print_solution => println!("Solution:\n{solved}"),
        Some(_) => println!("Solved"),
        None => println!("No solution exists"),
    }

    Ok(())
}

/// Analyzes and solves a directory of `.sudoku` board files.
///
/// Walks the directory, parses each `.sudoku` file into a batch keyed by
/// file stem, and prints the per-label report in label order. Files that
/// fail to parse are reported and skipped.
fn solve_dir(path: &Path, common: &CommonOptions) -> Result<(), String> {
    if !path.is_dir() {
        return Err(format!(
            "Provided path is not a directory: {}",
            path.display()
        ));
    }

    let mut boards: FxHashMap<String, Board> = FxHashMap::default();

    for entry in walkdir::WalkDir::new(path)
        .into_iter()
        .filter_map(Result::ok)
    {
        let file_path = entry.path();
        if !file_path.is_file() || file_path.extension().is_none_or(|ext| ext != "sudoku") {
            continue;
        }

        let label = file_path.file_stem().map_or_else(
            || file_path.display().to_string(),
            |stem| stem.to_string_lossy().into_owned(),
        );

        match parse_board_file(file_path) {
            Ok(board) => {
                boards.insert(label, board);
            }
            Err(e) => {
                eprintln!("Skipping {}: {e}", file_path.display());
            }
        }
    }

    if boards.is_empty() {
        return Err(format!("No .sudoku files found under {}", path.display()));
    }

    let time = std::time::Instant::now();
    let reports = analyze_and_solve(&boards);
    let elapsed = time.elapsed();

    for (label, report) in reports.iter().sorted_by_key(|(label, _)| label.as_str()) {
        println!("\n{label}:");
        let c = &report.complexity;
        println!(
            "  empty cells: {}, complexity: {}, branching estimate: {}",
            c.empty_cells, c.label, c.branching_estimate
        );
        match &report.solution {
            Some(solved) if common.print_solution => println!("{solved}"),
            Some(_) => println!("  solved"),
            None => println!("  no solution exists"),
        }
    }

    if common.stats {
        println!(
            "\nSolved {} of {} boards in {:.3}s",
            reports
                .values()
                .filter(|report| report.solution.is_some())
                .count(),
            reports.len(),
            elapsed.as_secs_f64()
        );
    }

    Ok(())
}

/// Renders an N-Queens placement as a board diagram.
fn render_queens(placement: &[usize]) -> String {
    placement
        .iter()
        .map(|&col| {
            (0..placement.len())
                .map(|c| if c == col { "Q" } else { "." })
                .join(" ")
        })
        .join("\n")
}

/// Helper function to print a single statistic line in a formatted table row.
fn stat_line(label: &str, value: impl std::fmt::Display) {
    println!("|  {label:<28} {value:>18}  |");
}

/// Prints a summary of parse/solve timing, complexity and memory figures.
fn print_stats(
    parse_time: Duration,
    elapsed: Duration,
    complexity: &BoardComplexity,
    allocated: f64,
    resident: f64,
) {
    println!("\n=======================[ Board Statistics ]=========================");
    stat_line("Parse time (s)", format!("{:.3}", parse_time.as_secs_f64()));
    stat_line("Empty cells", complexity.empty_cells);
    stat_line("Complexity", complexity.label);
    stat_line("Branching estimate", complexity.branching_estimate);
    println!("=======================[ Search Statistics ]========================");
    stat_line("Solve time (s)", format!("{:.3}", elapsed.as_secs_f64()));
    stat_line("Memory usage (MiB)", format!("{allocated:.2}"));
    stat_line("Resident memory (MiB)", format!("{resident:.2}"));
    println!("====================================================================");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_queens_four() {
        let rendered = render_queens(&[1, 3, 0, 2]);
        let expected = ". Q . .\n. . . Q\nQ . . .\n. . Q .";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_cli_parses_sudoku_subcommand() {
        let cli = Cli::try_parse_from(["csp_solver", "sudoku", "--path", "puzzle.sudoku"])
            .expect("valid arguments");
        match cli.command {
            Commands::Sudoku { path, common } => {
                assert_eq!(path, PathBuf::from("puzzle.sudoku"));
                assert!(common.stats);
                assert!(common.print_solution);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_parses_subset_sum_numbers() {
        let cli = Cli::try_parse_from([
            "csp_solver",
            "subset-sum",
            "--numbers",
            "3,34,4,12,5,2",
            "--target",
            "9",
        ])
        .expect("valid arguments");
        match cli.command {
            Commands::SubsetSum { numbers, target } => {
                assert_eq!(numbers, vec![3, 34, 4, 12, 5, 2]);
                assert_eq!(target, 9);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
