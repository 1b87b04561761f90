//! End-to-end runs over the four exemplar boards the solver harness has
//! always shipped with. The boards are test fixtures only; the library
//! exposes no built-in puzzles.

use csp_solver::sudoku::analyze::analyze_and_solve;
use csp_solver::sudoku::board::{Board, Position, SIZE};
use csp_solver::sudoku::search::solve_sudoku;
use csp_solver::sudoku::validate::is_valid;
use rustc_hash::FxHashMap;

fn easy_board() -> Board {
    Board::new(vec![
        vec![5, 3, 0, 0, 7, 0, 0, 0, 0],
        vec![6, 0, 0, 1, 9, 5, 0, 0, 0],
        vec![0, 9, 8, 0, 0, 0, 0, 6, 0],
        vec![8, 0, 0, 0, 6, 0, 0, 0, 3],
        vec![4, 0, 0, 8, 0, 3, 0, 0, 1],
        vec![7, 0, 0, 0, 2, 0, 0, 0, 6],
        vec![0, 6, 0, 0, 0, 0, 2, 8, 0],
        vec![0, 0, 0, 4, 1, 9, 0, 0, 5],
        vec![0, 0, 0, 0, 8, 0, 0, 7, 9],
    ])
}

fn medium_board() -> Board {
    Board::new(vec![
        vec![0, 0, 0, 2, 6, 0, 7, 0, 1],
        vec![6, 8, 0, 0, 7, 0, 0, 9, 0],
        vec![1, 9, 0, 0, 0, 4, 5, 0, 0],
        vec![8, 2, 0, 1, 0, 0, 0, 4, 0],
        vec![0, 0, 4, 6, 0, 2, 9, 0, 0],
        vec![0, 5, 0, 0, 0, 3, 0, 2, 8],
        vec![0, 0, 9, 3, 0, 0, 0, 7, 4],
        vec![0, 4, 0, 0, 5, 0, 0, 3, 6],
        vec![7, 0, 3, 0, 1, 8, 0, 0, 0],
    ])
}

fn hard_board() -> Board {
    Board::new(vec![
        vec![0, 0, 0, 0, 0, 0, 0, 0, 0],
        vec![0, 0, 0, 0, 0, 3, 0, 8, 5],
        vec![0, 0, 1, 0, 2, 0, 0, 0, 0],
        vec![0, 0, 0, 5, 0, 7, 0, 0, 0],
        vec![0, 0, 4, 0, 0, 0, 1, 0, 0],
        vec![0, 9, 0, 0, 0, 0, 0, 0, 0],
        vec![5, 0, 0, 0, 0, 0, 0, 7, 3],
        vec![0, 0, 2, 0, 1, 0, 0, 0, 0],
        vec![0, 0, 0, 0, 4, 0, 0, 0, 9],
    ])
}

fn expert_board() -> Board {
    Board::new(vec![
        vec![0, 0, 0, 0, 0, 0, 0, 0, 2],
        vec![0, 0, 0, 0, 0, 0, 9, 4, 0],
        vec![0, 0, 3, 0, 0, 0, 0, 0, 5],
        vec![0, 9, 2, 3, 0, 5, 0, 7, 4],
        vec![8, 4, 0, 0, 0, 0, 0, 0, 0],
        vec![0, 6, 7, 0, 9, 8, 0, 0, 0],
        vec![0, 0, 0, 7, 0, 6, 0, 0, 0],
        vec![0, 0, 0, 9, 0, 0, 0, 2, 0],
        vec![4, 0, 8, 5, 0, 0, 3, 6, 0],
    ])
}

/// Asserts that every row, column and box of `solution` holds each digit
/// exactly once and that every clue of `puzzle` survived.
fn assert_valid_solution(puzzle: &Board, solution: &Board) {
    let grid = solution.to_grid().expect("solution is well formed");

    for r in 0..SIZE {
        for c in 0..SIZE {
            let digit = grid[r][c];
            assert!((1..=9).contains(&digit), "cell ({r}, {c}) left empty");
            assert!(
                is_valid(&grid, digit, Position::new(r, c)),
                "cell ({r}, {c}) conflicts with a peer"
            );
        }
    }

    for (r, row) in puzzle.rows().iter().enumerate() {
        for (c, &digit) in row.iter().enumerate() {
            if digit != 0 {
                assert_eq!(grid[r][c], digit, "clue at ({r}, {c}) was overwritten");
            }
        }
    }
}

#[test]
fn easy_board_solves_end_to_end() {
    let puzzle = easy_board();
    let solution = solve_sudoku(&puzzle).expect("easy board is solvable");
    assert_valid_solution(&puzzle, &solution);

    // Row 0 must come out as a permutation of 1..=9 around the clues
    // 5, 3 and 7; in particular the originally empty cell [0][2] now
    // holds one of the missing digits.
    let row0 = &solution.rows()[0];
    let mut seen = [false; 10];
    for &digit in row0.iter() {
        assert!(!seen[digit as usize], "row 0 repeats {digit}");
        seen[digit as usize] = true;
    }
    assert_eq!(row0[0], 5);
    assert_eq!(row0[1], 3);
    assert_eq!(row0[4], 7);
    assert!((1..=9).contains(&row0[2]));
}

#[test]
fn medium_board_solves_end_to_end() {
    let puzzle = medium_board();
    let solution = solve_sudoku(&puzzle).expect("medium board is solvable");
    assert_valid_solution(&puzzle, &solution);
}

#[test]
fn hard_board_solves_end_to_end() {
    let puzzle = hard_board();
    let solution = solve_sudoku(&puzzle).expect("hard board is solvable");
    assert_valid_solution(&puzzle, &solution);
}

#[test]
fn expert_board_solves_end_to_end() {
    let puzzle = expert_board();
    let solution = solve_sudoku(&puzzle).expect("expert board is solvable");
    assert_valid_solution(&puzzle, &solution);
}

#[test]
fn repeated_solves_agree() {
    let puzzle = hard_board();
    let first = solve_sudoku(&puzzle).expect("solvable");
    let second = solve_sudoku(&puzzle).expect("solvable");
    assert_eq!(first, second);
}

#[test]
fn batch_reports_every_label() {
    let mut boards = FxHashMap::default();
    boards.insert(String::from("easy"), easy_board());
    boards.insert(String::from("medium"), medium_board());
    boards.insert(String::from("hard"), hard_board());
    boards.insert(String::from("expert"), expert_board());

    let reports = analyze_and_solve(&boards);
    assert_eq!(reports.len(), 4);

    for (label, report) in &reports {
        let puzzle = &boards[label];
        assert_eq!(report.complexity.empty_cells, puzzle.empty_cells());
        assert_eq!(
            report.complexity.branching_estimate,
            puzzle.empty_cells() * 9
        );
        let solution = report
            .solution
            .as_ref()
            .unwrap_or_else(|| panic!("{label} board should solve"));
        assert_valid_solution(puzzle, solution);
    }
}
