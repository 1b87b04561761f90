#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! The board representation shared by the validator, selector and search engine.
//!
//! Two representations exist on purpose. [`Board`] is the caller-facing type: a
//! newtype over `Vec<Vec<u8>>`, so a malformed grid (wrong row count, ragged rows,
//! out-of-range cells) is representable and can be rejected at the solver boundary
//! rather than by construction. [`Grid`] is the checked working representation the
//! search mutates: a fixed `[[u8; 9]; 9]` that only exists once the shape has been
//! verified.
//!
//! A cell holds `0` for empty or a digit `1`-`9`. The text format accepted by
//! [`FromStr`] is nine lines of nine cells, where `.` and `_` are also read as
//! empty, whitespace between cells is optional and lines starting with `#` are
//! skipped.

use itertools::Itertools;
use std::fmt::Display;
use std::io;
use std::path::Path;
use std::str::FromStr;

/// The side length of the board.
pub const SIZE: usize = 9;

/// The side length of one of the nine 3x3 boxes.
pub const BOX_SIZE: usize = 3;

/// The cell value denoting an empty cell.
pub const EMPTY: u8 = 0;

/// The checked, fixed-size working grid the search engine mutates in place.
pub type Grid = [[u8; SIZE]; SIZE];

/// A cell coordinate, with `row` and `col` both in `0..9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// The row index, `0..9` from the top.
    pub row: usize,
    /// The column index, `0..9` from the left.
    pub col: usize,
}

impl Position {
    /// Creates a new position from a row and column index.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// A caller-facing Sudoku board, possibly malformed.
///
/// The solver entry point never mutates a `Board`; it copies it into a [`Grid`]
/// after validating the shape and returns a fresh `Board` on success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board(Vec<Vec<u8>>);

impl Board {
    /// Wraps rows of cells as a board without validating them.
    #[must_use]
    pub const fn new(rows: Vec<Vec<u8>>) -> Self {
        Self(rows)
    }

    /// Returns the rows of the board.
    #[must_use]
    pub fn rows(&self) -> &[Vec<u8>] {
        &self.0
    }

    /// Counts the empty (zero) cells, regardless of shape.
    #[must_use]
    pub fn empty_cells(&self) -> usize {
        self.0
            .iter()
            .map(|row| row.iter().filter(|&&cell| cell == EMPTY).count())
            .sum()
    }

    /// Copies the board into a checked working grid.
    ///
    /// Returns `None` unless the board has exactly nine rows of nine cells, each
    /// cell in `0..=9`.
    #[must_use]
    pub fn to_grid(&self) -> Option<Grid> {
        if self.0.len() != SIZE {
            return None;
        }

        let mut grid = [[EMPTY; SIZE]; SIZE];
        for (r, row) in self.0.iter().enumerate() {
            if row.len() != SIZE {
                return None;
            }
            for (c, &cell) in row.iter().enumerate() {
                if cell > 9 {
                    return None;
                }
                grid[r][c] = cell;
            }
        }
        Some(grid)
    }
}

impl From<Vec<Vec<u8>>> for Board {
    fn from(rows: Vec<Vec<u8>>) -> Self {
        Self::new(rows)
    }
}

impl From<Grid> for Board {
    fn from(grid: Grid) -> Self {
        Self::new(grid.iter().map(|row| row.to_vec()).collect())
    }
}

impl From<Board> for Vec<Vec<u8>> {
    fn from(board: Board) -> Self {
        board.0
    }
}

impl From<&Board> for Vec<Vec<u8>> {
    fn from(board: &Board) -> Self {
        board.0.clone()
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (r, row) in self.0.iter().enumerate() {
            if r > 0 && r % BOX_SIZE == 0 {
                writeln!(f, "------+-------+------")?;
            }
            for (c, &cell) in row.iter().enumerate() {
                if c > 0 && c % BOX_SIZE == 0 {
                    write!(f, "| ")?;
                }
                if cell == EMPTY {
                    write!(f, ". ")?;
                } else {
                    write!(f, "{cell} ")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// An error produced when parsing a board from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseBoardError {
    /// The input did not contain exactly nine cell rows.
    RowCount(usize),
    /// A row did not contain exactly nine cells.
    RowLength {
        /// The zero-based index of the offending row.
        row: usize,
        /// The number of cells found on that row.
        len: usize,
    },
    /// A character was not a digit, `.`, or `_`.
    BadCell {
        /// The zero-based index of the offending row.
        row: usize,
        /// The offending character.
        found: char,
    },
}

impl Display for ParseBoardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RowCount(count) => {
                write!(f, "expected {SIZE} rows, found {count}")
            }
            Self::RowLength { row, len } => {
                write!(f, "expected {SIZE} cells on row {row}, found {len}")
            }
            Self::BadCell { row, found } => {
                write!(f, "invalid cell {found:?} on row {row}")
            }
        }
    }
}

impl std::error::Error for ParseBoardError {}

impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Separator lines (all `-`/`+`) let rendered boards parse back.
        let lines = s
            .lines()
            .map(str::trim)
            .filter(|line| {
                !line.is_empty()
                    && !line.starts_with('#')
                    && !line.chars().all(|ch| matches!(ch, '-' | '+'))
            })
            .collect_vec();

        if lines.len() != SIZE {
            return Err(ParseBoardError::RowCount(lines.len()));
        }

        let mut rows = Vec::with_capacity(SIZE);
        for (r, line) in lines.iter().enumerate() {
            let row: Vec<u8> = line
                .chars()
                .filter(|ch| !ch.is_whitespace() && *ch != '|')
                .map(|ch| match ch {
                    '.' | '_' => Ok(EMPTY),
                    '0'..='9' => Ok(ch as u8 - b'0'),
                    _ => Err(ParseBoardError::BadCell { row: r, found: ch }),
                })
                .try_collect()?;

            if row.len() != SIZE {
                return Err(ParseBoardError::RowLength {
                    row: r,
                    len: row.len(),
                });
            }
            rows.push(row);
        }

        Ok(Self::new(rows))
    }
}

/// Parses a `.sudoku` board file.
///
/// This is a convenience wrapper around [`Board::from_str`] for the command-line
/// harness; parse failures are reported as [`io::ErrorKind::InvalidData`].
///
/// # Errors
///
/// Returns an error if the file cannot be read or its contents are not a valid
/// board.
pub fn parse_board_file(path: &Path) -> io::Result<Board> {
    let contents = std::fs::read_to_string(path)?;

    contents
        .parse()
        .map_err(|e: ParseBoardError| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))
}
