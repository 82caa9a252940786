use thiserror::Error;

pub mod board;
pub mod codec;
pub mod generator;
pub mod solver;
pub mod validator;

pub use board::Board;
pub use solver::Solver;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SudokuError {
    #[error("Invalid box size: {0:?}")]
    InvalidBoxSize(String),
    #[error("Expected {expected} grid rows, found {found}")]
    RowCount { expected: usize, found: usize },
    #[error("Row {row} is {found} characters wide, expected {expected}")]
    RowWidth {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("Unreadable field {field:?} at ({row}, {col})")]
    InvalidField {
        row: usize,
        col: usize,
        field: String,
    },
    #[error("Invalid value at position ({row}, {col}): {value}")]
    InvalidValue { row: usize, col: usize, value: u32 },
    #[error("Grid dimensions do not match the declared box size")]
    DimensionMismatch,
    #[error("Puzzle has no solution")]
    Unsolvable,
}

pub type Result<T> = std::result::Result<T, SudokuError>;
