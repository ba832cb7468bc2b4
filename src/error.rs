//! Error types for reading, multiplying and writing matrices.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during a benchmark run.
#[derive(Debug, Error)]
pub enum MatrixError {
    /// A file could not be read part way through, or could not be written.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A token is not a floating-point number.
    #[error("Invalid argument in file {}:{line}: {token}", .path.display())]
    InvalidNumber {
        path: PathBuf,
        line: usize,
        token: String,
    },

    /// A token does not fit in an `f32`.
    #[error("Out of range in file {}:{line}: {token}", .path.display())]
    OutOfRange {
        path: PathBuf,
        line: usize,
        token: String,
    },

    /// A row has a different length than the first row.
    #[error(
        "Ragged row in file {}:{line}: expected {expected} values, found {found}",
        .path.display()
    )]
    Ragged {
        path: PathBuf,
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("Matrix 1 is empty")]
    EmptyLeft,

    #[error("Matrix 2 is empty")]
    EmptyRight,

    /// An input file produced no rows.
    #[error("Input matrix {} is empty, cannot multiply", .path.display())]
    EmptyInput { path: PathBuf },

    /// Left column count differs from right row count.
    #[error(
        "Matrix dimensions incompatible for multiplication: {left_cols} columns vs {right_rows} rows"
    )]
    DimensionMismatch { left_cols: usize, right_rows: usize },

    #[error("Refusing to write an empty matrix")]
    EmptyOutput,
}

impl MatrixError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for matrix operations.
pub type Result<T> = std::result::Result<T, MatrixError>;
