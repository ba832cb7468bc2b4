//! File-driven benchmark for textbook matrix multiplication.
//!
//! Reads pairs of matrices from text files, multiplies them with the
//! plain i-j-k triple loop in `f32`, writes the product back out and
//! records how long each run took. No blocking, no SIMD, no threads: this
//! measures the baseline everything else gets compared against.
//!
//! ## Usage
//!
//! ```
//! use matbench::{Matrix, multiply};
//!
//! let a = Matrix::identity(3);
//! let b = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]]).unwrap();
//!
//! assert_eq!(multiply(&a, &b).unwrap(), b);
//! ```
//!
//! Running the full benchmark over the default layout
//! (`Matrix_1/`, `Matrix_2/`, `Output/`, `times.txt`):
//!
//! ```no_run
//! use matbench::runner::{BenchConfig, run_benchmark};
//!
//! let outcomes = run_benchmark(&BenchConfig::default()).unwrap();
//! println!("{} cases", outcomes.len());
//! ```

pub mod error;
pub mod io;
pub mod matrix;
pub mod runner;

pub use error::{MatrixError, Result};
pub use matrix::naive_ijk::matmul_naive_ijk;
pub use matrix::{Matrix, multiply};
