//! Plain-text matrix files.
//!
//! One matrix row per line, values separated by whitespace. The reader is
//! lenient about spacing and blank lines; the writer always emits each
//! value followed by a single space and ends every row with `\n`.

pub mod reader;
pub mod writer;

pub use reader::{parse_matrix, read_matrix};
pub use writer::{format_matrix, write_matrix, write_timings};
