use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::error::{MatrixError, Result};
use crate::matrix::Matrix;

/// Write `matrix` to `path`, one row per line, each value followed by a space.
///
/// Missing parent directories are created. An empty matrix is rejected
/// before anything touches the filesystem.
pub fn write_matrix(matrix: &Matrix, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if matrix.is_empty() {
        return Err(MatrixError::EmptyOutput);
    }

    let mut out = create(path)?;
    format_matrix(matrix, &mut out).map_err(|e| MatrixError::io(path, e))?;
    out.flush().map_err(|e| MatrixError::io(path, e))?;

    debug!(path = %path.display(), rows = matrix.rows(), cols = matrix.cols(), "wrote matrix");
    Ok(())
}

/// Render `matrix` in the on-disk text format.
///
/// ```
/// use matbench::{Matrix, io::format_matrix};
///
/// let m = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
/// let mut buf = Vec::new();
/// format_matrix(&m, &mut buf).unwrap();
/// assert_eq!(buf, b"1 2 \n3 4 \n");
/// ```
pub fn format_matrix<W: Write>(matrix: &Matrix, out: &mut W) -> std::io::Result<()> {
    for row in matrix.row_iter() {
        for value in row {
            write!(out, "{} ", value)?;
        }
        out.write_all(b"\n")?;
    }
    Ok(())
}

/// Write the timing list as a single `a, b, c` line with no trailing newline.
pub fn write_timings(times: &[i64], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let line = times
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(", ");

    let mut out = create(path)?;
    out.write_all(line.as_bytes())
        .and_then(|_| out.flush())
        .map_err(|e| MatrixError::io(path, e))?;

    debug!(path = %path.display(), count = times.len(), "wrote timings");
    Ok(())
}

fn create(path: &Path) -> Result<BufWriter<File>> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| MatrixError::io(parent, e))?;
    }
    let file = File::create(path).map_err(|e| MatrixError::io(path, e))?;
    Ok(BufWriter::new(file))
}
