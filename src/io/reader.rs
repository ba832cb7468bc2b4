use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::error::{MatrixError, Result};
use crate::matrix::Matrix;

/// Read a whitespace-separated matrix from `path`.
///
/// A file that cannot be opened yields an empty matrix rather than an
/// error; callers decide whether empty input is a failure.
pub fn read_matrix(path: impl AsRef<Path>) -> Result<Matrix> {
    let path = path.as_ref();
    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "cannot open matrix file");
            return Ok(Matrix::empty());
        }
    };
    parse_matrix(BufReader::new(file), path)
}

/// Parse a matrix from any buffered reader.
///
/// `origin` only labels errors. Blank lines are skipped. The first bad
/// token aborts the whole parse, and so does a read failure part way
/// through. A token that is not valid UTF-8 counts as a bad token.
///
/// ```
/// use std::path::Path;
/// use matbench::io::parse_matrix;
///
/// let m = parse_matrix("1 2\n\n3 4\n".as_bytes(), Path::new("inline")).unwrap();
/// assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
/// ```
pub fn parse_matrix<R: BufRead>(reader: R, origin: &Path) -> Result<Matrix> {
    let mut data = Vec::new();
    let mut rows = 0;
    let mut cols = 0;

    for (idx, line) in reader.split(b'\n').enumerate() {
        let line = line.map_err(|e| MatrixError::io(origin, e))?;
        let lineno = idx + 1;

        let start = data.len();
        for token in line
            .split(u8::is_ascii_whitespace)
            .filter(|t| !t.is_empty())
        {
            data.push(parse_token(token, origin, lineno)?);
        }
        let found = data.len() - start;
        if found == 0 {
            continue;
        }

        if rows == 0 {
            cols = found;
        } else if found != cols {
            return Err(MatrixError::Ragged {
                path: origin.to_path_buf(),
                line: lineno,
                expected: cols,
                found,
            });
        }
        rows += 1;
    }

    debug!(path = %origin.display(), rows, cols, "parsed matrix");
    Ok(Matrix::from_vec(rows, cols, data).unwrap_or_default())
}

fn parse_token(raw: &[u8], origin: &Path, line: usize) -> Result<f32> {
    let invalid = || MatrixError::InvalidNumber {
        path: origin.to_path_buf(),
        line,
        token: String::from_utf8_lossy(raw).into_owned(),
    };
    let token = std::str::from_utf8(raw).map_err(|_| invalid())?;
    let value: f32 = token.parse().map_err(|_| invalid())?;

    if out_of_range(token, value) {
        return Err(MatrixError::OutOfRange {
            path: origin.to_path_buf(),
            line,
            token: token.to_string(),
        });
    }
    Ok(value)
}

/// Overflow to infinity, underflow into the subnormal range, or underflow
/// to zero from a non-zero literal.
fn out_of_range(token: &str, value: f32) -> bool {
    if value.is_subnormal() {
        return true;
    }
    let digits = token.trim_start_matches(['+', '-']);
    if value.is_infinite() {
        return !digits.eq_ignore_ascii_case("inf") && !digits.eq_ignore_ascii_case("infinity");
    }
    if value == 0.0 {
        let mantissa = digits.split(['e', 'E']).next().unwrap_or("");
        return mantissa.bytes().any(|b| (b'1'..=b'9').contains(&b));
    }
    false
}
