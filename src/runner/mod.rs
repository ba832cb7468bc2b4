//! Runs benchmark cases end to end and collects their timings.
//!
//! A run is read A, read B, multiply, write C, all inside one timed span.
//! A failed run never stops the others; it shows up as [`FAILED_RUN`] in
//! the timing list.

pub mod config;

pub use config::{BenchConfig, Case, DEFAULT_SIZES};

use std::path::Path;
use std::time::{Duration, Instant};

use tracing::{error, info};

use crate::error::{MatrixError, Result};
use crate::io::{read_matrix, write_matrix, write_timings};
use crate::matrix::{Matrix, multiply};

/// Timing recorded for a run that did not complete.
pub const FAILED_RUN: i64 = -1;

/// Dimensions and wall time of a successful run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunReport {
    pub m: usize,
    pub n: usize,
    pub k: usize,
    pub elapsed: Duration,
}

impl RunReport {
    /// Elapsed whole microseconds.
    pub fn micros(&self) -> i64 {
        i64::try_from(self.elapsed.as_micros()).unwrap_or(i64::MAX)
    }

    /// Throughput of the whole run, I/O included.
    pub fn gflops(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs == 0.0 {
            return 0.0;
        }
        2.0 * (self.m * self.n * self.k) as f64 / secs / 1e9
    }
}

/// A case together with how it went.
#[derive(Debug)]
pub struct CaseOutcome {
    pub case: Case,
    pub result: Result<RunReport>,
}

impl CaseOutcome {
    /// Microseconds, or [`FAILED_RUN`].
    pub fn timing(&self) -> i64 {
        self.result.as_ref().map_or(FAILED_RUN, RunReport::micros)
    }
}

/// Read both inputs of a case, A then B.
///
/// Both files are always read, so a bad B is seen even when A is bad too.
/// An empty matrix is reported as [`MatrixError::EmptyInput`].
pub fn read_inputs(case: &Case) -> (Result<Matrix>, Result<Matrix>) {
    let load = |path: &Path| {
        read_matrix(path).and_then(|m| {
            if m.is_empty() {
                Err(MatrixError::EmptyInput {
                    path: path.to_path_buf(),
                })
            } else {
                Ok(m)
            }
        })
    };
    (load(&case.input_a), load(&case.input_b))
}

/// Run a single case.
///
/// When both inputs are broken the error for B is logged and the one for A
/// is returned.
pub fn run_case(case: &Case) -> Result<RunReport> {
    let start = Instant::now();

    let (a, b) = match read_inputs(case) {
        (Ok(a), Ok(b)) => (a, b),
        (Err(e), Ok(_)) | (Ok(_), Err(e)) => return Err(e),
        (Err(e), Err(other)) => {
            error!(size = case.size, "{other}");
            return Err(e);
        }
    };

    let c = multiply(&a, &b)?;
    write_matrix(&c, &case.output)?;

    Ok(RunReport {
        m: a.rows(),
        n: b.cols(),
        k: a.cols(),
        elapsed: start.elapsed(),
    })
}

/// Run every configured case in order.
pub fn run_all(config: &BenchConfig) -> Vec<CaseOutcome> {
    config
        .cases()
        .into_iter()
        .map(|case| {
            let result = run_case(&case);
            match &result {
                Ok(report) => info!(size = case.size, "Times: {}", report.micros()),
                Err(e) => error!(size = case.size, "run failed: {e}"),
            }
            CaseOutcome { case, result }
        })
        .collect()
}

/// Timing list in case order.
pub fn timings(outcomes: &[CaseOutcome]) -> Vec<i64> {
    outcomes.iter().map(CaseOutcome::timing).collect()
}

/// Run all cases, then write the timing file.
///
/// Only a failure to write the timing file is an error here.
pub fn run_benchmark(config: &BenchConfig) -> Result<Vec<CaseOutcome>> {
    let outcomes = run_all(config);
    write_timings(&timings(&outcomes), config.times_path())?;
    Ok(outcomes)
}
