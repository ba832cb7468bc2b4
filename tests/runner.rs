use std::fs;
use std::path::Path;

use matbench::MatrixError;
use matbench::io::read_matrix;
use matbench::runner::{
    BenchConfig, Case, FAILED_RUN, read_inputs, run_all, run_benchmark, run_case, timings,
};
use tempfile::tempdir;

fn put(root: &Path, rel: &str, text: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, text).unwrap();
}

fn put_case(root: &Path, size: usize, a: &str, b: &str) {
    put(root, &format!("Matrix_1/matrix1_{size}.txt"), a);
    put(root, &format!("Matrix_2/matrix2_{size}.txt"), b);
}

#[test]
fn test_end_to_end_2x2() {
    let dir = tempdir().unwrap();
    put_case(dir.path(), 2, "1 2\n3 4\n", "5 6\n7 8\n");
    let case = Case::new(dir.path(), 2);

    let report = run_case(&case).unwrap();

    assert_eq!((report.m, report.n, report.k), (2, 2, 2));
    assert!(report.micros() >= 0);
    assert_eq!(
        fs::read_to_string(&case.output).unwrap(),
        "19 22 \n43 50 \n"
    );
    assert_eq!(
        read_matrix(&case.output).unwrap().as_slice(),
        &[19.0, 22.0, 43.0, 50.0]
    );
}

#[test]
fn test_missing_input_fails_without_output() {
    let dir = tempdir().unwrap();
    put(dir.path(), "Matrix_1/matrix1_3.txt", "1 2 3\n");
    let case = Case::new(dir.path(), 3);

    let err = run_case(&case).unwrap_err();

    assert!(matches!(err, MatrixError::EmptyInput { ref path } if path == &case.input_b));
    assert!(!case.output.exists());
}

#[test]
fn test_undecodable_input_reports_that_file() {
    let dir = tempdir().unwrap();
    put(dir.path(), "Matrix_2/matrix2_2.txt", "1 2\n3 4\n");
    let case = Case::new(dir.path(), 2);
    fs::create_dir_all(case.input_a.parent().unwrap()).unwrap();
    fs::write(&case.input_a, b"1 2\n\xff 4\n").unwrap();

    let err = run_case(&case).unwrap_err();

    assert!(matches!(err, MatrixError::InvalidNumber { line: 2, ref path, .. } if path == &case.input_a));
    assert!(!case.output.exists());
}

#[test]
fn test_both_inputs_read_when_first_is_bad() {
    let dir = tempdir().unwrap();
    put_case(dir.path(), 5, "1 abc\n", "2 3\n4\n");
    let case = Case::new(dir.path(), 5);

    let (a, b) = read_inputs(&case);

    assert!(matches!(a, Err(MatrixError::InvalidNumber { .. })));
    assert!(matches!(b, Err(MatrixError::Ragged { line: 2, .. })));
    assert!(matches!(
        run_case(&case),
        Err(MatrixError::InvalidNumber { .. })
    ));
}

#[test]
fn test_read_inputs_flags_empty_file() {
    let dir = tempdir().unwrap();
    put_case(dir.path(), 6, "\n\n", "1\n");

    let (a, b) = read_inputs(&Case::new(dir.path(), 6));

    assert!(matches!(a, Err(MatrixError::EmptyInput { .. })));
    assert_eq!(b.unwrap().as_slice(), &[1.0]);
}

#[test]
fn test_incompatible_case_fails() {
    let dir = tempdir().unwrap();
    put_case(dir.path(), 4, "1 2 3\n4 5 6\n", "1 2\n3 4\n");

    let err = run_case(&Case::new(dir.path(), 4)).unwrap_err();

    assert!(matches!(err, MatrixError::DimensionMismatch { .. }));
}

#[test]
fn test_failures_become_sentinels_and_others_still_run() {
    let dir = tempdir().unwrap();
    put_case(dir.path(), 1, "2\n", "3\n");
    put_case(dir.path(), 2, "1 abc\n", "1\n");
    // size 3 has no files at all
    put_case(dir.path(), 4, "1 0\n0 1\n", "9 8\n7 6\n");

    let config = BenchConfig {
        sizes: vec![1, 2, 3, 4],
        ..BenchConfig::with_root(dir.path())
    };
    let outcomes = run_all(&config);
    let times = timings(&outcomes);

    assert_eq!(times.len(), 4);
    assert!(times[0] >= 0);
    assert_eq!(times[1], FAILED_RUN);
    assert_eq!(times[2], FAILED_RUN);
    assert!(times[3] >= 0);
    assert_eq!(
        fs::read_to_string(dir.path().join("Output/output_4.txt")).unwrap(),
        "9 8 \n7 6 \n"
    );
}

#[test]
fn test_run_benchmark_writes_times_file() {
    let dir = tempdir().unwrap();
    put_case(dir.path(), 10, "1\n", "1\n");

    let config = BenchConfig {
        sizes: vec![10, 20],
        ..BenchConfig::with_root(dir.path())
    };
    let outcomes = run_benchmark(&config).unwrap();

    let written = fs::read_to_string(dir.path().join("times.txt")).unwrap();
    let fields: Vec<i64> = written.split(", ").map(|s| s.parse().unwrap()).collect();
    assert_eq!(fields, timings(&outcomes));
    assert_eq!(fields[1], -1);
    assert!(!written.ends_with('\n'));
}

#[test]
fn test_default_config_covers_eleven_sizes() {
    let dir = tempdir().unwrap();

    let outcomes = run_all(&BenchConfig::with_root(dir.path()));

    assert_eq!(timings(&outcomes), vec![FAILED_RUN; 11]);
}
