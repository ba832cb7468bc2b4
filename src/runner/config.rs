use std::path::PathBuf;

/// Sizes benchmarked when none are given.
pub const DEFAULT_SIZES: [usize; 11] = [10, 20, 30, 40, 50, 60, 70, 80, 90, 100, 1000];

/// Where inputs live, which sizes to run and where the timings go.
///
/// All case paths are resolved against `root`:
/// `Matrix_1/matrix1_<N>.txt`, `Matrix_2/matrix2_<N>.txt` and
/// `Output/output_<N>.txt`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    pub root: PathBuf,
    pub sizes: Vec<usize>,
    pub times_file: PathBuf,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            sizes: DEFAULT_SIZES.to_vec(),
            times_file: PathBuf::from("times.txt"),
        }
    }
}

impl BenchConfig {
    /// Default layout under a different root.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    /// One case per size, in order.
    pub fn cases(&self) -> Vec<Case> {
        self.sizes
            .iter()
            .map(|&size| Case::new(&self.root, size))
            .collect()
    }

    pub fn times_path(&self) -> PathBuf {
        self.root.join(&self.times_file)
    }
}

/// One size category: two inputs and the output they produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Case {
    pub size: usize,
    pub input_a: PathBuf,
    pub input_b: PathBuf,
    pub output: PathBuf,
}

impl Case {
    pub fn new(root: impl Into<PathBuf>, size: usize) -> Self {
        let root = root.into();
        Self {
            size,
            input_a: root.join("Matrix_1").join(format!("matrix1_{size}.txt")),
            input_b: root.join("Matrix_2").join(format!("matrix2_{size}.txt")),
            output: root.join("Output").join(format!("output_{size}.txt")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn default_has_eleven_cases() {
        let cases = BenchConfig::default().cases();
        assert_eq!(cases.len(), 11);
        assert_eq!(cases[0].size, 10);
        assert_eq!(cases[10].size, 1000);
    }

    #[test]
    fn case_paths_follow_layout() {
        let case = Case::new("/data", 40);
        assert_eq!(case.input_a, Path::new("/data/Matrix_1/matrix1_40.txt"));
        assert_eq!(case.input_b, Path::new("/data/Matrix_2/matrix2_40.txt"));
        assert_eq!(case.output, Path::new("/data/Output/output_40.txt"));
    }
}
