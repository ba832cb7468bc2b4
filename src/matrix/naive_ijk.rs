/// Matrix multiplication using the i-j-k loop order.
///
/// This is the textbook triple-loop implementation. The innermost loop
/// walks B with stride `n` (column-wise), so it is cache-unfriendly on
/// large inputs. That is the point: it's the algorithm being measured.
///
/// Each output element is accumulated in `f32`, in increasing `p` order,
/// starting from whatever is in `c`. With a zeroed `c` this gives the
/// exact rounding of a plain `sum += a * b` loop.
///
/// # Arguments
///
/// * `a` - Matrix A (m × k), row-major
/// * `b` - Matrix B (k × n), row-major
/// * `c` - Matrix C (m × n), row-major, accumulated into (C += A * B)
/// * `m` - Rows of A and C
/// * `n` - Columns of B and C
/// * `k` - Columns of A, rows of B
pub fn matmul_naive_ijk(a: &[f32], b: &[f32], c: &mut [f32], m: usize, n: usize, k: usize) {
    for i in 0..m {
        for j in 0..n {
            let mut acc = c[i * n + j];
            for p in 0..k {
                acc += a[i * k + p] * b[p * n + j];
            }
            c[i * n + j] = acc;
        }
    }
}
