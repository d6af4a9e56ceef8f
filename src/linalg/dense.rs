//! Dense views of sparse results.

use sprs::CsMat;

/// Row-major dense copy of `m`.
pub fn to_dense(m: &CsMat<f64>) -> Vec<Vec<f64>> {
    let mut out = vec![vec![0.0; m.cols()]; m.rows()];
    for (&v, (r, c)) in m.iter() {
        out[r][c] += v;
    }
    out
}
