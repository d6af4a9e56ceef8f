//! Dense-matrix helpers shared by the integration suites.

#![allow(dead_code)]

/// Dense copy from integer rows, for building expected matrices.
pub fn from_rows<const C: usize>(rows: &[[i64; C]]) -> Vec<Vec<f64>> {
    rows.iter()
        .map(|row| row.iter().map(|&v| v as f64).collect())
        .collect()
}

/// Multiply every entry of a dense matrix by `factor`.
pub fn scaled(m: &[Vec<f64>], factor: f64) -> Vec<Vec<f64>> {
    m.iter()
        .map(|row| row.iter().map(|v| v * factor).collect())
        .collect()
}

pub fn abs(m: &[Vec<f64>]) -> Vec<Vec<f64>> {
    m.iter().map(|row| row.iter().map(|v| v.abs()).collect()).collect()
}
