//! # Matrix Conversion
//!
//! Graph → sparse matrix conversions. Every conversion takes explicit
//! orderings: row `i` is `node_order[i]`, incidence column `k` is
//! `edge_order[k]`. Reordering the inputs permutes the output; it never
//! changes values.
//!
//! | Operation | Shape |
//! |-----------|-------|
//! | [`adjacency_matrix`] | nodes × nodes |
//! | [`incidence_matrix`] | nodes × edges |
//! | [`laplacian_matrix`] | nodes × nodes |
//!
//! Each has a `_with` variant taking a full [`Weighting`]. Results are
//! CSR `sprs::CsMat<f64>`; [`to_dense`] copies one out for inspection.

pub mod ordering;
pub mod weight;
pub mod adjacency;
pub mod incidence;
pub mod laplacian;
pub mod dense;

pub use weight::{Weighting, DEFAULT_WEIGHT_ATTRIBUTE};
pub use adjacency::{adjacency_matrix, adjacency_matrix_with};
pub use incidence::{incidence_matrix, incidence_matrix_with};
pub use laplacian::{laplacian_matrix, laplacian_matrix_with};
pub use dense::to_dense;
