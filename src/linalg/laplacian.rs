//! Graph Laplacian `L = D - A`.

use sprs::{CsMat, TriMat};

use crate::graph::GraphView;
use crate::model::NodeId;
use crate::Result;
use super::adjacency::adjacency_matrix_with;
use super::Weighting;

/// Laplacian over `node_order`. See [`laplacian_matrix_with`].
pub fn laplacian_matrix<G: GraphView + ?Sized>(
    graph: &G,
    node_order: &[NodeId],
    weight: Option<&str>,
) -> Result<CsMat<f64>> {
    laplacian_matrix_with(graph, node_order, &Weighting::from(weight))
}

/// Laplacian `D - A`, where `A` is the adjacency matrix over `node_order`
/// and `D` holds its row sums (out-degree for directed graphs).
///
/// Self-loops appear in both `D` and `A` and cancel.
pub fn laplacian_matrix_with<G: GraphView + ?Sized>(
    graph: &G,
    node_order: &[NodeId],
    weighting: &Weighting,
) -> Result<CsMat<f64>> {
    let a = adjacency_matrix_with(graph, node_order, weighting)?;
    let n = a.rows();

    let mut degree = vec![0.0; n];
    let mut tri = TriMat::new((n, n));
    for (&w, (r, c)) in a.iter() {
        degree[r] += w;
        tri.add_triplet(r, c, -w);
    }
    for (i, d) in degree.into_iter().enumerate() {
        if d != 0.0 {
            tri.add_triplet(i, i, d);
        }
    }

    Ok(tri.to_csr())
}
