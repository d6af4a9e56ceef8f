//! Adjacency matrix construction.

use sprs::{CsMat, TriMat};

use crate::graph::GraphView;
use crate::model::NodeId;
use crate::Result;
use super::ordering::index_nodes;
use super::Weighting;

/// Adjacency matrix over `node_order`.
///
/// `weight` names the edge attribute to sum; `None` counts edges. See
/// [`adjacency_matrix_with`].
pub fn adjacency_matrix<G: GraphView + ?Sized>(
    graph: &G,
    node_order: &[NodeId],
    weight: Option<&str>,
) -> Result<CsMat<f64>> {
    adjacency_matrix_with(graph, node_order, &Weighting::from(weight))
}

/// Adjacency matrix over `node_order` with an explicit weighting.
///
/// Entry `(i, j)` is the summed weight of every edge joining
/// `node_order[i]` and `node_order[j]`; parallel edges accumulate. The
/// result is symmetric for undirected graphs, and a self-loop adds its
/// weight once to the diagonal. Edges touching a node outside
/// `node_order` are dropped, which yields the induced sub-matrix.
pub fn adjacency_matrix_with<G: GraphView + ?Sized>(
    graph: &G,
    node_order: &[NodeId],
    weighting: &Weighting,
) -> Result<CsMat<f64>> {
    let snapshot = graph.snapshot();
    let index = index_nodes(&snapshot, node_order)?;
    let n = node_order.len();

    let mut tri = TriMat::new((n, n));
    for edge in &snapshot.edges {
        let (Some(&i), Some(&j)) = (index.get(&edge.src), index.get(&edge.dst)) else {
            continue;
        };
        let w = weighting.weight_of(edge)?;
        tri.add_triplet(i, j, w);
        if !snapshot.kind.directed && i != j {
            tri.add_triplet(j, i, w);
        }
    }

    let m: CsMat<f64> = tri.to_csr();
    tracing::debug!(
        nodes = n,
        nnz = m.nnz(),
        directed = snapshot.kind.directed,
        weight = ?weighting.attribute,
        "built adjacency matrix"
    );
    Ok(m)
}
