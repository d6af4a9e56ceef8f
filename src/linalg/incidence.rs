//! Incidence matrix construction.

use sprs::{CsMat, TriMat};

use crate::graph::GraphView;
use crate::model::{EdgeRef, NodeId};
use crate::{Error, Result};
use super::ordering::{index_nodes, resolve_edges};
use super::Weighting;

/// Incidence matrix with rows from `node_order` and columns from
/// `edge_order`.
///
/// `weight` names the edge attribute that scales each column; `None` gives
/// unit entries. See [`incidence_matrix_with`].
pub fn incidence_matrix<G: GraphView + ?Sized>(
    graph: &G,
    node_order: &[NodeId],
    edge_order: &[EdgeRef],
    oriented: bool,
    weight: Option<&str>,
) -> Result<CsMat<f64>> {
    incidence_matrix_with(graph, node_order, edge_order, oriented, &Weighting::from(weight))
}

/// Incidence matrix with an explicit weighting.
///
/// Column `k` holds edge `edge_order[k] = (u, v)`:
///
/// - oriented: `-w` at row `u` (the tail, as written in the ordering) and
///   `+w` at row `v`
/// - unoriented: `w` at both rows
///
/// Self-loops leave their column empty and are exempt from the node-order
/// check. Both endpoints of every other listed edge must appear in
/// `node_order`.
pub fn incidence_matrix_with<G: GraphView + ?Sized>(
    graph: &G,
    node_order: &[NodeId],
    edge_order: &[EdgeRef],
    oriented: bool,
    weighting: &Weighting,
) -> Result<CsMat<f64>> {
    let snapshot = graph.snapshot();
    let rows = index_nodes(&snapshot, node_order)?;
    let edges = resolve_edges(&snapshot, edge_order)?;

    let mut tri = TriMat::new((node_order.len(), edge_order.len()));
    for (col, (r, edge)) in edge_order.iter().zip(edges).enumerate() {
        // self-loop columns stay empty, so their node needs no row
        if edge.is_self_loop() {
            continue;
        }
        let (Some(&u), Some(&v)) = (rows.get(&r.src), rows.get(&r.dst)) else {
            let missing = if rows.contains_key(&r.src) { r.dst } else { r.src };
            tracing::warn!(edge = %r, node = %missing, "edge endpoint missing from node order");
            return Err(Error::InvalidOrdering(format!(
                "node {missing} of edge {r} is not in node order"
            )));
        };
        let w = weighting.weight_of(edge)?;
        if oriented {
            tri.add_triplet(u, col, -w);
        } else {
            tri.add_triplet(u, col, w);
        }
        tri.add_triplet(v, col, w);
    }

    let m: CsMat<f64> = tri.to_csr();
    tracing::debug!(
        nodes = node_order.len(),
        edges = edge_order.len(),
        nnz = m.nnz(),
        oriented,
        weight = ?weighting.attribute,
        "built incidence matrix"
    );
    Ok(m)
}
