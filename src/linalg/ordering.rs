//! Validation of caller-supplied node and edge orderings.
//!
//! Orderings are resolved against one `Snapshot` so that index assignment
//! and matrix filling see the same graph.

use hashbrown::{HashMap, HashSet};

use crate::graph::Snapshot;
use crate::model::*;
use crate::{Error, Result};

/// Row/column position of each node in a node ordering.
pub type NodeIndex = HashMap<NodeId, usize>;

fn invalid(msg: String) -> Error {
    tracing::warn!(%msg, "rejected ordering");
    Error::InvalidOrdering(msg)
}

/// Map each node of `node_order` to its position.
///
/// Fails on a node the graph does not contain or on a repeated node.
pub fn index_nodes(snapshot: &Snapshot, node_order: &[NodeId]) -> Result<NodeIndex> {
    let mut index = NodeIndex::with_capacity(node_order.len());
    for (pos, &id) in node_order.iter().enumerate() {
        if snapshot.nodes.binary_search(&id).is_err() {
            return Err(invalid(format!("node {id} in node order is not in the graph")));
        }
        if index.insert(id, pos).is_some() {
            return Err(invalid(format!("node {id} appears more than once in node order")));
        }
    }
    Ok(index)
}

/// Bind every entry of `edge_order` to a distinct edge of the snapshot.
///
/// Keyed references claim their exact edge first. Unkeyed references then
/// take, in order, the lowest-keyed parallel edge not yet claimed, which
/// lets a plain `(u, v)` list cover a multigraph's parallel edges.
pub fn resolve_edges<'s>(snapshot: &'s Snapshot, edge_order: &[EdgeRef]) -> Result<Vec<&'s Edge>> {
    let kind = snapshot.kind;

    // snapshot edges are sorted by (src, dst, key), so bundles stay key-ordered
    let mut bundles: HashMap<(NodeId, NodeId), Vec<&Edge>> = HashMap::new();
    for edge in &snapshot.edges {
        bundles.entry((edge.src, edge.dst)).or_default().push(edge);
    }

    let mut claimed: HashSet<(NodeId, NodeId, EdgeKey)> = HashSet::new();
    let mut resolved: Vec<Option<&Edge>> = vec![None; edge_order.len()];

    for (pos, r) in edge_order.iter().enumerate() {
        let Some(key) = r.key else { continue };
        let pair = kind.pair(r.src, r.dst);
        let edge = bundles
            .get(&pair)
            .and_then(|b| b.iter().find(|e| e.key == key))
            .ok_or_else(|| invalid(format!("edge {r} in edge order is not in the graph")))?;
        if !claimed.insert((pair.0, pair.1, key)) {
            return Err(invalid(format!("edge {r} appears more than once in edge order")));
        }
        resolved[pos] = Some(*edge);
    }

    for (pos, r) in edge_order.iter().enumerate() {
        if r.key.is_some() {
            continue;
        }
        let pair = kind.pair(r.src, r.dst);
        let bundle = bundles
            .get(&pair)
            .ok_or_else(|| invalid(format!("edge {r} in edge order is not in the graph")))?;
        let edge = bundle
            .iter()
            .find(|e| !claimed.contains(&(pair.0, pair.1, e.key)))
            .ok_or_else(|| {
                invalid(format!(
                    "edge {r} appears more often in edge order than the graph holds ({})",
                    bundle.len()
                ))
            })?;
        claimed.insert((pair.0, pair.1, edge.key));
        resolved[pos] = Some(*edge);
    }

    Ok(resolved.into_iter().flatten().collect())
}
