//! # Graph View Trait
//!
//! This is the contract between the matrix converters and any graph
//! container. Converters only ever read through `GraphView`.
//!
//! ## Implementations
//!
//! | Container | Module | Description |
//! |-----------|--------|-------------|
//! | `PropertyGraph` | `memory` | In-memory, lock-protected property graph |

pub mod memory;

use serde::{Deserialize, Serialize};
use crate::model::*;

pub use memory::PropertyGraph;

// ============================================================================
// Graph kind
// ============================================================================

/// Directedness and parallel-edge policy of a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GraphKind {
    pub directed: bool,
    /// Parallel edges between the same pair are kept as distinct entities.
    pub multi: bool,
}

impl GraphKind {
    pub const UNDIRECTED: GraphKind = GraphKind { directed: false, multi: false };
    pub const DIRECTED: GraphKind = GraphKind { directed: true, multi: false };
    pub const MULTI_UNDIRECTED: GraphKind = GraphKind { directed: false, multi: true };
    pub const MULTI_DIRECTED: GraphKind = GraphKind { directed: true, multi: true };

    /// Canonical storage pair for an edge between `u` and `v`.
    ///
    /// Undirected pairs are normalized so that `(u, v)` and `(v, u)` collide.
    pub fn pair(&self, u: NodeId, v: NodeId) -> (NodeId, NodeId) {
        if self.directed || u <= v { (u, v) } else { (v, u) }
    }
}

// ============================================================================
// Snapshot
// ============================================================================

/// A consistent read of a graph's node set and edges.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub kind: GraphKind,
    /// Sorted ascending.
    pub nodes: Vec<NodeId>,
    /// Sorted by `(src, dst, key)`.
    pub edges: Vec<Edge>,
}

// ============================================================================
// GraphView Trait
// ============================================================================

/// Read-only access to a graph.
///
/// Enumerations come back sorted so that callers building explicit
/// orderings get deterministic results, but converters never rely on them
/// for row or column placement.
pub trait GraphView {
    fn kind(&self) -> GraphKind;

    fn is_directed(&self) -> bool {
        self.kind().directed
    }

    fn is_multigraph(&self) -> bool {
        self.kind().multi
    }

    fn contains_node(&self, id: NodeId) -> bool;

    /// All node IDs, sorted.
    fn node_ids(&self) -> Vec<NodeId>;

    /// All edges, sorted by `(src, dst, key)`.
    ///
    /// Undirected edges are reported with `src <= dst`.
    fn edges(&self) -> Vec<Edge>;

    /// Edges joining `u` and `v`, in key order.
    ///
    /// For undirected graphs the argument order does not matter; for
    /// directed graphs only `u -> v` edges are returned.
    fn edges_between(&self, u: NodeId, v: NodeId) -> Vec<Edge>;

    fn node_count(&self) -> usize {
        self.node_ids().len()
    }

    fn edge_count(&self) -> usize {
        self.edges().len()
    }

    /// Keyed references to every edge, in `edges()` order.
    fn edge_refs(&self) -> Vec<EdgeRef> {
        self.edges().iter().map(Edge::to_ref).collect()
    }

    /// Read node set and edges together.
    ///
    /// Containers that can be mutated concurrently should override this so
    /// both halves come from the same instant.
    fn snapshot(&self) -> Snapshot {
        Snapshot {
            kind: self.kind(),
            nodes: self.node_ids(),
            edges: self.edges(),
        }
    }
}
