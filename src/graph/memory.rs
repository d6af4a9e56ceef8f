//! In-memory property graph.
//!
//! This is the reference implementation of `GraphView`.
//! It uses hash maps protected by RwLock.
//!
//! ## Semantics
//!
//! - **Simple graphs**: re-adding an existing edge merges the new
//!   properties into it. Every edge has `EdgeKey(0)`.
//! - **Multigraphs**: every `add_edge` creates a new parallel edge keyed
//!   with the lowest unused integer for that pair.
//! - **Undirected graphs**: `(u, v)` and `(v, u)` name the same pair and
//!   edges are stored as `src <= dst`.
//! - Adding an edge adds any missing endpoint.

use hashbrown::HashMap;
use parking_lot::RwLock;
use smallvec::SmallVec;

use crate::model::*;
use crate::{Error, Result};
use super::{GraphKind, GraphView, Snapshot};

/// Parallel edges of one canonical pair, kept in key order.
type EdgeBundle = SmallVec<[Edge; 1]>;

// ============================================================================
// PropertyGraph
// ============================================================================

/// In-memory property graph.
pub struct PropertyGraph {
    kind: GraphKind,
    nodes: RwLock<HashMap<NodeId, Node>>,
    /// canonical pair → parallel edges
    edges: RwLock<HashMap<(NodeId, NodeId), EdgeBundle>>,
}

impl PropertyGraph {
    pub fn with_kind(kind: GraphKind) -> Self {
        Self {
            kind,
            nodes: RwLock::new(HashMap::new()),
            edges: RwLock::new(HashMap::new()),
        }
    }

    pub fn undirected() -> Self { Self::with_kind(GraphKind::UNDIRECTED) }
    pub fn directed() -> Self { Self::with_kind(GraphKind::DIRECTED) }
    pub fn multi_undirected() -> Self { Self::with_kind(GraphKind::MULTI_UNDIRECTED) }
    pub fn multi_directed() -> Self { Self::with_kind(GraphKind::MULTI_DIRECTED) }

    /// Build a graph from `(u, v)` pairs with no properties.
    pub fn from_edges(kind: GraphKind, pairs: impl IntoIterator<Item = (u64, u64)>) -> Self {
        let graph = Self::with_kind(kind);
        for (u, v) in pairs {
            graph.add_edge(NodeId(u), NodeId(v));
        }
        graph
    }

    // ========================================================================
    // Nodes
    // ========================================================================

    /// Add a bare node. Returns false if it already existed.
    pub fn add_node(&self, id: NodeId) -> bool {
        let mut nodes = self.nodes.write();
        if nodes.contains_key(&id) {
            return false;
        }
        nodes.insert(id, Node::new(id));
        true
    }

    /// Add or update a node. Properties are merged into an existing node.
    pub fn add_node_with(&self, node: Node) {
        let mut nodes = self.nodes.write();
        match nodes.get_mut(&node.id) {
            Some(existing) => existing.properties.extend(node.properties),
            None => {
                nodes.insert(node.id, node);
            }
        }
    }

    pub fn node(&self, id: NodeId) -> Option<Node> {
        self.nodes.read().get(&id).cloned()
    }

    // ========================================================================
    // Edges
    // ========================================================================

    /// Add an edge with no properties. See [`PropertyGraph::add_edge_with`].
    pub fn add_edge(&self, u: NodeId, v: NodeId) -> EdgeKey {
        self.add_edge_with(u, v, PropertyMap::new())
    }

    /// Add an edge and return its key.
    ///
    /// In a simple graph an existing edge absorbs `props` instead.
    pub fn add_edge_with(&self, u: NodeId, v: NodeId, props: PropertyMap) -> EdgeKey {
        self.add_node(u);
        self.add_node(v);

        let (src, dst) = self.kind.pair(u, v);
        let mut edges = self.edges.write();
        let bundle = edges.entry((src, dst)).or_default();

        if !self.kind.multi {
            if let Some(existing) = bundle.first_mut() {
                existing.properties.extend(props);
                return existing.key;
            }
        }

        let key = lowest_free_key(bundle);
        let mut edge = Edge::new(src, dst, key);
        edge.properties = props;
        let pos = bundle.iter().position(|e| e.key > key).unwrap_or(bundle.len());
        bundle.insert(pos, edge);
        key
    }

    /// Look up one edge. Without a key, the lowest-keyed edge is returned.
    pub fn edge(&self, u: NodeId, v: NodeId, key: Option<EdgeKey>) -> Option<Edge> {
        let edges = self.edges.read();
        let bundle = edges.get(&self.kind.pair(u, v))?;
        match key {
            Some(k) => bundle.iter().find(|e| e.key == k).cloned(),
            None => bundle.first().cloned(),
        }
    }

    /// Set a property on an existing edge (upsert).
    pub fn set_edge_property(
        &self,
        u: NodeId,
        v: NodeId,
        key: Option<EdgeKey>,
        name: &str,
        val: Value,
    ) -> Result<()> {
        let mut edges = self.edges.write();
        let edge = edges
            .get_mut(&self.kind.pair(u, v))
            .and_then(|bundle| match key {
                Some(k) => bundle.iter_mut().find(|e| e.key == k),
                None => bundle.first_mut(),
            })
            .ok_or_else(|| Error::NotFound(format!("Edge {}", EdgeRef { src: u, dst: v, key })))?;
        edge.properties.insert(name.to_string(), val);
        Ok(())
    }

    /// Remove an edge. Without a key, the highest-keyed (most recently
    /// added) parallel edge is removed.
    pub fn remove_edge(&self, u: NodeId, v: NodeId, key: Option<EdgeKey>) -> Result<Edge> {
        let pair = self.kind.pair(u, v);
        let mut edges = self.edges.write();
        let not_found = || Error::NotFound(format!("Edge {}", EdgeRef { src: u, dst: v, key }));

        let bundle = edges.get_mut(&pair).ok_or_else(not_found)?;
        let pos = match key {
            Some(k) => bundle.iter().position(|e| e.key == k),
            None => bundle.len().checked_sub(1),
        }
        .ok_or_else(not_found)?;

        let removed = bundle.remove(pos);
        if bundle.is_empty() {
            edges.remove(&pair);
        }
        Ok(removed)
    }

    /// Copy into a multigraph of the same directedness, preserving nodes,
    /// edges, keys and properties.
    pub fn to_multigraph(&self) -> PropertyGraph {
        let kind = GraphKind { directed: self.kind.directed, multi: true };
        self.copy_as(kind)
    }

    fn copy_as(&self, kind: GraphKind) -> PropertyGraph {
        let nodes = self.nodes.read();
        let edges = self.edges.read();
        tracing::debug!(
            nodes = nodes.len(),
            pairs = edges.len(),
            multi = kind.multi,
            "copying property graph"
        );
        PropertyGraph {
            kind,
            nodes: RwLock::new(nodes.clone()),
            edges: RwLock::new(edges.clone()),
        }
    }
}

impl Default for PropertyGraph {
    fn default() -> Self {
        Self::undirected()
    }
}

impl Clone for PropertyGraph {
    fn clone(&self) -> Self {
        self.copy_as(self.kind)
    }
}

impl std::fmt::Debug for PropertyGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PropertyGraph")
            .field("kind", &self.kind)
            .field("nodes", &self.nodes.read().len())
            .field("edges", &self.edges.read().values().map(|b| b.len()).sum::<usize>())
            .finish()
    }
}

fn lowest_free_key(bundle: &EdgeBundle) -> EdgeKey {
    // bundle is kept sorted by key, so the first gap is the answer
    let mut next = 0;
    for edge in bundle {
        if edge.key.0 != next {
            break;
        }
        next += 1;
    }
    EdgeKey(next)
}

// ============================================================================
// GraphView impl
// ============================================================================

impl GraphView for PropertyGraph {
    fn kind(&self) -> GraphKind {
        self.kind
    }

    fn contains_node(&self, id: NodeId) -> bool {
        self.nodes.read().contains_key(&id)
    }

    fn node_ids(&self) -> Vec<NodeId> {
        let mut ids: Vec<NodeId> = self.nodes.read().keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    fn edges(&self) -> Vec<Edge> {
        collect_edges(&self.edges.read())
    }

    fn edges_between(&self, u: NodeId, v: NodeId) -> Vec<Edge> {
        self.edges
            .read()
            .get(&self.kind.pair(u, v))
            .map(|bundle| bundle.to_vec())
            .unwrap_or_default()
    }

    fn node_count(&self) -> usize {
        self.nodes.read().len()
    }

    fn edge_count(&self) -> usize {
        self.edges.read().values().map(|b| b.len()).sum()
    }

    fn snapshot(&self) -> Snapshot {
        // Same lock order as copy_as: nodes, then edges.
        let nodes = self.nodes.read();
        let edges = self.edges.read();
        let mut ids: Vec<NodeId> = nodes.keys().copied().collect();
        ids.sort_unstable();
        Snapshot {
            kind: self.kind,
            nodes: ids,
            edges: collect_edges(&edges),
        }
    }
}

fn collect_edges(edges: &HashMap<(NodeId, NodeId), EdgeBundle>) -> Vec<Edge> {
    let mut out: Vec<Edge> = edges.values().flat_map(|b| b.iter().cloned()).collect();
    out.sort_unstable_by_key(|e| (e.src, e.dst, e.key));
    out
}

// ============================================================================
// Tests
// ============================================================================
