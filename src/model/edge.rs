//! Edge in the property graph.

use serde::{Deserialize, Serialize};
use super::{NodeId, PropertyMap, Value};

/// Disambiguates parallel edges between the same node pair.
///
/// Keys are allocated per pair as the lowest unused integer, so a simple
/// graph only ever uses `EdgeKey(0)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct EdgeKey(pub u64);

impl std::fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An edge stored in the graph.
///
/// Undirected graphs store edges with `src <= dst`; lookups accept either
/// orientation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub src: NodeId,
    pub dst: NodeId,
    pub key: EdgeKey,
    pub properties: PropertyMap,
}

impl Edge {
    pub fn new(src: NodeId, dst: NodeId, key: EdgeKey) -> Self {
        Self {
            src,
            dst,
            key,
            properties: PropertyMap::new(),
        }
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }

    pub fn is_self_loop(&self) -> bool {
        self.src == self.dst
    }

    /// Reference to this exact edge, keyed.
    pub fn to_ref(&self) -> EdgeRef {
        EdgeRef::keyed(self.src, self.dst, self.key)
    }
}

/// Caller-side handle naming an edge inside an edge ordering.
///
/// `src` is the tail when the edge is written into an oriented incidence
/// matrix. Without a `key`, the reference binds to the lowest-keyed parallel
/// edge not already claimed by another entry of the same ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EdgeRef {
    pub src: NodeId,
    pub dst: NodeId,
    pub key: Option<EdgeKey>,
}

impl EdgeRef {
    pub fn new(src: impl Into<NodeId>, dst: impl Into<NodeId>) -> Self {
        Self { src: src.into(), dst: dst.into(), key: None }
    }

    pub fn keyed(src: impl Into<NodeId>, dst: impl Into<NodeId>, key: EdgeKey) -> Self {
        Self { src: src.into(), dst: dst.into(), key: Some(key) }
    }
}

impl From<(u64, u64)> for EdgeRef {
    fn from((u, v): (u64, u64)) -> Self { EdgeRef::new(u, v) }
}

impl From<(u64, u64, u64)> for EdgeRef {
    fn from((u, v, k): (u64, u64, u64)) -> Self { EdgeRef::keyed(u, v, EdgeKey(k)) }
}

impl std::fmt::Display for EdgeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.key {
            Some(k) => write!(f, "({}, {}, {})", self.src, self.dst, k),
            None => write!(f, "({}, {})", self.src, self.dst),
        }
    }
}
