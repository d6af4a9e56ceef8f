//! # graphmat — Property Graphs as Sparse Matrices
//!
//! A small in-memory property graph plus the conversions that turn it into
//! adjacency, incidence and Laplacian matrices.
//!
//! ## Design Principles
//!
//! 1. **Trait-first**: `GraphView` is the contract between converters and containers
//! 2. **Explicit orderings**: rows and columns follow caller-supplied node/edge
//!    sequences, never container iteration order
//! 3. **Typed weights**: `Weighting` names the attribute and its fallback
//! 4. **Pure conversions**: one read snapshot in, a fresh `CsMat<f64>` out
//!
//! ## Quick Start
//!
//! ```rust
//! use graphmat::{PropertyGraph, NodeId, GraphView, props};
//! use graphmat::linalg::{adjacency_matrix, incidence_matrix, to_dense};
//!
//! # fn example() -> graphmat::Result<()> {
//! let g = PropertyGraph::undirected();
//! g.add_edge_with(NodeId(0), NodeId(1), props([("weight", 0.5)]));
//! g.add_edge(NodeId(1), NodeId(2));
//!
//! let nodes = g.node_ids();
//! let a = adjacency_matrix(&g, &nodes, Some("weight"))?;
//! assert_eq!(to_dense(&a)[0][1], 0.5);
//!
//! let i = incidence_matrix(&g, &nodes, &g.edge_refs(), true, None)?;
//! assert_eq!(to_dense(&i)[0], vec![-1.0, 0.0]);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod graph;
pub mod linalg;
pub mod generators;
pub mod config;

// ============================================================================
// Re-exports: Model (the DTOs)
// ============================================================================

pub use model::{
    Node, NodeId, Edge, EdgeKey, EdgeRef, Value, PropertyMap, props,
};

// ============================================================================
// Re-exports: Graph
// ============================================================================

pub use graph::{GraphView, GraphKind, PropertyGraph, Snapshot};

// ============================================================================
// Re-exports: Conversion
// ============================================================================

pub use linalg::{Weighting, DEFAULT_WEIGHT_ATTRIBUTE};
pub use config::MatrixConfig;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid ordering: {0}")]
    InvalidOrdering(String),

    #[error("Type error: expected {expected}, got {got}")]
    TypeError { expected: String, got: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Degree sequence is not graphical: {0}")]
    NotGraphical(String),

    #[error("Config error: {0}")]
    ConfigError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
