//! # Property Graph Model
//!
//! Plain DTOs shared by the graph container and the matrix converters.
//!
//! Design rule: no sparse-matrix types here.
//! This module is pure data — no I/O, no state, no locking.

pub mod node;
pub mod edge;
pub mod value;
pub mod property_map;

pub use node::{Node, NodeId};
pub use edge::{Edge, EdgeKey, EdgeRef};
pub use value::Value;
pub use property_map::{PropertyMap, props};
