//! Graph generators.

pub mod degree_seq;

pub use degree_seq::{havel_hakimi_graph, is_graphical};
