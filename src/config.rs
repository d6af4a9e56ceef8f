//! Conversion options loadable from JSON.
//!
//! ```json
//! { "weight": "other", "default_weight": 1.0, "oriented": true }
//! ```
//!
//! Omitted fields take their defaults; `"weight": null` selects unit
//! weights.

use serde::{Deserialize, Serialize};

use crate::graph::GraphView;
use crate::linalg::{self, Weighting, DEFAULT_WEIGHT_ATTRIBUTE};
use crate::model::{EdgeRef, NodeId};
use crate::Result;

/// Options shared by the matrix conversions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatrixConfig {
    /// Edge attribute to weight by. `None` counts edges.
    pub weight: Option<String>,
    /// Weight for edges lacking the attribute.
    pub default_weight: f64,
    /// Signed incidence columns (tail −w, head +w).
    pub oriented: bool,
}

impl Default for MatrixConfig {
    fn default() -> Self {
        Self {
            weight: Some(DEFAULT_WEIGHT_ATTRIBUTE.to_string()),
            default_weight: 1.0,
            oriented: false,
        }
    }
}

impl MatrixConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn weighting(&self) -> Weighting {
        Weighting {
            attribute: self.weight.clone(),
            default: self.default_weight,
        }
    }

    pub fn adjacency<G: GraphView + ?Sized>(
        &self,
        graph: &G,
        node_order: &[NodeId],
    ) -> Result<sprs::CsMat<f64>> {
        linalg::adjacency_matrix_with(graph, node_order, &self.weighting())
    }

    pub fn incidence<G: GraphView + ?Sized>(
        &self,
        graph: &G,
        node_order: &[NodeId],
        edge_order: &[EdgeRef],
    ) -> Result<sprs::CsMat<f64>> {
        linalg::incidence_matrix_with(graph, node_order, edge_order, self.oriented, &self.weighting())
    }

    pub fn laplacian<G: GraphView + ?Sized>(
        &self,
        graph: &G,
        node_order: &[NodeId],
    ) -> Result<sprs::CsMat<f64>> {
        linalg::laplacian_matrix_with(graph, node_order, &self.weighting())
    }
}
