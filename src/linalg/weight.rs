//! Typed edge-weight lookup.

use serde::{Deserialize, Serialize};

use crate::model::{Edge, Value};
use crate::{Error, Result};

/// Attribute name used when a caller asks for "the" weight.
pub const DEFAULT_WEIGHT_ATTRIBUTE: &str = "weight";

/// How an edge turns into a matrix entry.
///
/// - `attribute == None`: every edge weighs 1.0.
/// - `attribute == Some(name)`: the numeric value of `name`, or `default`
///   when the edge lacks it (or holds `Null`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weighting {
    pub attribute: Option<String>,
    pub default: f64,
}

impl Weighting {
    /// Unit weight for every edge.
    pub fn unit() -> Self {
        Self { attribute: None, default: 1.0 }
    }

    /// Weight by the named attribute, falling back to 1.0.
    pub fn by(attribute: impl Into<String>) -> Self {
        Self { attribute: Some(attribute.into()), default: 1.0 }
    }

    pub fn with_default(mut self, default: f64) -> Self {
        self.default = default;
        self
    }

    /// Weight contributed by `edge`.
    pub fn weight_of(&self, edge: &Edge) -> Result<f64> {
        let Some(name) = &self.attribute else {
            return Ok(1.0);
        };
        match edge.get(name) {
            None | Some(Value::Null) => Ok(self.default),
            Some(v) => v.as_float().ok_or_else(|| Error::TypeError {
                expected: format!("numeric '{name}' on edge {}", edge.to_ref()),
                got: v.type_name().to_string(),
            }),
        }
    }
}

/// Weighted by `DEFAULT_WEIGHT_ATTRIBUTE` with a fallback of 1.0.
impl Default for Weighting {
    fn default() -> Self {
        Self::by(DEFAULT_WEIGHT_ATTRIBUTE)
    }
}

impl From<Option<&str>> for Weighting {
    fn from(attribute: Option<&str>) -> Self {
        match attribute {
            Some(name) => Self::by(name),
            None => Self::unit(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EdgeKey, NodeId};

    fn edge() -> Edge {
        Edge::new(NodeId(0), NodeId(1), EdgeKey(0))
            .with_property("weight", 0.5)
            .with_property("count", 3)
            .with_property("label", "x")
            .with_property("gone", Value::Null)
    }

    #[test]
    fn test_unit_ignores_attributes() {
        assert_eq!(Weighting::unit().weight_of(&edge()).unwrap(), 1.0);
    }

    #[test]
    fn test_numeric_attributes() {
        assert_eq!(Weighting::by("weight").weight_of(&edge()).unwrap(), 0.5);
        assert_eq!(Weighting::by("count").weight_of(&edge()).unwrap(), 3.0);
    }

    #[test]
    fn test_missing_attribute_uses_default() {
        assert_eq!(Weighting::by("other").weight_of(&edge()).unwrap(), 1.0);
        assert_eq!(Weighting::by("gone").with_default(2.5).weight_of(&edge()).unwrap(), 2.5);
    }

    #[test]
    fn test_non_numeric_attribute_is_type_error() {
        let err = Weighting::by("label").weight_of(&edge()).unwrap_err();
        assert!(matches!(err, Error::TypeError { ref got, .. } if got == "STRING"));
    }

    #[test]
    fn test_from_option() {
        assert_eq!(Weighting::from(None), Weighting::unit());
        assert_eq!(Weighting::from(Some("other")), Weighting::by("other"));
        assert_eq!(Weighting::default().attribute.as_deref(), Some("weight"));
    }
}
