use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Number, Value};

/// Opaque node identifier
pub type NodeId = String;

/// Edge weight together with the JSON value it was read from.
///
/// The search uses [`Weight::value`]. Serialization writes the original
/// value back, so `1` stays `1` and `"2.5"` stays a string.
#[derive(Debug, Clone, PartialEq)]
pub struct Weight {
    raw: Value,
    value: f64,
}

impl Weight {
    /// Values that are not numeric get NaN and fail graph validation
    pub fn from_json(raw: Value) -> Self {
        let value = parse_number(&raw).unwrap_or(f64::NAN);
        Weight { raw, value }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn raw(&self) -> &Value {
        &self.raw
    }
}

impl From<f64> for Weight {
    fn from(value: f64) -> Self {
        let raw = Number::from_f64(value).map_or(Value::Null, Value::Number);
        Weight { raw, value }
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl Serialize for Weight {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.raw.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Weight {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Weight::from_json)
    }
}

/// JSON numbers and numeric strings (surrounding whitespace allowed)
pub(crate) fn parse_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// A validated undirected edge with a finite, non-negative weight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
    pub weight: Weight,
}

impl Edge {
    pub fn new(from: impl Into<NodeId>, to: impl Into<NodeId>, weight: impl Into<Weight>) -> Self {
        Edge {
            from: from.into(),
            to: to.into(),
            weight: weight.into(),
        }
    }
}

/// An edge record as received at the boundary, before validation.
///
/// Every field is optional so that a missing field surfaces as
/// `MalformedEdge` instead of a generic decode failure. `weight` is kept as
/// a raw JSON value because numeric strings are accepted as well.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawEdge {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<Value>,
}

impl From<&Edge> for RawEdge {
    fn from(edge: &Edge) -> Self {
        RawEdge {
            from: Some(edge.from.clone()),
            to: Some(edge.to.clone()),
            weight: Some(edge.weight.raw().clone()),
        }
    }
}

/// Unvalidated node/edge input
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawNetwork {
    #[serde(default)]
    pub nodes: Vec<NodeId>,
    #[serde(default)]
    pub edges: Vec<RawEdge>,
}

impl From<&Network> for RawNetwork {
    fn from(network: &Network) -> Self {
        RawNetwork {
            nodes: network.nodes.clone(),
            edges: network.edges.iter().map(RawEdge::from).collect(),
        }
    }
}

/// The persisted unit: a node list plus an edge list.
///
/// Construct through [`Network::from_raw`] to get the validation
/// guarantees; values read back from a store are re-checked whenever a
/// graph is built from them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Network {
    pub nodes: Vec<NodeId>,
    pub edges: Vec<Edge>,
}

/// Result of a successful shortest-path search
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortestPath {
    /// Nodes from source to destination, both inclusive
    pub path: Vec<NodeId>,
    /// Sum of the weights of the traversed edges
    pub total_distance: f64,
}

impl ShortestPath {
    /// Number of nodes on the path
    pub fn node_count(&self) -> usize {
        self.path.len()
    }

    /// Number of edges traversed
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// JSON shape returned by the API and `--format json`
    pub fn to_json(&self) -> Value {
        serde_json::json!({
            "path": self.path,
            "total_distance": self.total_distance,
            "node_count": self.node_count(),
        })
    }
}
