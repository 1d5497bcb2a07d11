//! Domain types for the spatial cluster engine.
//!
//! These are call-scoped value objects: the caller owns the `NodePosition`
//! and `EdgeInfo` inputs, the engine owns nothing, and the returned
//! [`Cluster`] records are discarded by the rendering overlay after use.
//! Nothing here is persisted or mutated after return.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

// =============================================================================
// Inputs
// =============================================================================

/// Layout-relevant projection of one graph node.
///
/// Coordinates are canvas spatial units (not screen pixels). The engine
/// requires finite coordinates and unique ids as preconditions; it does not
/// validate them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodePosition {
    /// Unique node identifier, owned by the caller.
    pub id: String,
    /// Canvas x coordinate.
    pub x: f64,
    /// Canvas y coordinate.
    pub y: f64,
    /// Node category (e.g. "note", "task", "terminal").
    #[serde(rename = "type")]
    pub kind: String,
    /// Optional node status (e.g. "done", "blocked"). Omitted from
    /// frequency tables when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl NodePosition {
    /// Convenience constructor for a node without a status.
    pub fn new(id: impl Into<String>, x: f64, y: f64, kind: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            kind: kind.into(),
            status: None,
        }
    }

    /// Attach a status to the node.
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }
}

/// An explicit relationship between two nodes.
///
/// Treated as undirected for clustering. Dangling endpoints (ids not present
/// in the node list) are tolerated and ignored, never an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeInfo {
    /// Id of the source node.
    pub source: String,
    /// Id of the target node.
    pub target: String,
}

impl EdgeInfo {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

// =============================================================================
// Outputs
// =============================================================================

/// A point in canvas space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Axis-aligned bounding box over a cluster's members.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    /// Span along the x axis.
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Span along the y axis.
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

/// Frequency tables summarizing a cluster's members.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ClusterSummary {
    /// Total member count.
    pub node_count: usize,
    /// Node type -> occurrence count.
    pub type_counts: HashMap<String, usize>,
    /// Status -> occurrence count. Nodes without a status contribute nothing.
    pub status_counts: HashMap<String, usize>,
}

/// One summary bubble produced by the engine at extreme zoom-out.
///
/// `node_ids` is non-empty and lists members in the order the pipeline
/// encountered them; across the whole result every clustered node id appears
/// exactly once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cluster {
    /// Stable identifier, `cluster-<gx>-<gy>` from the centroid's grid cell
    /// (suffixed with the output index on the rare coarse-id collision).
    pub id: String,
    /// Member node ids, encounter order.
    pub node_ids: Vec<String>,
    /// Arithmetic mean of member positions.
    pub centroid: Point,
    /// Min/max extent of member positions.
    pub bounds: Bounds,
    /// Most frequent member type, ties broken by first type encountered.
    pub dominant_type: String,
    /// Frequency tables for the rendering overlay.
    pub summary: ClusterSummary,
}

impl Cluster {
    /// Number of member nodes.
    pub fn len(&self) -> usize {
        self.node_ids.len()
    }

    /// A cluster is never empty; provided for completeness.
    pub fn is_empty(&self) -> bool {
        self.node_ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_position_builder() {
        let node = NodePosition::new("n1", 10.0, 20.0, "note").with_status("done");
        assert_eq!(node.id, "n1");
        assert_eq!(node.kind, "note");
        assert_eq!(node.status.as_deref(), Some("done"));
    }

    #[test]
    fn test_node_position_serde_uses_type_field() {
        let node = NodePosition::new("n1", 1.0, 2.0, "task");
        let json = serde_json::to_string(&node).expect("serialize");
        assert!(json.contains("\"type\":\"task\""));
        assert!(!json.contains("\"status\""));

        let back: NodePosition = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, node);
    }

    #[test]
    fn test_point_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_bounds_spans() {
        let bounds = Bounds {
            min_x: -10.0,
            min_y: 5.0,
            max_x: 30.0,
            max_y: 15.0,
        };
        assert!((bounds.width() - 40.0).abs() < 1e-12);
        assert!((bounds.height() - 10.0).abs() < 1e-12);
    }
}
