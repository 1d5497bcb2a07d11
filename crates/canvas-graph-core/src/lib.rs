//! Canvas Graph Core Library
//!
//! Core domain types and the spatial cluster engine for the canvas-graph
//! node workspace. The engine summarizes an arbitrary node layout into
//! 4 to 8 clusters when the canvas is viewed at extreme zoom-out; the
//! rendering overlay, zoom-level detection and invocation debouncing live
//! with the caller.
//!
//! # Example
//!
//! ```
//! use canvas_graph_core::clustering::cluster_nodes_default;
//! use canvas_graph_core::types::{EdgeInfo, NodePosition};
//!
//! let nodes = vec![
//!     NodePosition::new("a", 10.0, 10.0, "note"),
//!     NodePosition::new("b", 50.0, 50.0, "task"),
//! ];
//! let edges = vec![EdgeInfo::new("a", "b")];
//!
//! let clusters = cluster_nodes_default(&nodes, &edges);
//! assert_eq!(clusters.len(), 1);
//! assert_eq!(clusters[0].summary.node_count, 2);
//! ```

pub mod clustering;
pub mod types;

// Re-exports for convenience
pub use clustering::{cluster_defaults, cluster_nodes, ClusterError, ClusterParams};
pub use types::{Bounds, Cluster, ClusterSummary, EdgeInfo, NodePosition, Point};
