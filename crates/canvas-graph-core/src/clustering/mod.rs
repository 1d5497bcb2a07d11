//! Spatial cluster engine for extreme zoom-out.
//!
//! Collapses an unbounded set of positioned canvas nodes into a small,
//! visually-scannable number of summary clusters. Nodes that are spatially
//! close group together, explicit edges keep logically connected content
//! from splitting across a grid boundary, and the final count is forced
//! into [4, 8] whenever the topology allows it.
//!
//! # Key Types
//!
//! - [`cluster_nodes`]: the pure pipeline, `(nodes, edges, params) -> clusters`
//! - [`ClusterParams`]: grid size and cluster-count bounds, with validation
//! - [`ClusterError`]: parameter-validation errors (the pipeline itself
//!   never fails for well-formed input)

pub mod constraints;
pub mod engine;
pub mod error;
pub mod grid;
pub mod metadata;
pub mod params;
pub mod union_find;

pub use engine::{cluster_nodes, cluster_nodes_default};
pub use error::{ClusterError, ClusterResult};
pub use params::{
    cluster_defaults, ClusterParams, DEFAULT_GRID_SIZE, MAX_CLUSTERS, MIN_CLUSTERS,
};
