//! Clustering parameters.
//!
//! The engine is tuned by a single [`ClusterParams`] struct. Defaults match
//! the canvas overlay's visually-useful bubble range of 4 to 8 clusters at a
//! 400-unit grid.

use serde::{Deserialize, Serialize};

use super::error::ClusterError;

// =============================================================================
// Constants
// =============================================================================

/// Default grid cell size in canvas spatial units.
pub const DEFAULT_GRID_SIZE: f64 = 400.0;

/// Lower bound of the visually-useful cluster count range.
pub const MIN_CLUSTERS: usize = 4;

/// Upper bound of the visually-useful cluster count range.
pub const MAX_CLUSTERS: usize = 8;

/// A cluster must have at least this many nodes to be split.
pub const MIN_SPLIT_SIZE: usize = 4;

/// Both halves of a split must keep at least this many nodes.
pub const MIN_HALF_SIZE: usize = 2;

// =============================================================================
// ClusterParams
// =============================================================================

/// Configuration for one [`cluster_nodes`](super::engine::cluster_nodes) call.
///
/// # Example
///
/// ```
/// use canvas_graph_core::clustering::{cluster_defaults, ClusterParams};
///
/// let params = cluster_defaults();
/// assert_eq!(params.grid_size, 400.0);
/// assert!(params.validate().is_ok());
///
/// let custom = ClusterParams {
///     grid_size: 250.0,
///     ..ClusterParams::default()
/// };
/// assert!(custom.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterParams {
    /// Grid cell size in canvas spatial units. Must be finite and positive.
    pub grid_size: f64,
    /// Minimum cluster count the constraint pass aims for.
    pub min_clusters: usize,
    /// Maximum cluster count the constraint pass enforces.
    pub max_clusters: usize,
}

impl Default for ClusterParams {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            min_clusters: MIN_CLUSTERS,
            max_clusters: MAX_CLUSTERS,
        }
    }
}

impl ClusterParams {
    /// Validate parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ClusterError::InvalidParameter`] if `grid_size` is not a
    /// finite positive number, `min_clusters` is zero, or the bounds are
    /// inverted.
    pub fn validate(&self) -> Result<(), ClusterError> {
        if !self.grid_size.is_finite() || self.grid_size <= 0.0 {
            return Err(ClusterError::invalid_parameter(format!(
                "grid_size must be a finite positive number, got {}",
                self.grid_size
            )));
        }
        if self.min_clusters == 0 {
            return Err(ClusterError::invalid_parameter(
                "min_clusters must be > 0",
            ));
        }
        if self.max_clusters < self.min_clusters {
            return Err(ClusterError::invalid_parameter(format!(
                "max_clusters ({}) must be >= min_clusters ({})",
                self.max_clusters, self.min_clusters
            )));
        }
        Ok(())
    }
}

/// Default clustering parameters.
pub fn cluster_defaults() -> ClusterParams {
    ClusterParams::default()
}
