//! Error types for clustering parameters.
//!
//! The engine itself never fails for well-formed input (see
//! [`cluster_nodes`](super::engine::cluster_nodes)); errors exist only at
//! the parameter-validation boundary.

use thiserror::Error;

/// Errors raised by [`ClusterParams::validate`](super::params::ClusterParams::validate).
#[derive(Debug, Error)]
pub enum ClusterError {
    /// Invalid parameter provided.
    #[error("Invalid parameter: {message}")]
    InvalidParameter {
        /// Description of what's wrong with the parameter.
        message: String,
    },
}

impl ClusterError {
    /// Create an InvalidParameter error.
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            message: message.into(),
        }
    }
}

/// Result alias for clustering operations.
pub type ClusterResult<T> = Result<T, ClusterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_display() {
        let err = ClusterError::invalid_parameter("grid_size must be > 0");
        assert!(err.to_string().contains("grid_size"));
        assert!(!format!("{:?}", err).is_empty());
    }
}
