//! Error types for the birthday-cluster crate.

use std::path::PathBuf;

/// Error type for all fallible operations in the birthday-cluster crate.
///
/// Covers validation of credential and cluster documents as well as the
/// file and JSON failures encountered when reading or writing them.
#[derive(Debug, thiserror::Error)]
pub enum ClusterError {
    /// Returned when a required string field is empty or whitespace.
    #[error("field '{field}' must not be empty")]
    EmptyField {
        /// Dotted path of the field, e.g. `batchAccount.key`.
        field: &'static str,
    },

    /// Returned when an account URL is not an `https://` URL.
    #[error("invalid batch account url '{url}': must start with https://")]
    InvalidUrl {
        /// The rejected URL.
        url: String,
    },

    /// Returned when a cluster name violates the naming rules.
    #[error("invalid cluster name '{name}': {reason}")]
    InvalidName {
        /// The rejected name.
        name: String,
        /// Description of the problem.
        reason: String,
    },

    /// Returned when a node range has `min > max`.
    #[error("invalid {pool} node range: min {min} exceeds max {max}")]
    InvalidNodeRange {
        /// Which pool the range belongs to.
        pool: &'static str,
        /// Lower bound.
        min: u32,
        /// Upper bound.
        max: u32,
    },

    /// Returned when neither pool may contain a node.
    #[error("cluster pool allows no nodes: at least one max must be > 0")]
    EmptyPool,

    /// Returned when `maxTasksPerNode` is zero.
    #[error("maxTasksPerNode must be >= 1, got {value}")]
    InvalidTasksPerNode {
        /// The rejected value.
        value: u32,
    },

    /// Returned when a document would overwrite an existing file.
    #[error("refusing to overwrite existing file: {}", path.display())]
    AlreadyExists {
        /// Path that already exists.
        path: PathBuf,
    },

    /// Wraps a filesystem failure.
    #[error("i/o error on {}: {reason}", path.display())]
    Io {
        /// Path being read or written.
        path: PathBuf,
        /// Description of the underlying failure.
        reason: String,
    },

    /// Wraps a JSON parse or render failure.
    #[error("json error: {reason}")]
    Json {
        /// Description of the underlying failure.
        reason: String,
    },
}

impl From<serde_json::Error> for ClusterError {
    fn from(e: serde_json::Error) -> Self {
        ClusterError::Json {
            reason: e.to_string(),
        }
    }
}
