//! Shared JSON read/write behaviour for configuration documents.

use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::error::ClusterError;

/// A validated JSON configuration document.
///
/// Parsing rejects unknown fields (each document type denies them) and then
/// runs [`validate`](Self::validate), so a value obtained through this trait
/// is always valid.
pub trait ConfigDocument: Serialize + DeserializeOwned {
    /// Conventional file name, e.g. `cluster.json`.
    const FILE_NAME: &'static str;

    /// Checks the document's invariants.
    fn validate(&self) -> Result<(), ClusterError>;

    /// Parses and validates a document from a JSON string.
    fn from_json_str(s: &str) -> Result<Self, ClusterError> {
        let doc: Self = serde_json::from_str(s)?;
        doc.validate()?;
        Ok(doc)
    }

    /// Renders the document as pretty-printed JSON.
    fn to_json_pretty(&self) -> Result<String, ClusterError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reads and validates a document from `path`.
    fn read_json(path: &Path) -> Result<Self, ClusterError> {
        let s = std::fs::read_to_string(path).map_err(|e| ClusterError::Io {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        debug!(path = %path.display(), "read configuration document");
        Self::from_json_str(&s)
    }

    /// Validates and writes the document to `path`.
    fn write_json(&self, path: &Path) -> Result<(), ClusterError> {
        self.validate()?;
        let json = self.to_json_pretty()?;
        std::fs::write(path, json).map_err(|e| ClusterError::Io {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        info!(path = %path.display(), "wrote configuration document");
        Ok(())
    }
}
