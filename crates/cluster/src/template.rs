//! Template generation and loading of a document directory.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::cluster::ClusterConfig;
use crate::credentials::Credentials;
use crate::document::ConfigDocument;
use crate::error::ClusterError;

/// Paths of the two documents inside a configuration directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentPaths {
    /// Path of `credentials.json`.
    pub credentials: PathBuf,
    /// Path of `cluster.json`.
    pub cluster: PathBuf,
}

impl DocumentPaths {
    /// Returns the conventional document paths under `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            credentials: dir.join(Credentials::FILE_NAME),
            cluster: dir.join(ClusterConfig::FILE_NAME),
        }
    }
}

/// Writes placeholder `credentials.json` and `cluster.json` into `dir`.
///
/// The directory is created if needed. Existing files are left untouched
/// unless `overwrite` is set; nothing is written if either file exists.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`ClusterError::AlreadyExists`] | a document exists and `overwrite` is false |
/// | [`ClusterError::Io`] | the directory or a file cannot be written |
pub fn generate_templates(dir: &Path, overwrite: bool) -> Result<DocumentPaths, ClusterError> {
    let paths = DocumentPaths::in_dir(dir);
    if !overwrite {
        for path in [&paths.credentials, &paths.cluster] {
            if path.exists() {
                return Err(ClusterError::AlreadyExists { path: path.clone() });
            }
        }
    }
    std::fs::create_dir_all(dir).map_err(|e| ClusterError::Io {
        path: dir.to_path_buf(),
        reason: e.to_string(),
    })?;

    Credentials::template().write_json(&paths.credentials)?;
    ClusterConfig::template().write_json(&paths.cluster)?;
    info!(dir = %dir.display(), "configuration templates generated");
    Ok(paths)
}

/// Reads and validates both documents from `dir`.
pub fn load_documents(dir: &Path) -> Result<(Credentials, ClusterConfig), ClusterError> {
    let paths = DocumentPaths::in_dir(dir);
    let credentials = Credentials::read_json(&paths.credentials)?;
    let cluster = ClusterConfig::read_json(&paths.cluster)?;
    Ok((credentials, cluster))
}
