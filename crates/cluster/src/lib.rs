//! # birthday-cluster
//!
//! Typed configuration documents for a cloud batch backend: the account
//! credentials (`credentials.json`) and the worker pool description
//! (`cluster.json`).
//!
//! Every constructor and every parse path validates, so a [`Credentials`] or
//! [`ClusterConfig`] value is known to be well formed. Provisioning the pool
//! itself is left to the batch service.
//!
//! ## Quick start
//!
//! ```ignore
//! use birthday_cluster::{ConfigDocument, generate_templates, load_documents};
//!
//! let paths = generate_templates(Path::new("cloud"), false)?;
//! // ... edit the generated files ...
//! let (credentials, cluster) = load_documents(Path::new("cloud"))?;
//! println!("{} can run {} tasks", cluster.name(), cluster.max_concurrent_tasks());
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `credentials` | Batch and storage account keys |
//! | `cluster` | Pool bounds, VM size, container image |
//! | `document` | JSON read/write with validation |
//! | `template` | Placeholder generation and directory loading |
//! | `error` | Error types |

mod cluster;
mod credentials;
mod document;
mod error;
mod template;

pub use cluster::{AutoscaleFormula, ClusterConfig, ClusterConfigBuilder, NodeRange, PoolSize};
pub use credentials::{BatchAccount, Credentials, StorageAccount};
pub use document::ConfigDocument;
pub use error::ClusterError;
pub use template::{DocumentPaths, generate_templates, load_documents};
