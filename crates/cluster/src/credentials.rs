//! Credentials document for the batch service and its storage account.

use serde::{Deserialize, Serialize};

use crate::document::ConfigDocument;
use crate::error::ClusterError;

/// Batch account used to submit work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BatchAccount {
    /// Account name.
    pub name: String,
    /// Shared access key.
    pub key: String,
    /// Account endpoint, `https://...`.
    pub url: String,
}

/// Storage account used for task inputs and outputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct StorageAccount {
    /// Account name.
    pub name: String,
    /// Shared access key.
    pub key: String,
}

/// The `credentials.json` document.
///
/// Construct with [`Credentials::new`] or load with
/// [`ConfigDocument::read_json`]; both validate the fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Credentials {
    batch_account: BatchAccount,
    storage_account: StorageAccount,
}

impl Credentials {
    /// Builds a validated credentials document.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`ClusterError::EmptyField`] | any name or key is blank |
    /// | [`ClusterError::InvalidUrl`] | the batch url is not `https://` |
    pub fn new(batch: BatchAccount, storage: StorageAccount) -> Result<Self, ClusterError> {
        let creds = Self {
            batch_account: batch,
            storage_account: storage,
        };
        creds.validate()?;
        Ok(creds)
    }

    /// Placeholder document written by
    /// [`generate_templates`](crate::generate_templates).
    ///
    /// It passes validation so that a freshly generated pair of files can be
    /// checked before the real values are filled in.
    pub fn template() -> Self {
        Self {
            batch_account: BatchAccount {
                name: "batch-account-name".to_string(),
                key: "batch-account-key".to_string(),
                url: "https://batch-account-name.region.batch.example.com".to_string(),
            },
            storage_account: StorageAccount {
                name: "storage-account-name".to_string(),
                key: "storage-account-key".to_string(),
            },
        }
    }

    /// Returns the batch account.
    pub fn batch_account(&self) -> &BatchAccount {
        &self.batch_account
    }

    /// Returns the storage account.
    pub fn storage_account(&self) -> &StorageAccount {
        &self.storage_account
    }
}

fn require(value: &str, field: &'static str) -> Result<(), ClusterError> {
    if value.trim().is_empty() {
        return Err(ClusterError::EmptyField { field });
    }
    Ok(())
}

impl ConfigDocument for Credentials {
    const FILE_NAME: &'static str = "credentials.json";

    fn validate(&self) -> Result<(), ClusterError> {
        require(&self.batch_account.name, "batchAccount.name")?;
        require(&self.batch_account.key, "batchAccount.key")?;
        require(&self.batch_account.url, "batchAccount.url")?;
        if !self.batch_account.url.starts_with("https://") {
            return Err(ClusterError::InvalidUrl {
                url: self.batch_account.url.clone(),
            });
        }
        require(&self.storage_account.name, "storageAccount.name")?;
        require(&self.storage_account.key, "storageAccount.key")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch() -> BatchAccount {
        BatchAccount {
            name: "acct".to_string(),
            key: "secret".to_string(),
            url: "https://acct.westus.batch.example.com".to_string(),
        }
    }

    fn storage() -> StorageAccount {
        StorageAccount {
            name: "store".to_string(),
            key: "secret2".to_string(),
        }
    }

    #[test]
    fn new_ok() {
        let c = Credentials::new(batch(), storage()).unwrap();
        assert_eq!(c.batch_account().name, "acct");
        assert_eq!(c.storage_account().name, "store");
    }

    #[test]
    fn template_is_valid() {
        assert!(Credentials::template().validate().is_ok());
    }

    #[test]
    fn empty_fields_rejected() {
        let mut b = batch();
        b.key = "  ".to_string();
        assert!(matches!(
            Credentials::new(b, storage()),
            Err(ClusterError::EmptyField {
                field: "batchAccount.key"
            })
        ));

        let mut s = storage();
        s.name = String::new();
        assert!(matches!(
            Credentials::new(batch(), s),
            Err(ClusterError::EmptyField {
                field: "storageAccount.name"
            })
        ));
    }

    #[test]
    fn plain_http_rejected() {
        let mut b = batch();
        b.url = "http://acct.batch.example.com".to_string();
        assert!(matches!(
            Credentials::new(b, storage()),
            Err(ClusterError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(Credentials::new(batch(), storage()).unwrap()).unwrap();
        assert_eq!(json["batchAccount"]["url"], "https://acct.westus.batch.example.com");
        assert_eq!(json["storageAccount"]["key"], "secret2");
    }
}
