//! JSON file key-value store
//!
//! localStorage-style persistence: one JSON document per collection under
//! a data directory, read in full at startup and rewritten in full after
//! every mutation. Small data, no indexes, no partial writes.

use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::DomainError;

/// File-backed key-value store keyed by collection name
#[derive(Debug, Clone)]
pub struct JsonStore {
    data_dir: PathBuf,
}

impl JsonStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    fn path_for(&self, collection: &str) -> PathBuf {
        self.data_dir.join(format!("{collection}.json"))
    }

    /// Load a collection. A missing file is an empty collection; an
    /// unreadable or corrupt file is logged and also treated as empty.
    pub async fn load<T: DeserializeOwned>(&self, collection: &str) -> Vec<T> {
        let path = self.path_for(collection);
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "failed to read collection, starting empty"
                );
                return Vec::new();
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "corrupt collection file, starting empty"
                );
                Vec::new()
            }
        }
    }

    /// Persist a collection. Writes to a temp file in the data directory
    /// and renames it over the target.
    pub async fn save<T: Serialize>(
        &self,
        collection: &str,
        records: &[T],
    ) -> Result<(), DomainError> {
        let json = serde_json::to_vec_pretty(records)
            .map_err(|e| DomainError::Storage(format!("serialize {collection}: {e}")))?;

        tokio::fs::create_dir_all(&self.data_dir)
            .await
            .map_err(|e| DomainError::Storage(format!("create data dir: {e}")))?;

        let path = self.path_for(collection);
        let tmp = self.data_dir.join(format!("{collection}.json.tmp"));
        tokio::fs::write(&tmp, &json)
            .await
            .map_err(|e| DomainError::Storage(format!("write {collection}: {e}")))?;
        tokio::fs::rename(&tmp, &path)
            .await
            .map_err(|e| DomainError::Storage(format!("persist {collection}: {e}")))?;

        Ok(())
    }
}
