//! Store keeping one JSON file per key under a directory

use super::{KeyValueStore, StorageError};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Store rooted at `root`; the directory is created on first write
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(StorageError::Rejected {
                key: key.to_string(),
                reason: "key must be alphanumeric, '-' or '_'".to_string(),
            });
        }
        Ok(self.root.join(format!("{key}.json")))
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path).await {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.root).await?;

        // Write beside the target and rename so readers never see a torn file.
        // Each write stages under its own name so overlapping writes can't
        // clobber or steal each other's staging file.
        let staging = self
            .root
            .join(format!("{key}.{}.json.tmp", uuid::Uuid::new_v4().simple()));
        fs::write(&staging, value).await?;
        fs::rename(&staging, &path).await?;
        tracing::debug!("Wrote {} bytes to {}", value.len(), path.display());
        Ok(())
    }
}
