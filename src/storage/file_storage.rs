use crate::{
    error::{Result, TaskboardError},
    storage::{KeyValueStore, StoreConfig},
};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// File-based storage: one JSON file per key inside the data directory
pub struct FileStorage {
    root_path: PathBuf,
}

impl FileStorage {
    /// Creates a new FileStorage using the default data directory under `project_root`
    pub fn new(project_root: impl AsRef<Path>) -> Self {
        Self::with_config(project_root, &StoreConfig::default())
    }

    /// Creates a new FileStorage using the data directory from `config`
    pub fn with_config(project_root: impl AsRef<Path>, config: &StoreConfig) -> Self {
        Self {
            root_path: project_root.as_ref().join(&config.data_dir),
        }
    }

    /// Directory holding the key files
    pub fn root_path(&self) -> &Path {
        &self.root_path
    }

    fn key_file(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(TaskboardError::StorageError(format!(
                "Invalid storage key: {}",
                key
            )));
        }
        Ok(self.root_path.join(format!("{}.json", key)))
    }

    async fn ensure_directory_exists(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for FileStorage {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let file_path = self.key_file(key)?;

        if !file_path.exists() {
            debug!(key, "no stored value");
            return Ok(None);
        }

        let contents = fs::read_to_string(&file_path).await?;
        debug!(key, bytes = contents.len(), "read stored value");
        Ok(Some(contents))
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let file_path = self.key_file(key)?;
        self.ensure_directory_exists(&self.root_path).await?;

        fs::write(&file_path, value).await?;
        debug!(key, bytes = value.len(), "wrote stored value");
        Ok(())
    }
}
