use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[cfg(feature = "file-storage")]
pub mod file_storage;
pub mod memory_storage;
pub mod persistence;

#[cfg(feature = "sqlite-storage")]
pub mod sqlite_storage;

#[cfg(feature = "file-storage")]
pub use file_storage::FileStorage;
pub use memory_storage::MemoryStorage;
pub use persistence::Persistence;

#[cfg(feature = "sqlite-storage")]
pub use sqlite_storage::SqliteStorage;

/// Durable string key-value store the board state is written to
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Reads the value stored under `key`, if any
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value
    async fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// Key names and on-disk location used by the storage backends
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Key holding the serialized board collection
    pub boards_key: String,
    /// Key holding the dark-mode preference
    pub preference_key: String,
    /// Directory created under the project root by file-backed stores
    pub data_dir: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            boards_key: "boards".to_string(),
            preference_key: "dark-mode".to_string(),
            data_dir: ".taskboard".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = StoreConfig::default();
        assert_eq!(config.boards_key, "boards");
        assert_eq!(config.preference_key, "dark-mode");
        assert_eq!(config.data_dir, ".taskboard");
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: StoreConfig = serde_json::from_str(r#"{"data_dir": "state"}"#).unwrap();
        assert_eq!(config.data_dir, "state");
        assert_eq!(config.boards_key, "boards");
    }
}
