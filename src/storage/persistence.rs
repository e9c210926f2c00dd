//! Loads and saves the board collection and the dark-mode flag.
//!
//! Failures here never reach the caller: a broken or missing saved state reads
//! as "nothing saved", and a failed write is logged and left for the next save
//! to retry. The in-memory state stays authoritative for the session.

use crate::{
    domain::BoardCollection,
    storage::{KeyValueStore, StoreConfig},
    transfer,
};
use tracing::{debug, warn};

pub struct Persistence<S> {
    store: S,
    config: StoreConfig,
}

impl<S: KeyValueStore> Persistence<S> {
    /// Creates an adapter using the default key names
    pub fn new(store: S) -> Self {
        Self::with_config(store, StoreConfig::default())
    }

    /// Creates an adapter using the key names from `config`
    pub fn with_config(store: S, config: StoreConfig) -> Self {
        Self { store, config }
    }

    /// The underlying key-value store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Reads the saved collection; unparseable state is logged and treated as absent.
    /// Duplicate IDs in otherwise readable state are repaired, not discarded.
    pub async fn load(&self) -> Option<BoardCollection> {
        let key = &self.config.boards_key;
        let raw = match self.store.get(key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!(key = %key, error = %e, "Failed to read saved boards");
                return None;
            }
        };

        match transfer::restore_collection(&raw) {
            Ok(boards) => {
                debug!(boards = boards.len(), "Loaded saved boards");
                Some(boards)
            }
            Err(e) => {
                warn!(key = %key, error = %e, "Ignoring unreadable saved boards");
                None
            }
        }
    }

    /// Writes the collection, logging instead of failing
    pub async fn save(&self, boards: &BoardCollection) {
        let key = &self.config.boards_key;
        let document = match serde_json::to_string(boards) {
            Ok(document) => document,
            Err(e) => {
                warn!(error = %e, "Failed to serialize boards");
                return;
            }
        };

        if let Err(e) = self.store.set(key, &document).await {
            warn!(key = %key, error = %e, "Failed to save boards");
        }
    }

    /// Reads the saved dark-mode flag
    pub async fn load_preference(&self) -> Option<bool> {
        let key = &self.config.preference_key;
        let raw = match self.store.get(key).await {
            Ok(raw) => raw?,
            Err(e) => {
                warn!(key = %key, error = %e, "Failed to read saved preference");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(dark_mode) => Some(dark_mode),
            Err(e) => {
                warn!(key = %key, error = %e, "Ignoring unreadable saved preference");
                None
            }
        }
    }

    /// Writes the dark-mode flag, logging instead of failing
    pub async fn save_preference(&self, dark_mode: bool) {
        let key = &self.config.preference_key;
        if let Err(e) = self.store.set(key, &dark_mode.to_string()).await {
            warn!(key = %key, error = %e, "Failed to save preference");
        }
    }
}
