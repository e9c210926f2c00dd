//! # Taskboard Core
//!
//! Data model and mutation engines for a personal task-board manager.
//!
//! Boards hold ordered lists, lists hold ordered cards. Every mutation is a
//! pure function returning a new value; untouched lists, cards and boards are
//! shared with the previous value, so `Arc::ptr_eq` tells whether anything
//! changed. Rendering, drag detection and confirmation prompts belong to the
//! caller; this crate consumes their results.

pub mod domain;
pub mod error;
pub mod storage;
pub mod transfer;
pub mod workspace;

// Re-export commonly used types
pub use domain::{
    board::{Board, BoardSummary, CardLocation, ListPreview},
    card::Card,
    collection::BoardCollection,
    filter::{filter_board, FilteredBoard},
    id::EntityId,
    list::List,
    reorder::{resolve_move, DragIntent},
};
pub use error::{ImportError, Result, TaskboardError};
pub use storage::{KeyValueStore, Persistence, StoreConfig};
pub use transfer::{export_collection, import_collection, EXPORT_FILE_NAME};
pub use workspace::Workspace;
