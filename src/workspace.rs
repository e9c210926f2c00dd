//! Session state: the live board collection, the open board and the display
//! preference, saved after every committed change.

use crate::{
    domain::{
        filter_board, resolve_move, Board, BoardCollection, BoardSummary, DragIntent, EntityId,
        FilteredBoard,
    },
    error::{ImportError, Result, TaskboardError},
    storage::{KeyValueStore, Persistence},
    transfer,
};
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

pub struct Workspace<S> {
    boards: BoardCollection,
    current_board: Option<EntityId>,
    dark_mode: bool,
    persistence: Persistence<S>,
}

impl<S: KeyValueStore> Workspace<S> {
    /// Restores saved state, starting empty when nothing usable was saved
    pub async fn open(persistence: Persistence<S>) -> Self {
        let boards = persistence.load().await.unwrap_or_default();
        let dark_mode = persistence.load_preference().await.unwrap_or(false);
        info!(boards = boards.len(), dark_mode, "Opened workspace");

        Self {
            boards,
            current_board: None,
            dark_mode,
            persistence,
        }
    }

    /// The live board collection
    pub fn boards(&self) -> &BoardCollection {
        &self.boards
    }

    /// The persistence adapter state is saved through
    pub fn persistence(&self) -> &Persistence<S> {
        &self.persistence
    }

    /// Overview numbers for every board, in order
    pub fn summaries(&self) -> Vec<BoardSummary> {
        self.boards.boards().iter().map(|b| b.summary()).collect()
    }

    /// Current dark-mode preference
    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    /// ID of the open board, if any
    pub fn current_board_id(&self) -> Option<&EntityId> {
        self.current_board.as_ref()
    }

    /// The open board, always the live value from the collection
    pub fn current_board(&self) -> Option<&Arc<Board>> {
        self.current_board
            .as_ref()
            .and_then(|id| self.boards.find(id))
    }

    /// Opens a board; unknown IDs are reported as `BoardNotFound`
    pub fn select_board(&mut self, board_id: &EntityId) -> Result<()> {
        if !self.boards.contains(board_id) {
            return Err(TaskboardError::BoardNotFound(board_id.to_string()));
        }
        self.current_board = Some(board_id.clone());
        Ok(())
    }

    /// Goes back to the board overview
    pub fn close_board(&mut self) {
        self.current_board = None;
    }

    /// Search view of the open board. Never written back.
    pub fn search(&self, query: &str) -> Option<FilteredBoard> {
        self.current_board()
            .map(|board| filter_board(board, query))
    }

    /// Adds a new seeded board and saves
    pub async fn create_board(&mut self, name: &str) {
        let boards = self.boards.create_board(name);
        self.commit(boards).await;
    }

    /// Renames a board and saves
    pub async fn rename_board(&mut self, board_id: &EntityId, name: &str) {
        let boards = self.boards.rename_board(board_id, name);
        self.commit(boards).await;
    }

    /// Deletes a board; callers confirm with the user beforehand
    pub async fn delete_board(&mut self, board_id: &EntityId) {
        let boards = self.boards.delete_board(board_id);
        self.commit(boards).await;
    }

    /// Stores an edited board in place of the one with the same ID
    pub async fn update_board(&mut self, board: Arc<Board>) {
        let boards = self.boards.replace_board(board);
        self.commit(boards).await;
    }

    /// Runs a list or card mutation against one board
    pub async fn edit_board<F>(&mut self, board_id: &EntityId, edit: F)
    where
        F: FnOnce(&Arc<Board>) -> Arc<Board>,
    {
        let boards = self.boards.update_board_with(board_id, edit);
        self.commit(boards).await;
    }

    /// Applies a finished drag gesture to the open board
    pub async fn move_card(&mut self, intent: &DragIntent) {
        let Some(board_id) = self.current_board.clone() else {
            return;
        };
        self.edit_board(&board_id, |board| resolve_move(board, intent))
            .await;
    }

    /// Flips the dark-mode preference, saves it and returns the new value
    pub async fn toggle_dark_mode(&mut self) -> bool {
        self.dark_mode = !self.dark_mode;
        self.persistence.save_preference(self.dark_mode).await;
        self.dark_mode
    }

    /// Serializes every board as a pretty-printed document
    pub fn export(&self) -> Result<String> {
        transfer::export_collection(&self.boards)
    }

    /// Replaces every board with the imported document's contents.
    /// On error the current boards are kept as they are.
    pub async fn import(&mut self, document: &str) -> std::result::Result<(), ImportError> {
        let boards = transfer::import_collection(document)?;
        info!(boards = boards.len(), "Imported boards");
        self.commit(boards).await;
        Ok(())
    }

    /// Replaces every board with an already parsed value; non-arrays are rejected
    pub async fn replace_boards(&mut self, value: Value) -> std::result::Result<(), ImportError> {
        let boards = transfer::collection_from_value(value)?;
        info!(boards = boards.len(), "Replaced boards");
        self.commit(boards).await;
        Ok(())
    }

    async fn commit(&mut self, boards: BoardCollection) {
        if boards.same_as(&self.boards) {
            return;
        }
        self.boards = boards;

        let selection_exists = self
            .current_board
            .as_ref()
            .map_or(true, |id| self.boards.contains(id));
        if !selection_exists {
            self.current_board = None;
        }

        self.persistence.save(&self.boards).await;
    }
}
