use crate::domain::{board::Board, id::EntityId};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Every board the user owns, in insertion order
///
/// This is the unit of persistence, export and import.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoardCollection {
    boards: Vec<Arc<Board>>,
}

impl BoardCollection {
    /// Wraps boards that are already shared
    pub fn new(boards: Vec<Arc<Board>>) -> Self {
        Self { boards }
    }

    /// Boards in insertion order
    pub fn boards(&self) -> &[Arc<Board>] {
        &self.boards
    }

    /// Number of boards
    pub fn len(&self) -> usize {
        self.boards.len()
    }

    /// Returns true when there are no boards
    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    /// Looks up a board by ID
    pub fn find(&self, board_id: &EntityId) -> Option<&Arc<Board>> {
        self.boards.iter().find(|board| &board.id == board_id)
    }

    /// Returns true if a board with this ID exists
    pub fn contains(&self, board_id: &EntityId) -> bool {
        self.find(board_id).is_some()
    }

    /// Returns true when both collections share the same board list
    /// element-for-element, i.e. nothing was changed between them
    pub fn same_as(&self, other: &Self) -> bool {
        self.boards.len() == other.boards.len()
            && self
                .boards
                .iter()
                .zip(other.boards.iter())
                .all(|(a, b)| Arc::ptr_eq(a, b))
    }

    /// Appends a new seeded board. Blank names leave the collection untouched.
    pub fn create_board(&self, name: &str) -> Self {
        let Some(board) = Board::new(name) else {
            return self.clone();
        };
        let mut boards = self.boards.clone();
        boards.push(Arc::new(board));
        Self { boards }
    }

    /// Renames one board; blank names and unknown IDs are no-ops
    pub fn rename_board(&self, board_id: &EntityId, name: &str) -> Self {
        self.update_board_with(board_id, |board| board.rename(name))
    }

    /// Removes a board with all of its lists and cards
    pub fn delete_board(&self, board_id: &EntityId) -> Self {
        if !self.contains(board_id) {
            return self.clone();
        }
        Self {
            boards: self
                .boards
                .iter()
                .filter(|board| &board.id != board_id)
                .cloned()
                .collect(),
        }
    }

    /// Swaps in an edited board with the same ID
    pub fn replace_board(&self, board: Arc<Board>) -> Self {
        let id = board.id.clone();
        self.update_board_with(&id, move |_| board)
    }

    /// Applies `edit` to one board, leaving the others shared
    pub fn update_board_with<F>(&self, board_id: &EntityId, edit: F) -> Self
    where
        F: FnOnce(&Arc<Board>) -> Arc<Board>,
    {
        let Some(index) = self.boards.iter().position(|board| &board.id == board_id) else {
            return self.clone();
        };
        let updated = edit(&self.boards[index]);
        if Arc::ptr_eq(&updated, &self.boards[index]) {
            return self.clone();
        }
        let mut boards = self.boards.clone();
        boards[index] = updated;
        Self { boards }
    }
}

impl From<Vec<Board>> for BoardCollection {
    fn from(boards: Vec<Board>) -> Self {
        Self::new(boards.into_iter().map(Arc::new).collect())
    }
}
