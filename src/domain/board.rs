use crate::domain::{
    id::{non_empty, EntityId},
    list::List,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Lists every new board starts with, as `(id, title)`
pub const DEFAULT_LISTS: [(&str, &str); 3] = [
    ("todo", "To Do"),
    ("in-progress", "In Progress"),
    ("done", "Done"),
];

/// Number of lists shown in a board preview
const PREVIEW_LISTS: usize = 3;

/// Where a card currently sits on a board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardLocation {
    pub list_index: usize,
    pub card_index: usize,
}

/// A named board of ordered lists, left to right
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub lists: Vec<Arc<List>>,
    pub created_at: DateTime<Utc>,
}

impl Board {
    /// Creates a board seeded with the default lists.
    /// Returns `None` if the name is blank.
    pub fn new(name: &str) -> Option<Self> {
        let name = non_empty(name)?;
        Some(Self {
            id: EntityId::generate(),
            name,
            lists: DEFAULT_LISTS
                .iter()
                .map(|(id, title)| Arc::new(List::with_id(*id, *title)))
                .collect(),
            created_at: Utc::now(),
        })
    }

    /// Looks up a list by ID
    pub fn find_list(&self, list_id: &EntityId) -> Option<&Arc<List>> {
        self.lists.iter().find(|list| &list.id == list_id)
    }

    /// Finds the list and index holding a card by scanning every list
    pub fn locate_card(&self, card_id: &EntityId) -> Option<CardLocation> {
        self.lists
            .iter()
            .enumerate()
            .find_map(|(list_index, list)| {
                list.position_of(card_id).map(|card_index| CardLocation {
                    list_index,
                    card_index,
                })
            })
    }

    /// Total number of cards across all lists
    pub fn card_count(&self) -> usize {
        self.lists.iter().map(|list| list.cards.len()).sum()
    }

    /// Overview numbers for the board picker
    pub fn summary(&self) -> BoardSummary {
        BoardSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            card_count: self.card_count(),
            list_count: self.lists.len(),
            previews: self
                .lists
                .iter()
                .take(PREVIEW_LISTS)
                .map(|list| ListPreview {
                    title: list.title.clone(),
                    card_count: list.cards.len(),
                })
                .collect(),
        }
    }

    /// Copy of this board with `lists` swapped in
    pub(crate) fn with_lists(&self, lists: Vec<Arc<List>>) -> Arc<Self> {
        Arc::new(Self {
            id: self.id.clone(),
            name: self.name.clone(),
            lists,
            created_at: self.created_at,
        })
    }

    /// Renames the board; blank or unchanged names leave it untouched
    pub fn rename(self: &Arc<Self>, name: &str) -> Arc<Self> {
        match non_empty(name) {
            Some(name) if name != self.name => Arc::new(Self {
                name,
                ..(**self).clone()
            }),
            _ => Arc::clone(self),
        }
    }

    /// Appends a new empty list on the right
    pub fn add_list(self: &Arc<Self>, title: &str) -> Arc<Self> {
        let Some(list) = List::new(title) else {
            return Arc::clone(self);
        };
        let mut lists = self.lists.clone();
        lists.push(Arc::new(list));
        self.with_lists(lists)
    }

    /// Removes a list together with its cards
    pub fn delete_list(self: &Arc<Self>, list_id: &EntityId) -> Arc<Self> {
        if self.find_list(list_id).is_none() {
            return Arc::clone(self);
        }
        let lists = self
            .lists
            .iter()
            .filter(|list| &list.id != list_id)
            .cloned()
            .collect();
        self.with_lists(lists)
    }

    /// Applies `edit` to one list. If the list is missing or `edit` hands back
    /// the same list, the board itself is returned unchanged.
    pub fn update_list<F>(self: &Arc<Self>, list_id: &EntityId, edit: F) -> Arc<Self>
    where
        F: FnOnce(&Arc<List>) -> Arc<List>,
    {
        let Some(index) = self.lists.iter().position(|list| &list.id == list_id) else {
            return Arc::clone(self);
        };
        let updated = edit(&self.lists[index]);
        if Arc::ptr_eq(&updated, &self.lists[index]) {
            return Arc::clone(self);
        }
        let mut lists = self.lists.clone();
        lists[index] = updated;
        self.with_lists(lists)
    }

    /// Renames one list; blank titles and unknown lists are no-ops
    pub fn rename_list(self: &Arc<Self>, list_id: &EntityId, title: &str) -> Arc<Self> {
        self.update_list(list_id, |list| list.rename(title))
    }

    /// Appends a card to the bottom of one list
    pub fn add_card(self: &Arc<Self>, list_id: &EntityId, title: &str) -> Arc<Self> {
        self.update_list(list_id, |list| list.add_card(title))
    }

    /// Saves a new title and description on one card of one list
    pub fn update_card(
        self: &Arc<Self>,
        list_id: &EntityId,
        card_id: &EntityId,
        title: &str,
        description: &str,
    ) -> Arc<Self> {
        self.update_list(list_id, |list| list.update_card(card_id, title, description))
    }

    /// Removes one card from one list
    pub fn delete_card(self: &Arc<Self>, list_id: &EntityId, card_id: &EntityId) -> Arc<Self> {
        self.update_list(list_id, |list| list.delete_card(card_id))
    }
}

/// Card count of one list in a board preview
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListPreview {
    pub title: String,
    pub card_count: usize,
}

/// Overview of a board without its card contents
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardSummary {
    pub id: EntityId,
    pub name: String,
    pub card_count: usize,
    pub list_count: usize,
    pub previews: Vec<ListPreview>,
}
