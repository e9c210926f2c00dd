use crate::domain::id::{non_empty, EntityId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single task on a list
///
/// `id` and `created_at` never change once the card exists. The owning list
/// is implied by which list's sequence holds the card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: EntityId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl Card {
    /// Creates a card with a fresh ID, empty description and the current time.
    /// Returns `None` if the title is blank.
    pub fn new(title: &str) -> Option<Self> {
        let title = non_empty(title)?;
        Some(Self {
            id: EntityId::generate(),
            title,
            description: String::new(),
            created_at: Utc::now(),
        })
    }

    /// Returns a copy with the trimmed title and description applied, or
    /// `None` if the title is blank or nothing would change
    pub fn edited(&self, title: &str, description: &str) -> Option<Self> {
        let title = non_empty(title)?;
        let description = description.trim();
        if title == self.title && description == self.description {
            return None;
        }
        Some(Self {
            title,
            description: description.to_string(),
            ..self.clone()
        })
    }

    /// Case-insensitive substring match against title or description.
    /// `needle` must already be lowercased.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }
}
