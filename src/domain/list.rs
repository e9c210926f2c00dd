use crate::domain::{
    card::Card,
    id::{non_empty, EntityId},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// An ordered column of cards. Earlier cards sit higher in the column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct List {
    pub id: EntityId,
    pub title: String,
    #[serde(default)]
    pub cards: Vec<Arc<Card>>,
}

impl List {
    /// Creates an empty list with a fresh ID. Returns `None` if the title is blank.
    pub fn new(title: &str) -> Option<Self> {
        let title = non_empty(title)?;
        Some(Self::with_id(EntityId::generate(), title))
    }

    /// Creates an empty list with a caller-chosen ID
    pub fn with_id(id: impl Into<EntityId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            cards: Vec::new(),
        }
    }

    /// Index of the card within this list
    pub fn position_of(&self, card_id: &EntityId) -> Option<usize> {
        self.cards.iter().position(|card| &card.id == card_id)
    }

    /// Looks up a card by ID
    pub fn find_card(&self, card_id: &EntityId) -> Option<&Arc<Card>> {
        self.cards.iter().find(|card| &card.id == card_id)
    }

    /// Copy of this list with `cards` swapped in
    pub(crate) fn with_cards(&self, cards: Vec<Arc<Card>>) -> Arc<Self> {
        Arc::new(Self {
            id: self.id.clone(),
            title: self.title.clone(),
            cards,
        })
    }

    /// Appends a new card at the bottom of the list
    pub fn add_card(self: &Arc<Self>, title: &str) -> Arc<Self> {
        let Some(card) = Card::new(title) else {
            return Arc::clone(self);
        };
        let mut cards = self.cards.clone();
        cards.push(Arc::new(card));
        self.with_cards(cards)
    }

    /// Renames the list; blank or unchanged titles leave it untouched
    pub fn rename(self: &Arc<Self>, title: &str) -> Arc<Self> {
        match non_empty(title) {
            Some(title) if title != self.title => Arc::new(Self {
                title,
                ..(**self).clone()
            }),
            _ => Arc::clone(self),
        }
    }

    /// Saves a new title and description on one card
    pub fn update_card(
        self: &Arc<Self>,
        card_id: &EntityId,
        title: &str,
        description: &str,
    ) -> Arc<Self> {
        let Some(index) = self.position_of(card_id) else {
            return Arc::clone(self);
        };
        let Some(edited) = self.cards[index].edited(title, description) else {
            return Arc::clone(self);
        };
        let mut cards = self.cards.clone();
        cards[index] = Arc::new(edited);
        self.with_cards(cards)
    }

    /// Removes a card; unknown IDs leave the list untouched
    pub fn delete_card(self: &Arc<Self>, card_id: &EntityId) -> Arc<Self> {
        let Some(index) = self.position_of(card_id) else {
            return Arc::clone(self);
        };
        let mut cards = self.cards.clone();
        cards.remove(index);
        self.with_cards(cards)
    }
}
