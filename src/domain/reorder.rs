//! Resolves a finished drag gesture into a new card order.
//!
//! The gesture layer reports which card was dragged and which card it was
//! dropped on. Ownership is found by scanning every list, which is fine for the
//! handful of lists and cards a personal board holds.

use crate::domain::{board::Board, id::EntityId};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// A completed drag gesture. `target_card_id` is `None` when the card was
/// released outside any drop target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragIntent {
    pub source_card_id: EntityId,
    #[serde(default)]
    pub target_card_id: Option<EntityId>,
}

impl DragIntent {
    pub fn new(source: impl Into<EntityId>, target: impl Into<EntityId>) -> Self {
        Self {
            source_card_id: source.into(),
            target_card_id: Some(target.into()),
        }
    }

    /// A gesture released without a drop target
    pub fn cancelled(source: impl Into<EntityId>) -> Self {
        Self {
            source_card_id: source.into(),
            target_card_id: None,
        }
    }
}

/// Applies a drag gesture to a board.
///
/// The dragged card lands at the index the target card currently occupies:
/// within one list it is removed and reinserted there, across lists it is
/// inserted just before the target. Gestures onto the dragged card itself,
/// without a target, or naming unknown cards return `board` unchanged.
pub fn resolve_move(board: &Arc<Board>, intent: &DragIntent) -> Arc<Board> {
    let Some(target_id) = intent.target_card_id.as_ref() else {
        debug!(card = %intent.source_card_id, "drag released without target");
        return Arc::clone(board);
    };
    if &intent.source_card_id == target_id {
        return Arc::clone(board);
    }
    let (Some(source), Some(target)) = (
        board.locate_card(&intent.source_card_id),
        board.locate_card(target_id),
    ) else {
        debug!(
            source = %intent.source_card_id,
            target = %target_id,
            "drag names a card that is not on the board"
        );
        return Arc::clone(board);
    };

    let mut lists = board.lists.clone();

    if source.list_index == target.list_index {
        let list = &board.lists[source.list_index];
        let mut cards = list.cards.clone();
        let moved = cards.remove(source.card_index);
        cards.insert(target.card_index, moved);
        lists[source.list_index] = list.with_cards(cards);
    } else {
        let origin = &board.lists[source.list_index];
        let destination = &board.lists[target.list_index];

        let mut origin_cards = origin.cards.clone();
        let moved = origin_cards.remove(source.card_index);
        let mut destination_cards = destination.cards.clone();
        destination_cards.insert(target.card_index, moved);

        lists[source.list_index] = origin.with_cards(origin_cards);
        lists[target.list_index] = destination.with_cards(destination_cards);
    }

    board.with_lists(lists)
}
