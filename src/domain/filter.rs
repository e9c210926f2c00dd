use crate::domain::board::Board;
use std::ops::Deref;
use std::sync::Arc;

/// Read-only search projection of a board
///
/// Derefs to [`Board`] for display, but cannot be turned back into the
/// `Arc<Board>` the mutation engines and persistence work on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilteredBoard {
    view: Board,
}

impl FilteredBoard {
    /// Number of cards that matched the query
    pub fn match_count(&self) -> usize {
        self.view.card_count()
    }
}

impl Deref for FilteredBoard {
    type Target = Board;

    fn deref(&self) -> &Board {
        &self.view
    }
}

/// Keeps only the cards whose title or description contains `query`,
/// ignoring case. An empty query keeps every card.
pub fn filter_board(board: &Board, query: &str) -> FilteredBoard {
    let needle = query.to_lowercase();
    let lists = board
        .lists
        .iter()
        .map(|list| {
            if needle.is_empty() {
                return Arc::clone(list);
            }
            let cards = list
                .cards
                .iter()
                .filter(|card| card.matches_lowercase(&needle))
                .cloned()
                .collect();
            list.with_cards(cards)
        })
        .collect();

    FilteredBoard {
        view: Board {
            id: board.id.clone(),
            name: board.name.clone(),
            lists,
            created_at: board.created_at,
        },
    }
}
