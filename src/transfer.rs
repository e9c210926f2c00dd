//! Export and import of the whole board collection as a JSON document.

use crate::{
    domain::{Board, BoardCollection, EntityId},
    error::{ImportError, Result},
};
use serde_json::Value;
use std::{collections::HashSet, sync::Arc};
use tracing::warn;

/// Suggested file name for exported documents
pub const EXPORT_FILE_NAME: &str = "task-manager-export.json";

type ImportResult<T> = std::result::Result<T, ImportError>;

/// Serializes the collection as a pretty-printed JSON array
pub fn export_collection(collection: &BoardCollection) -> Result<String> {
    Ok(serde_json::to_string_pretty(collection)?)
}

/// Parses an exported document back into a collection.
///
/// Nothing is applied on failure; the caller keeps its current state.
pub fn import_collection(document: &str) -> ImportResult<BoardCollection> {
    let value: Value = serde_json::from_str(document)
        .map_err(|e| ImportError::MalformedSyntax(e.to_string()))?;
    collection_from_value(value)
}

/// Checks that `value` is an array of well-formed boards and converts it
pub fn collection_from_value(value: Value) -> ImportResult<BoardCollection> {
    if !value.is_array() {
        return Err(ImportError::UnexpectedShape(format!(
            "expected an array of boards, found {}",
            json_kind(&value)
        )));
    }

    let boards = parse_boards(value)?;
    validate(&boards)?;

    Ok(BoardCollection::from(boards))
}

/// Reads previously saved state.
///
/// Only syntax and the array-of-boards shape are enforced. Duplicate IDs are
/// given fresh ones instead of rejecting the document, so one bad record never
/// costs the user their other boards.
pub fn restore_collection(document: &str) -> ImportResult<BoardCollection> {
    let value: Value = serde_json::from_str(document)
        .map_err(|e| ImportError::MalformedSyntax(e.to_string()))?;
    if !value.is_array() {
        return Err(ImportError::UnexpectedShape(format!(
            "expected an array of boards, found {}",
            json_kind(&value)
        )));
    }

    let mut boards = parse_boards(value)?;
    let repaired = repair_duplicate_ids(&mut boards);
    if repaired > 0 {
        warn!(repaired, "Assigned fresh IDs to duplicated saved entries");
    }

    Ok(BoardCollection::from(boards))
}

fn parse_boards(value: Value) -> ImportResult<Vec<Board>> {
    serde_json::from_value(value).map_err(|e| ImportError::UnexpectedShape(e.to_string()))
}

/// Re-IDs every board, list or card whose ID was already seen in its scope.
/// Returns how many entries were changed.
fn repair_duplicate_ids(boards: &mut [Board]) -> usize {
    let mut repaired = 0;
    let mut board_ids = HashSet::new();

    for board in boards.iter_mut() {
        if !board_ids.insert(board.id.clone()) {
            board.id = EntityId::generate();
            repaired += 1;
        }

        let mut list_ids = HashSet::new();
        let mut card_ids = HashSet::new();
        for list in board.lists.iter_mut() {
            let list = Arc::make_mut(list);
            if !list_ids.insert(list.id.clone()) {
                list.id = EntityId::generate();
                repaired += 1;
            }
            for card in list.cards.iter_mut() {
                if !card_ids.insert(card.id.clone()) {
                    Arc::make_mut(card).id = EntityId::generate();
                    repaired += 1;
                }
            }
        }
    }

    repaired
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn validate(boards: &[Board]) -> ImportResult<()> {
    let mut board_ids = HashSet::new();

    for board in boards {
        if !board_ids.insert(board.id.as_str()) {
            return Err(shape(format!("duplicate board id '{}'", board.id)));
        }
        if board.name.trim().is_empty() {
            return Err(shape(format!("board '{}' has an empty name", board.id)));
        }

        let mut list_ids = HashSet::new();
        let mut card_ids = HashSet::new();
        for list in &board.lists {
            if !list_ids.insert(list.id.as_str()) {
                return Err(shape(format!(
                    "duplicate list id '{}' on board '{}'",
                    list.id, board.id
                )));
            }
            if list.title.trim().is_empty() {
                return Err(shape(format!("list '{}' has an empty title", list.id)));
            }
            for card in &list.cards {
                if !card_ids.insert(card.id.as_str()) {
                    return Err(shape(format!(
                        "duplicate card id '{}' on board '{}'",
                        card.id, board.id
                    )));
                }
                if card.title.trim().is_empty() {
                    return Err(shape(format!("card '{}' has an empty title", card.id)));
                }
            }
        }
    }

    Ok(())
}

fn shape(reason: String) -> ImportError {
    ImportError::UnexpectedShape(reason)
}
