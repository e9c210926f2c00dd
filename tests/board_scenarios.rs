use std::collections::HashSet;
use std::sync::Arc;

use taskboard_core::{
    export_collection, filter_board, import_collection, resolve_move, storage::FileStorage, Board,
    BoardCollection, DragIntent, EntityId, ImportError, Persistence, Workspace,
};
use tempfile::TempDir;

fn todo() -> EntityId {
    EntityId::from("todo")
}

fn in_progress() -> EntityId {
    EntityId::from("in-progress")
}

fn card_id(board: &Board, list_index: usize, card_index: usize) -> EntityId {
    board.lists[list_index].cards[card_index].id.clone()
}

fn titles(board: &Board, list_index: usize) -> Vec<&str> {
    board.lists[list_index]
        .cards
        .iter()
        .map(|c| c.title.as_str())
        .collect()
}

fn all_card_ids(board: &Board) -> Vec<String> {
    board
        .lists
        .iter()
        .flat_map(|l| l.cards.iter().map(|c| c.id.to_string()))
        .collect()
}

fn assert_ids_unique(board: &Board) {
    let cards = all_card_ids(board);
    let unique: HashSet<&String> = cards.iter().collect();
    assert_eq!(unique.len(), cards.len(), "duplicate card id");

    let lists: HashSet<&str> = board.lists.iter().map(|l| l.id.as_str()).collect();
    assert_eq!(lists.len(), board.lists.len(), "duplicate list id");
}

#[test]
fn cross_list_move_lands_before_target() {
    let board = Arc::new(Board::new("B").unwrap())
        .add_card(&todo(), "cardA")
        .add_card(&todo(), "cardB")
        .add_card(&in_progress(), "cardC");
    let a = card_id(&board, 0, 0);
    let c = card_id(&board, 1, 0);

    let moved = resolve_move(&board, &DragIntent::new(a, c));

    assert_eq!(titles(&moved, 0), vec!["cardB"]);
    assert_eq!(titles(&moved, 1), vec!["cardA", "cardC"]);
}

#[test]
fn same_list_move_reinserts_at_target_index() {
    let board = Arc::new(Board::new("B").unwrap())
        .add_card(&todo(), "cardA")
        .add_card(&todo(), "cardB")
        .add_card(&todo(), "cardC");
    let a = card_id(&board, 0, 0);
    let c = card_id(&board, 0, 2);

    let moved = resolve_move(&board, &DragIntent::new(c, a));

    assert_eq!(titles(&moved, 0), vec!["cardC", "cardA", "cardB"]);
}

#[test]
fn ids_stay_unique_through_mixed_commands() {
    let mut board = Arc::new(Board::new("B").unwrap());
    for i in 0..10 {
        board = board.add_card(&todo(), &format!("todo {}", i));
        board = board.add_card(&in_progress(), &format!("doing {}", i));
    }
    board = board.add_list("Review").add_list("Blocked");

    for step in 0..10 {
        let source = card_id(&board, 0, step % board.lists[0].cards.len().max(1));
        let target = card_id(&board, 1, 0);
        board = resolve_move(&board, &DragIntent::new(source, target));
        let renamed = card_id(&board, 1, 1);
        board = board.update_card(&in_progress(), &renamed, &format!("renamed {}", step), "");
        assert_ids_unique(&board);
    }

    assert_eq!(board.card_count(), 20);
}

#[test]
fn moves_conserve_cards() {
    let board = Arc::new(Board::new("B").unwrap())
        .add_card(&todo(), "1")
        .add_card(&todo(), "2")
        .add_card(&in_progress(), "3")
        .add_card(&EntityId::from("done"), "4");
    let mut expected = all_card_ids(&board);
    expected.sort();

    let ids = all_card_ids(&board);
    let mut current = Arc::clone(&board);
    for source in &ids {
        for target in &ids {
            current = resolve_move(&current, &DragIntent::new(source.as_str(), target.as_str()));
            let mut now = all_card_ids(&current);
            now.sort();
            assert_eq!(now, expected);
        }
    }
}

#[test]
fn noop_intents_return_same_board() {
    let board = Arc::new(Board::new("B").unwrap()).add_card(&todo(), "only");
    let id = card_id(&board, 0, 0);

    for intent in [
        DragIntent::new(id.clone(), id.clone()),
        DragIntent::cancelled(id.clone()),
        DragIntent::new("missing", id.clone()),
        DragIntent::new(id.clone(), "missing"),
    ] {
        assert!(Arc::ptr_eq(&board, &resolve_move(&board, &intent)));
    }
}

#[test]
fn deleting_list_and_board_cascades() {
    let boards = BoardCollection::default().create_board("B").create_board("Other");
    let board_id = boards.boards()[0].id.clone();
    let boards = boards.update_board_with(&board_id, |b| {
        b.add_card(&todo(), "x").add_card(&todo(), "y")
    });

    let without_list = boards.update_board_with(&board_id, |b| b.delete_list(&todo()));
    assert_eq!(without_list.find(&board_id).unwrap().card_count(), 0);
    assert_eq!(without_list.find(&board_id).unwrap().lists.len(), 2);

    let without_board = boards.delete_board(&board_id);
    assert!(without_board.find(&board_id).is_none());
    assert_eq!(without_board.len(), 1);
    assert!(!export_collection(&without_board).unwrap().contains("\"x\""));
}

#[test]
fn filtering_does_not_affect_export() {
    let boards = BoardCollection::default().create_board("B");
    let id = boards.boards()[0].id.clone();
    let boards = boards.update_board_with(&id, |b| {
        b.add_card(&todo(), "alpha").add_card(&todo(), "beta")
    });
    let before = export_collection(&boards).unwrap();

    let view = filter_board(boards.find(&id).unwrap(), "alp");
    assert_eq!(view.match_count(), 1);

    assert_eq!(export_collection(&boards).unwrap(), before);
}

#[test]
fn export_import_round_trip() {
    let boards = BoardCollection::default().create_board("One").create_board("Two");
    let id = boards.boards()[1].id.clone();
    let boards = boards.update_board_with(&id, |b| {
        let b = b.add_card(&todo(), "task").add_list("Later");
        let card = b.lists[0].cards[0].id.clone();
        b.update_card(&todo(), &card, "task", "with notes")
    });

    let restored = import_collection(&export_collection(&boards).unwrap()).unwrap();
    assert_eq!(restored, boards);
}

#[test]
fn blank_board_name_is_not_created() {
    let boards = BoardCollection::default().create_board("");
    assert!(boards.is_empty());
}

#[test]
fn malformed_import_is_rejected() {
    assert!(matches!(
        import_collection("{not valid json"),
        Err(ImportError::MalformedSyntax(_))
    ));
}

#[tokio::test]
async fn workspace_persists_across_sessions() {
    let temp_dir = TempDir::new().unwrap();

    {
        let mut ws = Workspace::open(Persistence::new(FileStorage::new(temp_dir.path()))).await;
        ws.create_board("Home").await;
        let id = ws.boards().boards()[0].id.clone();
        ws.edit_board(&id, |b| b.add_card(&todo(), "Water plants"))
            .await;
        ws.toggle_dark_mode().await;
    }

    let ws = Workspace::open(Persistence::new(FileStorage::new(temp_dir.path()))).await;
    assert!(ws.dark_mode());
    assert_eq!(ws.boards().len(), 1);
    assert_eq!(titles(&ws.boards().boards()[0], 0), vec!["Water plants"]);
}

#[tokio::test]
async fn workspace_ignores_corrupt_file() {
    let temp_dir = TempDir::new().unwrap();
    let data_dir = temp_dir.path().join(".taskboard");
    std::fs::create_dir_all(&data_dir).unwrap();
    std::fs::write(data_dir.join("boards.json"), "[{broken").unwrap();

    let mut ws = Workspace::open(Persistence::new(FileStorage::new(temp_dir.path()))).await;
    assert!(ws.boards().is_empty());

    ws.create_board("Fresh").await;
    let reopened = Workspace::open(Persistence::new(FileStorage::new(temp_dir.path()))).await;
    assert_eq!(reopened.boards().boards()[0].name, "Fresh");
}
