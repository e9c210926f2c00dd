pub mod board;
pub mod card;
pub mod collection;
pub mod filter;
pub mod id;
pub mod list;
pub mod reorder;

pub use board::{Board, BoardSummary, CardLocation, ListPreview, DEFAULT_LISTS};
pub use card::Card;
pub use collection::BoardCollection;
pub use filter::{filter_board, FilteredBoard};
pub use id::EntityId;
pub use list::List;
pub use reorder::{resolve_move, DragIntent};
