// src/components/mod.rs

// ゲームのデータ部品たち！
pub mod card;
pub mod dragging_info;
pub mod game_state;
pub mod position;
pub mod stack;

pub use card::{Card, CardId, Rank, Suit};
pub use dragging_info::DraggingInfo;
pub use game_state::GameStatus;
pub use position::{Position, Rect};
pub use stack::{Pile, PileId, StackType};
