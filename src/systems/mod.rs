// src/systems/mod.rs

// World を書き換える処理たち。どれも発生したイベントを `events` に積んでいく。
pub mod deal_system;
pub mod move_card_system;
pub mod stock_system;
pub mod win_condition_system;

pub use deal_system::DealInitialCardsSystem;
pub use move_card_system::{MoveCardSystem, MoveOutcome};
pub use win_condition_system::WinConditionSystem;
