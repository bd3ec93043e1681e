// src/logic/rules/move_validation.rs
//! カード移動の全体的な妥当性チェックを行う。

use log::debug;

use crate::components::card::CardId;
use crate::components::stack::{PileId, StackType};
use crate::world::World;

use super::{foundation, tableau};

/// 指定されたカードを特定の山の一番上に置けるか検証する。
/// 山札と捨て札へのドロップは常に不可 (専用の操作でしか行き来しない)。
pub fn can_place(world: &World, card: CardId, target: PileId) -> bool {
    let (Some(card), Some(pile)) = (world.card(card), world.pile(target)) else {
        return false;
    };
    let top = world.top_card(target);
    match pile.stack_type {
        StackType::Tableau(_) => tableau::can_move_to_tableau(card, top),
        StackType::Foundation(_) => foundation::can_move_to_foundation(card, top),
        StackType::Stock | StackType::Waste => {
            debug!("[Rules Validation] Dropping onto {:?} is not allowed.", pile.stack_type);
            false
        }
    }
}

/// カードを掴めるか (ドラッグを始められるか)。
///
/// * 捨て札と組札は一番上のカードだけ。
/// * 場札は表向きならどの位置でも (上に乗ってるカードごと持ち上げる)。
/// * 山札は不可 (クリックでめくるだけ)。
pub fn is_liftable(world: &World, card: CardId) -> bool {
    let (Some(card_data), Some(pile)) = (world.card(card), world.pile_containing(card)) else {
        return false;
    };
    match pile.stack_type {
        StackType::Waste | StackType::Foundation(_) => pile.top() == Some(card),
        StackType::Tableau(_) => card_data.is_face_up,
        StackType::Stock => false,
    }
}
