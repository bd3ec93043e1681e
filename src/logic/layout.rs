// src/logic/layout.rs
//! Calculates where piles and cards sit on the table, for drop hit-testing.

use crate::components::position::{Position, Rect};
use crate::components::stack::{Pile, StackType};
use crate::config::layout::{
    FOUNDATION_START_X, FOUNDATION_START_Y, FOUNDATION_X_OFFSET, STOCK_POS_X, STOCK_POS_Y,
    TABLEAU_START_X, TABLEAU_START_Y, TABLEAU_X_OFFSET, WASTE_POS_X, WASTE_POS_Y,
};

/// 山の基準位置 (一番下のカード、または空きスロットの左上)。
pub fn pile_origin(stack_type: StackType) -> Position {
    match stack_type {
        StackType::Stock => Position::new(STOCK_POS_X, STOCK_POS_Y),
        StackType::Waste => Position::new(WASTE_POS_X, WASTE_POS_Y),
        StackType::Foundation(index) => Position::new(
            FOUNDATION_START_X + FOUNDATION_X_OFFSET * f32::from(index),
            FOUNDATION_START_Y,
        ),
        StackType::Tableau(index) => Position::new(
            TABLEAU_START_X + TABLEAU_X_OFFSET * f32::from(index),
            TABLEAU_START_Y,
        ),
    }
}

/// 山の中で `position_in_stack` 番目 (0 が一番下) のカードの描画位置。
/// 各カードは山の `gap` ぶんずつ下にずれて並ぶ。
pub fn card_position(pile: &Pile, position_in_stack: usize) -> Position {
    let origin = pile_origin(pile.stack_type);
    Position::new(origin.x, origin.y + pile.gap * position_in_stack as f32)
}

/// ドロップ判定に使う矩形。一番上のカード、空なら山の空きスロット。
pub fn drop_target_rect(pile: &Pile) -> Rect {
    let index = pile.len().saturating_sub(1);
    card_position(pile, index).card_rect()
}
