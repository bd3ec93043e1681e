// src/test_support.rs
//! テスト用のヘルパー。好きな盤面を World に直接組み立てる。

use crate::components::card::{CardId, Rank, Suit};
use crate::components::stack::{PileId, StackType};
use crate::logic::deck::create_standard_deck;
use crate::world::World;

/// 全部の山が空の World。
pub fn empty_world() -> World {
    World::new(create_standard_deck()).expect("standard deck is valid")
}

/// 指定したカードを山の一番上に積む。
pub fn put(world: &mut World, suit: Suit, rank: Rank, stack_type: StackType, face_up: bool) -> CardId {
    let card = world.find_card(suit, rank).expect("every card exists");
    world.place(card, PileId::of(stack_type));
    world.set_face_up(card, face_up);
    card
}

/// 組札に A から `up_to` まで同じスートで積む。
pub fn build_foundation(world: &mut World, index: u8, suit: Suit, up_to: Rank) {
    for value in 1..=up_to.value() {
        let rank = Rank::from_value(value).expect("rank in range");
        put(world, suit, rank, StackType::Foundation(index), true);
    }
}
