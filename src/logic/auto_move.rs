// src/logic/auto_move.rs
//! カードの自動移動 (ダブルクリック) の移動先を探すロジックだよ！🪄

use log::debug;

use crate::components::card::CardId;
use crate::components::stack::PileId;
use crate::logic::rules;
use crate::world::World;

/// `card` を自動で送れる組札を探す。見つからなければ None。
///
/// 動かせるのは山の一番上にある掴めるカードだけ。
/// 組札は番号順に見て、最初に受け入れてくれたところを返す。
pub fn find_automatic_foundation_move(world: &World, card: CardId) -> Option<PileId> {
    let is_top = world.pile_containing(card).map_or(false, |pile| pile.top() == Some(card));
    if !is_top || !rules::is_liftable(world, card) {
        debug!("[AutoMove] {:?} is not the top of a liftable pile.", card);
        return None;
    }

    let found = world
        .foundation_piles()
        .map(|pile| pile.id)
        .find(|&id| world.card(card).and_then(|c| c.pile) != Some(id) && rules::can_place(world, card, id));

    match found {
        Some(id) => debug!("[AutoMove] Found valid foundation {:?} for {:?}.", id, card),
        None => debug!("[AutoMove] No suitable foundation found for {:?}.", card),
    }
    found
}
