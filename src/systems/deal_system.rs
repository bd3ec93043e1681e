// src/systems/deal_system.rs

use itertools::Itertools;
use log::info;

use crate::components::card::CardId;
use crate::components::stack::{PileId, TABLEAU_COUNT};
use crate::error::EngineError;
use crate::logic::deck::DECK_SIZE;
use crate::protocol::GameEvent;
use crate::world::World;

/// 初期カード配置システム！🎉
/// 山札と 7 つの場札にカードを配る。リスタートでも同じものを使う。
#[derive(Default)]
pub struct DealInitialCardsSystem;

impl DealInitialCardsSystem {
    /// `deck_order` の順にカードを配るよ。
    ///
    /// 1. 全部の山を空にして、全カードを裏向きに戻す。
    /// 2. 場札 i (0..7) に i+1 枚ずつ下から積み、一番上だけ表にする。
    /// 3. 残り 24 枚を順番どおり裏向きで山札へ。
    ///
    /// `deck_order` が 52 枚の異なるカードじゃなければ、何も触らずにエラーを返す。
    pub fn execute(
        &self,
        world: &mut World,
        deck_order: &[CardId],
        events: &mut Vec<GameEvent>,
    ) -> Result<(), EngineError> {
        validate_deck_order(world, deck_order)?;

        world.clear();
        let mut cards = deck_order.iter().copied();

        for tableau_index in 0..TABLEAU_COUNT {
            let pile = PileId::tableau(tableau_index);
            for _ in 0..=tableau_index {
                // 検証済みなので足りなくなることはない
                if let Some(card) = cards.next() {
                    world.place(card, pile);
                }
            }
            if let Some(top) = world.pile(pile).and_then(|p| p.top()) {
                world.set_face_up(top, true);
                events.push(GameEvent::CardFlipped { card: top, face_down: false });
            }
        }

        let mut stock_count = 0;
        for card in cards {
            world.place(card, PileId::STOCK);
            stock_count += 1;
        }
        info!("Dealt {} cards to the tableau and {} to the stock.", DECK_SIZE - stock_count, stock_count);

        events.push(GameEvent::Dealt);
        Ok(())
    }
}

fn validate_deck_order(world: &World, deck_order: &[CardId]) -> Result<(), EngineError> {
    if deck_order.len() != DECK_SIZE {
        return Err(EngineError::WrongDeckSize { expected: DECK_SIZE, actual: deck_order.len() });
    }
    if let Some(&unknown) = deck_order.iter().find(|&&id| world.card(id).is_none()) {
        return Err(EngineError::UnknownCard(unknown));
    }
    if !deck_order.iter().all_unique() {
        return Err(EngineError::DuplicateCard);
    }
    Ok(())
}
