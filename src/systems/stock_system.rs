// src/systems/stock_system.rs
//! Handles clicks on the Stock pile (dealing to Waste, resetting Waste).

use log::info;

use crate::components::stack::PileId;
use crate::logic::rules::stock_waste;
use crate::protocol::GameEvent;
use crate::world::World;

/// Deals one card from the Stock pile to the Waste pile, face up.
/// Returns true if a card was dealt, false when the stock is empty.
pub fn draw_from_stock(world: &mut World, events: &mut Vec<GameEvent>) -> bool {
    let stock_is_empty = world.stock().map_or(true, |p| p.is_empty());
    if !stock_waste::can_deal_from_stock(stock_is_empty) {
        info!("Stock is empty. Cannot deal.");
        return false;
    }

    let Some(card) = world.pop_top(PileId::STOCK) else {
        return false;
    };
    world.place(card, PileId::WASTE);
    world.set_face_up(card, true);
    if let Some(data) = world.card(card) {
        info!("Placed {} to the waste.", data);
    }

    events.push(GameEvent::CardDrawn { card });
    events.push(GameEvent::CardFlipped { card, face_down: false });
    true
}

/// Moves every Waste card back to the Stock, face down, keeping their relative order.
/// Only allowed while the stock is empty and the waste is not.
/// Returns true if the reset was performed.
pub fn recycle_waste_to_stock(world: &mut World, events: &mut Vec<GameEvent>) -> bool {
    let stock_is_empty = world.stock().map_or(true, |p| p.is_empty());
    let waste_is_empty = world.waste().map_or(true, |p| p.is_empty());
    if !stock_waste::can_reset_stock_from_waste(stock_is_empty, waste_is_empty) {
        info!("Cannot reset Waste to Stock (Stock not empty or Waste empty).");
        return false;
    }

    let cards = world.take_all(PileId::WASTE);
    world.place_all(&cards, PileId::STOCK);
    for &card in &cards {
        world.set_face_up(card, false);
        events.push(GameEvent::CardFlipped { card, face_down: true });
    }
    info!("Stock refilled from discard pile ({} cards).", cards.len());

    events.push(GameEvent::StockRefilled);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{CardId, Rank, Suit};
    use crate::components::stack::StackType;
    use crate::test_support::{empty_world, put};

    #[test]
    fn draw_moves_stock_top_to_waste_face_up() {
        let mut world = empty_world();
        let bottom = put(&mut world, Suit::Club, Rank::Two, StackType::Stock, false);
        let top = put(&mut world, Suit::Heart, Rank::Nine, StackType::Stock, false);
        let mut events = Vec::new();

        assert!(draw_from_stock(&mut world, &mut events));

        assert_eq!(world.stock().unwrap().cards(), &[bottom]);
        assert_eq!(world.waste().unwrap().top(), Some(top));
        let card = world.card(top).unwrap();
        assert!(card.is_face_up);
        assert_eq!(card.pile, Some(PileId::WASTE));
        assert_eq!(
            events,
            vec![
                GameEvent::CardDrawn { card: top },
                GameEvent::CardFlipped { card: top, face_down: false },
            ]
        );
    }

    #[test]
    fn draw_from_empty_stock_is_a_no_op() {
        let mut world = empty_world();
        put(&mut world, Suit::Club, Rank::Two, StackType::Waste, true);
        let mut events = Vec::new();

        assert!(!draw_from_stock(&mut world, &mut events));
        assert!(events.is_empty());
        assert_eq!(world.waste().unwrap().len(), 1);
    }

    #[test]
    fn recycle_preserves_waste_order() {
        let mut world = empty_world();
        let waste: Vec<CardId> = [Rank::Three, Rank::Seven, Rank::Jack]
            .into_iter()
            .map(|rank| put(&mut world, Suit::Spade, rank, StackType::Waste, true))
            .collect();
        let mut events = Vec::new();

        assert!(recycle_waste_to_stock(&mut world, &mut events));

        assert!(world.waste().unwrap().is_empty());
        assert_eq!(world.stock().unwrap().cards(), waste.as_slice());
        assert!(waste.iter().all(|&c| world.card(c).unwrap().is_face_down()));
        assert!(waste.iter().all(|&c| world.card(c).unwrap().pile == Some(PileId::STOCK)));
        assert_eq!(events.last(), Some(&GameEvent::StockRefilled));
    }

    #[test]
    fn recycle_needs_an_empty_stock() {
        let mut world = empty_world();
        put(&mut world, Suit::Spade, Rank::Ace, StackType::Stock, false);
        put(&mut world, Suit::Spade, Rank::Two, StackType::Waste, true);
        let mut events = Vec::new();

        assert!(!recycle_waste_to_stock(&mut world, &mut events));
        assert_eq!(world.waste().unwrap().len(), 1);

        let mut world = empty_world();
        assert!(!recycle_waste_to_stock(&mut world, &mut events), "両方空なら何もしない");
        assert!(events.is_empty());
    }

    #[test]
    fn draw_and_recycle_cycle_is_deterministic() {
        let mut world = empty_world();
        for rank in [Rank::Ace, Rank::Two, Rank::Three] {
            put(&mut world, Suit::Diamond, rank, StackType::Stock, false);
        }
        let initial = world.stock().unwrap().cards().to_vec();
        let mut events = Vec::new();

        while draw_from_stock(&mut world, &mut events) {}
        assert!(recycle_waste_to_stock(&mut world, &mut events));
        let first_cycle = world.stock().unwrap().cards().to_vec();

        while draw_from_stock(&mut world, &mut events) {}
        assert!(recycle_waste_to_stock(&mut world, &mut events));
        let second_cycle = world.stock().unwrap().cards().to_vec();

        // 捨て札はめくった順に積まれるので、一巡すると山札の並びは逆になる
        let mut reversed = initial.clone();
        reversed.reverse();
        assert_eq!(first_cycle, reversed);
        assert_eq!(second_cycle, initial);
    }
}
