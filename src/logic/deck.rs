// src/logic/deck.rs

use itertools::{iproduct, Itertools};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::components::card::{Card, ALL_RANKS, ALL_SUITS};
use crate::error::EngineError;

/// 1 セットのカード枚数。
pub const DECK_SIZE: usize = 52;

/// 標準的な 52 枚のデッキを作る関数だよ！🃏
/// スート順・ランク順に並んでいて、全部裏向き。
pub fn create_standard_deck() -> Vec<Card> {
    iproduct!(ALL_SUITS, ALL_RANKS)
        .map(|(suit, rank)| Card::new(suit, rank))
        .collect()
}

/// スライスをシャッフルする。乱数生成器は外から渡すので、シード固定でテストできる！
pub fn shuffle_deck<T, R: Rng + ?Sized>(deck: &mut [T], rng: &mut R) {
    deck.shuffle(rng);
}

/// シャッフル済みのデッキを作る。
pub fn create_shuffled_deck<R: Rng + ?Sized>(rng: &mut R) -> Vec<Card> {
    let mut deck = create_standard_deck();
    shuffle_deck(&mut deck, rng);
    deck
}

/// デッキがちょうど 52 枚で、(スート, ランク) が全部違うかチェックする。
pub fn validate_deck(deck: &[Card]) -> Result<(), EngineError> {
    if deck.len() != DECK_SIZE {
        return Err(EngineError::WrongDeckSize { expected: DECK_SIZE, actual: deck.len() });
    }
    if !deck.iter().map(|card| (card.suit, card.rank)).all_unique() {
        return Err(EngineError::DuplicateCard);
    }
    Ok(())
}
