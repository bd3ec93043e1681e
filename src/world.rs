// src/world.rs
//! ゲーム世界の全カードと全部の山を持つ World だよ！🌍
//!
//! カードは 52 枚を一度だけ作って配列に入れておき、`CardId` (配列の添字) で指す。
//! 山はカード ID の並びを所有していて、カード側は今いる山の `PileId` をメモするだけ。
//! 山とカードの両方を書き換える操作は全部ここを通すので、逆参照がずれない。

use log::warn;

use crate::components::card::{Card, CardId, Rank, Suit};
use crate::components::stack::{Pile, PileId, StackType, FOUNDATION_COUNT, TABLEAU_COUNT};
use crate::config::layout::{FOUNDATION_GAP, STOCK_GAP, TABLEAU_GAP};
use crate::error::EngineError;
use crate::logic::deck::validate_deck;

#[derive(Debug, Clone)]
pub struct World {
    cards: Vec<Card>,
    piles: Vec<Pile>,
}

impl World {
    /// デッキから World を作る。デッキの並び順がそのまま `CardId` になる。
    /// 52 枚の一意なカードじゃなければエラー。
    pub fn new(deck: Vec<Card>) -> Result<Self, EngineError> {
        validate_deck(&deck)?;
        let mut cards = deck;
        for card in cards.iter_mut() {
            card.pile = None;
            card.is_face_up = false;
        }
        Ok(Self { cards, piles: create_piles() })
    }

    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.get(id.0)
    }

    /// カードを引く。無ければ `UnknownCard` エラー。
    pub fn try_card(&self, id: CardId) -> Result<&Card, EngineError> {
        self.card(id).ok_or(EngineError::UnknownCard(id))
    }

    /// スートとランクからカード ID を探す。
    pub fn find_card(&self, suit: Suit, rank: Rank) -> Option<CardId> {
        self.cards
            .iter()
            .position(|card| card.suit == suit && card.rank == rank)
            .map(CardId)
    }

    pub fn card_ids(&self) -> impl Iterator<Item = CardId> + '_ {
        (0..self.cards.len()).map(CardId)
    }

    pub fn pile(&self, id: PileId) -> Option<&Pile> {
        self.piles.get(id.0)
    }

    pub fn piles(&self) -> &[Pile] {
        &self.piles
    }

    pub fn pile_of(&self, stack_type: StackType) -> Option<&Pile> {
        self.pile(PileId::of(stack_type))
    }

    pub fn stock(&self) -> Option<&Pile> {
        self.pile(PileId::STOCK)
    }

    pub fn waste(&self) -> Option<&Pile> {
        self.pile(PileId::WASTE)
    }

    pub fn tableau_piles(&self) -> impl Iterator<Item = &Pile> + '_ {
        self.piles.iter().filter(|pile| pile.stack_type.is_tableau())
    }

    pub fn foundation_piles(&self) -> impl Iterator<Item = &Pile> + '_ {
        self.piles.iter().filter(|pile| pile.stack_type.is_foundation())
    }

    /// 山の一番上のカード。空なら None。
    pub fn top_card(&self, pile: PileId) -> Option<&Card> {
        self.pile(pile)?.top().and_then(|id| self.card(id))
    }

    /// カードが今いる山。
    pub fn pile_containing(&self, card: CardId) -> Option<&Pile> {
        self.card(card)?.pile.and_then(|id| self.pile(id))
    }

    /// カードを山の一番上に積む。カード側の逆参照も更新するよ。
    pub(crate) fn place(&mut self, card: CardId, pile: PileId) {
        let Some(target) = self.piles.get_mut(pile.0) else {
            warn!("place: pile {:?} does not exist", pile);
            return;
        };
        target.push(card);
        if let Some(card) = self.cards.get_mut(card.0) {
            card.pile = Some(pile);
        }
    }

    /// 山の `index` から上を全部取り出す (順番はそのまま)。
    pub(crate) fn take_from(&mut self, pile: PileId, index: usize) -> Vec<CardId> {
        match self.piles.get_mut(pile.0) {
            Some(source) if index <= source.len() => source.split_off(index),
            _ => Vec::new(),
        }
    }

    pub(crate) fn pop_top(&mut self, pile: PileId) -> Option<CardId> {
        self.piles.get_mut(pile.0)?.pop()
    }

    pub(crate) fn take_all(&mut self, pile: PileId) -> Vec<CardId> {
        self.piles.get_mut(pile.0).map(Pile::take_all).unwrap_or_default()
    }

    /// 複数のカードを順番を保ったまま山に積む。
    pub(crate) fn place_all(&mut self, cards: &[CardId], pile: PileId) {
        for &card in cards {
            self.place(card, pile);
        }
    }

    pub(crate) fn set_face_up(&mut self, card: CardId, face_up: bool) {
        if let Some(card) = self.cards.get_mut(card.0) {
            card.is_face_up = face_up;
        }
    }

    /// 全部の山を空にして、カードを全部裏向きに戻す。配り直しの前に呼ぶ。
    pub(crate) fn clear(&mut self) {
        for pile in self.piles.iter_mut() {
            pile.take_all();
        }
        for card in self.cards.iter_mut() {
            card.pile = None;
            card.is_face_up = false;
        }
    }
}

/// 13 個の山を ID 順に作る。
fn create_piles() -> Vec<Pile> {
    let mut piles = vec![
        Pile::new(StackType::Stock, "Stock", STOCK_GAP),
        Pile::new(StackType::Waste, "Discard", STOCK_GAP),
    ];
    piles.extend(
        (0..FOUNDATION_COUNT)
            .map(|i| Pile::new(StackType::Foundation(i), format!("Foundation {}", i), FOUNDATION_GAP)),
    );
    piles.extend(
        (0..TABLEAU_COUNT)
            .map(|i| Pile::new(StackType::Tableau(i), format!("Tableau {}", i), TABLEAU_GAP)),
    );
    piles
}
