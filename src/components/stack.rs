// src/components/stack.rs

use serde::{Deserialize, Serialize};

use crate::components::card::CardId;

/// カードが置かれる場所の種類を示す Enum だよ。
/// 山札にあるのか、場札の何列目にあるのか、などを区別する。
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StackType {
    /// 山札 (Stock)。裏向きのカードが積まれてる。
    Stock,
    /// 山札からめくったカードを置く場所 (Waste、捨て札)。
    Waste,
    /// 組札 (Foundation)。4 つあるので番号 (0-3) を持つ。
    Foundation(u8),
    /// 場札 (Tableau)。7 列あるので列番号 (0-6) を持つ。
    Tableau(u8),
}

impl StackType {
    pub fn is_tableau(self) -> bool {
        matches!(self, StackType::Tableau(_))
    }

    pub fn is_foundation(self) -> bool {
        matches!(self, StackType::Foundation(_))
    }
}

pub const FOUNDATION_COUNT: u8 = 4;
pub const TABLEAU_COUNT: u8 = 7;
/// 山の総数 (山札 1 + 捨て札 1 + 組札 4 + 場札 7)。
pub const PILE_COUNT: usize = 2 + FOUNDATION_COUNT as usize + TABLEAU_COUNT as usize;

/// 山を一意に指す ID。World の山配列のインデックスだよ。
/// 0: 山札, 1: 捨て札, 2..=5: 組札, 6..=12: 場札 の順に並べる約束。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PileId(pub usize);

impl PileId {
    pub const STOCK: PileId = PileId(0);
    pub const WASTE: PileId = PileId(1);

    pub fn foundation(index: u8) -> PileId {
        PileId(2 + usize::from(index))
    }

    pub fn tableau(index: u8) -> PileId {
        PileId(2 + usize::from(FOUNDATION_COUNT) + usize::from(index))
    }

    /// StackType から ID を引く。StackType と PileId は 1 対 1 対応。
    pub fn of(stack_type: StackType) -> PileId {
        match stack_type {
            StackType::Stock => PileId::STOCK,
            StackType::Waste => PileId::WASTE,
            StackType::Foundation(i) => PileId::foundation(i),
            StackType::Tableau(i) => PileId::tableau(i),
        }
    }
}

/// カードの山そのもの。カードの並び (下から上へ) を所有してるのはこっち！
///
/// `gap` はカードを扇状にずらして並べるときの縦方向のオフセット。
/// 見た目の話だけど、ドロップ先の当たり判定で使うので持っておくよ。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pile {
    pub id: PileId,
    pub stack_type: StackType,
    pub name: String,
    pub gap: f32,
    cards: Vec<CardId>,
}

impl Pile {
    pub fn new(stack_type: StackType, name: impl Into<String>, gap: f32) -> Self {
        Self {
            id: PileId::of(stack_type),
            stack_type,
            name: name.into(),
            gap,
            cards: Vec::new(),
        }
    }

    pub fn cards(&self) -> &[CardId] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn top(&self) -> Option<CardId> {
        self.cards.last().copied()
    }

    pub fn position_of(&self, card: CardId) -> Option<usize> {
        self.cards.iter().position(|&c| c == card)
    }

    // 以下の変更系は World 経由でだけ呼ぶ。カード側の `pile` の更新とセットじゃないと
    // 逆参照がずれちゃうからね。
    pub(crate) fn push(&mut self, card: CardId) {
        self.cards.push(card);
    }

    pub(crate) fn pop(&mut self) -> Option<CardId> {
        self.cards.pop()
    }

    /// `index` から上を全部切り離して返す。順番はそのまま。
    pub(crate) fn split_off(&mut self, index: usize) -> Vec<CardId> {
        self.cards.split_off(index)
    }

    pub(crate) fn take_all(&mut self) -> Vec<CardId> {
        std::mem::take(&mut self.cards)
    }

    #[cfg(test)]
    pub(crate) fn extend(&mut self, cards: impl IntoIterator<Item = CardId>) {
        self.cards.extend(cards);
    }
}
