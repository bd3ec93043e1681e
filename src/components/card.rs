// src/components/card.rs

use std::fmt;

// serde を使う宣言！カード情報を UI 側に JSON で渡すときに使うよ。
use serde::{Deserialize, Serialize};

use crate::components::stack::PileId;

/// カードのスート（マーク）を表す列挙型だよ！❤️♦️♣️♠️
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Heart,
    Diamond,
    Spade,
    Club,
}

/// カードのランク（数字）。A は 1、K は 13 として扱うよ。
///
/// PartialOrd, Ord も付けて、ランクの大小比較 (`<`, `>`) もできるようにしておく！
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace = 1,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

/// 全スート。デッキを作るときにループで使う。
pub const ALL_SUITS: [Suit; 4] = [Suit::Heart, Suit::Diamond, Suit::Spade, Suit::Club];

/// 全ランク (A から K まで)。
pub const ALL_RANKS: [Rank; 13] = [
    Rank::Ace,
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
];

impl Rank {
    /// 数値 (1..=13) としてのランク。
    pub fn value(self) -> u8 {
        self as u8
    }

    /// 数値からランクに戻す。範囲外なら None。
    pub fn from_value(value: u8) -> Option<Rank> {
        ALL_RANKS.get(usize::from(value).checked_sub(1)?).copied()
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Suit::Heart => "Hearts",
            Suit::Diamond => "Diamonds",
            Suit::Spade => "Spades",
            Suit::Club => "Clubs",
        };
        f.write_str(name)
    }
}

/// 52 枚の中でカードを一意に指す ID だよ。World のカード配列のインデックスそのもの。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub usize);

/// カードそのもの！🃏
///
/// - `suit`, `rank`: カードの種類
/// - `is_face_up`: 表向きなら true
/// - `pile`: 今このカードが入っている山の ID。山がカードを所有していて、
///   カード側はどこにいるかをメモしているだけ (弱い逆参照)。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
    pub is_face_up: bool,
    pub pile: Option<PileId>,
}

impl Card {
    /// 裏向きで、まだどの山にも入っていないカードを作る。
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank, is_face_up: false, pile: None }
    }

    pub fn is_face_down(&self) -> bool {
        !self.is_face_up
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} of {}", self.rank, self.suit)
    }
}
