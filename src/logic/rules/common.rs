//! ルール判定で共通して使うヘルパー。

use crate::components::card::Suit;

/// カードの色（赤か黒か）を表すヘルパーenumだよ。
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CardColor {
    Red,
    Black,
}

impl CardColor {
    /// スートからカードの色を取得する関数。
    pub fn from_suit(suit: Suit) -> Self {
        match suit {
            Suit::Heart | Suit::Diamond => CardColor::Red,
            Suit::Club | Suit::Spade => CardColor::Black,
        }
    }
}

/// 2 つのスートの色が違うか。
pub fn is_opposite_color(a: Suit, b: Suit) -> bool {
    CardColor::from_suit(a) != CardColor::from_suit(b)
}
