// src/error.rs
//! エンジンのエラー型。
//!
//! プレイヤーの不正な移動はエラーじゃなくて「却下」イベントになる。
//! ここに来るのは呼び出し側のバグ (セットアップミスとか) だけだよ。

use std::fmt;

use crate::components::card::CardId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// デッキが 52 枚じゃない
    WrongDeckSize { expected: usize, actual: usize },
    /// 同じカード (または同じスートとランク) が 2 回出てきた
    DuplicateCard,
    /// 存在しないカード ID
    UnknownCard(CardId),
    /// ドラッグしてないのにドロップされた
    NoActiveDrag,
    /// 掴んだカードと違うカードがドラッグ/ドロップされた
    DragMismatch { dragging: CardId, got: CardId },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::WrongDeckSize { expected, actual } => {
                write!(f, "deck must contain {} cards, got {}", expected, actual)
            }
            EngineError::DuplicateCard => f.write_str("deck contains duplicate cards"),
            EngineError::UnknownCard(card) => write!(f, "unknown card id {}", card.0),
            EngineError::NoActiveDrag => f.write_str("drop without an active drag"),
            EngineError::DragMismatch { dragging, got } => write!(
                f,
                "card {} is being dragged, but the gesture referenced card {}",
                dragging.0, got.0
            ),
        }
    }
}

impl std::error::Error for EngineError {}
