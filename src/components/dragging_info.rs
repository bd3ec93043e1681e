// src/components/dragging_info.rs

use serde::{Deserialize, Serialize};

use crate::components::card::CardId;
use crate::components::position::Position;
use crate::components::stack::PileId;

/// ドラッグ中のカードに関する情報だよ！🖱️➡️🃏
/// ジェスチャーとジェスチャーの間は存在しない (セッション側で `None`)。
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DraggingInfo {
    /// 掴んだカード (run の一番下)
    pub card: CardId,
    /// 掴んだ時にカードがいた山
    pub source: PileId,
    /// 一緒に動くカードたち。下から上の順で、先頭が `card`。
    pub run: Vec<CardId>,
    /// ドラッグ開始前のカード左上の位置 (スライドバック先)
    pub original: Position,
    /// 最後に UI から報告されたカード左上の位置
    pub current: Position,
}

impl DraggingInfo {
    pub fn new(card: CardId, source: PileId, run: Vec<CardId>, original: Position) -> Self {
        Self { card, source, run, original, current: original }
    }
}
