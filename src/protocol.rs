// src/protocol.rs

// このファイルは、エンジンと表示側 (UI) の間でやり取りするメッセージの形式を定義するよ！💌
// UI → エンジン が `Intent`、エンジン → UI が `GameEvent`。
// どっちも serde で JSON にできるので、wasm の境界をそのまま越えられる。
use serde::{Deserialize, Serialize};

use crate::components::card::{CardId, Rank, Suit};
use crate::components::game_state::GameStatus;
use crate::components::stack::{PileId, StackType};
use crate::world::World;

// --- UI からエンジンへ送るインテント ---

/// プレイヤーの操作。セッションの `dispatch` がこれを 1 つずつ処理する。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type")]
pub enum Intent {
    /// カードを掴んだ (ドラッグ開始)
    LiftCard { card: CardId },
    /// ドラッグ中。カード左上の現在位置を知らせる (見た目用、状態は変えない)
    DragTo { card: CardId, x: f32, y: f32 },
    /// カードを離した
    DropCard { card: CardId },
    /// 山札をクリックした (1 枚めくる)
    ClickStock,
    /// 空の山札をクリックした (捨て札を戻す)
    ClickEmptyStock,
    /// ダブルクリック。置ける組札があれば自動で移動する
    AutoMoveToFoundation { card: CardId },
    /// 配り直し
    Restart,
    /// ゲームをやめる
    Quit,
}

// --- エンジンから UI へ送るイベント ---

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// 配り終わった
    Dealt,
    /// ドラッグ開始を受け付けなかった (裏向き、山札など)
    LiftRejected { card: CardId },
    /// 移動成功。`run` は下から上の順で `destination` に積まれた
    MoveAccepted { run: Vec<CardId>, destination: PileId },
    /// 移動失敗。カードは元の場所にスライドして戻る
    MoveRejected { run: Vec<CardId> },
    /// カードの向きが変わった
    CardFlipped { card: CardId, face_down: bool },
    /// 山札から捨て札に 1 枚めくった
    CardDrawn { card: CardId },
    /// 捨て札が山札に戻った
    StockRefilled,
    /// 勝利！🏆
    Won,
    /// 終了が要求された
    QuitRequested,
}

// --- 盤面のスナップショット (描画用) ---

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CardData {
    pub id: CardId,
    pub suit: Suit,
    pub rank: Rank,
    pub is_face_up: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PileData {
    pub id: PileId,
    pub stack_type: StackType,
    pub name: String,
    /// 下から上の順
    pub cards: Vec<CardData>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    pub status: GameStatus,
    pub piles: Vec<PileData>,
}

impl GameSnapshot {
    pub fn capture(world: &World, status: GameStatus) -> Self {
        let piles = world
            .piles()
            .iter()
            .map(|pile| PileData {
                id: pile.id,
                stack_type: pile.stack_type,
                name: pile.name.clone(),
                cards: pile
                    .cards()
                    .iter()
                    .filter_map(|&id| {
                        world.card(id).map(|card| CardData {
                            id,
                            suit: card.suit,
                            rank: card.rank,
                            is_face_up: card.is_face_up,
                        })
                    })
                    .collect(),
            })
            .collect();
        Self { status, piles }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intents_use_a_type_tag() {
        let intent: Intent = serde_json::from_str(r#"{"type":"LiftCard","card":12}"#).unwrap();
        assert_eq!(intent, Intent::LiftCard { card: CardId(12) });

        let intent: Intent = serde_json::from_str(r#"{"type":"ClickStock"}"#).unwrap();
        assert_eq!(intent, Intent::ClickStock);
    }

    #[test]
    fn events_serialize_with_a_type_tag() {
        let event = GameEvent::CardFlipped { card: CardId(3), face_down: false };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "CardFlipped");
        assert_eq!(json["card"], 3);
        assert_eq!(json["face_down"], false);
    }
}
