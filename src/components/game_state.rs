// src/components/game_state.rs

use serde::{Deserialize, Serialize};

/// ゲーム全体の現在の状態を表す列挙型だよ！🏆
///
/// `Dealing → Playing → Won → (restart) → Dealing` の順に進む。
/// 不正な移動は弾かれるだけで、状態は Playing のまま。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// カードを配っている最中
    Dealing,
    /// ゲームが進行中
    Playing,
    /// 勝利！ restart か quit を待ってる
    Won,
}

impl GameStatus {
    /// 移動系のインテントを受け付ける状態かどうか。
    pub fn accepts_moves(self) -> bool {
        self == GameStatus::Playing
    }
}
