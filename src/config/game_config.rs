// src/config/game_config.rs
//! 実行時に変えられるゲーム設定。JSON から読めるようにしておくよ。

use serde::{Deserialize, Serialize};

use crate::components::stack::FOUNDATION_COUNT;

/// 勝利に必要な「一番上が K になった組札」の数のデフォルト。
/// 4 つ全部じゃなくて 3 つで勝ち。全部揃えたいなら設定で 4 にする。
pub const DEFAULT_WIN_FOUNDATION_THRESHOLD: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// 一番上が K の組札がこの数以上になったら勝ち。
    pub win_foundation_threshold: usize,
    /// シャッフルのシード。None ならエントロピーから作る。
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            win_foundation_threshold: DEFAULT_WIN_FOUNDATION_THRESHOLD,
            seed: None,
        }
    }
}

impl GameConfig {
    /// JSON 文字列から設定を読む。書かれてない項目はデフォルト値になる。
    /// 閾値は 1..=4 に丸める (0 だと配った瞬間に勝っちゃうからね)。
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut config: GameConfig = serde_json::from_str(json)?;
        config.win_foundation_threshold = config
            .win_foundation_threshold
            .clamp(1, usize::from(FOUNDATION_COUNT));
        Ok(config)
    }

    pub fn with_seed(seed: u64) -> Self {
        Self { seed: Some(seed), ..Self::default() }
    }
}
