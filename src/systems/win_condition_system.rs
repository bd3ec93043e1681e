// src/systems/win_condition_system.rs

use log::info;

use crate::components::stack::FOUNDATION_COUNT;
use crate::config::game_config::DEFAULT_WIN_FOUNDATION_THRESHOLD;
use crate::logic::rules::{check_win_condition, count_completed_foundations};
use crate::world::World;

/// ゲームの勝利条件をチェックするシステムだよ！🏆🎉
///
/// 一番上が K になっている組札を数えて、閾値に届いていれば勝ち。
/// 既定の閾値は 3 (4 つ全部じゃなくても勝ちになる)。設定で 4 にもできる。
#[derive(Debug, Clone, Copy)]
pub struct WinConditionSystem {
    threshold: usize,
}

impl Default for WinConditionSystem {
    fn default() -> Self {
        Self::new(DEFAULT_WIN_FOUNDATION_THRESHOLD)
    }
}

impl WinConditionSystem {
    /// 閾値は 1..=4 に丸める。0 だと何もしなくても勝ち、5 以上だと絶対に勝てないからね。
    pub fn new(threshold: usize) -> Self {
        Self { threshold: threshold.clamp(1, usize::from(FOUNDATION_COUNT)) }
    }

    /// 今の盤面が勝ちかどうか。
    pub fn is_won(&self, world: &World) -> bool {
        let tops = world.foundation_piles().map(|pile| world.top_card(pile.id));
        let completed = count_completed_foundations(tops);
        let won = check_win_condition(completed, self.threshold);
        if won {
            info!("{} of 4 foundations completed, game won!", completed);
        }
        won
    }
}
