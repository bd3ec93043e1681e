//! ゲームの勝利条件判定ロジックを定義するよ。

use crate::components::card::{Card, Rank};

/// 一番上が K になっている組札の数を数える。
pub fn count_completed_foundations<'a>(foundation_tops: impl IntoIterator<Item = Option<&'a Card>>) -> usize {
    foundation_tops
        .into_iter()
        .filter(|top| top.map_or(false, |card| card.rank == Rank::King))
        .count()
}

/// 完成した組札の数が閾値に達していれば勝ち。
pub fn check_win_condition(completed_foundations: usize, threshold: usize) -> bool {
    completed_foundations >= threshold
}
