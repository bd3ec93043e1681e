//! 組札 (Foundation) へのカード移動ルールを定義するよ。

use log::debug;

use crate::components::card::{Card, Rank};

/// カードを組札に置けるかチェックする。
///
/// * 組札が空なら A だけ置ける (どのスートでも、最初の A でその組札のスートが決まる)。
/// * そうでなければ、一番上と同じスートで、ランクがちょうど 1 つ上なら OK。
pub fn can_move_to_foundation(card: &Card, target_top: Option<&Card>) -> bool {
    let result = match target_top {
        None => card.rank == Rank::Ace,
        Some(top) => card.suit == top.suit && card.rank.value() == top.rank.value() + 1,
    };
    debug!(
        "[Foundation Rule] {} onto {}: {}",
        card,
        target_top.map_or_else(|| "empty foundation".to_string(), ToString::to_string),
        result
    );
    result
}
