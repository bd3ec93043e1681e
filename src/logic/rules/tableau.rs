//! 場札 (Tableau) へのカード移動ルールを定義するよ。

use log::debug;

use crate::components::card::{Card, Rank};

use super::common::is_opposite_color;

/// カードを場札に置けるかチェックする。
///
/// * 場札が空なら K だけ置ける。
/// * そうでなければ、一番上のカードと色が違って、ランクがちょうど 1 つ下なら OK。
pub fn can_move_to_tableau(card: &Card, target_top: Option<&Card>) -> bool {
    match target_top {
        None => {
            let is_king = card.rank == Rank::King;
            debug!("[Tableau Rule] {} onto empty tableau. Is King: {}", card, is_king);
            is_king
        }
        Some(top) => {
            let colors_different = is_opposite_color(card.suit, top.suit);
            let rank_is_one_less = card.rank.value() + 1 == top.rank.value();
            debug!(
                "[Tableau Rule] {} onto {}. Colors different: {}. Rank is one less: {}.",
                card, top, colors_different, rank_is_one_less
            );
            colors_different && rank_is_one_less
        }
    }
}
