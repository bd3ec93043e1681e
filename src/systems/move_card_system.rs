// src/systems/move_card_system.rs

use log::{debug, info};

use crate::components::card::CardId;
use crate::components::dragging_info::DraggingInfo;
use crate::components::position::Rect;
use crate::components::stack::{PileId, StackType};
use crate::logic::layout::drop_target_rect;
use crate::logic::rules;
use crate::protocol::GameEvent;
use crate::world::World;

/// ドロップの結果。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// 移動した。勝利判定が要るかどうかは `destination` の種類で決まる
    Accepted { destination: PileId },
    /// 置ける場所がなかった。World は何も変わってない
    Rejected,
}

/// カード移動のロジックを実行するシステムだよ！🖱️💨
///
/// 掴んだカードから一緒に動くカードの列 (run) を決めて、
/// 重なってる山の中からルール上置ける山を探し、見つかれば丸ごと移動する。
#[derive(Default)]
pub struct MoveCardSystem;

impl MoveCardSystem {
    /// 掴んだカードと一緒に動くカードたちを返す (下から上の順、先頭が `card`)。
    /// 掴めないカードなら None。
    ///
    /// 場札なら掴んだカードから一番上まで全部。捨て札と組札は一番上の 1 枚だけ。
    pub fn select_run(&self, world: &World, card: CardId) -> Option<Vec<CardId>> {
        if !rules::is_liftable(world, card) {
            return None;
        }
        let pile = world.pile_containing(card)?;
        let index = pile.position_of(card)?;
        Some(pile.cards()[index..].to_vec())
    }

    /// ドロップ先を探す。
    ///
    /// 場札 → 組札 の順にグループごとに見ていき、各山について
    /// 移動元じゃない、一番上のカード (空なら空きスロット) と重なってる、ルール上置ける、
    /// の 3 つを満たすかチェックする。グループの中では最後に見つかった山が勝ち。
    /// 場札で 1 つでも見つかったら組札は見ない。
    /// 組札に積めるのは 1 枚ずつなので、`run_len` が 2 以上なら組札は候補にならない。
    pub fn find_destination(
        &self,
        world: &World,
        card: CardId,
        run_len: usize,
        source: PileId,
        card_rect: &Rect,
    ) -> Option<PileId> {
        let qualifies = |pile_id: PileId| {
            pile_id != source
                && world.pile(pile_id).map_or(false, |pile| drop_target_rect(pile).intersects(card_rect))
                && rules::can_place(world, card, pile_id)
        };

        let last_in = |piles: Vec<PileId>| piles.into_iter().filter(|&id| qualifies(id)).last();

        let tableau: Vec<PileId> = world.tableau_piles().map(|p| p.id).collect();
        let foundation: Vec<PileId> = world.foundation_piles().map(|p| p.id).collect();
        last_in(tableau).or_else(|| if run_len == 1 { last_in(foundation) } else { None })
    }

    /// ドラッグを離した時の処理本体。
    ///
    /// run は掴んだ時のものを信用せず、その場で選び直す (掴んでる間に山札をめくられても大丈夫なように)。
    pub fn resolve_drop(&self, world: &mut World, drag: &DraggingInfo, events: &mut Vec<GameEvent>) -> MoveOutcome {
        let run = match self.select_run(world, drag.card) {
            Some(run) if world.card(drag.card).and_then(|c| c.pile) == Some(drag.source) => run,
            _ => {
                debug!("Drag of {:?} is stale, rejecting.", drag.card);
                events.push(GameEvent::MoveRejected { run: drag.run.clone() });
                return MoveOutcome::Rejected;
            }
        };

        let card_rect = drag.current.card_rect();
        match self.find_destination(world, drag.card, run.len(), drag.source, &card_rect) {
            Some(destination) => {
                self.apply_move(world, &run, drag.source, destination, events);
                MoveOutcome::Accepted { destination }
            }
            None => {
                debug!("No valid pile under {:?}, sliding back.", drag.card);
                events.push(GameEvent::MoveRejected { run });
                MoveOutcome::Rejected
            }
        }
    }

    /// run を移動元から取り外して、移動先に同じ順番で積む。
    /// 移動元が場札なら、新しく一番上になったカードを表にする。
    pub fn apply_move(
        &self,
        world: &mut World,
        run: &[CardId],
        source: PileId,
        destination: PileId,
        events: &mut Vec<GameEvent>,
    ) {
        let Some(&first) = run.first() else {
            return;
        };
        let Some(index) = world.pile(source).and_then(|p| p.position_of(first)) else {
            return;
        };

        log_placement(world, first, destination);

        let moved = world.take_from(source, index);
        world.place_all(&moved, destination);
        events.push(GameEvent::MoveAccepted { run: moved, destination });

        reveal_underlying_card_if_needed(world, source, events);
    }
}

/// 移動元が場札で、一番上が裏向きならそれを表にする。
fn reveal_underlying_card_if_needed(world: &mut World, source: PileId, events: &mut Vec<GameEvent>) {
    let Some(pile) = world.pile(source) else {
        return;
    };
    if !pile.stack_type.is_tableau() {
        return;
    }
    let Some(top) = pile.top() else {
        debug!("{} is now empty, nothing to reveal.", pile.name);
        return;
    };
    if world.card(top).map_or(false, |c| c.is_face_down()) {
        world.set_face_up(top, true);
        debug!("Revealed {:?} on {:?}", top, source);
        events.push(GameEvent::CardFlipped { card: top, face_down: false });
    }
}

fn log_placement(world: &World, card: CardId, destination: PileId) {
    let (Some(card), Some(pile)) = (world.card(card), world.pile(destination)) else {
        return;
    };
    match (world.top_card(destination), pile.stack_type) {
        (None, StackType::Foundation(_)) => info!("Placed {} to the foundation.", card),
        (None, _) => info!("Placed {} to a new pile.", card),
        (Some(top), _) => info!("Placed {} to {}.", card, top),
    }
}
