// src/app/game_session.rs
//! 1 回ぶんのゲームを持つセッション。UI からのインテントは全部 `dispatch` を通る。

use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::components::card::CardId;
use crate::components::dragging_info::DraggingInfo;
use crate::components::game_state::GameStatus;
use crate::components::position::Position;
use crate::config::GameConfig;
use crate::error::EngineError;
use crate::logic::auto_move::find_automatic_foundation_move;
use crate::logic::deck::{create_standard_deck, shuffle_deck};
use crate::logic::layout::card_position;
use crate::protocol::{GameEvent, GameSnapshot, Intent};
use crate::systems::stock_system::{draw_from_stock, recycle_waste_to_stock};
use crate::systems::{DealInitialCardsSystem, MoveCardSystem, MoveOutcome, WinConditionSystem};
use crate::world::World;

/// ゲームのセッションだよ！🃏
///
/// World と進行状態、ドラッグ中の情報、シャッフル用の乱数を 1 か所にまとめて持つ。
/// 乱数は差し替えられるので、テストではシード固定の `StdRng` を渡せばいい。
pub struct GameSession<R: Rng = StdRng> {
    world: World,
    status: GameStatus,
    dragging: Option<DraggingInfo>,
    rng: R,
    quit_requested: bool,
    deal_system: DealInitialCardsSystem,
    move_system: MoveCardSystem,
    win_system: WinConditionSystem,
}

impl GameSession<StdRng> {
    /// 設定からセッションを作って最初の配札まで済ませる。
    /// シードが無ければエントロピーから乱数を作る。
    pub fn new(config: &GameConfig) -> Result<Self, EngineError> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> GameSession<R> {
    pub fn with_rng(config: &GameConfig, rng: R) -> Result<Self, EngineError> {
        let mut session = Self {
            world: World::new(create_standard_deck())?,
            status: GameStatus::Dealing,
            dragging: None,
            rng,
            quit_requested: false,
            deal_system: DealInitialCardsSystem,
            move_system: MoveCardSystem,
            win_system: WinConditionSystem::new(config.win_foundation_threshold),
        };
        let mut events = Vec::new();
        session.deal(&mut events)?;
        debug!("Initial deal produced {} events.", events.len());
        Ok(session)
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_won(&self) -> bool {
        self.status == GameStatus::Won
    }

    pub fn dragging(&self) -> Option<&DraggingInfo> {
        self.dragging.as_ref()
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::capture(&self.world, self.status)
    }

    /// インテントを 1 つ処理して、起きたことをイベントの列で返す。
    ///
    /// ルール違反の移動はエラーじゃなくて `MoveRejected` などのイベントになる。
    /// `Err` になるのは、掴んでないのに離したとか、知らないカード ID みたいな呼び出し側の間違いだけ。
    /// 勝利後は `Restart` と `Quit` 以外は無視する。
    pub fn dispatch(&mut self, intent: Intent) -> Result<Vec<GameEvent>, EngineError> {
        let mut events = Vec::new();
        match intent {
            Intent::Restart => self.restart(&mut events)?,
            Intent::Quit => {
                info!("Quit requested.");
                self.quit_requested = true;
                self.dragging = None;
                events.push(GameEvent::QuitRequested);
            }
            intent if !self.status.accepts_moves() => {
                info!("Ignoring {:?} while the game is {:?}.", intent, self.status);
            }
            Intent::LiftCard { card } => self.lift(card, &mut events)?,
            Intent::DragTo { card, x, y } => self.drag_to(card, Position::new(x, y))?,
            Intent::DropCard { card } => self.drop_card(card, &mut events)?,
            Intent::ClickStock => {
                draw_from_stock(&mut self.world, &mut events);
            }
            Intent::ClickEmptyStock => {
                recycle_waste_to_stock(&mut self.world, &mut events);
            }
            Intent::AutoMoveToFoundation { card } => self.auto_move(card, &mut events)?,
        }
        Ok(events)
    }

    /// 全部片付けて、シャッフルし直して配り直す。
    fn restart(&mut self, events: &mut Vec<GameEvent>) -> Result<(), EngineError> {
        info!("Restarting the game.");
        self.dragging = None;
        self.quit_requested = false;
        self.deal(events)
    }

    fn deal(&mut self, events: &mut Vec<GameEvent>) -> Result<(), EngineError> {
        self.status = GameStatus::Dealing;
        let mut order: Vec<CardId> = self.world.card_ids().collect();
        shuffle_deck(&mut order, &mut self.rng);
        self.deal_system.execute(&mut self.world, &order, events)?;
        self.status = GameStatus::Playing;
        Ok(())
    }

    fn lift(&mut self, card: CardId, events: &mut Vec<GameEvent>) -> Result<(), EngineError> {
        self.world.try_card(card)?;
        if let Some(previous) = self.dragging.take() {
            warn!("Lift of {:?} while {:?} was still held, dropping the old drag.", card, previous.card);
        }

        let Some(run) = self.move_system.select_run(&self.world, card) else {
            debug!("{:?} cannot be lifted.", card);
            events.push(GameEvent::LiftRejected { card });
            return Ok(());
        };
        let Some(pile) = self.world.pile_containing(card) else {
            events.push(GameEvent::LiftRejected { card });
            return Ok(());
        };
        let index = pile.position_of(card).unwrap_or_default();
        let original = card_position(pile, index);
        debug!("Lifted {:?} from {} with {} card(s).", card, pile.name, run.len());
        self.dragging = Some(DraggingInfo::new(card, pile.id, run, original));
        Ok(())
    }

    fn active_drag(&mut self, card: CardId) -> Result<&mut DraggingInfo, EngineError> {
        let drag = self.dragging.as_mut().ok_or(EngineError::NoActiveDrag)?;
        if drag.card != card {
            return Err(EngineError::DragMismatch { dragging: drag.card, got: card });
        }
        Ok(drag)
    }

    fn drag_to(&mut self, card: CardId, position: Position) -> Result<(), EngineError> {
        self.active_drag(card)?.current = position;
        Ok(())
    }

    fn drop_card(&mut self, card: CardId, events: &mut Vec<GameEvent>) -> Result<(), EngineError> {
        self.active_drag(card)?;
        let Some(drag) = self.dragging.take() else {
            return Err(EngineError::NoActiveDrag);
        };

        if let MoveOutcome::Accepted { destination } = self.move_system.resolve_drop(&mut self.world, &drag, events) {
            let to_foundation = self.world.pile(destination).map_or(false, |p| p.stack_type.is_foundation());
            if to_foundation {
                self.check_win(events);
            }
        }
        Ok(())
    }

    fn auto_move(&mut self, card: CardId, events: &mut Vec<GameEvent>) -> Result<(), EngineError> {
        self.world.try_card(card)?;
        let Some(destination) = find_automatic_foundation_move(&self.world, card) else {
            return Ok(());
        };
        let Some(source) = self.world.card(card).and_then(|c| c.pile) else {
            return Ok(());
        };
        if self.dragging.as_ref().map_or(false, |drag| drag.card == card) {
            self.dragging = None;
        }

        self.move_system.apply_move(&mut self.world, &[card], source, destination, events);
        self.check_win(events);
        Ok(())
    }

    fn check_win(&mut self, events: &mut Vec<GameEvent>) {
        if self.win_system.is_won(&self.world) {
            self.status = GameStatus::Won;
            self.dragging = None;
            events.push(GameEvent::Won);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{Rank, Suit};
    use crate::components::stack::{PileId, StackType};
    use crate::test_support::{build_foundation, empty_world, put};

    fn seeded(seed: u64) -> GameSession {
        GameSession::new(&GameConfig::with_seed(seed)).unwrap()
    }

    /// 3 つの組札が K まで、4 つ目は Q まで揃っていて、クラブの K が捨て札にある盤面。
    fn one_move_from_victory(session: &mut GameSession) -> CardId {
        session.world = empty_world();
        build_foundation(&mut session.world, 0, Suit::Heart, Rank::King);
        build_foundation(&mut session.world, 1, Suit::Diamond, Rank::King);
        build_foundation(&mut session.world, 2, Suit::Spade, Rank::Queen);
        build_foundation(&mut session.world, 3, Suit::Club, Rank::Queen);
        put(&mut session.world, Suit::Spade, Rank::King, StackType::Waste, true)
    }

    #[test]
    fn new_session_is_dealt_and_playing() {
        let session = seeded(7);
        assert_eq!(session.status(), GameStatus::Playing);
        assert_eq!(session.world().stock().unwrap().len(), 24);
        assert!(session.dragging().is_none());
        assert!(!session.is_won());
    }

    #[test]
    fn same_seed_deals_the_same_table() {
        assert_eq!(seeded(11).snapshot(), seeded(11).snapshot());
        assert_ne!(seeded(11).snapshot(), seeded(12).snapshot());
    }

    #[test]
    fn lifting_a_face_down_card_is_rejected() {
        let mut session = seeded(3);
        let hidden = session.world().pile(PileId::tableau(6)).unwrap().cards()[0];

        let events = session.dispatch(Intent::LiftCard { card: hidden }).unwrap();

        assert_eq!(events, vec![GameEvent::LiftRejected { card: hidden }]);
        assert!(session.dragging().is_none());
    }

    #[test]
    fn lift_records_the_run_and_its_origin() {
        let mut session = seeded(3);
        let top = session.world().pile(PileId::tableau(2)).unwrap().top().unwrap();

        assert!(session.dispatch(Intent::LiftCard { card: top }).unwrap().is_empty());
        let drag = session.dragging().unwrap();
        assert_eq!(drag.run, vec![top]);
        assert_eq!(drag.source, PileId::tableau(2));
        assert_eq!(drag.original, drag.current);

        session.dispatch(Intent::DragTo { card: top, x: 1.0, y: 2.0 }).unwrap();
        assert_eq!(session.dragging().unwrap().current, Position::new(1.0, 2.0));
    }

    #[test]
    fn drop_needs_a_matching_lift() {
        let mut session = seeded(5);
        let top = session.world().pile(PileId::tableau(3)).unwrap().top().unwrap();
        let other = session.world().pile(PileId::tableau(4)).unwrap().top().unwrap();

        assert_eq!(session.dispatch(Intent::DropCard { card: top }), Err(EngineError::NoActiveDrag));

        session.dispatch(Intent::LiftCard { card: top }).unwrap();
        assert_eq!(
            session.dispatch(Intent::DropCard { card: other }),
            Err(EngineError::DragMismatch { dragging: top, got: other })
        );
        assert!(session.dragging().is_some(), "間違ったドロップでドラッグは消えない");
    }

    #[test]
    fn unknown_cards_are_errors() {
        let mut session = seeded(5);
        assert_eq!(
            session.dispatch(Intent::LiftCard { card: CardId(60) }),
            Err(EngineError::UnknownCard(CardId(60)))
        );
    }

    #[test]
    fn dropping_in_place_slides_back() {
        let mut session = seeded(8);
        let top = session.world().pile(PileId::tableau(0)).unwrap().top().unwrap();
        session.dispatch(Intent::LiftCard { card: top }).unwrap();

        let events = session.dispatch(Intent::DropCard { card: top }).unwrap();

        assert_eq!(events, vec![GameEvent::MoveRejected { run: vec![top] }]);
        assert_eq!(session.world().pile(PileId::tableau(0)).unwrap().cards(), &[top]);
        assert!(session.dragging().is_none());
    }

    #[test]
    fn stock_clicks_draw_and_recycle() {
        let mut session = seeded(9);
        for _ in 0..24 {
            session.dispatch(Intent::ClickStock).unwrap();
        }
        assert!(session.world().stock().unwrap().is_empty());
        assert!(session.dispatch(Intent::ClickStock).unwrap().is_empty(), "空の山札は何もしない");

        let events = session.dispatch(Intent::ClickEmptyStock).unwrap();
        assert_eq!(events.last(), Some(&GameEvent::StockRefilled));
        assert_eq!(session.world().stock().unwrap().len(), 24);
    }

    #[test]
    fn dropping_the_last_king_wins() {
        let mut session = seeded(1);
        let king = one_move_from_victory(&mut session);
        session.dispatch(Intent::LiftCard { card: king }).unwrap();
        let slot = card_position(session.world().pile(PileId::foundation(2)).unwrap(), 12);
        session.dispatch(Intent::DragTo { card: king, x: slot.x + 4.0, y: slot.y + 4.0 }).unwrap();

        let events = session.dispatch(Intent::DropCard { card: king }).unwrap();

        assert_eq!(events.last(), Some(&GameEvent::Won));
        assert!(session.is_won());
    }

    #[test]
    fn auto_move_can_win() {
        let mut session = seeded(1);
        let king = one_move_from_victory(&mut session);

        let events = session.dispatch(Intent::AutoMoveToFoundation { card: king }).unwrap();

        assert_eq!(
            events,
            vec![
                GameEvent::MoveAccepted { run: vec![king], destination: PileId::foundation(2) },
                GameEvent::Won,
            ]
        );
        assert_eq!(session.status(), GameStatus::Won);
    }

    #[test]
    fn won_game_ignores_play_but_accepts_restart_and_quit() {
        let mut session = seeded(1);
        let king = one_move_from_victory(&mut session);
        session.dispatch(Intent::AutoMoveToFoundation { card: king }).unwrap();

        assert!(session.dispatch(Intent::ClickStock).unwrap().is_empty());
        assert!(session.dispatch(Intent::DropCard { card: king }).unwrap().is_empty());

        assert_eq!(session.dispatch(Intent::Quit).unwrap(), vec![GameEvent::QuitRequested]);
        assert!(session.quit_requested());

        let events = session.dispatch(Intent::Restart).unwrap();
        assert_eq!(events.last(), Some(&GameEvent::Dealt));
        assert_eq!(session.status(), GameStatus::Playing);
        assert!(session.world().foundation_piles().all(|p| p.is_empty()));
        assert!(!session.quit_requested());
    }

    #[test]
    fn strict_config_needs_all_four_foundations() {
        let config = GameConfig { win_foundation_threshold: 4, seed: Some(1) };
        let mut session = GameSession::new(&config).unwrap();
        let king = one_move_from_victory(&mut session);

        let events = session.dispatch(Intent::AutoMoveToFoundation { card: king }).unwrap();

        assert!(!events.contains(&GameEvent::Won));
        assert_eq!(session.status(), GameStatus::Playing);
    }

    #[test]
    fn zero_threshold_does_not_win_on_the_first_ace() {
        let config = GameConfig { win_foundation_threshold: 0, seed: Some(4) };
        let mut session = GameSession::new(&config).unwrap();
        session.world = empty_world();
        let ace = put(&mut session.world, Suit::Club, Rank::Ace, StackType::Waste, true);

        let events = session.dispatch(Intent::AutoMoveToFoundation { card: ace }).unwrap();

        assert_eq!(events, vec![GameEvent::MoveAccepted { run: vec![ace], destination: PileId::foundation(0) }]);
        assert_eq!(session.status(), GameStatus::Playing);
    }
}
