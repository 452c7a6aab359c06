//! Session controller - single owner of the live game
//!
//! Everything one board session needs lives in [`SessionController`]: the
//! chosen [`GameMode`], the rules adapter, the selection and highlight
//! state, the captured-piece lists, the status line, the pending computer
//! reply and the board lifecycle key. Systems and UI panels reach it through
//! `Res`/`ResMut`; there is no other global game state.
//!
//! # Lifecycle
//!
//! ```text
//!   reset_session()                   select_mode(mode)
//!  ----------------> [no mode] -------------------------> [active game]
//!                        ^                                      |
//!                        +-------- reset_session() -------------+
//!                               (key += 1, reply cancelled)
//! ```
//!
//! # Move flow
//!
//! 1. [`SessionController::can_drag`] gates the drag start
//! 2. [`SessionController::on_drop`] applies the move or reports a snapback
//! 3. [`SessionController::on_snap_end`] hands the FEN back to the view
//! 4. In computer mode a reply is scheduled and later fired by
//!    [`SessionController::poll_computer_reply`]
//!
//! Every failure degrades to "nothing visibly happened": an illegal drop is
//! a snapback, a stale reply is dropped, a click with no moves clears the
//! selection.

use std::time::Duration;

use bevy::prelude::Resource;
use rand::rngs::StdRng;
use rand::SeedableRng;
use shakmaty::{Role, Square};
use tracing::{debug, info, warn};

use crate::core::GameSettings;
use crate::game::ai::{pick_random_move, ReplyPoll, ReplySchedule, DEFAULT_REPLY_DELAY};
use crate::game::error::{GameError, GameResult};
use crate::game::resources::{CapturedPieces, GameStatus, Selection};
use crate::game::rules::{ChessRules, MoveRecord};
use crate::game::types::{BoardKey, GameMode, PieceToken};

/// Result of dropping a dragged piece on a square
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    /// The move was played
    Accepted(MoveRecord),
    /// The move was rejected; the view returns the piece to its origin
    Snapback,
}

impl DropOutcome {
    pub fn is_snapback(&self) -> bool {
        matches!(self, DropOutcome::Snapback)
    }
}

/// One board session: mode, game, selection, captures, status, reply
#[derive(Resource)]
pub struct SessionController {
    mode: Option<GameMode>,
    board_key: BoardKey,
    game: Option<ChessRules>,
    selection: Selection,
    captured: CapturedPieces,
    status: String,
    reply: ReplySchedule,
    rng: StdRng,
    reply_delay: Duration,
    hover_highlights: bool,
}

impl Default for SessionController {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionController {
    /// Session with an OS-seeded random source
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Session whose computer replies are reproducible
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            mode: None,
            board_key: BoardKey::default(),
            game: None,
            selection: Selection::default(),
            captured: CapturedPieces::default(),
            status: String::new(),
            reply: ReplySchedule::default(),
            rng,
            reply_delay: DEFAULT_REPLY_DELAY,
            hover_highlights: false,
        }
    }

    /// Take the interaction settings that affect the session
    pub fn apply_settings(&mut self, settings: &GameSettings) {
        self.reply_delay = Duration::from_millis(settings.reply_delay_ms);
        self.hover_highlights = settings.hover_highlights;
    }

    pub fn mode(&self) -> Option<GameMode> {
        self.mode
    }

    pub fn board_key(&self) -> BoardKey {
        self.board_key
    }

    pub fn game(&self) -> Option<&ChessRules> {
        self.game.as_ref()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn captured(&self) -> &CapturedPieces {
        &self.captured
    }

    /// Status line; empty while no game is active
    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn has_pending_reply(&self) -> bool {
        self.reply.is_pending()
    }

    pub fn reply_delay(&self) -> Duration {
        self.reply_delay
    }

    pub fn hover_highlights(&self) -> bool {
        self.hover_highlights
    }

    pub fn is_active(&self) -> bool {
        self.game.is_some()
    }

    /// FEN of the live position
    pub fn position_fen(&self) -> Option<String> {
        self.game.as_ref().map(ChessRules::fen)
    }

    /// Start a fresh game in `mode`
    ///
    /// Only valid while no mode is active. When the computer plays White
    /// its opening move is scheduled immediately.
    pub fn select_mode(&mut self, mode: GameMode, now: Duration) -> GameResult<()> {
        self.select_mode_with(mode, ChessRules::new(), now)
    }

    /// Start a game in `mode` from an arbitrary position
    ///
    /// Same rules as [`Self::select_mode`]; the computer moves first when
    /// the position has it to move.
    pub fn select_mode_with(&mut self, mode: GameMode, rules: ChessRules, now: Duration) -> GameResult<()> {
        if self.mode.is_some() {
            warn!("[SESSION] Mode {:?} requested while a game is active", mode);
            return Err(GameError::ModeAlreadySelected);
        }

        self.selection.clear();
        self.reply.cancel();
        self.captured = CapturedPieces::from_history(rules.history());
        self.status = GameStatus::of(&rules).to_string();
        let computer_opens = mode.is_computer(rules.current_turn()) && !rules.is_game_over();
        self.game = Some(rules);
        self.mode = Some(mode);

        info!("[SESSION] New game: {} (board {})", mode.label(), self.board_key);

        if computer_opens {
            self.reply.schedule(now, self.reply_delay, self.board_key);
            debug!("[SESSION] Computer to move, reply scheduled");
        }
        Ok(())
    }

    /// Whether a drag of `piece` from `source` may begin
    ///
    /// Pure: never changes the session.
    pub fn can_drag(&self, source: Square, piece: PieceToken) -> bool {
        let (Some(mode), Some(game)) = (self.mode, self.game.as_ref()) else {
            return false;
        };
        if game.is_game_over() {
            return false;
        }
        let turn = game.current_turn();
        let allowed = match mode {
            GameMode::HumanVsComputer { computer } => piece.color != computer && turn != computer,
            GameMode::HumanVsHuman => piece.color == turn,
        };
        if !allowed {
            debug!("[SESSION] Drag of {} from {} refused", piece, source);
        }
        allowed
    }

    /// Submit a drop of the dragged piece on `target`
    ///
    /// The move is promoted to a queen when it promotes. Any failure, from
    /// an illegal move to an engine rejection, is a snapback.
    pub fn on_drop(&mut self, source: Square, target: Square, now: Duration) -> DropOutcome {
        let Some(game) = self.game.as_mut() else {
            return DropOutcome::Snapback;
        };

        let record = match game.apply_move(source, target, Role::Queen) {
            Ok(record) => record,
            Err(err) => {
                debug!("[SESSION] Snapback: {}", err);
                return DropOutcome::Snapback;
            }
        };

        info!("[SESSION] {:?} played {}", record.color, record.san);
        self.after_ply();

        if let Some(GameMode::HumanVsComputer { computer }) = self.mode {
            let game_over = self.game.as_ref().is_none_or(ChessRules::is_game_over);
            let computer_to_move = self
                .game
                .as_ref()
                .is_some_and(|game| game.current_turn() == computer);
            if !game_over && computer_to_move {
                self.reply.schedule(now, self.reply_delay, self.board_key);
                debug!("[SESSION] Computer reply scheduled in {:?}", self.reply_delay);
            }
        }

        DropOutcome::Accepted(record)
    }

    /// Position the view should show once a drop animation ends
    pub fn on_snap_end(&self) -> Option<String> {
        self.position_fen()
    }

    /// Fire the scheduled computer reply if it is due
    ///
    /// Returns the reply's record when a move was played.
    pub fn poll_computer_reply(&mut self, now: Duration) -> Option<MoveRecord> {
        match self.reply.poll(now, self.board_key) {
            ReplyPoll::Idle | ReplyPoll::Waiting => return None,
            ReplyPoll::Stale => {
                debug!("[AI] Dropped reply scheduled for an older board");
                return None;
            }
            ReplyPoll::Due => {}
        }

        let game = self.game.as_mut()?;
        let choice = pick_random_move(game, &mut self.rng)?;
        let record = match game.apply_legal(&choice) {
            Ok(record) => record,
            Err(err) => {
                warn!("[AI] Reply {}{} failed: {}", choice.from, choice.to, err);
                return None;
            }
        };

        info!("[AI] {:?} replied {}", record.color, record.san);
        self.after_ply();
        Some(record)
    }

    /// Click on `square`: select it if it has legal destinations
    pub fn on_square_click(&mut self, square: Square) {
        let destinations = self
            .game
            .as_ref()
            .map(|game| game.legal_destinations(square))
            .unwrap_or_default();
        self.selection.select(square, &destinations);
    }

    /// Pointer entered `square`; ignored unless hover highlighting is on
    pub fn on_square_hover(&mut self, square: Square) {
        if self.hover_highlights {
            self.on_square_click(square);
        }
    }

    /// Pointer left the hovered square
    pub fn on_square_hover_exit(&mut self) {
        if self.hover_highlights {
            self.selection.clear();
        }
    }

    /// Drop the game and return to mode selection
    ///
    /// The board key moves on, so board entities and any reply tied to the
    /// old key are recognised as stale.
    pub fn reset_session(&mut self) {
        self.board_key = self.board_key.next();
        self.reply.cancel();
        self.mode = None;
        self.game = None;
        self.captured.clear();
        self.selection.clear();
        self.status.clear();
        info!("[SESSION] Reset, board key now {}", self.board_key);
    }

    /// Recompute everything derived from the position after a ply
    fn after_ply(&mut self) {
        self.selection.clear();
        if let Some(game) = self.game.as_ref() {
            self.captured = CapturedPieces::from_history(game.history());
            self.status = GameStatus::of(game).to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::rules::parse_square;

    fn sq(name: &str) -> Square {
        parse_square(name).expect("valid square")
    }

    #[test]
    fn test_new_session_is_inactive() {
        let session = SessionController::with_seed(0);
        assert_eq!(session.mode(), None);
        assert!(!session.is_active());
        assert_eq!(session.status(), "");
        assert_eq!(session.on_snap_end(), None);
    }

    #[test]
    fn test_select_mode_twice_fails() {
        //! A mode is chosen exactly once per session
        let mut session = SessionController::with_seed(0);
        session
            .select_mode(GameMode::HumanVsHuman, Duration::ZERO)
            .expect("first selection");
        let err = session.select_mode(GameMode::VS_COMPUTER, Duration::ZERO);
        assert!(matches!(err, Err(GameError::ModeAlreadySelected)));
        assert_eq!(session.mode(), Some(GameMode::HumanVsHuman));
    }

    #[test]
    fn test_drop_without_game_snaps_back() {
        let mut session = SessionController::with_seed(0);
        assert!(session.on_drop(sq("e2"), sq("e4"), Duration::ZERO).is_snapback());
    }

    #[test]
    fn test_computer_opens_as_white() {
        //! With the computer on White, its first move is scheduled at once
        let mut session = SessionController::with_seed(5);
        session
            .select_mode(
                GameMode::HumanVsComputer {
                    computer: shakmaty::Color::White,
                },
                Duration::ZERO,
            )
            .expect("mode selected");
        assert!(session.has_pending_reply());

        let reply = session
            .poll_computer_reply(DEFAULT_REPLY_DELAY)
            .expect("reply fired");
        assert_eq!(reply.color, shakmaty::Color::White);
        assert_eq!(session.status(), "Turno de Negras");
    }

    #[test]
    fn test_hover_ignored_when_disabled() {
        //! Hover does nothing unless enabled in settings
        let mut session = SessionController::with_seed(0);
        session
            .select_mode(GameMode::HumanVsHuman, Duration::ZERO)
            .expect("mode selected");

        session.on_square_hover(sq("e2"));
        assert!(!session.selection().is_selected());

        let settings = GameSettings {
            hover_highlights: true,
            ..GameSettings::default()
        };
        session.apply_settings(&settings);
        session.on_square_hover(sq("e2"));
        assert_eq!(session.selection().selected(), Some(sq("e2")));
        session.on_square_hover_exit();
        assert!(!session.selection().is_selected());
    }
}
