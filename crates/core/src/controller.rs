//! Game controller - the turn state machine
//!
//! The controller owns the deck model, the two-slot turn buffer, the counters
//! and the stopwatch. Every operation runs to completion and reports what it
//! did; the only deferred work is the mismatch window, which is a countdown
//! advanced by [`GameController::tick`].
//!
//! ```text
//!   NotStarted ──start──▶ Selecting(0) ──select──▶ Selecting(1)
//!        ▲                    ▲   ▲                    │ select
//!        │ decline            │   └──── match ─────────┤
//!        │                    └── delay elapsed ── Resolving ◀─ mismatch
//!   AwaitingRestart / Won ◀── reset / all matched
//! ```

use arrayvec::ArrayVec;
use tracing::{debug, info};

use crate::config::{GameConfig, Rules};
use crate::deck::Deck;
use crate::error::DeckError;
use crate::rng::SimpleRng;
use crate::scoring::score_for_match;
use crate::snapshot::{CardSnapshot, GameSnapshot};
use crate::timer::{ElapsedTime, Stopwatch};
use crate::types::{CardHandle, Phase, Visibility};
use crate::view::{BoardView, GameSummary};

/// Why a selection was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reason {
    /// No game in progress (not started, won, or waiting for a restart answer).
    Locked,
    /// A mismatched pair is still face up.
    Resolving,
    /// The card is already the first card of this turn.
    SameCard,
    AlreadyMatched,
    OutOfRange,
}

/// Outcome of [`GameController::select_card`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selection {
    Ignored(Reason),
    /// First card of a turn is now face up.
    Revealed,
    /// Second card matched the first. `won` is set when it was the last pair.
    Matched { won: bool },
    /// Second card did not match; both flip back once the delay elapses.
    Mismatched,
}

impl Selection {
    pub fn is_ignored(self) -> bool {
        matches!(self, Selection::Ignored(_))
    }
}

/// Memory-match game controller driving a [`BoardView`].
#[derive(Debug, Clone)]
pub struct GameController<V: BoardView> {
    deck: Deck,
    view: V,
    rng: SimpleRng,
    rules: Rules,
    phase: Phase,
    turn: ArrayVec<CardHandle, 2>,
    moves: u32,
    score: u32,
    /// Remaining mismatch window while `phase == Resolving`.
    resolve_timer_ms: u32,
    stopwatch: Stopwatch,
    summary: Option<GameSummary>,
}

impl<V: BoardView> GameController<V> {
    /// Create a controller for `deck`, shuffle the display order, and push the
    /// initial display state to the view. The game starts locked.
    pub fn new(deck: Deck, view: V, rules: Rules, seed: u32) -> Self {
        let mut controller = Self {
            deck,
            view,
            rng: SimpleRng::new(seed),
            rules,
            phase: Phase::NotStarted,
            turn: ArrayVec::new(),
            moves: 0,
            score: 0,
            resolve_timer_ms: 0,
            stopwatch: Stopwatch::with_period(rules.timer_period_ms),
            summary: None,
        };

        controller.deck.shuffle(&mut controller.rng);
        controller.view.shuffle(controller.deck.order());
        controller.view.set_moves(0);
        controller.view.set_score(0);
        let zero = controller.stopwatch.reset();
        controller.view.set_elapsed(zero);
        controller
    }

    /// Build the default deck for `config` and a controller around it.
    pub fn from_config(config: &GameConfig, view: V, seed: u32) -> Result<Self, DeckError> {
        let deck = Deck::with_pairs(config.pairs)?;
        Ok(Self::new(deck, view, config.rules, seed))
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn elapsed(&self) -> ElapsedTime {
        self.stopwatch.elapsed()
    }

    pub fn stopwatch(&self) -> &Stopwatch {
        &self.stopwatch
    }

    /// Cards selected in the current, unresolved turn.
    pub fn selected(&self) -> &[CardHandle] {
        &self.turn
    }

    pub fn is_board_locked(&self) -> bool {
        !self.phase.accepts_selection()
    }

    /// Remaining mismatch window in milliseconds (0 when nothing is pending).
    pub fn pending_resolution_ms(&self) -> u32 {
        self.resolve_timer_ms
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn rules(&self) -> Rules {
        self.rules
    }

    /// Summary of the last won game, kept until the board is reset.
    pub fn summary(&self) -> Option<&GameSummary> {
        self.summary.as_ref()
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn into_view(self) -> V {
        self.view
    }

    /// Unlock the board and start the clock.
    ///
    /// Returns `false` without side effects if the clock is already running.
    /// Starting from `Won` resets the board first.
    pub fn start_game(&mut self) -> bool {
        if self.stopwatch.is_running() {
            debug!("start ignored: clock already running");
            return false;
        }
        match self.phase {
            Phase::Selecting | Phase::Resolving => return false,
            Phase::Won => self.reset_board(),
            Phase::NotStarted | Phase::AwaitingRestart => {}
        }

        for card in self.deck.cards() {
            if card.visibility != Visibility::Matched {
                self.view.restore(card.handle);
            }
        }
        self.turn.clear();
        self.resolve_timer_ms = 0;
        if let Some(text) = self.stopwatch.start() {
            self.view.set_elapsed(&text);
        }
        self.phase = Phase::Selecting;

        info!(
            session = self.stopwatch.session(),
            cards = self.deck.len(),
            "game started"
        );
        true
    }

    /// Handle a player's pick.
    pub fn select_card(&mut self, card: CardHandle) -> Selection {
        match self.phase {
            Phase::Selecting => {}
            Phase::Resolving => return ignored(card, Reason::Resolving),
            Phase::NotStarted | Phase::Won | Phase::AwaitingRestart => {
                return ignored(card, Reason::Locked)
            }
        }

        let Some(target) = self.deck.get(card) else {
            return ignored(card, Reason::OutOfRange);
        };
        if target.visibility == Visibility::Matched {
            return ignored(card, Reason::AlreadyMatched);
        }
        if self.turn.first() == Some(&card) {
            return ignored(card, Reason::SameCard);
        }
        // Selecting never holds a full turn; resolution always empties it.
        if self.turn.is_full() {
            return ignored(card, Reason::Resolving);
        }

        self.deck.set_visibility(card, Visibility::Revealed);
        self.view.reveal(card);
        self.turn.push(card);
        debug!(%card, selected = self.turn.len(), "card revealed");

        if self.turn.len() < 2 {
            return Selection::Revealed;
        }

        self.moves = self.moves.saturating_add(1);
        self.view.set_moves(self.moves);
        self.evaluate_turn()
    }

    /// Compare the two selected cards.
    fn evaluate_turn(&mut self) -> Selection {
        let (first, second) = (self.turn[0], self.turn[1]);
        let face_of = |deck: &Deck, h: CardHandle| deck.get(h).map(|c| c.face);

        if face_of(&self.deck, first) == face_of(&self.deck, second) {
            for card in [first, second] {
                self.deck.set_visibility(card, Visibility::Matched);
                self.view.retire(card);
            }
            self.score = score_for_match(self.score, self.rules.score_increment);
            self.view.set_score(self.score);
            self.turn.clear();
            self.phase = Phase::Selecting;
            debug!(%first, %second, score = self.score, "pair matched");

            let won = self.finish_if_won();
            return Selection::Matched { won };
        }

        debug!(%first, %second, delay_ms = self.rules.mismatch_delay_ms, "pair mismatched");
        self.phase = Phase::Resolving;
        self.resolve_timer_ms = self.rules.mismatch_delay_ms;
        if self.resolve_timer_ms == 0 {
            self.conceal_turn();
        }
        Selection::Mismatched
    }

    /// Flip a mismatched pair back and unlock the board.
    fn conceal_turn(&mut self) {
        for card in self.turn.drain(..) {
            self.deck.set_visibility(card, Visibility::Hidden);
            self.view.conceal(card);
        }
        self.resolve_timer_ms = 0;
        self.phase = Phase::Selecting;
    }

    fn finish_if_won(&mut self) -> bool {
        if !self.deck.all_matched() {
            return false;
        }

        self.stopwatch.stop();
        let elapsed = self.stopwatch.elapsed();
        self.view.set_elapsed(&elapsed.to_string());

        let summary = GameSummary {
            moves: self.moves,
            score: self.score,
            elapsed_ms: elapsed.as_millis(),
        };
        self.summary = Some(summary);
        self.phase = Phase::Won;
        info!(
            moves = summary.moves,
            score = summary.score,
            elapsed = %elapsed,
            "game won"
        );

        self.view.show_summary(&summary);
        self.view.request_restart();
        true
    }

    /// Advance the clock and any pending mismatch window.
    ///
    /// Returns `true` when something visible changed.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        let mut changed = false;

        if let Some(text) = self.stopwatch.advance(elapsed_ms) {
            self.view.set_elapsed(&text);
            changed = true;
        }

        if self.phase == Phase::Resolving {
            self.resolve_timer_ms = self.resolve_timer_ms.saturating_sub(elapsed_ms);
            if self.resolve_timer_ms == 0 {
                self.conceal_turn();
                changed = true;
            }
        }

        changed
    }

    /// Put every card face down, zero the counters, reshuffle, and ask the
    /// player whether to start again.
    pub fn reset_game(&mut self) {
        self.reset_board();
        self.phase = Phase::AwaitingRestart;
        info!("game reset");
        self.view.request_restart();
    }

    fn reset_board(&mut self) {
        self.moves = 0;
        self.score = 0;
        self.view.set_moves(0);
        self.view.set_score(0);

        self.turn.clear();
        self.resolve_timer_ms = 0;
        self.summary = None;

        self.deck.hide_all();
        for handle in self.deck.order() {
            self.view.conceal(*handle);
            self.view.restore(*handle);
        }
        self.deck.shuffle(&mut self.rng);
        self.view.shuffle(self.deck.order());

        let zero = self.stopwatch.reset();
        self.view.set_elapsed(zero);
    }

    /// Answer the restart prompt raised by a win or a reset.
    ///
    /// Returns `false` if no prompt is pending. Declining leaves the board
    /// locked with the start action available.
    pub fn confirm_restart(&mut self, accepted: bool) -> bool {
        if !self.phase.awaits_restart_answer() {
            return false;
        }
        if self.phase == Phase::Won {
            self.reset_board();
        }
        self.phase = Phase::NotStarted;
        debug!(accepted, "restart answered");

        if accepted {
            self.start_game();
        }
        true
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            phase: self.phase.as_str(),
            moves: self.moves,
            score: self.score,
            elapsed_ms: self.stopwatch.elapsed().as_millis(),
            timer_running: self.stopwatch.is_running(),
            timer_session: self.stopwatch.session(),
            pending_resolution_ms: self.resolve_timer_ms,
            order: self.deck.order().iter().map(|h| h.index() as u16).collect(),
            selected: self.turn.iter().map(|h| h.index() as u16).collect(),
            cards: self
                .deck
                .cards()
                .iter()
                .map(|c| CardSnapshot {
                    handle: c.handle.index() as u16,
                    face: c.face.id(),
                    visibility: c.visibility.as_str(),
                })
                .collect(),
            summary: self.summary,
        }
    }
}

fn ignored(card: CardHandle, reason: Reason) -> Selection {
    debug!(%card, ?reason, "selection ignored");
    Selection::Ignored(reason)
}
