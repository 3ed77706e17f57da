//! TermBoard: the terminal's Board View.
//!
//! Keeps exactly what the screen needs (tile faces, display order, the three
//! counters, the pending prompt) plus a cursor over the display order. The
//! controller drives it through [`BoardView`]; the runner moves the cursor.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::core::{BoardView, Deck, GameController, GameSummary, Selection, ZERO_TIME};
use crate::types::{CardFace, CardHandle, GameInput, Phase};

/// One card as the terminal shows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    pub face: CardFace,
    pub face_up: bool,
    /// `false` once the card is retired (matched).
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermBoard {
    tiles: Vec<Tile>,
    order: Vec<CardHandle>,
    columns: u16,
    cursor: usize,
    moves: u32,
    score: u32,
    elapsed: String,
    summary: Option<GameSummary>,
    prompt_pending: bool,
}

impl TermBoard {
    /// Lay out tiles for every card of `deck`, face down.
    pub fn for_deck(deck: &Deck) -> Self {
        let tiles = deck
            .cards()
            .iter()
            .map(|c| Tile {
                face: c.face,
                face_up: false,
                enabled: true,
            })
            .collect();
        Self {
            tiles,
            order: deck.order().to_vec(),
            columns: columns_for(deck.len()),
            cursor: 0,
            moves: 0,
            score: 0,
            elapsed: ZERO_TIME.to_string(),
            summary: None,
            prompt_pending: false,
        }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn columns(&self) -> u16 {
        self.columns
    }

    pub fn rows(&self) -> u16 {
        (self.order.len() as u16).div_ceil(self.columns.max(1))
    }

    pub fn tile(&self, card: CardHandle) -> Option<&Tile> {
        self.tiles.get(card.index())
    }

    /// Handles in display order.
    pub fn order(&self) -> &[CardHandle] {
        &self.order
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn card_under_cursor(&self) -> Option<CardHandle> {
        self.order.get(self.cursor).copied()
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn elapsed(&self) -> &str {
        &self.elapsed
    }

    pub fn summary(&self) -> Option<&GameSummary> {
        self.summary.as_ref()
    }

    pub fn prompt_pending(&self) -> bool {
        self.prompt_pending
    }

    /// Close the restart prompt and the win summary once answered.
    pub fn answer_prompt(&mut self) {
        self.prompt_pending = false;
        self.summary = None;
    }

    /// Move the cursor for a cursor input. Other inputs are ignored.
    ///
    /// Horizontal moves wrap across rows; vertical moves stop at the edges.
    pub fn move_cursor(&mut self, input: GameInput) -> bool {
        let len = self.order.len();
        if len == 0 {
            return false;
        }
        let cols = self.columns.max(1) as usize;
        let next = match input {
            GameInput::CursorLeft => (self.cursor + len - 1) % len,
            GameInput::CursorRight => (self.cursor + 1) % len,
            GameInput::CursorUp => self.cursor.checked_sub(cols).unwrap_or(self.cursor),
            GameInput::CursorDown if self.cursor + cols < len => self.cursor + cols,
            _ => return false,
        };
        let moved = next != self.cursor;
        self.cursor = next;
        moved
    }

    /// Hash of everything drawn on screen for this phase.
    pub fn fingerprint(&self, phase: Phase) -> u64 {
        let mut hasher = DefaultHasher::new();
        phase.hash(&mut hasher);
        self.tiles.hash(&mut hasher);
        self.order.hash(&mut hasher);
        self.cursor.hash(&mut hasher);
        self.moves.hash(&mut hasher);
        self.score.hash(&mut hasher);
        self.elapsed.hash(&mut hasher);
        self.summary.map(|s| (s.moves, s.score, s.elapsed_ms)).hash(&mut hasher);
        self.prompt_pending.hash(&mut hasher);
        hasher.finish()
    }

    fn tile_mut(&mut self, card: CardHandle) -> Option<&mut Tile> {
        self.tiles.get_mut(card.index())
    }
}

impl BoardView for TermBoard {
    fn reveal(&mut self, card: CardHandle) {
        if let Some(tile) = self.tile_mut(card) {
            tile.face_up = true;
        }
    }

    fn conceal(&mut self, card: CardHandle) {
        if let Some(tile) = self.tile_mut(card) {
            tile.face_up = false;
        }
    }

    fn retire(&mut self, card: CardHandle) {
        if let Some(tile) = self.tile_mut(card) {
            tile.enabled = false;
        }
    }

    fn restore(&mut self, card: CardHandle) {
        if let Some(tile) = self.tile_mut(card) {
            tile.enabled = true;
        }
    }

    fn shuffle(&mut self, order: &[CardHandle]) {
        self.order = order.to_vec();
        if self.cursor >= self.order.len() {
            self.cursor = 0;
        }
    }

    fn set_moves(&mut self, moves: u32) {
        self.moves = moves;
    }

    fn set_score(&mut self, score: u32) {
        self.score = score;
    }

    fn set_elapsed(&mut self, text: &str) {
        self.elapsed.clear();
        self.elapsed.push_str(text);
    }

    fn show_summary(&mut self, summary: &GameSummary) {
        self.summary = Some(*summary);
    }

    fn request_restart(&mut self) {
        self.prompt_pending = true;
    }
}

/// Route one player input to the cursor or the controller.
///
/// Returns `true` when the input changed anything.
pub fn apply_input(game: &mut GameController<TermBoard>, input: GameInput) -> bool {
    match input {
        GameInput::CursorLeft
        | GameInput::CursorRight
        | GameInput::CursorUp
        | GameInput::CursorDown => game.view_mut().move_cursor(input),
        GameInput::Select => match game.view().card_under_cursor() {
            Some(card) => !matches!(game.select_card(card), Selection::Ignored(_)),
            None => false,
        },
        GameInput::Start => {
            let started = game.start_game();
            if started {
                game.view_mut().answer_prompt();
            }
            started
        }
        GameInput::Reset => {
            game.reset_game();
            true
        }
        GameInput::Confirm | GameInput::Decline => {
            let answered = game.confirm_restart(input == GameInput::Confirm);
            if answered {
                game.view_mut().answer_prompt();
            }
            answered
        }
    }
}

/// Smallest square-ish grid width that fits `len` cards.
fn columns_for(len: usize) -> u16 {
    let mut cols = 1usize;
    while cols * cols < len {
        cols += 1;
    }
    cols as u16
}
