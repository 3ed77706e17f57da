//! Board View - the presentation boundary driven by the controller
//!
//! The controller never draws anything. It issues the commands below and a
//! front end (terminal, GUI, test double) decides how they look. Selections and
//! restart answers flow the other way, as calls on the controller.

use std::fmt;

use serde::Serialize;

use crate::timer::ElapsedTime;
use crate::types::CardHandle;

/// Final result of a won game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSummary {
    pub moves: u32,
    pub score: u32,
    pub elapsed_ms: u64,
}

impl GameSummary {
    pub fn elapsed(&self) -> ElapsedTime {
        ElapsedTime(std::time::Duration::from_millis(self.elapsed_ms))
    }
}

impl fmt::Display for GameSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Moves: {} | Score: {} | Time: {}",
            self.moves,
            self.score,
            self.elapsed()
        )
    }
}

/// Commands the controller issues to whatever presents the board.
pub trait BoardView {
    /// Show a card's face.
    fn reveal(&mut self, card: CardHandle);
    /// Turn a card face down again.
    fn conceal(&mut self, card: CardHandle);
    /// Disable input on a matched card. Idempotent.
    fn retire(&mut self, card: CardHandle);
    /// Re-enable input on a card after a reset. Idempotent.
    fn restore(&mut self, card: CardHandle);
    /// Lay the cards out in a new display order (handles, first to last).
    fn shuffle(&mut self, order: &[CardHandle]);

    fn set_moves(&mut self, moves: u32);
    fn set_score(&mut self, score: u32);
    fn set_elapsed(&mut self, text: &str);

    /// Shown once per won game.
    fn show_summary(&mut self, summary: &GameSummary);
    /// Ask the player whether to start a new game. The answer comes back
    /// through `GameController::confirm_restart`.
    fn request_restart(&mut self);
}

/// A view that ignores every command. Useful for headless runs and benches.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullView;

impl BoardView for NullView {
    fn reveal(&mut self, _card: CardHandle) {}
    fn conceal(&mut self, _card: CardHandle) {}
    fn retire(&mut self, _card: CardHandle) {}
    fn restore(&mut self, _card: CardHandle) {}
    fn shuffle(&mut self, _order: &[CardHandle]) {}
    fn set_moves(&mut self, _moves: u32) {}
    fn set_score(&mut self, _score: u32) {}
    fn set_elapsed(&mut self, _text: &str) {}
    fn show_summary(&mut self, _summary: &GameSummary) {}
    fn request_restart(&mut self) {}
}
