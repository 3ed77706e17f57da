//! Read-only, serializable view of a controller.

use serde::Serialize;

use crate::view::GameSummary;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardSnapshot {
    pub handle: u16,
    pub face: u16,
    pub visibility: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub phase: &'static str,
    pub moves: u32,
    pub score: u32,
    pub elapsed_ms: u64,
    pub timer_running: bool,
    pub timer_session: u32,
    pub pending_resolution_ms: u32,
    /// Handles in display order.
    pub order: Vec<u16>,
    pub selected: Vec<u16>,
    /// Cards in handle order.
    pub cards: Vec<CardSnapshot>,
    pub summary: Option<GameSummary>,
}

impl GameSnapshot {
    pub fn matched_count(&self) -> usize {
        self.cards
            .iter()
            .filter(|c| c.visibility == "matched")
            .count()
    }

    pub fn playable(&self) -> bool {
        self.phase == "selecting"
    }
}
