//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameInput`]. The game has
//! no held-key behaviour, so every press maps to at most one input and key
//! repeats and releases are left to the caller to discard.

pub mod map;

pub use memory_match_types as types;

pub use map::{handle_key_event, should_quit};
