//! Typed errors for deck construction and configuration.
//!
//! Gameplay itself has no error path: invalid selections are rejected with a
//! [`crate::controller::Reason`] instead.

use memory_match_types::CardFace;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeckError {
    #[error("deck has no cards")]
    Empty,
    #[error("deck has an odd number of cards ({0})")]
    OddCount(usize),
    #[error("face {face} appears {count} times, expected exactly 2")]
    FaceCount { face: CardFace, count: usize },
    #[error("deck has {0} cards, more than a handle can address")]
    TooLarge(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{var}: cannot parse {value:?} as a number")]
    NotANumber { var: &'static str, value: String },
    #[error("{var}: {value} is out of range ({min}..={max})")]
    OutOfRange {
        var: &'static str,
        value: u64,
        min: u64,
        max: u64,
    },
}
