//! Scoring module - points per confirmed pair
//!
//! Scoring is a flat increment per match. There is no penalty for misses and
//! no time bonus, so the score only ever goes up within a game.

use crate::types::MATCH_SCORE_INCREMENT;

/// Score after one more confirmed pair.
///
/// # Examples
///
/// ```
/// use memory_match_core::scoring::score_for_match;
///
/// assert_eq!(score_for_match(0, 25), 25);
/// assert_eq!(score_for_match(50, 25), 75);
/// ```
pub fn score_for_match(current: u32, increment: u32) -> u32 {
    current.saturating_add(increment)
}

/// Score for `pairs` confirmed pairs with the default increment.
pub fn score_for_pairs(pairs: u32) -> u32 {
    pairs.saturating_mul(MATCH_SCORE_INCREMENT)
}
