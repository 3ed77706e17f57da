//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the rules of the memory-matching game: the deck, the
//! turn state machine, scoring and the game clock. It has **no dependencies**
//! on terminals or input devices; presentation happens behind the
//! [`BoardView`] trait.
//!
//! - **Deterministic**: Same seed produces the same layouts
//! - **Testable**: Time only moves when [`GameController::tick`] is called
//! - **Portable**: Any front end that implements [`BoardView`] can drive it
//!
//! # Module Structure
//!
//! - [`deck`]: Cards, visibility, display order, construction-time validation
//! - [`controller`]: Turn state machine (select, match, mismatch window, win, reset)
//! - [`timer`]: Stopwatch with `HH:MM:SS` display ticks
//! - [`scoring`]: Flat points per confirmed pair
//! - [`rng`]: Seeded shuffling for the display order
//! - [`view`]: The Board View contract and the win summary
//! - [`config`]: Environment-based configuration
//! - [`snapshot`]: Serializable read-only state
//!
//! # Game Rules
//!
//! - A turn reveals two distinct cards. Each completed turn is one move.
//! - A pair with the same face stays up and scores 25 points.
//! - A mismatch stays up for 1 second, during which the board is locked.
//! - Revealing every pair wins; the clock stops and a summary is shown.
//!
//! # Example
//!
//! ```
//! use memory_match_core::{Deck, GameController, NullView, Rules, Selection};
//! use memory_match_core::types::{CardFace, CardHandle};
//!
//! let a = CardFace::new(0);
//! let b = CardFace::new(1);
//! let deck = Deck::new(vec![a, b, a, b]).unwrap();
//! let mut game = GameController::new(deck, NullView, Rules::default(), 42);
//!
//! game.start_game();
//! game.select_card(CardHandle::new(0));
//! assert_eq!(game.select_card(CardHandle::new(2)), Selection::Matched { won: false });
//! assert_eq!(game.score(), 25);
//! ```
//!
//! # Timing
//!
//! Call [`GameController::tick`] every frame with the elapsed milliseconds.
//! The same tick drives the clock and the mismatch window.

pub mod config;
pub mod controller;
pub mod deck;
pub mod error;
pub mod rng;
pub mod scoring;
pub mod snapshot;
pub mod timer;
pub mod view;

pub use memory_match_types as types;

// Re-export commonly used types for convenience
pub use config::{GameConfig, Rules};
pub use controller::{GameController, Reason, Selection};
pub use deck::{Card, Deck};
pub use error::{ConfigError, DeckError};
pub use rng::SimpleRng;
pub use scoring::{score_for_match, score_for_pairs};
pub use snapshot::{CardSnapshot, GameSnapshot};
pub use timer::{format_hms, ElapsedTime, Stopwatch, ZERO_TIME};
pub use view::{BoardView, GameSummary, NullView};
