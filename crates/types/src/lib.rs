//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval of the runner loop |
//! | `TIMER_PERIOD_MS` | 1000 | Stopwatch display refresh period |
//! | `MISMATCH_DELAY_MS` | 1000 | How long a mismatched pair stays face up |
//!
//! # Examples
//!
//! ```
//! use memory_match_types::{CardFace, CardHandle, Visibility};
//!
//! let face = CardFace::new(2);
//! assert_eq!(face.symbol(), 'C');
//!
//! let handle = CardHandle::new(5);
//! assert_eq!(handle.index(), 5);
//!
//! assert!(Visibility::Matched.is_terminal());
//! assert!(!Visibility::Revealed.is_terminal());
//! ```

use std::fmt;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Stopwatch refresh period (1 second)
pub const TIMER_PERIOD_MS: u32 = 1000;

/// Delay before a mismatched pair is turned face down again
pub const MISMATCH_DELAY_MS: u32 = 1000;

/// Points awarded for each confirmed pair
pub const MATCH_SCORE_INCREMENT: u32 = 25;

/// Default number of pairs on the board (4x4 grid)
pub const DEFAULT_PAIRS: usize = 8;

/// Largest supported number of pairs (one per letter)
pub const MAX_PAIRS: usize = 26;

/// Hidden identity shared by exactly two cards of a deck.
///
/// The value is opaque to the game rules: only equality matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardFace(u16);

impl CardFace {
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    pub const fn id(self) -> u16 {
        self.0
    }

    /// Letter used by text front ends to draw the face (`A`..`Z`).
    pub fn symbol(self) -> char {
        if self.0 < MAX_PAIRS as u16 {
            (b'A' + self.0 as u8) as char
        } else {
            '?'
        }
    }
}

impl fmt::Display for CardFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Stable address of a card within its deck.
///
/// Handles index the deck in construction order and never change when the
/// display order is shuffled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardHandle(u16);

impl CardHandle {
    pub const fn new(index: u16) -> Self {
        Self(index)
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for CardHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Per-card visibility state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Visibility {
    #[default]
    Hidden,
    Revealed,
    Matched,
}

impl Visibility {
    /// Matched cards never go back to hidden within a game.
    pub fn is_terminal(self) -> bool {
        matches!(self, Visibility::Matched)
    }

    pub fn is_face_up(self) -> bool {
        !matches!(self, Visibility::Hidden)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Visibility::Hidden => "hidden",
            Visibility::Revealed => "revealed",
            Visibility::Matched => "matched",
        }
    }
}

/// Controller phase.
///
/// `NotStarted`, `Won` and `AwaitingRestart` all reject selections; the last
/// two additionally wait for an answer to the restart prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    NotStarted,
    Selecting,
    Resolving,
    Won,
    AwaitingRestart,
}

impl Phase {
    pub fn accepts_selection(self) -> bool {
        matches!(self, Phase::Selecting)
    }

    pub fn awaits_restart_answer(self) -> bool {
        matches!(self, Phase::Won | Phase::AwaitingRestart)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Phase::NotStarted => "notStarted",
            Phase::Selecting => "selecting",
            Phase::Resolving => "resolving",
            Phase::Won => "won",
            Phase::AwaitingRestart => "awaitingRestart",
        }
    }
}

/// Player intents produced by an input surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameInput {
    CursorLeft,
    CursorRight,
    CursorUp,
    CursorDown,
    Select,
    Start,
    Reset,
    Confirm,
    Decline,
}

impl GameInput {
    /// Parse an input name (camelCase, as used in logs)
    ///
    /// # Examples
    ///
    /// ```
    /// use memory_match_types::GameInput;
    ///
    /// assert_eq!(GameInput::from_str("cursorLeft"), Some(GameInput::CursorLeft));
    /// assert_eq!(GameInput::from_str("select"), Some(GameInput::Select));
    /// assert_eq!(GameInput::from_str("jump"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "cursorLeft" => Some(GameInput::CursorLeft),
            "cursorRight" => Some(GameInput::CursorRight),
            "cursorUp" => Some(GameInput::CursorUp),
            "cursorDown" => Some(GameInput::CursorDown),
            "select" => Some(GameInput::Select),
            "start" => Some(GameInput::Start),
            "reset" => Some(GameInput::Reset),
            "confirm" => Some(GameInput::Confirm),
            "decline" => Some(GameInput::Decline),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GameInput::CursorLeft => "cursorLeft",
            GameInput::CursorRight => "cursorRight",
            GameInput::CursorUp => "cursorUp",
            GameInput::CursorDown => "cursorDown",
            GameInput::Select => "select",
            GameInput::Start => "start",
            GameInput::Reset => "reset",
            GameInput::Confirm => "confirm",
            GameInput::Decline => "decline",
        }
    }
}
