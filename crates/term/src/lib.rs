//! Terminal front end for the memory-match game.
//!
//! A small game-oriented rendering layer: the controller drives a
//! [`TermBoard`] through the `BoardView` trait, [`GameView`] turns that board
//! into a framebuffer, and [`TerminalRenderer`] flushes framebuffers to the
//! terminal with diffing.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep drawing pure so it can be tested without a terminal
//! - Redraw only when something on screen actually changed

pub mod board;
pub mod fb;
pub mod game_view;
pub mod render_throttle;
pub mod renderer;

pub use memory_match_core as core;
pub use memory_match_types as types;

pub use board::{apply_input, TermBoard, Tile};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use render_throttle::RenderThrottle;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
