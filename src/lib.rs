//! Memory match (workspace facade crate).
//!
//! Exposes `memory_match::{core,input,term,types}` while the implementation
//! lives in dedicated crates under `crates/`.

pub use memory_match_core as core;
pub use memory_match_input as input;
pub use memory_match_term as term;
pub use memory_match_types as types;
