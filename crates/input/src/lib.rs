//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::Command`] and tracks the soft
//! drop key so press/release pairs become `SoftDropStart`/`SoftDropStop`,
//! including on terminals that never report key releases.

pub mod handler;
pub mod map;

pub use term_tetris_types as types;

pub use handler::InputHandler;
pub use map::{is_soft_drop_key, map_key, should_quit};
