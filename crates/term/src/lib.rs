//! Terminal presentation layer.
//!
//! A small, game-oriented rendering layer: snapshots are drawn into a plain
//! framebuffer which is then flushed to the terminal as a diff. It also owns
//! host-side tick pacing, since deciding *when* to tick is a presentation
//! concern and not part of the engine.
//!
//! Goals:
//! - Keep `core` deterministic and free of I/O
//! - Keep rendering pure and unit-testable (`GameView` does no I/O)
//! - Draw cells 2 chars wide to compensate for terminal glyph aspect ratio

pub mod cadence;
pub mod fb;
pub mod game_view;
pub mod renderer;

pub use term_tetris_core as core;
pub use term_tetris_types as types;

pub use cadence::TickCadence;
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{color_rgb, GameView, HudView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
