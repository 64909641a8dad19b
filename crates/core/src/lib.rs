//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **zero dependencies** on UI, audio, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Every rule is reachable from plain unit tests
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//! - **Fast**: No allocation on the tick path
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 game board, occupancy queries, merging and line clearing
//! - [`pieces`]: Tetromino shapes, geometric rotation, collision, shadow
//! - [`rng`]: Seeded LCG and the independent shape/color piece generator
//! - [`game_state`]: The engine: tick, commands, scoring, game over
//! - [`snapshot`]: Read-only render contract
//! - [`events`]: Notification listener for sound and UI collaborators
//!
//! # Game Rules
//!
//! - **Random pieces**: Shape and color are drawn independently and uniformly
//! - **Rotation**: Clockwise 90° about the bounding box, no wall kicks
//! - **Gravity**: One row per tick; a piece that cannot fall locks on that tick
//! - **Scoring**: 100 points per cleared row
//! - **Game over**: A freshly spawned piece overlaps the stack
//!
//! # Example
//!
//! ```
//! use term_tetris_core::GameState;
//! use term_tetris_types::{Command, Phase};
//!
//! let mut game = GameState::new(12345);
//!
//! game.apply_command(Command::MoveRight);
//! game.apply_command(Command::Rotate);
//! game.tick();
//!
//! let snap = game.snapshot();
//! assert_eq!(snap.phase, Phase::Running);
//! assert_eq!(snap.score, 0);
//! ```
//!
//! # Timing
//!
//! The engine has no clock. The host calls [`GameState::tick`](game_state::GameState::tick)
//! every `1000 / FPS` ms (333 ms by default) and every 50 ms while
//! [`GameState::fast_mode`](game_state::GameState::fast_mode) is set.

pub mod board;
pub mod events;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod snapshot;

pub use term_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use events::{GameListener, NoopListener};
pub use game_state::GameState;
pub use pieces::{check_collision, shadow, try_rotate, Piece, Shape};
pub use rng::{PieceGenerator, SimpleRng};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
