//! Terminal Tetris (workspace facade crate).
//!
//! The engine, input mapping, terminal rendering and persistence live in
//! dedicated crates under `crates/`; this package re-exports them as
//! `term_tetris::{core,input,store,term,types}` and owns the host-level
//! configuration and logging setup used by the binary.

pub mod config;
pub mod logging;

pub use term_tetris_core as core;
pub use term_tetris_input as input;
pub use term_tetris_store as store;
pub use term_tetris_term as term;
pub use term_tetris_types as types;

pub use config::GameConfig;
