//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 is the top)
//! - **Spawn row**: -1 (the top row of a new piece sits just above the board)
//!
//! # Timing Constants
//!
//! The engine has no clock of its own. These values are defaults for the
//! host scheduler that decides when to call `tick()`:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_FPS` | 3 | Normal gravity ticks per second |
//! | `FAST_TICK_MS` | 50 | Tick period while soft drop is held |
//! | `LINE_SCORE` | 100 | Points per cleared row |
//!
//! # Examples
//!
//! ```
//! use term_tetris_types::{Command, ShapeKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let kind = ShapeKind::from_str("t").unwrap();
//! assert_eq!(kind, ShapeKind::T);
//!
//! let cmd = Command::from_str("moveLeft").unwrap();
//! assert_eq!(cmd, Command::MoveLeft);
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Row the anchor of a freshly spawned piece is placed on.
pub const SPAWN_Y: i8 = -1;

/// Normal gravity rate in ticks per second.
pub const DEFAULT_FPS: u32 = 3;

/// Tick period while soft drop is held.
pub const FAST_TICK_MS: u32 = 50;

/// Points awarded per cleared row (plain count, no multiplier table).
pub const LINE_SCORE: u32 = 100;

/// Number of distinct shapes and colors.
pub const KIND_COUNT: usize = 7;

/// Default tick period in milliseconds for a given gravity rate.
///
/// ```
/// use term_tetris_types::{tick_period_ms, DEFAULT_FPS};
///
/// assert_eq!(tick_period_ms(DEFAULT_FPS), 333);
/// assert_eq!(tick_period_ms(0), 1000);
/// ```
pub const fn tick_period_ms(fps: u32) -> u32 {
    if fps == 0 {
        1000
    } else {
        1000 / fps
    }
}

/// The seven tetromino shapes
///
/// Base orientations (rows top to bottom):
/// - **I**: `####`
/// - **T**: `###` over `.#.`
/// - **O**: `##` over `##`
/// - **Z**: `##.` over `.##`
/// - **S**: `.##` over `##.`
/// - **L**: `###` over `#..`
/// - **J**: `###` over `..#`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    I,
    T,
    O,
    Z,
    S,
    L,
    J,
}

impl ShapeKind {
    /// All shapes in canonical order.
    pub const ALL: [ShapeKind; KIND_COUNT] = [
        ShapeKind::I,
        ShapeKind::T,
        ShapeKind::O,
        ShapeKind::Z,
        ShapeKind::S,
        ShapeKind::L,
        ShapeKind::J,
    ];

    /// Shape for an index in `0..7`; wraps for larger values.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % KIND_COUNT]
    }

    /// Parse shape kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use term_tetris_types::ShapeKind;
    ///
    /// assert_eq!(ShapeKind::from_str("i"), Some(ShapeKind::I));
    /// assert_eq!(ShapeKind::from_str("O"), Some(ShapeKind::O));
    /// assert_eq!(ShapeKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(ShapeKind::I),
            "t" => Some(ShapeKind::T),
            "o" => Some(ShapeKind::O),
            "z" => Some(ShapeKind::Z),
            "s" => Some(ShapeKind::S),
            "l" => Some(ShapeKind::L),
            "j" => Some(ShapeKind::J),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::I => "i",
            ShapeKind::T => "t",
            ShapeKind::O => "o",
            ShapeKind::Z => "z",
            ShapeKind::S => "s",
            ShapeKind::L => "l",
            ShapeKind::J => "j",
        }
    }
}

/// Block colors, drawn independently of the shape.
///
/// Colors only matter for rendering; gameplay treats every filled cell alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Cyan,
    Blue,
    Orange,
    Yellow,
    Green,
    Purple,
    Red,
}

impl Color {
    /// All colors in palette order.
    pub const ALL: [Color; KIND_COUNT] = [
        Color::Cyan,
        Color::Blue,
        Color::Orange,
        Color::Yellow,
        Color::Green,
        Color::Purple,
        Color::Red,
    ];

    /// Color for an index in `0..7`; wraps for larger values.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % KIND_COUNT]
    }

    /// Palette index in `0..7`.
    pub fn index(&self) -> usize {
        match self {
            Color::Cyan => 0,
            Color::Blue => 1,
            Color::Orange => 2,
            Color::Yellow => 3,
            Color::Green => 4,
            Color::Purple => 5,
            Color::Red => 6,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Cyan => "cyan",
            Color::Blue => "blue",
            Color::Orange => "orange",
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::Purple => "purple",
            Color::Red => "red",
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(Color)`: Cell filled by a locked piece of that color
pub type Cell = Option<Color>;

/// Player commands accepted by the engine
///
/// Commands are only honoured while the game is running, except `Resume`
/// (only while paused) and `Restart` (any time).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Soft drop key pressed: switch to the fast tick cadence
    SoftDropStart,
    /// Soft drop key released
    SoftDropStop,
    /// Rotate piece 90° clockwise
    Rotate,
    Pause,
    Resume,
    /// Start over with an empty board
    Restart,
}

impl Command {
    /// Parse command from string (case-insensitive)
    ///
    /// Unknown input yields `None`; callers drop it.
    ///
    /// # Examples
    ///
    /// ```
    /// use term_tetris_types::Command;
    ///
    /// assert_eq!(Command::from_str("moveLeft"), Some(Command::MoveLeft));
    /// assert_eq!(Command::from_str("SOFTDROPSTART"), Some(Command::SoftDropStart));
    /// assert_eq!(Command::from_str("hardDrop"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(Command::MoveLeft),
            "moveright" => Some(Command::MoveRight),
            "softdropstart" => Some(Command::SoftDropStart),
            "softdropstop" => Some(Command::SoftDropStop),
            "rotate" => Some(Command::Rotate),
            "pause" => Some(Command::Pause),
            "resume" => Some(Command::Resume),
            "restart" => Some(Command::Restart),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::SoftDropStart => "softDropStart",
            Command::SoftDropStop => "softDropStop",
            Command::Rotate => "rotate",
            Command::Pause => "pause",
            Command::Resume => "resume",
            Command::Restart => "restart",
        }
    }
}

/// Engine state machine phase
///
/// `Running` is initial. `Paused` toggles with `Running`. `GameOver` is
/// terminal until an explicit restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    Running,
    Paused,
    GameOver,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Running => "running",
            Phase::Paused => "paused",
            Phase::GameOver => "gameOver",
        }
    }
}

/// Notification emitted by the engine for audio/UI collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// The falling piece was merged into the board.
    PieceLocked,
    /// One or more rows were cleared by the last lock.
    LinesCleared(u32),
    /// A new piece could not be placed at spawn.
    GameOver,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_timing_matches_classic_cadence() {
        assert_eq!(tick_period_ms(DEFAULT_FPS), 333);
        assert_eq!(FAST_TICK_MS, 50);
        assert_eq!(LINE_SCORE, 100);
    }

    #[test]
    fn color_index_roundtrips_through_from_index() {
        for (i, color) in Color::ALL.iter().enumerate() {
            assert_eq!(color.index(), i);
            assert_eq!(Color::from_index(i), *color);
        }
    }

    #[test]
    fn command_strings_parse_back() {
        for cmd in [
            Command::MoveLeft,
            Command::MoveRight,
            Command::SoftDropStart,
            Command::SoftDropStop,
            Command::Rotate,
            Command::Pause,
            Command::Resume,
            Command::Restart,
        ] {
            assert_eq!(Command::from_str(cmd.as_str()), Some(cmd));
        }
    }

    #[test]
    fn phase_defaults_to_running() {
        assert_eq!(Phase::default(), Phase::Running);
    }
}
