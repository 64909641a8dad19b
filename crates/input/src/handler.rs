//! Soft drop hold tracking for terminal environments.
//!
//! The engine wants a `SoftDropStart` when the drop key goes down and a
//! `SoftDropStop` when it comes up. Many terminals never report key releases
//! and instead resend presses while a key is held, so a release is inferred
//! once no press has arrived for a short timeout.

use std::time::{Duration, Instant};

use crossterm::event::KeyCode;

use crate::map::{is_soft_drop_key, map_key};
use crate::types::{Command, Phase};

// Slightly longer than a typical key auto-repeat interval once repeating has
// started; shorter than the initial repeat delay, so a long hold may briefly
// release and re-engage.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 150;

/// Tracks whether the soft drop key is held.
#[derive(Debug, Clone)]
pub struct InputHandler {
    down_held: bool,
    last_down_time: Instant,
    key_release_timeout_ms: u32,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            down_held: false,
            last_down_time: Instant::now(),
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn key_release_timeout_ms(&self) -> u32 {
        self.key_release_timeout_ms
    }

    pub fn soft_drop_held(&self) -> bool {
        self.down_held
    }

    /// Translate a key press (or terminal auto-repeat) into a command.
    ///
    /// Repeated presses of the drop key while it is held produce nothing.
    pub fn handle_key_press(&mut self, code: KeyCode, phase: Phase) -> Option<Command> {
        if is_soft_drop_key(code) {
            self.last_down_time = Instant::now();
            if self.down_held || phase != Phase::Running {
                return None;
            }
            self.down_held = true;
            return Some(Command::SoftDropStart);
        }
        map_key(code, phase)
    }

    /// Translate a key release. Only the drop key has a release command.
    pub fn handle_key_release(&mut self, code: KeyCode) -> Option<Command> {
        if is_soft_drop_key(code) && self.down_held {
            self.down_held = false;
            return Some(Command::SoftDropStop);
        }
        None
    }

    /// Infer a release for terminals that do not report one.
    pub fn update(&mut self) -> Option<Command> {
        self.update_at(Instant::now())
    }

    /// [`InputHandler::update`] with an explicit clock reading.
    pub fn update_at(&mut self, now: Instant) -> Option<Command> {
        let timeout = Duration::from_millis(self.key_release_timeout_ms as u64);
        if self.down_held && now.saturating_duration_since(self.last_down_time) > timeout {
            self.down_held = false;
            return Some(Command::SoftDropStop);
        }
        None
    }

    /// Forget any held key (e.g. after a restart or pause).
    pub fn reset(&mut self) {
        self.down_held = false;
        self.last_down_time = Instant::now();
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_press_starts_soft_drop_repeats_do_not() {
        let mut ih = InputHandler::new();
        assert_eq!(
            ih.handle_key_press(KeyCode::Down, Phase::Running),
            Some(Command::SoftDropStart)
        );
        assert_eq!(ih.handle_key_press(KeyCode::Down, Phase::Running), None);
        assert!(ih.soft_drop_held());
    }

    #[test]
    fn test_release_stops_soft_drop_once() {
        let mut ih = InputHandler::new();
        ih.handle_key_press(KeyCode::Down, Phase::Running);
        assert_eq!(ih.handle_key_release(KeyCode::Down), Some(Command::SoftDropStop));
        assert_eq!(ih.handle_key_release(KeyCode::Down), None);
        assert_eq!(ih.handle_key_release(KeyCode::Left), None);
    }

    #[test]
    fn test_auto_release_after_timeout_without_key_release_events() {
        let mut ih = InputHandler::new().with_key_release_timeout_ms(50);
        ih.handle_key_press(KeyCode::Down, Phase::Running);

        // Simulate no key-release events by moving the last key time into the past.
        ih.last_down_time = Instant::now() - Duration::from_millis(51);

        assert_eq!(ih.update(), Some(Command::SoftDropStop));
        assert!(!ih.soft_drop_held());
        assert_eq!(ih.update(), None);
    }

    #[test]
    fn test_repeats_keep_soft_drop_alive() {
        let mut ih = InputHandler::new().with_key_release_timeout_ms(50);
        let start = Instant::now();
        ih.handle_key_press(KeyCode::Down, Phase::Running);
        ih.handle_key_press(KeyCode::Down, Phase::Running);

        assert_eq!(ih.update_at(start + Duration::from_millis(10)), None);
        assert!(ih.soft_drop_held());
    }

    #[test]
    fn test_non_drop_keys_pass_through_mapping() {
        let mut ih = InputHandler::new();
        assert_eq!(
            ih.handle_key_press(KeyCode::Left, Phase::Running),
            Some(Command::MoveLeft)
        );
        assert_eq!(
            ih.handle_key_press(KeyCode::Char('p'), Phase::Paused),
            Some(Command::Resume)
        );
        assert!(!ih.soft_drop_held());
    }

    #[test]
    fn test_drop_key_ignored_while_paused() {
        let mut ih = InputHandler::new();
        assert_eq!(ih.handle_key_press(KeyCode::Down, Phase::Paused), None);
        assert!(!ih.soft_drop_held());
    }

    #[test]
    fn test_default_key_release_timeout_is_non_zero() {
        let ih = InputHandler::new();
        assert!(ih.key_release_timeout_ms() > 0);
    }

    #[test]
    fn test_reset_clears_held_state() {
        let mut ih = InputHandler::new();
        ih.handle_key_press(KeyCode::Down, Phase::Running);
        ih.reset();
        assert!(!ih.soft_drop_held());
        assert_eq!(ih.handle_key_release(KeyCode::Down), None);
    }
}
