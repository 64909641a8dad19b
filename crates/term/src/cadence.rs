//! Host-side tick pacing.
//!
//! The engine has no clock; the host decides when to call `tick()`. The
//! cadence is a fixed period derived from the gravity rate, with a shorter
//! period while the engine reports `fast_mode` (soft drop held).

use crate::types::{tick_period_ms, DEFAULT_FPS, FAST_TICK_MS};

#[derive(Debug, Clone)]
pub struct TickCadence {
    normal_ms: u64,
    fast_ms: u64,
    last_tick_ms: u64,
}

impl TickCadence {
    /// Cadence for a gravity rate in ticks per second and a fast period.
    pub fn new(fps: u32, fast_ms: u32) -> Self {
        Self {
            normal_ms: tick_period_ms(fps) as u64,
            fast_ms: fast_ms.max(1) as u64,
            last_tick_ms: 0,
        }
    }

    /// Period to wait between ticks in the given mode.
    pub fn period_ms(&self, fast_mode: bool) -> u64 {
        if fast_mode {
            self.fast_ms
        } else {
            self.normal_ms
        }
    }

    /// Milliseconds until the next tick is due (0 if already due).
    pub fn remaining_ms(&self, now_ms: u64, fast_mode: bool) -> u64 {
        (self.last_tick_ms + self.period_ms(fast_mode)).saturating_sub(now_ms)
    }

    /// Whether a tick is due at `now_ms`. Re-arms from `now_ms` when it is.
    ///
    /// Deadlines are measured from the last tick, so entering fast mode
    /// shortens the current wait instead of waiting out the normal period.
    pub fn due(&mut self, now_ms: u64, fast_mode: bool) -> bool {
        if now_ms.saturating_sub(self.last_tick_ms) >= self.period_ms(fast_mode) {
            self.last_tick_ms = now_ms;
            return true;
        }
        false
    }

    /// Restart the period from `now_ms` (after resume or restart).
    pub fn reset(&mut self, now_ms: u64) {
        self.last_tick_ms = now_ms;
    }
}

impl Default for TickCadence {
    fn default() -> Self {
        Self::new(DEFAULT_FPS, FAST_TICK_MS)
    }
}
