//! Notification interface for audio/UI collaborators.
//!
//! The engine queues [`GameEvent`]s as they happen; the host drains them into
//! whatever listener it has (sound effects, status line, high-score writer).
//! Delivery is fire-and-forget: the engine never looks at the outcome.

use crate::types::GameEvent;

/// Receiver for engine notifications. Every method defaults to a no-op so a
/// listener only implements what it cares about.
pub trait GameListener {
    fn on_piece_locked(&mut self) {}

    fn on_lines_cleared(&mut self, _count: u32) {}

    fn on_game_over(&mut self) {}
}

/// Route one event to the matching listener method.
pub fn dispatch(event: GameEvent, listener: &mut impl GameListener) {
    match event {
        GameEvent::PieceLocked => listener.on_piece_locked(),
        GameEvent::LinesCleared(count) => listener.on_lines_cleared(count),
        GameEvent::GameOver => listener.on_game_over(),
    }
}

/// Listener that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopListener;

impl GameListener for NoopListener {}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Counter {
        locks: u32,
        lines: u32,
        overs: u32,
    }

    impl GameListener for Counter {
        fn on_piece_locked(&mut self) {
            self.locks += 1;
        }

        fn on_lines_cleared(&mut self, count: u32) {
            self.lines += count;
        }

        fn on_game_over(&mut self) {
            self.overs += 1;
        }
    }

    #[test]
    fn dispatch_routes_each_event() {
        let mut c = Counter::default();
        dispatch(GameEvent::PieceLocked, &mut c);
        dispatch(GameEvent::LinesCleared(3), &mut c);
        dispatch(GameEvent::GameOver, &mut c);
        assert_eq!((c.locks, c.lines, c.overs), (1, 3, 1));
    }

    #[test]
    fn noop_listener_accepts_everything() {
        let mut l = NoopListener;
        dispatch(GameEvent::LinesCleared(2), &mut l);
    }
}
