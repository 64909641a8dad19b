//! Game state module - the engine
//!
//! Ties together board, pieces, RNG and scoring. The host drives it with
//! three calls: [`GameState::tick`] on a fixed schedule,
//! [`GameState::apply_command`] on player input and [`GameState::snapshot`]
//! after every mutation. There is no internal timer; the host reads
//! [`GameState::fast_mode`] to decide how often to tick.

use arrayvec::ArrayVec;
use tracing::{debug, info, trace};

use crate::events::{dispatch, GameListener};
use crate::pieces::{check_collision, drop_distance, shadow, try_rotate, Piece};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::*;
use crate::{Board, PieceGenerator};

/// Pending notifications kept until the host drains them.
const EVENT_CAPACITY: usize = 32;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: Piece,
    generator: PieceGenerator,
    phase: Phase,
    score: u32,
    /// Soft drop held: the host should tick on the fast cadence.
    fast_mode: bool,
    pieces_locked: u32,
    lines_cleared: u32,
    events: ArrayVec<GameEvent, EVENT_CAPACITY>,
}

impl GameState {
    /// Create a new running game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        let mut generator = PieceGenerator::new(seed);
        let active = generator.spawn();
        Self::with_parts(Board::new(), active, generator)
    }

    /// Start from a prepared board and falling piece.
    ///
    /// Later pieces come from `seed`. Useful for puzzles, replays and tests.
    pub fn from_parts(board: Board, active: Piece, seed: u32) -> Self {
        Self::with_parts(board, active, PieceGenerator::new(seed))
    }

    fn with_parts(board: Board, active: Piece, generator: PieceGenerator) -> Self {
        Self {
            board,
            active,
            generator,
            phase: Phase::Running,
            score: 0,
            fast_mode: false,
            pieces_locked: 0,
            lines_cleared: 0,
            events: ArrayVec::new(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn paused(&self) -> bool {
        self.phase == Phase::Paused
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn fast_mode(&self) -> bool {
        self.fast_mode
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    pub fn active(&self) -> Piece {
        self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current RNG state, enough to reproduce the upcoming piece sequence.
    pub fn seed(&self) -> u32 {
        self.generator.seed()
    }

    /// Would the active piece collide if moved by (dx, dy)?
    pub fn check_collision(&self, dx: i8, dy: i8) -> bool {
        check_collision(&self.board, &self.active, dx, dy)
    }

    /// Landing projection of the active piece (rendering only).
    pub fn shadow(&self) -> Piece {
        shadow(&self.board, &self.active)
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);

        out.active = ActiveSnapshot::from(self.active);
        out.shadow_y = self.active.y + drop_distance(&self.board, &self.active);
        out.score = self.score;
        out.phase = self.phase;
        out.fast_mode = self.fast_mode;
        out.pieces_locked = self.pieces_locked;
        out.lines_cleared = self.lines_cleared;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Advance one gravity step.
    ///
    /// Moves the piece down a row if it can; otherwise locks it, clears full
    /// rows, scores them and spawns the next piece. Returns false when the
    /// game is not running (nothing happened).
    pub fn tick(&mut self) -> bool {
        if self.phase != Phase::Running {
            return false;
        }

        if !self.check_collision(0, 1) {
            self.active.y += 1;
            trace!(x = self.active.x, y = self.active.y, "piece fell");
            return true;
        }

        self.lock_piece();
        true
    }

    /// Merge the resting piece, clear rows and spawn the next piece.
    fn lock_piece(&mut self) {
        self.board.merge(&self.active);
        self.pieces_locked = self.pieces_locked.wrapping_add(1);
        debug!(
            kind = self.active.kind.as_str(),
            x = self.active.x,
            y = self.active.y,
            "piece locked"
        );
        self.emit(GameEvent::PieceLocked);

        let cleared = self.board.clear_full_rows();
        if cleared > 0 {
            self.score = self.score.saturating_add(cleared * LINE_SCORE);
            self.lines_cleared = self.lines_cleared.wrapping_add(cleared);
            debug!(cleared, score = self.score, "lines cleared");
            self.emit(GameEvent::LinesCleared(cleared));
        }

        self.active = self.generator.spawn();
        if self.check_collision(0, 0) {
            self.phase = Phase::GameOver;
            self.fast_mode = false;
            info!(score = self.score, pieces = self.pieces_locked, "game over");
            self.emit(GameEvent::GameOver);
        }
    }

    fn emit(&mut self, event: GameEvent) {
        if self.events.try_push(event).is_err() {
            trace!(?event, "event queue full, dropping");
        }
    }

    /// Try to shift the active piece horizontally.
    fn try_shift(&mut self, dx: i8) -> bool {
        if self.check_collision(dx, 0) {
            return false;
        }
        self.active.x += dx;
        true
    }

    fn try_rotate(&mut self) -> bool {
        match try_rotate(&self.board, &self.active) {
            Some(rotated) => {
                self.active = rotated;
                true
            }
            None => false,
        }
    }

    /// Start a fresh game: empty board, new piece, zero score.
    ///
    /// The piece sequence continues from the current RNG state.
    pub fn restart(&mut self) {
        let mut generator = self.generator.clone();
        let active = generator.spawn();
        *self = Self::with_parts(Board::new(), active, generator);
        info!("game restarted");
    }

    /// Apply a player command
    ///
    /// Returns whether the state changed. Commands that do not apply to the
    /// current phase are ignored.
    pub fn apply_command(&mut self, command: Command) -> bool {
        match (self.phase, command) {
            (_, Command::Restart) => {
                self.restart();
                true
            }
            (Phase::Running, Command::MoveLeft) => self.try_shift(-1),
            (Phase::Running, Command::MoveRight) => self.try_shift(1),
            (Phase::Running, Command::SoftDropStart) => {
                let was_fast = self.fast_mode;
                self.fast_mode = true;
                // Immediate nudge on press; locking is left to the next tick.
                if !self.check_collision(0, 1) {
                    self.active.y += 1;
                    return true;
                }
                !was_fast
            }
            (Phase::Running, Command::SoftDropStop) => {
                let changed = self.fast_mode;
                self.fast_mode = false;
                changed
            }
            (Phase::Running, Command::Rotate) => self.try_rotate(),
            (Phase::Running, Command::Pause) => {
                self.phase = Phase::Paused;
                // Key releases are not forwarded while paused.
                self.fast_mode = false;
                debug!("paused");
                true
            }
            (Phase::Paused, Command::Resume) => {
                self.phase = Phase::Running;
                debug!("resumed");
                true
            }
            _ => false,
        }
    }

    /// Take all pending notifications, oldest first.
    pub fn take_events(&mut self) -> ArrayVec<GameEvent, EVENT_CAPACITY> {
        std::mem::take(&mut self.events)
    }

    /// Deliver pending notifications to `listener`, oldest first.
    pub fn drain_events(&mut self, listener: &mut impl GameListener) {
        for event in self.take_events() {
            dispatch(event, listener);
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::Shape;

    fn piece(kind: ShapeKind, x: i8, y: i8) -> Piece {
        Piece::new(kind, Color::Green).at(x, y)
    }

    #[test]
    fn test_new_game_state() {
        let state = GameState::new(12345);

        assert_eq!(state.phase(), Phase::Running);
        assert_eq!(state.score(), 0);
        assert!(!state.fast_mode());
        assert_eq!(state.board().filled_count(), 0);
        assert_eq!(state.active().y, SPAWN_Y);
        assert!(!state.check_collision(0, 0));
    }

    #[test]
    fn test_tick_moves_piece_down() {
        let mut state = GameState::new(12345);
        let y = state.active().y;

        assert!(state.tick());
        assert_eq!(state.active().y, y + 1);
        assert!(state.take_events().is_empty());
    }

    #[test]
    fn test_tick_locks_resting_piece() {
        let mut state = GameState::from_parts(Board::new(), piece(ShapeKind::O, 0, 18), 7);

        assert!(state.tick());
        assert_eq!(state.board().get(0, 19), Some(Some(Color::Green)));
        assert_eq!(state.board().get(1, 18), Some(Some(Color::Green)));
        assert_eq!(state.pieces_locked(), 1);
        assert_eq!(state.active().y, SPAWN_Y);
        assert_eq!(state.take_events().as_slice(), &[GameEvent::PieceLocked]);
    }

    #[test]
    fn test_line_clear_scores_100_per_row() {
        let mut board = Board::new();
        board.fill_row_except(18, Some(Color::Red), &[0, 1]);
        board.fill_row_except(19, Some(Color::Red), &[0, 1]);
        let mut state = GameState::from_parts(board, piece(ShapeKind::O, 0, 18), 7);

        state.tick();

        assert_eq!(state.score(), 200);
        assert_eq!(state.lines_cleared(), 2);
        assert_eq!(state.board().filled_count(), 0);
        assert_eq!(
            state.take_events().as_slice(),
            &[GameEvent::PieceLocked, GameEvent::LinesCleared(2)]
        );
    }

    #[test]
    fn test_move_left_at_wall_is_noop() {
        let mut state = GameState::from_parts(Board::new(), piece(ShapeKind::T, 0, 5), 1);

        assert!(!state.apply_command(Command::MoveLeft));
        assert_eq!(state.active().x, 0);

        assert!(state.apply_command(Command::MoveRight));
        assert_eq!(state.active().x, 1);
    }

    #[test]
    fn test_rotate_rejected_against_wall() {
        // Vertical I at the right wall: rotating back to horizontal would
        // poke three cells past the edge.
        let vertical = Piece::new(ShapeKind::I, Color::Cyan).rotated().at(9, 5);
        let mut state = GameState::from_parts(Board::new(), vertical, 1);

        assert!(!state.apply_command(Command::Rotate));
        assert_eq!(state.active(), vertical);
    }

    #[test]
    fn test_rotate_accepted_in_open_space() {
        let mut state = GameState::from_parts(Board::new(), piece(ShapeKind::T, 4, 5), 1);

        assert!(state.apply_command(Command::Rotate));
        assert_eq!(state.active().shape, Shape::base(ShapeKind::T).rotated_cw());
        assert_eq!((state.active().x, state.active().y), (4, 5));
    }

    #[test]
    fn test_soft_drop_toggles_fast_mode_and_nudges() {
        let mut state = GameState::new(3);
        let y = state.active().y;

        assert!(state.apply_command(Command::SoftDropStart));
        assert!(state.fast_mode());
        assert_eq!(state.active().y, y + 1);

        assert!(state.apply_command(Command::SoftDropStop));
        assert!(!state.fast_mode());
        assert!(!state.apply_command(Command::SoftDropStop));
    }

    #[test]
    fn test_soft_drop_start_never_locks() {
        let mut state = GameState::from_parts(Board::new(), piece(ShapeKind::O, 0, 18), 1);

        state.apply_command(Command::SoftDropStart);
        assert_eq!(state.pieces_locked(), 0);
        assert_eq!(state.active().y, 18);
        assert!(state.fast_mode());
    }

    #[test]
    fn test_pause_blocks_ticks_and_commands() {
        let mut state = GameState::new(5);
        let before = state.active();

        assert!(state.apply_command(Command::Pause));
        assert!(state.paused());
        assert!(!state.tick());
        assert!(!state.apply_command(Command::MoveLeft));
        assert!(!state.apply_command(Command::Rotate));
        assert!(!state.apply_command(Command::Pause));
        assert_eq!(state.active(), before);

        assert!(state.apply_command(Command::Resume));
        assert_eq!(state.phase(), Phase::Running);
        assert!(!state.apply_command(Command::Resume));
    }

    #[test]
    fn test_pause_clears_fast_mode() {
        let mut state = GameState::new(5);
        state.apply_command(Command::SoftDropStart);
        state.apply_command(Command::Pause);
        assert!(!state.fast_mode());
    }

    /// A seed whose first piece is at least two rows tall; a flat I spawns
    /// entirely above the board and can never be blocked.
    fn tall_spawn_seed() -> u32 {
        (1..)
            .find(|&s| PieceGenerator::new(s).draw().0 != ShapeKind::I)
            .unwrap()
    }

    #[test]
    fn test_game_over_when_spawn_blocked() {
        let mut board = Board::new();
        // Rows 0 and 1 full except the far column: no piece fits at spawn.
        board.fill_row_except(0, Some(Color::Red), &[9]);
        board.fill_row_except(1, Some(Color::Red), &[9]);
        let mut state =
            GameState::from_parts(board, piece(ShapeKind::O, 8, 18), tall_spawn_seed());

        state.tick();

        assert_eq!(state.phase(), Phase::GameOver);
        assert_eq!(
            state.take_events().as_slice(),
            &[GameEvent::PieceLocked, GameEvent::GameOver]
        );

        // Terminal: ticks and commands do nothing.
        let board_before = state.board().clone();
        assert!(!state.tick());
        assert!(!state.apply_command(Command::MoveLeft));
        assert!(!state.apply_command(Command::Resume));
        assert_eq!(state.board(), &board_before);
        assert!(state.take_events().is_empty());
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut board = Board::new();
        board.fill_row_except(19, Some(Color::Red), &[0, 1]);
        board.fill_row_except(18, Some(Color::Red), &[0, 1]);
        let mut state = GameState::from_parts(board, piece(ShapeKind::O, 0, 18), 11);
        state.tick();
        state.apply_command(Command::Pause);
        assert_eq!(state.score(), 200);

        assert!(state.apply_command(Command::Restart));
        assert_eq!(state.phase(), Phase::Running);
        assert_eq!(state.score(), 0);
        assert_eq!(state.lines_cleared(), 0);
        assert_eq!(state.board().filled_count(), 0);
        assert!(state.take_events().is_empty());
        assert!(!state.check_collision(0, 0));
    }

    #[test]
    fn test_shadow_lands_on_floor() {
        let state = GameState::from_parts(Board::new(), piece(ShapeKind::O, 3, 0), 1);
        let ghost = state.shadow();
        assert_eq!(ghost.y, 18);
        assert_eq!(ghost.x, 3);
        // Pure: the real piece has not moved.
        assert_eq!(state.active().y, 0);
        assert_eq!(state.snapshot().shadow_y, 18);
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut board = Board::new();
        board.set(2, 19, Some(Color::Yellow));
        let state = GameState::from_parts(board, piece(ShapeKind::T, 4, 3), 1);

        let snap = state.snapshot();
        assert_eq!(snap.board[19][2], Color::Yellow.index() as u8 + 1);
        assert_eq!(snap.active.kind, ShapeKind::T);
        assert_eq!((snap.active.x, snap.active.y), (4, 3));
        assert_eq!(snap.phase, Phase::Running);
        assert_eq!(snap.score, 0);
    }

    #[test]
    fn test_drain_events_delivers_in_order() {
        #[derive(Default)]
        struct Log(Vec<&'static str>);
        impl GameListener for Log {
            fn on_piece_locked(&mut self) {
                self.0.push("locked");
            }
            fn on_lines_cleared(&mut self, _count: u32) {
                self.0.push("lines");
            }
            fn on_game_over(&mut self) {
                self.0.push("over");
            }
        }

        let mut board = Board::new();
        board.fill_row_except(19, Some(Color::Red), &[0, 1]);
        let mut state = GameState::from_parts(board, piece(ShapeKind::O, 0, 18), 1);
        state.tick();

        let mut log = Log::default();
        state.drain_events(&mut log);
        assert_eq!(log.0, vec!["locked", "lines"]);

        state.drain_events(&mut log);
        assert_eq!(log.0.len(), 2);
    }
}
