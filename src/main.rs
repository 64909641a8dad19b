//! Terminal Tetris runner (default binary).
//!
//! Polls crossterm key events until the next tick is due, feeds them to the
//! engine as commands, ticks on the host cadence and redraws through the
//! framebuffer renderer.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{info, warn};

use term_tetris::core::{GameListener, GameSnapshot, GameState};
use term_tetris::input::{should_quit, InputHandler};
use term_tetris::store::HighScoreStore;
use term_tetris::term::{FrameBuffer, GameView, HudView, TerminalRenderer, TickCadence, Viewport};
use term_tetris::types::Command;
use term_tetris::{logging, GameConfig};

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    if let Err(e) = logging::init(&config) {
        eprintln!("logging disabled: {e:#}");
    }
    info!(seed = config.seed, fps = config.fps, "starting");

    let mut term = TerminalRenderer::new();
    let result = term.enter().and_then(|_| run(&mut term, &config));

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Keeps the high score current as games end.
struct Scorekeeper {
    store: HighScoreStore,
    best: u32,
    score: u32,
}

impl Scorekeeper {
    fn new(store: HighScoreStore) -> Self {
        let best = store.load().unwrap_or_else(|e| {
            warn!(error = %e, "could not load high score");
            0
        });
        Self {
            store,
            best,
            score: 0,
        }
    }

    fn persist(&mut self) {
        match self.store.record(self.score) {
            Ok(true) => self.best = self.score,
            Ok(false) => {}
            Err(e) => warn!(error = %e, "could not save high score"),
        }
    }
}

impl GameListener for Scorekeeper {
    fn on_lines_cleared(&mut self, count: u32) {
        info!(count, "lines cleared");
    }

    fn on_game_over(&mut self) {
        self.persist();
    }
}

fn run(term: &mut TerminalRenderer, config: &GameConfig) -> Result<()> {
    let mut game = GameState::new(config.seed);
    let mut scorekeeper = Scorekeeper::new(HighScoreStore::new(&config.high_score_path));
    let mut input = InputHandler::new();
    let mut cadence = TickCadence::new(config.fps, config.fast_ms);

    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let epoch = Instant::now();
    let now_ms = || epoch.elapsed().as_millis() as u64;

    loop {
        // Render.
        game.snapshot_into(&mut snap);
        let hud = HudView {
            high_score: scorekeeper.best,
        };
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, &hud, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = Duration::from_millis(cadence.remaining_ms(now_ms(), game.fast_mode()));
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    let command = match key.kind {
                        KeyEventKind::Press | KeyEventKind::Repeat => {
                            if should_quit(key) {
                                break;
                            }
                            input.handle_key_press(key.code, game.phase())
                        }
                        KeyEventKind::Release => input.handle_key_release(key.code),
                    };
                    if let Some(command) = command {
                        if command == Command::Restart && !game.game_over() {
                            scorekeeper.score = game.score();
                            scorekeeper.persist();
                        }
                        apply(&mut game, &mut input, &mut cadence, command, now_ms());
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        if let Some(command) = input.update() {
            game.apply_command(command);
        }

        // Tick.
        if cadence.due(now_ms(), game.fast_mode()) {
            game.tick();
        }

        scorekeeper.score = game.score();
        game.drain_events(&mut scorekeeper);
    }

    if !game.game_over() {
        scorekeeper.persist();
    }
    info!(score = game.score(), "quit");
    Ok(())
}

fn apply(
    game: &mut GameState,
    input: &mut InputHandler,
    cadence: &mut TickCadence,
    command: Command,
    now_ms: u64,
) {
    if !game.apply_command(command) {
        return;
    }
    match command {
        Command::Resume | Command::Restart => {
            input.reset();
            cadence.reset(now_ms);
        }
        Command::Pause => input.reset(),
        _ => {}
    }
}
