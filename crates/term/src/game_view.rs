//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{ActiveSnapshot, GameSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Color, Phase, BOARD_HEIGHT, BOARD_WIDTH};

const PLAYFIELD_BG: Rgb = Rgb::new(30, 30, 40);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Host-side values shown next to the board that the engine does not own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HudView {
    pub high_score: u32,
}

/// A lightweight terminal renderer for the game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self { cell_w: 2, cell_h: 1 }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Render into an existing framebuffer.
    ///
    /// Callers can reuse one framebuffer across frames; it is only resized
    /// when the terminal size changes.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        hud: &HudView,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let board_px_w = (BOARD_WIDTH as u16) * self.cell_w;
        let board_px_h = (BOARD_HEIGHT as u16) * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        // Locked cells, with a faint dot on empty ones.
        let empty = CellStyle::new(Rgb::new(90, 90, 100), PLAYFIELD_BG).dim();
        for y in 0..BOARD_HEIGHT as usize {
            for x in 0..BOARD_WIDTH as usize {
                match snap.color_at(x, y) {
                    Some(color) => {
                        self.draw_block(fb, start_x, start_y, x as i8, y as i8, color)
                    }
                    None => {
                        self.fill_cell(fb, start_x, start_y, x as i8, y as i8, '·', empty)
                    }
                }
            }
        }

        // Shadow first so the active piece draws over any overlap. Only shown
        // while moves are accepted.
        if snap.playable() {
            let ghost = CellStyle::new(Rgb::new(140, 140, 140), PLAYFIELD_BG).dim();
            for (x, y) in snap.shadow().cells() {
                self.fill_cell(fb, start_x, start_y, x, y, '░', ghost);
            }
        }

        self.draw_piece(fb, start_x, start_y, &snap.active);

        self.draw_side_panel(fb, snap, hud, viewport, start_x, start_y, frame_w);

        match snap.phase {
            Phase::Paused => {
                self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, 0, "PAUSED");
                self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, 1, "p resume");
            }
            Phase::GameOver => {
                self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, 0, "GAME OVER");
                self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, 1, "r replay");
            }
            Phase::Running => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, hud: &HudView, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, hud, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_piece(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, piece: &ActiveSnapshot) {
        for (x, y) in piece.cells() {
            self.draw_block(fb, start_x, start_y, x, y, piece.color);
        }
    }

    fn draw_block(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, x: i8, y: i8, color: Color) {
        let style = CellStyle::new(color_rgb(color), PLAYFIELD_BG).bold();
        self.fill_cell(fb, start_x, start_y, x, y, '█', style);
    }

    /// Fill one board cell; cells outside the board (e.g. above the top
    /// edge right after spawn) are not drawn.
    #[allow(clippy::too_many_arguments)]
    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        x: i8,
        y: i8,
        ch: char,
        style: CellStyle,
    ) {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return;
        }
        let px = start_x + 1 + (x as u16) * self.cell_w;
        let py = start_y + 1 + (y as u16) * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        hud: &HudView,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0)).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        let mut y = start_y;
        for (name, v) in [
            ("SCORE", snap.score),
            ("BEST", hud.high_score.max(snap.score)),
            ("LINES", snap.lines_cleared),
            ("PIECES", snap.pieces_locked),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y.saturating_add(1), v, value);
            y = y.saturating_add(3);
        }

        if snap.fast_mode {
            fb.put_str(panel_x, y, "FAST", label);
        }
        y = y.saturating_add(2);

        let help = value.dim();
        for line in ["←→ move", "↑ rotate", "↓ drop", "p pause", "r restart", "q quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, help);
            y = y.saturating_add(1);
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        line: u16,
        text: &str,
    ) {
        let y = start_y.saturating_add(frame_h / 2).saturating_add(line);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        fb.put_str(x, y, text, style);
    }
}

/// Terminal color for a block color.
pub fn color_rgb(color: Color) -> Rgb {
    match color {
        Color::Cyan => Rgb::new(80, 220, 220),
        Color::Blue => Rgb::new(80, 120, 220),
        Color::Orange => Rgb::new(255, 165, 0),
        Color::Yellow => Rgb::new(240, 220, 80),
        Color::Green => Rgb::new(100, 220, 120),
        Color::Purple => Rgb::new(200, 120, 220),
        Color::Red => Rgb::new(220, 80, 80),
    }
}
