use crate::pieces::{Piece, Shape};
use crate::types::{Color, Phase, ShapeKind, BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: ShapeKind,
    pub shape: Shape,
    pub color: Color,
    pub x: i8,
    pub y: i8,
}

impl ActiveSnapshot {
    /// Absolute board coordinates of the occupied sub-cells.
    pub fn cells(&self) -> [(i8, i8); 4] {
        Piece::from(*self).cells()
    }
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind,
            shape: value.shape,
            color: value.color,
            x: value.x,
            y: value.y,
        }
    }
}

impl From<ActiveSnapshot> for Piece {
    fn from(value: ActiveSnapshot) -> Self {
        Self {
            kind: value.kind,
            shape: value.shape,
            color: value.color,
            x: value.x,
            y: value.y,
        }
    }
}

/// Read-only view of everything a renderer needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    /// 0 = empty, otherwise color index + 1.
    pub board: [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: ActiveSnapshot,
    /// Row the active piece would land on.
    pub shadow_y: i8,
    pub score: u32,
    pub phase: Phase,
    pub fast_mode: bool,
    pub pieces_locked: u32,
    pub lines_cleared: u32,
}

impl GameSnapshot {
    /// The landing projection of the active piece.
    pub fn shadow(&self) -> ActiveSnapshot {
        ActiveSnapshot {
            y: self.shadow_y,
            ..self.active
        }
    }

    /// Color of the locked cell at (x, y), if any.
    pub fn color_at(&self, x: usize, y: usize) -> Option<Color> {
        let v = *self.board.get(y)?.get(x)?;
        if v == 0 {
            None
        } else {
            Some(Color::from_index(v as usize - 1))
        }
    }

    /// Whether the game is accepting moves (not paused, not over).
    pub fn playable(&self) -> bool {
        self.phase == Phase::Running
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let spawn = Piece::new(ShapeKind::I, Color::Cyan);
        Self {
            board: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: ActiveSnapshot::from(spawn),
            shadow_y: spawn.y,
            score: 0,
            phase: Phase::Running,
            fast_mode: false,
            pieces_locked: 0,
            lines_cleared: 0,
        }
    }
}
