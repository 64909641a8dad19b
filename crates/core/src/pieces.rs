//! Pieces module - tetromino shapes, rotation and collision
//!
//! Shapes are small occupancy matrices whose bounding box changes with
//! rotation. Rotation is computed geometrically (transpose, then reverse the
//! row order) instead of being looked up in a table, and there are no wall
//! kicks: a rotation that does not fit at the same anchor is rejected.

use crate::board::Board;
use crate::types::{Color, ShapeKind, BOARD_WIDTH, SPAWN_Y};

/// Offset of a single mino relative to the piece anchor (column, row)
pub type MinoOffset = (i8, i8);

/// Largest bounding box side of any tetromino orientation.
const MAX_SIDE: usize = 4;

/// Occupancy pattern of one tetromino orientation.
///
/// Stored as a fixed 4x4 matrix plus the live bounding box so shapes stay
/// `Copy` and never allocate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: [[bool; MAX_SIDE]; MAX_SIDE],
    width: u8,
    height: u8,
}

impl Shape {
    /// Base (spawn) orientation of a shape kind.
    pub fn base(kind: ShapeKind) -> Self {
        match kind {
            ShapeKind::I => Self::from_pattern(&["####"]),
            ShapeKind::T => Self::from_pattern(&["###", ".#."]),
            ShapeKind::O => Self::from_pattern(&["##", "##"]),
            ShapeKind::Z => Self::from_pattern(&["##.", ".##"]),
            ShapeKind::S => Self::from_pattern(&[".##", "##."]),
            ShapeKind::L => Self::from_pattern(&["###", "#.."]),
            ShapeKind::J => Self::from_pattern(&["###", "..#"]),
        }
    }

    fn from_pattern(pattern: &[&str]) -> Self {
        let mut rows = [[false; MAX_SIDE]; MAX_SIDE];
        let mut width = 0u8;
        for (r, line) in pattern.iter().enumerate().take(MAX_SIDE) {
            for (c, ch) in line.chars().enumerate().take(MAX_SIDE) {
                rows[r][c] = ch == '#';
            }
            width = width.max(line.len().min(MAX_SIDE) as u8);
        }
        Self {
            rows,
            width,
            height: pattern.len().min(MAX_SIDE) as u8,
        }
    }

    /// Bounding box width in columns.
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Bounding box height in rows.
    pub fn height(&self) -> u8 {
        self.height
    }

    /// Whether the sub-cell at (col, row) is occupied.
    ///
    /// Returns false outside the bounding box.
    pub fn is_filled(&self, col: u8, row: u8) -> bool {
        col < self.width && row < self.height && self.rows[row as usize][col as usize]
    }

    /// Occupied sub-cells, row-major from the top-left.
    pub fn minos(&self) -> [MinoOffset; 4] {
        let mut out = [(0, 0); 4];
        let mut n = 0;
        for row in 0..self.height {
            for col in 0..self.width {
                if self.is_filled(col, row) && n < out.len() {
                    out[n] = (col as i8, row as i8);
                    n += 1;
                }
            }
        }
        out
    }

    /// The shape rotated 90° clockwise.
    ///
    /// Equivalent to transposing the matrix of the vertically flipped shape:
    /// `new[r][c] = old[h - 1 - c][r]`.
    pub fn rotated_cw(&self) -> Self {
        let old_h = self.height as usize;
        let new_w = self.height;
        let new_h = self.width;
        let mut rows = [[false; MAX_SIDE]; MAX_SIDE];
        for (r, out_row) in rows.iter_mut().enumerate().take(new_h as usize) {
            for (c, cell) in out_row.iter_mut().enumerate().take(new_w as usize) {
                *cell = self.rows[old_h - 1 - c][r];
            }
        }
        Self {
            rows,
            width: new_w,
            height: new_h,
        }
    }

    /// Render as `#`/`.` lines, top row first (handy in tests and logs).
    pub fn to_pattern(&self) -> Vec<String> {
        (0..self.height)
            .map(|row| {
                (0..self.width)
                    .map(|col| if self.is_filled(col, row) { '#' } else { '.' })
                    .collect()
            })
            .collect()
    }
}

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: ShapeKind,
    pub shape: Shape,
    pub color: Color,
    /// Column of the bounding box's left edge.
    pub x: i8,
    /// Row of the bounding box's top edge; negative only right after spawn.
    pub y: i8,
}

impl Piece {
    /// Create a piece in its base orientation at the spawn position.
    pub fn new(kind: ShapeKind, color: Color) -> Self {
        let shape = Shape::base(kind);
        Self {
            kind,
            shape,
            color,
            x: spawn_x(&shape),
            y: SPAWN_Y,
        }
    }

    /// Same piece moved to an explicit anchor.
    pub fn at(self, x: i8, y: i8) -> Self {
        Self { x, y, ..self }
    }

    /// Same piece offset by (dx, dy).
    pub fn shifted(self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    /// Same anchor, shape rotated 90° clockwise (no validity check).
    pub fn rotated(self) -> Self {
        Self {
            shape: self.shape.rotated_cw(),
            ..self
        }
    }

    /// Absolute board coordinates of the occupied sub-cells.
    pub fn cells(&self) -> [(i8, i8); 4] {
        self.shape
            .minos()
            .map(|(col, row)| (self.x + col, self.y + row))
    }
}

/// Spawn column for a shape: horizontally centered, integer division.
pub fn spawn_x(shape: &Shape) -> i8 {
    (BOARD_WIDTH / 2) as i8 - (shape.width() / 2) as i8
}

/// Whether `piece` moved by (dx, dy) would hit a wall, the floor or a locked
/// cell.
///
/// Rows above the board never collide, so pieces may spawn and rotate
/// partially off the top.
pub fn check_collision(board: &Board, piece: &Piece, dx: i8, dy: i8) -> bool {
    piece.shape.minos().iter().any(|&(col, row)| {
        let x = piece.x + col + dx;
        let y = piece.y + row + dy;
        x < 0
            || x >= board.width() as i8
            || y >= board.height() as i8
            || (y >= 0 && board.is_occupied(x, y))
    })
}

/// Rotate clockwise in place of the current anchor.
///
/// Returns `None` when the rotated shape collides; no alternate offsets are
/// tried.
pub fn try_rotate(board: &Board, piece: &Piece) -> Option<Piece> {
    let rotated = piece.rotated();
    if check_collision(board, &rotated, 0, 0) {
        None
    } else {
        Some(rotated)
    }
}

/// Number of rows the piece can fall before it rests.
pub fn drop_distance(board: &Board, piece: &Piece) -> i8 {
    let mut distance = 0;
    while !check_collision(board, piece, 0, distance + 1) {
        distance += 1;
    }
    distance
}

/// Landing projection of the piece ("ghost"); never mutates anything.
pub fn shadow(board: &Board, piece: &Piece) -> Piece {
    piece.shifted(0, drop_distance(board, piece))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_patterns() {
        assert_eq!(Shape::base(ShapeKind::I).to_pattern(), vec!["####"]);
        assert_eq!(Shape::base(ShapeKind::T).to_pattern(), vec!["###", ".#."]);
        assert_eq!(Shape::base(ShapeKind::O).to_pattern(), vec!["##", "##"]);
        assert_eq!(Shape::base(ShapeKind::Z).to_pattern(), vec!["##.", ".##"]);
        assert_eq!(Shape::base(ShapeKind::S).to_pattern(), vec![".##", "##."]);
        assert_eq!(Shape::base(ShapeKind::L).to_pattern(), vec!["###", "#.."]);
        assert_eq!(Shape::base(ShapeKind::J).to_pattern(), vec!["###", "..#"]);
    }

    #[test]
    fn test_every_shape_has_four_minos() {
        for kind in ShapeKind::ALL {
            let mut shape = Shape::base(kind);
            for _ in 0..4 {
                let filled = (0..shape.height())
                    .flat_map(|r| (0..shape.width()).map(move |c| (c, r)))
                    .filter(|&(c, r)| shape.is_filled(c, r))
                    .count();
                assert_eq!(filled, 4, "{:?} should have 4 minos", kind);
                shape = shape.rotated_cw();
            }
        }
    }

    #[test]
    fn test_rotate_t_clockwise() {
        let rotated = Shape::base(ShapeKind::T).rotated_cw();
        assert_eq!(rotated.to_pattern(), vec![".#", "##", ".#"]);
        assert_eq!(rotated.width(), 2);
        assert_eq!(rotated.height(), 3);
    }

    #[test]
    fn test_rotate_i_becomes_vertical() {
        let rotated = Shape::base(ShapeKind::I).rotated_cw();
        assert_eq!(rotated.to_pattern(), vec!["#", "#", "#", "#"]);
    }

    #[test]
    fn test_four_rotations_return_to_base() {
        for kind in ShapeKind::ALL {
            let base = Shape::base(kind);
            let back = base.rotated_cw().rotated_cw().rotated_cw().rotated_cw();
            assert_eq!(back, base, "{:?}", kind);
        }
    }

    #[test]
    fn test_spawn_is_centered() {
        assert_eq!(Piece::new(ShapeKind::I, Color::Red).x, 3);
        assert_eq!(Piece::new(ShapeKind::T, Color::Red).x, 4);
        assert_eq!(Piece::new(ShapeKind::O, Color::Red).x, 4);
        assert_eq!(Piece::new(ShapeKind::O, Color::Red).y, SPAWN_Y);
    }

    #[test]
    fn test_minos_row_major() {
        let shape = Shape::base(ShapeKind::S);
        assert_eq!(shape.minos(), [(1, 0), (2, 0), (0, 1), (1, 1)]);
    }
}
