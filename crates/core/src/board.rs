//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell can be empty or filled with a color.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom)
//! Rows above the board (y < 0) are open space: never occupied, never written.

use crate::pieces::Piece;
use crate::types::{Cell, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Whether (x, y) blocks a piece.
    ///
    /// Side walls (`x < 0`, `x >= WIDTH`) and the floor (`y >= HEIGHT`) count
    /// as occupied. Space above the board (`y < 0`) never does.
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        if x < 0 || x >= BOARD_WIDTH as i8 || y >= BOARD_HEIGHT as i8 {
            return true;
        }
        if y < 0 {
            return false;
        }
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }
        let start = y * BOARD_WIDTH as usize;
        let end = start + BOARD_WIDTH as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Write the piece's color into every occupied sub-cell inside the board.
    ///
    /// Sub-cells above the top edge are dropped. Returns how many cells were
    /// written.
    pub fn merge(&mut self, piece: &Piece) -> usize {
        let mut written = 0;
        for (x, y) in piece.cells() {
            if self.set(x, y, Some(piece.color)) {
                written += 1;
            }
        }
        written
    }

    /// Remove every full row at once and return how many were removed.
    ///
    /// Remaining rows keep their relative order; rows above a cleared row
    /// move down by the number of cleared rows below them and the top is
    /// refilled with empty rows. Uses a two-pointer pass with no allocation.
    pub fn clear_full_rows(&mut self) -> u32 {
        let width = BOARD_WIDTH as usize;
        let mut cleared = 0u32;
        let mut write_y = BOARD_HEIGHT as usize;

        // Scan from bottom to top
        for read_y in (0..BOARD_HEIGHT as usize).rev() {
            if self.is_row_full(read_y) {
                cleared += 1;
            } else {
                write_y -= 1;
                if write_y != read_y {
                    // copy_within handles the overlapping ranges
                    let src_start = read_y * width;
                    let dst_start = write_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, dst_start);
                }
            }
        }

        // Clear the remaining rows at the top
        for cell in &mut self.cells[..write_y * width] {
            *cell = None;
        }

        cleared
    }

    /// Iterate rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(BOARD_WIDTH as usize)
    }

    /// Write the board as a row-major `u8` grid: 0 is empty, otherwise
    /// `color.index() + 1`.
    pub fn write_u8_grid(&self, out: &mut [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize]) {
        for (dst, src) in out.iter_mut().zip(self.rows()) {
            for (d, cell) in dst.iter_mut().zip(src) {
                *d = cell.map(|c| c.index() as u8 + 1).unwrap_or(0);
            }
        }
    }

    /// Number of filled cells.
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Fill a whole row with one color, leaving the given columns empty.
    ///
    /// Used to stage scenarios (garbage rows, nearly complete lines).
    pub fn fill_row_except(&mut self, y: i8, cell: Cell, holes: &[i8]) {
        for x in 0..BOARD_WIDTH as i8 {
            let value = if holes.contains(&x) { None } else { cell };
            self.set(x, y, value);
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Color, ShapeKind};

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(9, 0), Some(9));
        assert_eq!(Board::index(0, 1), Some(10));
        assert_eq!(Board::index(9, 19), Some(199));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(10, 0), None);
        assert_eq!(Board::index(0, 20), None);
    }

    #[test]
    fn test_is_occupied_treats_walls_and_floor_as_blocked() {
        let board = Board::new();
        assert!(board.is_occupied(-1, 5));
        assert!(board.is_occupied(10, 5));
        assert!(board.is_occupied(3, 20));
        assert!(!board.is_occupied(3, -1));
        assert!(!board.is_occupied(3, 5));
    }

    #[test]
    fn test_merge_drops_cells_above_board() {
        let mut board = Board::new();
        // Vertical I with its top two cells above row 0.
        let piece = Piece::new(ShapeKind::I, Color::Blue).rotated().at(0, -2);
        assert_eq!(board.merge(&piece), 2);
        assert_eq!(board.get(0, 0), Some(Some(Color::Blue)));
        assert_eq!(board.get(0, 1), Some(Some(Color::Blue)));
        assert_eq!(board.filled_count(), 2);
    }

    #[test]
    fn test_clear_full_rows_keeps_order_of_remaining_rows() {
        let mut board = Board::new();
        board.set(0, 15, Some(Color::Red));
        board.fill_row_except(16, Some(Color::Cyan), &[]);
        board.set(1, 17, Some(Color::Green));
        board.fill_row_except(18, Some(Color::Cyan), &[]);
        board.set(2, 19, Some(Color::Blue));

        assert_eq!(board.clear_full_rows(), 2);

        assert_eq!(board.get(2, 19), Some(Some(Color::Blue)));
        assert_eq!(board.get(1, 18), Some(Some(Color::Green)));
        assert_eq!(board.get(0, 17), Some(Some(Color::Red)));
        assert_eq!(board.filled_count(), 3);
    }

    #[test]
    fn test_write_u8_grid_encodes_color_plus_one() {
        let mut board = Board::new();
        board.set(0, 0, Some(Color::Cyan));
        board.set(9, 19, Some(Color::Red));

        let mut grid = [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        board.write_u8_grid(&mut grid);
        assert_eq!(grid[0][0], 1);
        assert_eq!(grid[19][9], 7);
        assert_eq!(grid[10][5], 0);
    }
}
