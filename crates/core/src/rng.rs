//! RNG module - uniform random piece generation
//!
//! Each new piece draws its shape and its color independently and uniformly
//! from the seven of each, so every (shape, color) pairing can occur.
//!
//! Also provides a simple LCG so games are reproducible from a seed.

use crate::pieces::Piece;
use crate::types::{Color, ShapeKind, KIND_COUNT};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high half of the state; the low bits of a power-of-two LCG
    /// cycle with short periods.
    pub fn next_range(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        (self.next_u32() >> 16) % max
    }

    /// Current internal state.
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Draws the next falling piece.
#[derive(Debug, Clone)]
pub struct PieceGenerator {
    rng: SimpleRng,
}

impl PieceGenerator {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// Draw a shape and a color, independently.
    pub fn draw(&mut self) -> (ShapeKind, Color) {
        let kind = ShapeKind::from_index(self.rng.next_range(KIND_COUNT as u32) as usize);
        let color = Color::from_index(self.rng.next_range(KIND_COUNT as u32) as usize);
        (kind, color)
    }

    /// Draw a new piece placed at the spawn position.
    pub fn spawn(&mut self) -> Piece {
        let (kind, color) = self.draw();
        Piece::new(kind, color)
    }

    /// Current RNG state (a generator built from it continues the sequence).
    pub fn seed(&self) -> u32 {
        self.rng.state()
    }
}

impl Default for PieceGenerator {
    fn default() -> Self {
        Self::new(1)
    }
}
