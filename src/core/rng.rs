//! RNG module - deterministic shape and color selection
//!
//! Shapes are drawn uniformly at random each round (no bag), matching the
//! classic ruleset. A simple LCG keeps games reproducible from a seed.

use crate::types::{ShapeKind, TileColor, ALL_SHAPES, PALETTE};

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
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Draw a shape uniformly from the 7 kinds
    pub fn draw_shape(&mut self) -> ShapeKind {
        ALL_SHAPES[self.next_range(ALL_SHAPES.len() as u32) as usize]
    }

    /// Draw a tile color uniformly from the palette
    pub fn draw_color(&mut self) -> TileColor {
        PALETTE[self.next_range(PALETTE.len() as u32) as usize]
    }

    /// Current internal state (for restarting with the same sequence)
    pub fn seed(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}
