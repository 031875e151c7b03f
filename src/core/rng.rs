//! RNG module - deterministic random source for piece spawning.
//!
//! A small LCG keeps the core free of external randomness: the driver seeds
//! it once and identical seeds replay identical games.

use crate::types::{Rotation, ShapeKind};

/// Simple LCG (Linear Congruential Generator) RNG.
/// Uses constants from Numerical Recipes.
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed.
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros.
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate the next random u32.
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate a random value in `[0, max)`.
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Current internal state (for restarting with the same sequence).
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Pick a uniformly random spawnable shape: 7 kinds x 4 rotations, 28
/// outcomes. A freshly spawned piece's rotation is therefore random too.
pub fn random_shape(rng: &mut SimpleRng) -> (ShapeKind, Rotation) {
    let n = rng.next_range(28) as usize;
    (ShapeKind::ALL[n / 4], Rotation::ALL[n % 4])
}
