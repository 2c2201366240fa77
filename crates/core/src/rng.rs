//! RNG module - deterministic gem generation
//!
//! A small seedable LCG keeps fills and refills reproducible: the same
//! seed produces the same board and the same refill sequence, which the
//! tests rely on. The generator is owned by the turn controller and is the
//! only source of randomness in the engine.

use tui_match_types::{Gem, GemKind};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct GemRng {
    state: u32,
}

impl GemRng {
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

    /// Draw a uniformly random gem from the palette.
    ///
    /// The palette is validated non-empty at controller construction.
    pub fn draw(&mut self, palette: &[GemKind]) -> Gem {
        let idx = self.next_range(palette.len() as u32) as usize;
        Gem::new(palette[idx])
    }

    /// Current generator state (for diagnostics / restart-with-same-seed).
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for GemRng {
    fn default() -> Self {
        Self::new(1)
    }
}
