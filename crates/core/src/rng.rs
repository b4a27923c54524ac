//! Seeded randomness for grid fill and refill.
//!
//! The engine injects an explicit seed everywhere randomness is consumed, so
//! a session is fully reproducible: same seed, same tiles, same cascades.
//! A simple LCG is plenty for tile colors and keeps the core dependency-free.

use slide_match_types::{ColorId, COLOR_COUNT, DEFAULT_PALETTE_SIZE};

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
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Current internal state (usable as a seed to replay the tail).
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Uniform color source over the first `palette_size` palette entries.
///
/// Every tile created by grid fill or refill is drawn from one well, so the
/// whole lifetime of a session consumes a single deterministic stream.
#[derive(Debug, Clone)]
pub struct ColorWell {
    rng: SimpleRng,
    palette_size: u8,
}

impl ColorWell {
    /// Create a well with the given seed and palette size. Palette sizes
    /// outside `1..=COLOR_COUNT` are clamped into range.
    pub fn new(seed: u32, palette_size: u8) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            palette_size: palette_size.clamp(1, COLOR_COUNT),
        }
    }

    /// Draw the next random color. Never fails; the palette index is always
    /// in range by construction.
    pub fn draw(&mut self) -> ColorId {
        let index = self.rng.next_range(self.palette_size as u32) as u8;
        ColorId::from_index(index).unwrap_or(ColorId::Blue)
    }

    pub fn palette_size(&self) -> u8 {
        self.palette_size
    }

    /// Current RNG state (for replaying a session from this point).
    pub fn seed(&self) -> u32 {
        self.rng.state()
    }
}

impl Default for ColorWell {
    fn default() -> Self {
        Self::new(1, DEFAULT_PALETTE_SIZE)
    }
}
