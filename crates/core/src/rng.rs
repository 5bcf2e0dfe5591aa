//! RNG module - tile value generation
//!
//! A small LCG drives everything so that a fixed seed replays a game exactly.
//! [`ValueSource`] wraps it with the configured tile range and the seeding policy.

use std::collections::hash_map::RandomState;
use std::hash::{BuildHasher, Hasher};
use std::time::{SystemTime, UNIX_EPOCH};

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

    /// Generate random value in range [0, max). Returns 0 when `max` is 0.
    ///
    /// Scales by the high bits: the low bits of an LCG cycle with a short period.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Generate random value in `[lo, hi]`; the bounds may come in either order.
    pub fn next_inclusive(&mut self, a: u32, b: u32) -> u32 {
        let (lo, hi) = (a.min(b), a.max(b));
        let span = hi - lo;
        if span == u32::MAX {
            return self.next_u32();
        }
        lo + self.next_range(span + 1)
    }
}

/// How a session picks its seed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedMode {
    /// Every session replays the same stream
    Fixed(u32),
    /// Every session draws a fresh seed from the OS-keyed hasher and the clock
    Entropy,
}

impl SeedMode {
    pub fn resolve(self) -> u32 {
        match self {
            SeedMode::Fixed(seed) => seed,
            SeedMode::Entropy => entropy_seed(),
        }
    }
}

fn entropy_seed() -> u32 {
    let mut hasher = RandomState::new().build_hasher();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();
    hasher.write_u128(nanos);
    let h = hasher.finish();
    (h ^ (h >> 32)) as u32
}

/// Tile values drawn uniformly from `[min(lo, hi), max(lo, hi)]`
#[derive(Debug, Clone)]
pub struct ValueSource {
    rng: SimpleRng,
    mode: SeedMode,
    seed: u32,
    lo: u32,
    hi: u32,
}

impl ValueSource {
    pub fn new(mode: SeedMode, min_value: u32, max_value: u32) -> Self {
        let seed = mode.resolve();
        Self {
            rng: SimpleRng::new(seed),
            mode,
            seed,
            lo: min_value.min(max_value),
            hi: min_value.max(max_value),
        }
    }

    /// Restart the stream for a new session; fixed seeds replay from the start.
    pub fn reseed(&mut self) {
        self.seed = self.mode.resolve();
        self.rng = SimpleRng::new(self.seed);
    }

    pub fn next_value(&mut self) -> u32 {
        self.rng.next_inclusive(self.lo, self.hi)
    }

    /// Seed of the current session
    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn range(&self) -> (u32, u32) {
        (self.lo, self.hi)
    }
}
