//! Deterministic pseudo-random numbers for world setup.
//!
//! Identical seeds produce identical worlds, which keeps replays and tests
//! reproducible.

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
        // a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        // High bits of an LCG are far better distributed than the low ones.
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Generate random integer in `[lo, hi]` (both inclusive).
    pub fn int_between(&mut self, lo: i32, hi: i32) -> i32 {
        if hi <= lo {
            return lo;
        }
        // `hi - lo` always fits in u32, even when it overflows i32.
        let span = hi.wrapping_sub(lo) as u32;
        let offset = match span.checked_add(1) {
            Some(n) => self.next_range(n),
            None => self.next_u32(),
        };
        lo.wrapping_add(offset as i32)
    }
}
