//! RNG module - seeded randomness for grid randomization
//!
//! `Grid::randomize` takes any [`RandomSource`], so callers can plug in a fixed
//! sequence in tests. [`SimpleRng`] is the default source: a small LCG that is
//! fully reproducible from its seed.

/// Source of random bits consumed by [`crate::Grid::randomize`].
pub trait RandomSource {
    fn next_u32(&mut self) -> u32;

    /// Fair coin flip.
    fn next_bool(&mut self) -> bool {
        // LCG low bits have short periods; use the top bit.
        self.next_u32() >> 31 == 1
    }
}

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
}

impl RandomSource for SimpleRng {
    fn next_u32(&mut self) -> u32 {
        // a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);
        assert_ne!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn test_zero_seed_is_remapped() {
        let mut zero = SimpleRng::new(0);
        let mut one = SimpleRng::new(1);
        assert_eq!(zero.next_u32(), one.next_u32());
    }

    #[test]
    fn test_coin_flips_are_roughly_balanced() {
        let mut rng = SimpleRng::new(99);
        let heads = (0..10_000).filter(|_| rng.next_bool()).count();
        assert!((4_500..5_500).contains(&heads), "heads = {}", heads);
    }

    #[test]
    fn test_coin_flips_do_not_alternate() {
        // The LCG's lowest bit alternates; next_bool must not inherit that.
        let mut rng = SimpleRng::new(3);
        let flips: Vec<bool> = (0..64).map(|_| rng.next_bool()).collect();
        let alternating = flips.windows(2).all(|w| w[0] != w[1]);
        assert!(!alternating);
    }
}
