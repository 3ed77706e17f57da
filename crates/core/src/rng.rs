//! RNG module - deterministic shuffling for the deck display order
//!
//! A small LCG is plenty for laying out a few dozen cards, and a seeded
//! generator makes every layout reproducible in tests.

use memory_match_types::CardHandle;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    seed: u32,
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { seed: state, state }
    }

    /// Seed the generator was created with (after zero substitution)
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // Upper bits of an LCG are far better distributed than the low ones.
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }

    /// Produce a fresh random display order for `len` cards.
    pub fn permutation(&mut self, len: usize) -> Vec<CardHandle> {
        let mut order: Vec<CardHandle> = (0..len as u16).map(CardHandle::new).collect();
        self.shuffle(&mut order);
        order
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
    fn test_zero_seed_is_substituted() {
        let rng = SimpleRng::new(0);
        assert_eq!(rng.seed(), 1);
    }

    #[test]
    fn test_next_range_stays_in_bounds() {
        let mut rng = SimpleRng::new(7);
        for max in 1..50 {
            assert!(rng.next_range(max) < max);
        }
    }

    #[test]
    fn test_permutation_contains_every_handle_once() {
        let mut rng = SimpleRng::new(99);
        let mut order = rng.permutation(16);
        assert_eq!(order.len(), 16);

        order.sort();
        let expected: Vec<CardHandle> = (0..16).map(CardHandle::new).collect();
        assert_eq!(order, expected);
    }

    #[test]
    fn test_permutation_eventually_moves_cards() {
        let mut rng = SimpleRng::new(3);
        let identity: Vec<CardHandle> = (0..8).map(CardHandle::new).collect();
        let moved = (0..10).any(|_| rng.permutation(8) != identity);
        assert!(moved);
    }
}
