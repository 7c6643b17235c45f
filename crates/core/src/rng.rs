//! RNG module - deck shuffling
//!
//! A small seedable LCG plus a Fisher-Yates shuffle. The same seed always
//! produces the same deal, which keeps games reproducible in tests.

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Seed 0 deals like the default generator.
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high bits; the low bits of an LCG have short periods.
    pub fn next_range(&mut self, max: u32) -> u32 {
        if max <= 1 {
            return 0;
        }
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Shuffle a slice in place using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }

    /// Return a shuffled copy, leaving the input untouched.
    pub fn shuffled<T: Clone>(&mut self, items: &[T]) -> Vec<T> {
        let mut out = items.to_vec();
        self.shuffle(&mut out);
        out
    }

    /// Current internal state (can seed an identical generator).
    pub fn state(&self) -> u32 {
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
    fn test_rng_zero_seed_is_usable() {
        let mut rng = SimpleRng::new(0);
        assert_eq!(rng.state(), 1);
        assert_ne!(rng.next_u32(), rng.next_u32());
    }

    #[test]
    fn test_next_range_bounds() {
        let mut rng = SimpleRng::new(99);
        for max in 1..50 {
            for _ in 0..20 {
                assert!(rng.next_range(max) < max);
            }
        }
        assert_eq!(rng.next_range(0), 0);
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut rng = SimpleRng::new(7);
        let input: Vec<u32> = (0..32).collect();
        let mut out = rng.shuffled(&input);

        assert_eq!(out.len(), input.len());
        out.sort_unstable();
        assert_eq!(out, input);
    }

    #[test]
    fn test_shuffle_moves_something() {
        let mut rng = SimpleRng::new(4242);
        let input: Vec<u32> = (0..16).collect();
        let out = rng.shuffled(&input);
        assert_ne!(out, input, "16 items should not come back in order");
    }

    #[test]
    fn test_shuffle_covers_every_position() {
        // Each element should land in every slot at least once over many deals.
        let mut rng = SimpleRng::new(1);
        let mut seen = [[false; 4]; 4];
        for _ in 0..400 {
            let deal = rng.shuffled(&[0usize, 1, 2, 3]);
            for (pos, &v) in deal.iter().enumerate() {
                seen[v][pos] = true;
            }
        }
        assert!(seen.iter().all(|row| row.iter().all(|&s| s)));
    }

    #[test]
    fn test_shuffle_empty_and_single() {
        let mut rng = SimpleRng::new(3);
        let mut empty: [u8; 0] = [];
        rng.shuffle(&mut empty);
        let mut one = [9u8];
        rng.shuffle(&mut one);
        assert_eq!(one, [9]);
    }
}
