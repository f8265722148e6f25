//! Park–Miller pseudo-random generator
//!
//! Multiplicative congruential generator over the prime modulus `2^31 - 1`
//! with multiplier 16807, computed overflow-safely via Schrage's
//! decomposition. An identical seed produces an identical stream across
//! [`next`](Lehmer::next), [`next_range`](Lehmer::next_range),
//! [`next_bool`](Lehmer::next_bool), and [`shuffle`](Lehmer::shuffle).
//! Generated fuzz corpora are keyed by seed, so any change to the draw
//! sequence is a breaking change.

/// Modulus: the Mersenne prime `2^31 - 1`.
const M: i64 = 2_147_483_647;
/// Multiplier: a primitive root of `M`, giving a full cycle.
const A: i64 = 16_807;
/// `M / A`, for Schrage's overflow-free step.
const Q: i64 = 127_773;
/// `M % A`, for Schrage's overflow-free step.
const R: i64 = 2_836;

/// Lehmer generator state.
///
/// After every draw the state is a positive integer no larger than [`M`].
/// The generator is used strictly sequentially; clone-free `&mut self`
/// access keeps one logical stream per instance.
#[derive(Debug)]
pub struct Lehmer {
    state: i64,
}

impl Lehmer {
    /// Create a generator from a seed.
    pub fn new(seed: i32) -> Self {
        Self {
            state: seed as i64,
        }
    }

    /// Draw the next raw value; always positive, never above `M`.
    pub fn next(&mut self) -> i64 {
        let hi = self.state / Q;
        let lo = self.state % Q;
        let mut t = A * lo - R * hi;
        if t <= 0 {
            t += M;
        }
        // Seed 0 is the degenerate fixed point: it wraps to exactly M and
        // stays there. Every other seed keeps the state strictly below M.
        debug_assert!(t > 0 && t <= M);
        self.state = t;
        t
    }

    /// Draw a value in `[min, max)`. `max` must be greater than `min`.
    pub fn next_range(&mut self, min: i64, max: i64) -> i64 {
        self.next() % (max - min) + min
    }

    /// Draw a boolean from the parity of the next raw value.
    pub fn next_bool(&mut self) -> bool {
        self.next() % 2 == 0
    }

    /// In-place Fisher–Yates shuffle, walking from the last index down to 1
    /// and swapping each position with a uniformly chosen earlier-or-equal
    /// index.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.next_range(0, i as i64 + 1) as usize;
            items.swap(i, j);
        }
    }
}

impl Default for Lehmer {
    fn default() -> Self {
        Self::new(2_147_480_677)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_sequence_from_seed_100() {
        let mut rng = Lehmer::new(100);
        // Hand-computed Schrage steps: 16807*100; then hi=13, lo=19651;
        // then hi=2584, lo=72057.
        assert_eq!(rng.next(), 1_680_700);
        assert_eq!(rng.next(), 330_237_489);
        assert_eq!(rng.next(), 1_203_733_775);
    }

    #[test]
    fn test_minstd_certification_value() {
        // Starting from seed 1, the 10,000th draw of the Park–Miller
        // generator is 1043618065.
        let mut rng = Lehmer::new(1);
        let mut value = 0;
        for _ in 0..10_000 {
            value = rng.next();
        }
        assert_eq!(value, 1_043_618_065);
    }

    #[test]
    fn test_state_stays_in_range_for_hostile_seeds() {
        for seed in [0, -1, -100, i32::MIN, i32::MAX] {
            let mut rng = Lehmer::new(seed);
            for _ in 0..1_000 {
                let v = rng.next();
                assert!(v > 0 && v <= M, "seed {seed} left range: {v}");
            }
        }
    }

    #[test]
    fn test_identical_seeds_agree_for_ten_thousand_draws() {
        let mut a = Lehmer::new(12_345);
        let mut b = Lehmer::new(12_345);
        for _ in 0..10_000 {
            assert_eq!(a.next(), b.next());
        }
    }

    #[test]
    fn test_derived_draws_agree_across_instances() {
        let mut a = Lehmer::new(777);
        let mut b = Lehmer::new(777);
        for _ in 0..2_500 {
            assert_eq!(a.next_range(0, 10), b.next_range(0, 10));
            assert_eq!(a.next_bool(), b.next_bool());
            assert_eq!(a.next_range(-50, 50), b.next_range(-50, 50));
        }
    }

    #[test]
    fn test_next_range_bounds() {
        let mut rng = Lehmer::new(9);
        for _ in 0..5_000 {
            let v = rng.next_range(2, 10);
            assert!((2..10).contains(&v));
        }
        for _ in 0..5_000 {
            let v = rng.next_range(-10, 100);
            assert!((-10..100).contains(&v));
        }
    }

    #[test]
    fn test_shuffle_is_a_deterministic_permutation() {
        let mut a = Lehmer::new(31_337);
        let mut b = Lehmer::new(31_337);
        let mut xs: Vec<i64> = (0..64).collect();
        let mut ys = xs.clone();
        a.shuffle(&mut xs);
        b.shuffle(&mut ys);
        assert_eq!(xs, ys);

        let mut sorted = xs.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..64).collect::<Vec<i64>>());
    }

    #[test]
    fn test_shuffle_of_trivial_slices_is_a_noop() {
        let mut rng = Lehmer::new(5);
        let mut empty: [i64; 0] = [];
        rng.shuffle(&mut empty);
        let mut one = [42];
        rng.shuffle(&mut one);
        assert_eq!(one, [42]);
    }

    #[test]
    fn test_default_seed_matches_explicit() {
        let mut a = Lehmer::default();
        let mut b = Lehmer::new(2_147_480_677);
        for _ in 0..100 {
            assert_eq!(a.next(), b.next());
        }
    }
}
