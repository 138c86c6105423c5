use rand_core::RngCore;

/// Bounds below this magnitude are sampled by masking to the next power of
/// two and retrying, which costs fewer raw draws per accepted sample than a
/// full-width reduction at a slightly higher retry rate. The crossover is a
/// cost tunable, not a correctness boundary: both paths are exactly unbiased.
const MASK_SAMPLING_LIMIT: u32 = 1 << 15;

/// Iteration ceiling for the rejection loops. Acceptance probability is at
/// least 1/2 per iteration on either path, so a uniform raw stream exhausts
/// this with probability at most 2^-128.
const REJECTION_CAP: u32 = 128;

/// Methods deriving exactly unbiased bounded integers from a raw word
/// stream. Implemented for every [`RngCore`], so any generator in this crate
/// (or any other `rand_core` generator) can be used as the source.
pub trait BoundedRand: RngCore {
    /// Returns a uniformly distributed integer in `[0, bound)`.
    ///
    /// Every value in range is equally likely; candidates that would
    /// introduce modulo bias are rejected and redrawn. A power-of-two bound
    /// takes a single masked draw with no rejection.
    ///
    /// # Panics
    ///
    /// Panics if `bound` is zero, or if the raw stream rejects an
    /// implausible number of consecutive candidates (a defect in the
    /// underlying generator, not a retryable condition).
    fn next_bounded(&mut self, bound: u32) -> u32;

    /// Returns a pair of independent uniform integers in
    /// `[0, bound1) × [0, bound2)` from a single bounded draw.
    ///
    /// One draw in `[0, bound1 * bound2)` is decomposed by division and
    /// remainder; the decomposition is a bijection onto the Cartesian
    /// product, so the pair is distributed exactly as two separate
    /// [`next_bounded`](Self::next_bounded) calls while paying for only one
    /// rejection-sampling invocation.
    ///
    /// # Panics
    ///
    /// Panics if either bound is zero or if `bound1 * bound2` reaches 2^31,
    /// outside which the decomposition argument does not hold.
    fn next_bounded_pair(&mut self, bound1: u32, bound2: u32) -> (u32, u32);
}

impl<T: RngCore> BoundedRand for T {
    fn next_bounded(&mut self, bound: u32) -> u32 {
        assert!(bound > 0, "bound must be strictly positive");
        if bound.is_power_of_two() {
            return self.next_u32() & (bound - 1);
        }
        if bound < MASK_SAMPLING_LIMIT {
            // The mask keeps candidates below 2 * bound, so fewer than half
            // of them are rejected.
            let mask = bound.next_power_of_two() - 1;
            for _ in 0..REJECTION_CAP {
                let candidate = self.next_u32() & mask;
                if candidate < bound {
                    return candidate;
                }
            }
        } else {
            // Accept raw words below the largest multiple of `bound` that
            // fits in 32 bits, then reduce.
            let limit = (1u64 << 32) - ((1u64 << 32) % u64::from(bound));
            for _ in 0..REJECTION_CAP {
                let candidate = u64::from(self.next_u32());
                if candidate < limit {
                    return (candidate % u64::from(bound)) as u32;
                }
            }
        }
        panic!(
            "bounded sampling rejected {} consecutive draws; raw stream is not uniform",
            REJECTION_CAP
        );
    }

    fn next_bounded_pair(&mut self, bound1: u32, bound2: u32) -> (u32, u32) {
        assert!(bound1 > 0 && bound2 > 0, "bounds must be strictly positive");
        let product = u64::from(bound1) * u64::from(bound2);
        assert!(product < 1u64 << 31, "product of bounds must stay below 2^31");
        let sample = self.next_bounded(product as u32);
        (sample / bound2, sample % bound2)
    }
}

/// Chi-square goodness-of-fit statistic against a flat expected count.
#[cfg(test)]
pub(crate) fn chi_square(observed: &[u64], expected: f64) -> f64 {
    observed
        .iter()
        .map(|&o| {
            let d = o as f64 - expected;
            d * d / expected
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MersenneTwister64, Well512a};
    use proptest::prelude::*;
    use rand_core::SeedableRng;

    // Critical values at the 99.99% chi-square quantile: a correct sampler
    // fails one run in ten thousand, while real bias overshoots these by
    // orders of magnitude at the sample sizes used.
    const CRIT_DF_39: f64 = 82.0;
    const CRIT_DF_63: f64 = 115.0;
    const CRIT_DF_99: f64 = 165.0;

    #[test]
    fn masked_path_is_uniform() {
        let mut rng = MersenneTwister64::new(&[12345]);
        let mut observed = [0u64; 100];
        for _ in 0..100_000 {
            observed[rng.next_bounded(100) as usize] += 1;
        }
        let stat = chi_square(&observed, 1000.0);
        assert!(stat < CRIT_DF_99, "chi-square statistic too large: {}", stat);
    }

    #[test]
    fn full_width_path_is_uniform() {
        let mut rng = MersenneTwister64::new(&[67890]);
        let mut observed = [0u64; 100];
        for _ in 0..200_000 {
            observed[(rng.next_bounded(100_000) / 1000) as usize] += 1;
        }
        let stat = chi_square(&observed, 2000.0);
        assert!(stat < CRIT_DF_99, "chi-square statistic too large: {}", stat);
    }

    #[test]
    fn masked_path_is_uniform_for_well512a() {
        let mut rng = Well512a::new(&[0xDEADBEEF]);
        let mut observed = [0u64; 40];
        for _ in 0..80_000 {
            observed[rng.next_bounded(40) as usize] += 1;
        }
        let stat = chi_square(&observed, 2000.0);
        assert!(stat < CRIT_DF_39, "chi-square statistic too large: {}", stat);
    }

    #[test]
    fn pair_matches_independent_draws_in_distribution() {
        // 8x8 bins over [0, 40) x [0, 256); uniform over the product space
        // is exactly the distribution of two independent bounded draws.
        let mut rng = MersenneTwister64::new(&[24680]);
        let mut observed = [0u64; 64];
        for _ in 0..128_000 {
            let (i1, i2) = rng.next_bounded_pair(40, 256);
            observed[(i1 / 5 * 8 + i2 / 32) as usize] += 1;
        }
        let stat = chi_square(&observed, 2000.0);
        assert!(stat < CRIT_DF_63, "chi-square statistic too large: {}", stat);
    }

    #[test]
    fn bounded_fixture() {
        let mut rng = Well512a::new(&[
            0x2c2878c6, 0x47af36c4, 0xf422e677, 0xf08fd8d3, 0xee9a47c7, 0xba983942,
            0xa2a9f9a5, 0x1d443748, 0x8fc260b2, 0x5275c681, 0x4a2f5a28, 0x2911683d,
            0xa204c27e, 0xb20a6a26, 0x54ba33be, 0x67d63eb0,
        ]);
        let drawn: Vec<u32> = (0..10).map(|_| rng.next_bounded(1000)).collect();
        assert_eq!(drawn, [361, 152, 80, 796, 908, 551, 397, 113, 362, 219]);
    }

    #[test]
    fn pair_fixture() {
        let mut rng = Well512a::new(&[]);
        let drawn: Vec<(u32, u32)> = (0..6).map(|_| rng.next_bounded_pair(6, 6)).collect();
        assert_eq!(drawn, [(5, 4), (4, 2), (1, 4), (2, 3), (2, 0), (1, 2)]);
    }

    #[test]
    fn power_of_two_bound_takes_one_draw() {
        let mut masked = MersenneTwister64::new(&[7]);
        let mut raw = MersenneTwister64::new(&[7]);
        for _ in 0..100 {
            assert_eq!(masked.next_bounded(1 << 20), raw.next_u32() & ((1 << 20) - 1));
        }
    }

    #[test]
    #[should_panic(expected = "bound must be strictly positive")]
    fn zero_bound_panics() {
        MersenneTwister64::new(&[1]).next_bounded(0);
    }

    #[test]
    #[should_panic(expected = "product of bounds must stay below 2^31")]
    fn oversized_pair_product_panics() {
        MersenneTwister64::new(&[1]).next_bounded_pair(1 << 16, 1 << 15);
    }

    proptest! {
        #[test]
        fn values_stay_in_range(bound in 1u32..=u32::MAX, seed: u64) {
            let mut rng = MersenneTwister64::seed_from_u64(seed);
            for _ in 0..8 {
                prop_assert!(rng.next_bounded(bound) < bound);
            }
        }

        #[test]
        fn pairs_stay_in_range(bound1 in 1u32..=1000, bound2 in 1u32..=1000, seed: u64) {
            let mut rng = Well512a::seed_from_u64(seed);
            let (i1, i2) = rng.next_bounded_pair(bound1, bound2);
            prop_assert!(i1 < bound1);
            prop_assert!(i2 < bound2);
        }
    }
}
