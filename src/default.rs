use rand_core::{RngCore, SeedableRng};

use crate::mersenne_twister64::MersenneTwister64;

/// Default random generator which is good for most applications.
///
/// This currently uses [`MersenneTwister64`], but that may be changed in the
/// future (with a major version bump).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultRand {
    inner: MersenneTwister64,
}

impl DefaultRand {
    /// Creates the default generator from a slice of seed words of any
    /// length; see [`MersenneTwister64::new`].
    pub fn new(seed: &[u64]) -> Self {
        Self {
            inner: MersenneTwister64::new(seed),
        }
    }
}

impl RngCore for DefaultRand {
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.inner.fill_bytes(dest)
    }
}

impl SeedableRng for DefaultRand {
    type Seed = <MersenneTwister64 as SeedableRng>::Seed;

    fn from_seed(seed: Self::Seed) -> Self {
        Self {
            inner: MersenneTwister64::from_seed(seed),
        }
    }

    fn seed_from_u64(seed: u64) -> Self {
        Self {
            inner: MersenneTwister64::seed_from_u64(seed),
        }
    }
}
