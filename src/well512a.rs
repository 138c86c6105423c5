use rand_core::impls::{fill_bytes_via_next, next_u64_via_u32};
use rand_core::le::read_u32_into;
use rand_core::{RngCore, SeedableRng};

use crate::common::Seed512;

/// Number of 32-bit words in the state ring.
const R: usize = 16;

/// Multiplier of the short-seed expansion recurrence.
const EXPAND_MULT: u32 = 1812433253;

/// A WELL512a random number generator.
///
/// WELL512a keeps 512 bits of state in a ring of sixteen 32-bit words with a
/// cursor that rotates one slot per draw; each step XORs a small fixed set of
/// shifted taps into two fresh words and returns the better-mixed of the two.
/// It is not suitable for cryptographic purposes, but it is fast and has
/// excellent equidistribution properties.
///
/// The algorithm used here matches the WELL512a reference implementation by
/// Panneton, L'Ecuyer and Matsumoto.
///
/// The all-zero state is a fixed point of the state transition: seeding with
/// sixteen zero words produces a generator that returns zero forever. This is
/// deliberate and documented rather than silently corrected; callers that
/// cannot rule such seeds out should construct through
/// [`seed_from_u64`](SeedableRng::seed_from_u64), which never yields the
/// degenerate state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Well512a {
    v: [u32; R],
    index: usize,
}

impl Well512a {
    /// Creates a generator from a slice of seed words.
    ///
    /// The leading `min(seed.len(), 16)` state words are copied from the seed
    /// verbatim; any words beyond the sixteenth are ignored. A shorter seed is
    /// expanded over the remaining slots by the recurrence
    /// `v[i] = 1812433253 * (c ^ (c >> 30)) + i` with `c = v[i - seed.len()]`
    /// (wrapping 32-bit arithmetic). For the empty seed the recurrence reduces
    /// to the fixed ramp state `v[i] = i`, so a generator is always
    /// constructible and always functional without a seed.
    pub fn new(seed: &[u32]) -> Self {
        let mut v = [0u32; R];
        let n = seed.len().min(R);
        v[..n].copy_from_slice(&seed[..n]);
        for i in seed.len()..R {
            let c = v[i - seed.len()];
            v[i] = EXPAND_MULT.wrapping_mul(c ^ (c >> 30)).wrapping_add(i as u32);
        }
        Well512a { v, index: 0 }
    }
}

impl RngCore for Well512a {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        // Taps sit at fixed offsets 13, 9 and 15 ahead of the cursor on the
        // 16-slot ring.
        let i15 = (self.index + 15) & 0xf;
        let v0 = self.v[self.index];
        let vm1 = self.v[(self.index + 13) & 0xf];
        let vm2 = self.v[(self.index + 9) & 0xf];

        let z0 = self.v[i15];
        let z1 = (v0 ^ (v0 << 16)) ^ (vm1 ^ (vm1 << 15));
        let z2 = vm2 ^ (vm2 >> 11);
        let z3 = z1 ^ z2;
        let z4 = (z0 ^ (z0 << 2))
            ^ (z1 ^ (z1 << 18))
            ^ (z2 << 28)
            ^ (z3 ^ ((z3 << 5) & 0xda442d24));

        self.v[self.index] = z3;
        self.v[i15] = z4;
        self.index = i15;
        z4
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        next_u64_via_u32(self)
    }

    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        fill_bytes_via_next(self, dest);
    }
}

impl SeedableRng for Well512a {
    type Seed = Seed512;

    /// Creates a `Well512a` from sixteen little-endian words loaded verbatim.
    ///
    /// An all-zero seed is NOT remapped; it yields the documented degenerate
    /// all-zero stream.
    fn from_seed(seed: Seed512) -> Well512a {
        let mut v = [0u32; R];
        read_u32_into(&seed.0, &mut v);
        Well512a { v, index: 0 }
    }

    /// Seeds a `Well512a` from a `u64` by splitting it into its low and high
    /// words and expanding them through [`Well512a::new`]. Functional for
    /// every input, including zero.
    fn seed_from_u64(seed: u64) -> Well512a {
        Well512a::new(&[seed as u32, (seed >> 32) as u32])
    }
}
