use rand_core::impls::fill_bytes_via_next;
use rand_core::le::read_u64_into;
use rand_core::{RngCore, SeedableRng};

/// Number of 64-bit words in the state array.
const N: usize = 312;
/// Recurrence offset into the state array.
const M: usize = 156;
/// Twist matrix constant, XORed in when the borrowed low bit is set.
const MATRIX_A: u64 = 0xB5026F5AA96619E9;
/// High bits kept from `mt[i]` during the twist.
const UPPER_MASK: u64 = 0xFFFFFFFF80000000;
/// Low bits borrowed from `mt[i + 1]` during the twist.
const LOWER_MASK: u64 = 0x7FFFFFFF;

/// Seed of the initialization ramp the key is mixed into.
const INIT_SEED: u64 = 19650218;
const INIT_MULT: u64 = 6364136223846793005;
const KEY_MULT: u64 = 0x369DEA0F31A53F85;
const DECORRELATE_MULT: u64 = 0x27BB2EE687B0B0FD;

/// A 64-bit Mersenne Twister (MT19937-64) random number generator.
///
/// The generator holds 312 words of state and regenerates the whole array in
/// one pass (the "twist") every 312 draws; individual draws read one stored
/// word, advance a cursor, and return a tempered copy. The batch regeneration
/// is an internal cache: observable output is identical to producing one word
/// at a time. It is not suitable for cryptographic purposes, but its period of
/// 2^19937 - 1 and strong equidistribution make it a solid default for
/// statistical work.
///
/// The algorithm used here matches the mt19937-64 reference implementation by
/// Nishimura and Matsumoto.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MersenneTwister64 {
    mt: [u64; N],
    index: usize,
}

impl MersenneTwister64 {
    /// Creates a generator from a slice of seed words of any length.
    ///
    /// The state is first filled from a fixed ramp, then the seed is folded in
    /// over `max(312, seed.len())` steps (cycling through shorter seeds), and
    /// a final pass decorrelates the whole array. The top bit of the first
    /// word is forced afterwards, so the state is never all-zero: every seed,
    /// including the empty one, yields a functional generator. An empty seed
    /// behaves exactly like the one-word seed `[0]`.
    pub fn new(seed: &[u64]) -> Self {
        let mut mt = [0u64; N];
        init_ramp(&mut mt, INIT_SEED);

        let key: &[u64] = if seed.is_empty() { &[0] } else { seed };
        let mut i = 1;
        let mut j = 0;
        for _ in 0..N.max(key.len()) {
            mt[i] = (mt[i] ^ (mt[i - 1] ^ (mt[i - 1] >> 62)).wrapping_mul(KEY_MULT))
                .wrapping_add(key[j])
                .wrapping_add(j as u64);
            i += 1;
            j += 1;
            if i >= N {
                mt[0] = mt[N - 1];
                i = 1;
            }
            if j >= key.len() {
                j = 0;
            }
        }
        for _ in 0..N - 1 {
            mt[i] = (mt[i] ^ (mt[i - 1] ^ (mt[i - 1] >> 62)).wrapping_mul(DECORRELATE_MULT))
                .wrapping_sub(i as u64);
            i += 1;
            if i >= N {
                mt[0] = mt[N - 1];
                i = 1;
            }
        }
        mt[0] = 1 << 63;

        // Cursor at the end of the array: the first draw performs the first
        // twist.
        MersenneTwister64 { mt, index: N }
    }

    /// Regenerates the full state array in place.
    ///
    /// Entries past `N - M` read words the same pass already rewrote; this is
    /// the reference recurrence, not an aliasing accident.
    fn twist(&mut self) {
        for i in 0..N {
            let x = (self.mt[i] & UPPER_MASK) | (self.mt[(i + 1) % N] & LOWER_MASK);
            let mut y = self.mt[(i + M) % N] ^ (x >> 1);
            if x & 1 != 0 {
                y ^= MATRIX_A;
            }
            self.mt[i] = y;
        }
        self.index = 0;
    }
}

fn init_ramp(mt: &mut [u64; N], seed: u64) {
    mt[0] = seed;
    for i in 1..N {
        mt[i] = INIT_MULT
            .wrapping_mul(mt[i - 1] ^ (mt[i - 1] >> 62))
            .wrapping_add(i as u64);
    }
}

impl RngCore for MersenneTwister64 {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        // The tempered word is equidistributed in every bit; take the upper
        // half for consistency with the other 64-bit generators.
        (self.next_u64() >> 32) as u32
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        if self.index >= N {
            self.twist();
        }
        let mut x = self.mt[self.index];
        self.index += 1;
        // Tempering reads the stored word but never writes it back.
        x ^= (x >> 29) & 0x5555555555555555;
        x ^= (x << 17) & 0x71D67FFFEDA60000;
        x ^= (x << 37) & 0xFFF7EEE000000000;
        x ^= x >> 43;
        x
    }

    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        fill_bytes_via_next(self, dest);
    }
}

impl SeedableRng for MersenneTwister64 {
    type Seed = [u8; 32];

    /// Creates a `MersenneTwister64` from four little-endian seed words.
    fn from_seed(seed: [u8; 32]) -> MersenneTwister64 {
        let mut words = [0u64; 4];
        read_u64_into(&seed, &mut words);
        MersenneTwister64::new(&words)
    }

    /// Seeds a `MersenneTwister64` from a single `u64` word.
    fn seed_from_u64(seed: u64) -> MersenneTwister64 {
        MersenneTwister64::new(&[seed])
    }
}
