use rand_core::RngCore;

use crate::bounded::BoundedRand;

/// In-place uniform shuffling on top of the bounded sampler. Implemented for
/// every [`RngCore`]; elements only need to be swappable.
pub trait ShuffleRand: BoundedRand {
    /// Rearranges `data` in place into one of its `n!` permutations, each
    /// equally likely.
    ///
    /// Fisher-Yates: indices run from the top of the slice down to 1, each
    /// drawing a uniform swap partner at or below itself. Empty and
    /// single-element slices are no-ops.
    ///
    /// # Panics
    ///
    /// Panics if the slice holds more than `u32::MAX` elements (a swap
    /// partner index must fit the sampler's word).
    fn shuffle<T>(&mut self, data: &mut [T]);

    /// Like [`shuffle`](Self::shuffle), with the same uniformity guarantee,
    /// but performing two swap steps per joint bounded draw wherever the two
    /// top indices satisfy the pair sampler's product precondition. Halves
    /// the rejection-sampling invocations for all but the largest slices.
    ///
    /// Consumes the raw stream differently from `shuffle`, so the two
    /// variants produce different (individually reproducible) permutations
    /// for the same seed.
    ///
    /// # Panics
    ///
    /// Panics if the slice holds more than `u32::MAX` elements.
    fn shuffle_paired<T>(&mut self, data: &mut [T]);
}

impl<R: RngCore> ShuffleRand for R {
    fn shuffle<T>(&mut self, data: &mut [T]) {
        assert_indexable(data.len());
        for i in (1..data.len()).rev() {
            let j = self.next_bounded(i as u32 + 1) as usize;
            data.swap(i, j);
        }
    }

    fn shuffle_paired<T>(&mut self, data: &mut [T]) {
        assert_indexable(data.len());
        let mut i = data.len();
        while i > 1 {
            if (i as u64) * (i as u64 - 1) < 1u64 << 31 {
                let (j1, j2) = self.next_bounded_pair(i as u32, i as u32 - 1);
                data.swap(i - 1, j1 as usize);
                data.swap(i - 2, j2 as usize);
                i -= 2;
            } else {
                let j = self.next_bounded(i as u32) as usize;
                data.swap(i - 1, j);
                i -= 1;
            }
        }
    }
}

fn assert_indexable(len: usize) {
    assert!(
        len <= u32::MAX as usize,
        "sequences longer than u32::MAX elements are not supported"
    );
}
