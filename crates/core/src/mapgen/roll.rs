//! Uniform draws over the generator's random stream.

use rand_chacha::rand_core::Rng;

/// Uniform integer in `min_value..=max_value`, rejecting the biased tail of `next_u64`.
pub(crate) fn uniform_inclusive<R: Rng + ?Sized>(rng: &mut R, min_value: u32, max_value: u32) -> u32 {
    debug_assert!(min_value <= max_value);
    let range_size = u64::from(max_value - min_value) + 1;
    let zone = u64::MAX - (u64::MAX % range_size);
    loop {
        let value = rng.next_u64();
        if value < zone {
            return min_value + (value % range_size) as u32;
        }
    }
}

/// Rolls 1..=100 and succeeds when the roll is at or below `threshold`.
pub(crate) fn percent_check<R: Rng + ?Sized>(rng: &mut R, threshold: u32) -> bool {
    uniform_inclusive(rng, 1, 100) <= threshold
}

pub(crate) fn index<R: Rng + ?Sized>(rng: &mut R, len: usize) -> usize {
    debug_assert!(len > 0);
    let max_index = u32::try_from(len - 1).unwrap_or(u32::MAX);
    uniform_inclusive(rng, 0, max_index) as usize
}

pub(crate) fn pick<'a, R: Rng + ?Sized, T>(rng: &mut R, slice: &'a [T]) -> &'a T {
    &slice[index(rng, slice.len())]
}
