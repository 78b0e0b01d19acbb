//! Randomized reordering

use quiver_core::each;
use rand::Rng;

/// New sequence with the same values in randomized order
///
/// Uses the thread-local generator; see [`shuffle_with`] for the algorithm
/// and its caveat.
pub fn shuffle<T: Clone>(sequence: &[T]) -> Vec<T> {
    shuffle_with(sequence, &mut rand::thread_rng())
}

/// [`shuffle`] with a caller-supplied source of randomness
///
/// Walks the input once, growing the output by one slot per element: a
/// random slot of the output-so-far is displaced to the new end and the
/// incoming value takes its place. This incremental scheme is kept as-is
/// and is not an unbiased permutation for every input size.
pub fn shuffle_with<T, R>(sequence: &[T], rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: Rng,
{
    let mut shuffled: Vec<T> = Vec::with_capacity(sequence.len());

    each(sequence.into(), |value, _, _| {
        let seen = shuffled.len();
        if seen == 0 {
            shuffled.push(value.clone());
        } else {
            let slot = rng.gen_range(0..seen);
            let displaced = shuffled[slot].clone();
            shuffled.push(displaced);
            shuffled[slot] = value.clone();
        }
    });

    shuffled
}
