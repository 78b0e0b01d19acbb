//! Positional zipping across sequences

use quiver_core::each;

/// Zip sequences together by position
///
/// Tuple `i` holds element `i` of every input, in input order. The result
/// is as long as the longest input; shorter inputs contribute `None` for
/// the positions they lack.
pub fn zip<T: Clone>(sequences: &[&[T]]) -> Vec<Vec<Option<T>>> {
    let mut longest = 0;
    each(sequences.into(), |sequence, _, _| {
        if sequence.len() > longest {
            longest = sequence.len();
        }
    });

    let mut zipped = Vec::with_capacity(longest);
    for position in 0..longest {
        let mut tuple = Vec::with_capacity(sequences.len());
        each(sequences.into(), |sequence, _, _| {
            tuple.push(sequence.get(position).cloned());
        });
        zipped.push(tuple);
    }

    zipped
}
