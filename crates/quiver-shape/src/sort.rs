//! Comparator-based ordering

use std::cmp::Ordering;

use quiver_core::Record;

/// Sort the sequence in place by a derived key, returning the sequence
///
/// A quadratic all-pairs exchange pass: elements at positions `i < j` swap
/// exactly when the key at `i` compares strictly greater than the key at
/// `j`, producing ascending order. Ties are not guaranteed stable.
///
/// Keys that do not compare at all (NaN, for instance) trigger no swap, so
/// where such elements land is unspecified.
pub fn sort_by<T, K, F>(sequence: &mut Vec<T>, mut key: F) -> &mut Vec<T>
where
    K: PartialOrd,
    F: FnMut(&T) -> K,
{
    for i in 0..sequence.len() {
        for j in i + 1..sequence.len() {
            let ordering = key(&sequence[i]).partial_cmp(&key(&sequence[j]));
            if ordering == Some(Ordering::Greater) {
                sequence.swap(i, j);
            }
        }
    }

    sequence
}

/// Sort records in place by a named property, returning the sequence
///
/// Records missing the property get a `None` key; `Option`'s none-first
/// ordering is what places them, not a guaranteed policy.
pub fn sort_by_property<'a, T>(
    sequence: &'a mut Vec<Record<T>>,
    property: &str,
) -> &'a mut Vec<Record<T>>
where
    T: PartialOrd + Clone,
{
    sort_by(sequence, |record| record.get(property).cloned())
}
