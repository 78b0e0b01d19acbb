//! Set-style selection over sequences

use quiver_core::{every, filter, index_of};

/// Elements of `first` that appear in every one of `others`
///
/// Order and duplicates come from `first`; membership is strict equality.
pub fn intersection<T>(first: &[T], others: &[&[T]]) -> Vec<T>
where
    T: PartialEq + Clone,
{
    filter(first.into(), |element, _| {
        every(others.into(), |other: &&[T]| {
            index_of(other, element).is_some()
        })
    })
}

/// Elements of `first` that appear in none of `others`
pub fn difference<T>(first: &[T], others: &[&[T]]) -> Vec<T>
where
    T: PartialEq + Clone,
{
    filter(first.into(), |element, _| {
        every(others.into(), |other: &&[T]| {
            index_of(other, element).is_none()
        })
    })
}
