//! Collection queries built on the traversal core

use crate::{each, index_of, Collection, Key, QuiverError, QuiverResult, Record};

/// Elements for which the predicate holds, in their original order
pub fn filter<T, F>(collection: Collection<'_, T>, mut predicate: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, Key<'_>) -> bool,
{
    let mut kept = Vec::new();

    each(collection, |value, key, _| {
        if predicate(value, key) {
            kept.push(value.clone());
        }
    });

    kept
}

/// Elements for which the predicate does not hold
///
/// `filter` with the predicate inverted.
pub fn reject<T, F>(collection: Collection<'_, T>, mut predicate: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, Key<'_>) -> bool,
{
    filter(collection, |value, key| !predicate(value, key))
}

/// Each distinct value once, in order of first occurrence
///
/// Membership is a linear scan of the accumulated result through
/// `index_of`, so the cost is quadratic. Mapping input is rejected.
pub fn uniq<T>(collection: Collection<'_, T>) -> QuiverResult<Vec<T>>
where
    T: PartialEq + Clone,
{
    let items = collection
        .as_sequence()
        .ok_or(QuiverError::sequence_required("uniq"))?;

    let mut distinct: Vec<T> = Vec::new();
    each(items.into(), |value, _, _| {
        if index_of(&distinct, value).is_none() {
            distinct.push(value.clone());
        }
    });

    Ok(distinct)
}

/// New sequence of `iterator(value, key)` per element, order preserving
///
/// Mapping input is rejected.
pub fn map<T, U, F>(collection: Collection<'_, T>, mut iterator: F) -> QuiverResult<Vec<U>>
where
    F: FnMut(&T, Key<'_>) -> U,
{
    let items = collection
        .as_sequence()
        .ok_or(QuiverError::sequence_required("map"))?;

    let mut mapped = Vec::with_capacity(items.len());
    each(items.into(), |value, key, _| {
        mapped.push(iterator(value, key));
    });

    Ok(mapped)
}

/// Project the named property out of each record
///
/// Records missing the property contribute `None`.
pub fn pluck<T: Clone>(
    collection: Collection<'_, Record<T>>,
    property: &str,
) -> QuiverResult<Vec<Option<T>>> {
    map(collection, |record, _| record.get(property).cloned())
}

/// Elements that can dispatch a method by name
pub trait MethodDispatch<A, R> {
    /// Call the method named `method` with this element as the receiver
    fn dispatch(&self, method: &str, args: &A) -> R;
}

/// Call `func` on every element with the shared `args`, collecting results
pub fn invoke<T, A, R, F>(
    collection: Collection<'_, T>,
    func: F,
    args: &A,
) -> QuiverResult<Vec<R>>
where
    F: Fn(&T, &A) -> R,
{
    map(collection, |element, _| func(element, args))
}

/// Call the method named `method` on every element, collecting results
pub fn invoke_method<T, A, R>(
    collection: Collection<'_, T>,
    method: &str,
    args: &A,
) -> QuiverResult<Vec<R>>
where
    T: MethodDispatch<A, R>,
{
    map(collection, |element, _| element.dispatch(method, args))
}

/// Fold the collection into a single value
///
/// The seed is always required; there is no implicit first-element
/// fallback. Each step reassigns the accumulator to
/// `iterator(accumulator, value)`.
pub fn reduce<T, Acc, F>(collection: Collection<'_, T>, mut iterator: F, seed: Acc) -> Acc
where
    F: FnMut(Acc, &T) -> Acc,
{
    let mut accumulator = Some(seed);

    each(collection, |value, _, _| {
        accumulator = accumulator.take().map(|acc| iterator(acc, value));
    });

    accumulator.expect("accumulator survives every fold step")
}

/// Whether any element equals `target`
///
/// Reduce-based OR-fold over strict equality.
pub fn contains<T: PartialEq>(collection: Collection<'_, T>, target: &T) -> bool {
    reduce(collection, |found, value| found || value == target, false)
}

/// Whether the test holds for every element
///
/// Reduce-based AND-fold; true for an empty collection.
pub fn every<T, F>(collection: Collection<'_, T>, mut test: F) -> bool
where
    F: FnMut(&T) -> bool,
{
    reduce(collection, |all, value| all && test(value), true)
}

/// Whether every element is truthy on its own
pub fn every_truthy<T: Truthy>(collection: Collection<'_, T>) -> bool {
    every(collection, T::is_truthy)
}

/// Whether the test holds for at least one element
///
/// The negation of `every` with a per-element-negated test.
pub fn some<T, F>(collection: Collection<'_, T>, mut test: F) -> bool
where
    F: FnMut(&T) -> bool,
{
    !every(collection, |value| !test(value))
}

/// Whether at least one element is truthy on its own
pub fn some_truthy<T: Truthy>(collection: Collection<'_, T>) -> bool {
    !every(collection, |value| !value.is_truthy())
}

/// Element truthiness for queries run without an explicit test
pub trait Truthy {
    fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

macro_rules! truthy_for_integers {
    ($($ty:ty),*) => {
        $(impl Truthy for $ty {
            fn is_truthy(&self) -> bool {
                *self != 0
            }
        })*
    };
}

truthy_for_integers!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Truthy for f32 {
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthy for f64 {
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthy for &str {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Truthy for Option<T> {
    fn is_truthy(&self) -> bool {
        self.is_some()
    }
}
