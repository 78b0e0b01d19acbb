//! Traversal core - the single iteration primitive everything else uses

use crate::{Collection, Key, QuiverError, QuiverResult};

/// Return the argument untouched
///
/// Handy as a stand-in iterator when a caller has none to supply.
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Call `iterator(value, key, collection)` once per element
///
/// Sequences are visited in index order; mappings in whatever order their
/// keys enumerate. `each` has no return value of its own - its only effect
/// is whatever the iterator performs.
pub fn each<'a, T, F>(collection: Collection<'a, T>, mut iterator: F)
where
    F: FnMut(&'a T, Key<'a>, Collection<'a, T>),
{
    match collection {
        Collection::Sequence(items) => {
            for (index, value) in items.iter().enumerate() {
                iterator(value, Key::Index(index), collection);
            }
        }
        Collection::Mapping(entries) => {
            for (name, value) in entries.iter() {
                iterator(value, Key::Name(name), collection);
            }
        }
    }
}

/// Index of the first element equal to `target`, or `None`
///
/// Linear scan through `each`; ties between duplicate values always
/// resolve to the earliest index.
pub fn index_of<T: PartialEq>(sequence: &[T], target: &T) -> Option<usize> {
    let mut found = None;

    each(sequence.into(), |value, key, _| {
        if found.is_none() && value == target {
            found = key.index();
        }
    });

    found
}

/// First element of a sequence, if any
pub fn first<T>(sequence: &[T]) -> Option<&T> {
    sequence.first()
}

/// First `n` elements, clamped to the sequence length
pub fn first_n<T>(sequence: &[T], n: usize) -> &[T] {
    &sequence[..n.min(sequence.len())]
}

/// Last element; mapping input is rejected
pub fn last<T>(collection: Collection<'_, T>) -> QuiverResult<Option<&T>> {
    match collection {
        Collection::Sequence(items) => Ok(items.last()),
        Collection::Mapping(_) => Err(QuiverError::sequence_required("last")),
    }
}

/// Last `n` elements; `n >= len` yields the whole sequence
pub fn last_n<T>(collection: Collection<'_, T>, n: usize) -> QuiverResult<&[T]> {
    match collection {
        Collection::Sequence(items) => {
            if n < items.len() {
                Ok(&items[items.len() - n..])
            } else {
                Ok(items)
            }
        }
        Collection::Mapping(_) => Err(QuiverError::sequence_required("last")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{QuiverError, Record};

    #[test]
    fn test_each_visits_sequence_in_order() {
        let values = vec![10, 20, 30];
        let mut seen = Vec::new();

        each((&values).into(), |value, key, _| {
            seen.push((key.index().unwrap(), *value));
        });

        assert_eq!(seen, vec![(0, 10), (1, 20), (2, 30)]);
    }

    #[test]
    fn test_each_visits_every_mapping_entry() {
        let mut entries = Record::new();
        entries.insert("a".to_owned(), 1);
        entries.insert("b".to_owned(), 2);

        let mut seen = Vec::new();
        each((&entries).into(), |value, key, _| {
            seen.push((key.name().unwrap().to_owned(), *value));
        });

        seen.sort();
        assert_eq!(seen, vec![("a".to_owned(), 1), ("b".to_owned(), 2)]);
    }

    #[test]
    fn test_each_hands_back_the_collection() {
        let values = vec![1, 2];
        each((&values).into(), |_, _, collection| {
            assert_eq!(collection.len(), 2);
        });
    }

    #[test]
    fn test_identity_returns_its_argument() {
        assert_eq!(identity(4), 4);
        assert_eq!(identity("as-is"), "as-is");
    }

    #[test]
    fn test_index_of_first_match_wins() {
        let values = vec![5, 7, 5, 9];

        assert_eq!(index_of(&values, &5), Some(0));
        assert_eq!(index_of(&values, &9), Some(3));
        assert_eq!(index_of(&values, &4), None);
    }

    #[test]
    fn test_first_and_first_n() {
        let values = vec![1, 2, 3];

        assert_eq!(first(&values), Some(&1));
        assert_eq!(first_n(&values, 2), &[1, 2]);
        assert_eq!(first_n(&values, 10), &[1, 2, 3]);
        assert_eq!(first::<i32>(&[]), None);
    }

    #[test]
    fn test_last_and_last_n() {
        let values = vec![1, 2, 3];

        assert_eq!(last((&values).into()).unwrap(), Some(&3));
        assert_eq!(last_n((&values).into(), 2).unwrap(), &[2, 3]);
        assert_eq!(last_n((&values).into(), 10).unwrap(), &[1, 2, 3]);
    }

    #[test]
    fn test_last_rejects_mapping() {
        let entries: Record<i32> = Record::new();

        assert_eq!(
            last((&entries).into()),
            Err(QuiverError::sequence_required("last"))
        );
        assert!(last_n::<i32>((&entries).into(), 1).is_err());
    }
}
