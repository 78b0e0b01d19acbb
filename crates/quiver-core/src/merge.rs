//! Mapping merge helpers

use crate::{each, Record};

/// Copy every key of every source into `target`, overwriting unconditionally
///
/// Later sources win over earlier ones. Mutates `target` and returns it.
pub fn extend<'a, T: Clone>(
    target: &'a mut Record<T>,
    sources: &[Record<T>],
) -> &'a mut Record<T> {
    each(sources.into(), |source, _, _| {
        each(source.into(), |value, key, _| {
            if let Some(name) = key.name() {
                target.insert(name.to_owned(), value.clone());
            }
        });
    });

    target
}

/// Copy keys from the sources into `target` only where `target` has none
///
/// The first value encountered for a key wins across sources. Mutates
/// `target` and returns it.
pub fn defaults<'a, T: Clone>(
    target: &'a mut Record<T>,
    sources: &[Record<T>],
) -> &'a mut Record<T> {
    each(sources.into(), |source, _, _| {
        each(source.into(), |value, key, _| {
            if let Some(name) = key.name() {
                if !target.contains_key(name) {
                    target.insert(name.to_owned(), value.clone());
                }
            }
        });
    });

    target
}
