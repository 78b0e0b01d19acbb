//! Collection shapes for Quiver
//!
//! Every traversal operation accepts one of two shapes:
//! - a sequence: ordered, index-addressed, contiguous values
//! - a mapping: string-keyed values, enumeration order not guaranteed
//!
//! `Collection` is a borrowed view, so building one never copies the
//! underlying data; callers keep ownership of their collections.

use std::collections::HashMap;

/// A string-keyed mapping of values
pub type Record<T> = HashMap<String, T>;

/// Borrowed view over either collection shape
#[derive(Debug)]
pub enum Collection<'a, T> {
    /// Ordered, index-addressed values
    Sequence(&'a [T]),
    /// Keyed values, enumeration order not guaranteed
    Mapping(&'a Record<T>),
}

impl<'a, T> Collection<'a, T> {
    /// Number of elements in either shape
    pub fn len(&self) -> usize {
        match self {
            Collection::Sequence(items) => items.len(),
            Collection::Mapping(entries) => entries.len(),
        }
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The sequence slice, if this view is a sequence
    pub fn as_sequence(&self) -> Option<&'a [T]> {
        match self {
            Collection::Sequence(items) => Some(items),
            Collection::Mapping(_) => None,
        }
    }
}

impl<'a, T> Clone for Collection<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for Collection<'a, T> {}

impl<'a, T> From<&'a [T]> for Collection<'a, T> {
    fn from(items: &'a [T]) -> Self {
        Collection::Sequence(items)
    }
}

impl<'a, T> From<&'a Vec<T>> for Collection<'a, T> {
    fn from(items: &'a Vec<T>) -> Self {
        Collection::Sequence(items)
    }
}

impl<'a, T, const N: usize> From<&'a [T; N]> for Collection<'a, T> {
    fn from(items: &'a [T; N]) -> Self {
        Collection::Sequence(items)
    }
}

impl<'a, T> From<&'a Record<T>> for Collection<'a, T> {
    fn from(entries: &'a Record<T>) -> Self {
        Collection::Mapping(entries)
    }
}

/// Position of an element within its collection
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key<'a> {
    /// 0-based position in a sequence
    Index(usize),
    /// Key name in a mapping
    Name(&'a str),
}

impl<'a> Key<'a> {
    /// The sequence index, if any
    #[inline]
    pub fn index(self) -> Option<usize> {
        match self {
            Key::Index(index) => Some(index),
            Key::Name(_) => None,
        }
    }

    /// The mapping key name, if any
    #[inline]
    pub fn name(self) -> Option<&'a str> {
        match self {
            Key::Index(_) => None,
            Key::Name(name) => Some(name),
        }
    }
}
