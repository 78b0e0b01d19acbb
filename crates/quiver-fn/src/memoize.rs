//! Argument-keyed caching decorator

use std::collections::HashMap;
use std::marker::PhantomData;

/// Key derivation for memoized call arguments
///
/// Arguments are serialized to a string key before the cache lookup. The
/// intended use is a single primitive argument; tuple and `Vec` impls cover
/// the structural multi-argument case.
pub trait CacheKey {
    fn cache_key(&self) -> String;
}

macro_rules! cache_key_via_display {
    ($($ty:ty),*) => {
        $(impl CacheKey for $ty {
            fn cache_key(&self) -> String {
                self.to_string()
            }
        })*
    };
}

cache_key_via_display!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);

impl CacheKey for &str {
    fn cache_key(&self) -> String {
        (*self).to_owned()
    }
}

impl CacheKey for String {
    fn cache_key(&self) -> String {
        self.clone()
    }
}

impl<A: CacheKey, B: CacheKey> CacheKey for (A, B) {
    fn cache_key(&self) -> String {
        format!("[{},{}]", self.0.cache_key(), self.1.cache_key())
    }
}

impl<A: CacheKey, B: CacheKey, C: CacheKey> CacheKey for (A, B, C) {
    fn cache_key(&self) -> String {
        format!(
            "[{},{},{}]",
            self.0.cache_key(),
            self.1.cache_key(),
            self.2.cache_key()
        )
    }
}

impl<T: CacheKey> CacheKey for Vec<T> {
    fn cache_key(&self) -> String {
        let parts: Vec<String> = self.iter().map(CacheKey::cache_key).collect();
        format!("[{}]", parts.join(","))
    }
}

/// Whether a stored result satisfies a cache lookup
///
/// A stored value that does not count as a hit is treated exactly like a
/// missing entry: the wrapped function runs again for that key. `Option`
/// is the one shape where this matters - a cached `None` never counts.
pub trait CacheValue {
    fn counts_as_hit(&self) -> bool;
}

macro_rules! cache_value_always_hits {
    ($($ty:ty),*) => {
        $(impl CacheValue for $ty {
            fn counts_as_hit(&self) -> bool {
                true
            }
        })*
    };
}

cache_value_always_hits!(
    (), bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
    String
);

impl<T> CacheValue for Vec<T> {
    fn counts_as_hit(&self) -> bool {
        true
    }
}

impl<T> CacheValue for Option<T> {
    fn counts_as_hit(&self) -> bool {
        self.is_some()
    }
}

/// Wrapper that caches results per serialized argument
pub struct Memoize<F, A, R> {
    func: F,
    cache: HashMap<String, R>,
    _args: PhantomData<fn(A)>,
}

/// Wrap `func` with an argument-keyed result cache
pub fn memoize<F, A, R>(func: F) -> Memoize<F, A, R>
where
    F: FnMut(A) -> R,
    A: CacheKey,
    R: Clone + CacheValue,
{
    Memoize {
        func,
        cache: HashMap::new(),
        _args: PhantomData,
    }
}

impl<F, A, R> Memoize<F, A, R>
where
    F: FnMut(A) -> R,
    A: CacheKey,
    R: Clone + CacheValue,
{
    /// Return the cached result for this argument, computing it if needed
    pub fn call(&mut self, args: A) -> R {
        let key = args.cache_key();

        if let Some(stored) = self.cache.get(&key) {
            if stored.counts_as_hit() {
                tracing::trace!(key = %key, "memoize cache hit");
                return stored.clone();
            }
        }

        let result = (self.func)(args);
        self.cache.insert(key, result.clone());
        result
    }

    /// Whether a result is cached for this argument
    pub fn is_cached(&self, args: &A) -> bool {
        self.cache
            .get(&args.cache_key())
            .is_some_and(CacheValue::counts_as_hit)
    }

    /// Number of cached entries
    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_memoize_computes_once_per_argument() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);

        let mut square = memoize(move |n: i64| {
            counter.set(counter.get() + 1);
            n * n
        });

        assert_eq!(square.call(4), 16);
        assert_eq!(square.call(4), 16);
        assert_eq!(calls.get(), 1);

        assert_eq!(square.call(5), 25);
        assert_eq!(calls.get(), 2);
        assert_eq!(square.cached_len(), 2);
        assert!(square.is_cached(&4));
        assert!(!square.is_cached(&6));
    }

    #[test]
    fn test_memoize_none_results_recompute() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);

        let mut lookup = memoize(move |n: i32| {
            counter.set(counter.get() + 1);
            if n > 0 {
                Some(n)
            } else {
                None
            }
        });

        // a cached None does not count as a hit, so the function runs again
        assert_eq!(lookup.call(-1), None);
        assert_eq!(lookup.call(-1), None);
        assert_eq!(calls.get(), 2);

        // a Some result is a normal hit
        assert_eq!(lookup.call(3), Some(3));
        assert_eq!(lookup.call(3), Some(3));
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn test_memoize_structural_keys() {
        let mut concat = memoize(|pair: (String, String)| format!("{}{}", pair.0, pair.1));

        assert_eq!(concat.call(("a".into(), "b".into())), "ab");
        assert_eq!(concat.call(("a".into(), "b".into())), "ab");
        assert_eq!(concat.cached_len(), 1);

        assert_eq!(("a", "b").cache_key(), "[a,b]");
        assert_eq!(vec![1, 2, 3].cache_key(), "[1,2,3]");
    }
}
