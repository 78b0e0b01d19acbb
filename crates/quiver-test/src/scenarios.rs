//! End-to-end scenario suite
//!
//! Fixtures plus tests that run the toolkit crates against each other the
//! way a caller would: query pipelines over shared fixtures, merge
//! precedence, decorator timing, and shape transforms feeding queries.

use quiver_core::Record;

/// Build a record from literal pairs
pub fn record(pairs: &[(&str, i64)]) -> Record<i64> {
    pairs
        .iter()
        .map(|(name, value)| ((*name).to_owned(), *value))
        .collect()
}

/// A small roster of people records used across scenarios
pub fn roster() -> Vec<Record<i64>> {
    vec![
        record(&[("age", 34), ("height", 180)]),
        record(&[("age", 27), ("height", 165)]),
        record(&[("age", 51), ("height", 172)]),
    ]
}
