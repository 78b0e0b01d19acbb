//! Quiver Shape - Array-shape transforms
//!
//! Transforms over sequence structure, built on the quiver-core traversal:
//! - `shuffle` - randomized reorder (incremental-growth algorithm)
//! - `sort_by` / `sort_by_property` - in-place comparator sort
//! - `zip` - positional tuples across sequences
//! - `Nested` / `flatten` - recursive flattening
//! - `intersection` / `difference` - set-style selection from a sequence

pub mod nested;
pub mod sets;
pub mod shuffle;
pub mod sort;
pub mod zip;

pub use nested::*;
pub use sets::*;
pub use shuffle::*;
pub use sort::*;
pub use zip::*;
