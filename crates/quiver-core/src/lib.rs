//! Quiver Core - Collection traversal primitives and queries
//!
//! This crate defines the two collection shapes and everything built on
//! top of a single traversal entry point:
//! - `Collection` / `Key` - borrowed views over sequences and mappings
//! - `each` / `index_of` - the traversal core
//! - queries (filter, map, reduce, contains, every, some, uniq, pluck, invoke)
//! - mapping merge helpers (extend, defaults)

pub mod collection;
pub mod error;
pub mod merge;
pub mod query;
pub mod traverse;

pub use collection::*;
pub use error::*;
pub use merge::*;
pub use query::*;
pub use traverse::*;
