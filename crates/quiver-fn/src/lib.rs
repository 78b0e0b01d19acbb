//! Quiver Fn - Function decorators
//!
//! Each decorator wraps a function in a struct that owns the wrapped
//! function plus its private state, exposed through a `call` method:
//! - `Once` - run at most once, replay the stored result
//! - `Memoize` - cache results per serialized argument
//! - `delay` - schedule a one-shot deferred invocation
//! - `Throttle` - at most one fresh run per time window
//!
//! `delay` and the cooldown path of `Throttle` schedule their continuations
//! on the ambient Tokio runtime; scheduled continuations always eventually
//! fire and cannot be cancelled.

pub mod delay;
pub mod memoize;
pub mod once;
pub mod throttle;

pub use delay::*;
pub use memoize::*;
pub use once::*;
pub use throttle::*;
