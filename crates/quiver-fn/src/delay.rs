//! Deferred one-shot invocation

use std::time::Duration;

/// Schedule `func(args)` to run once after `wait`, without blocking
///
/// The call returns immediately; the invocation happens later on the
/// ambient Tokio runtime. Nothing is handed back to the caller - not the
/// function's result and not a cancellation handle. The timer guarantees a
/// lower bound on the delay, not an upper bound.
///
/// Must be called from within a Tokio runtime.
pub fn delay<F, A>(func: F, wait: Duration, args: A)
where
    F: FnOnce(A) + Send + 'static,
    A: Send + 'static,
{
    tokio::spawn(async move {
        tokio::time::sleep(wait).await;
        func(args);
    });
}
