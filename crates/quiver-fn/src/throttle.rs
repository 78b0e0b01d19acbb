//! Call-rate limiting decorator

use std::marker::PhantomData;
use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

struct ThrottleInner<F, R> {
    func: F,
    last_called: Option<Instant>,
    last_result: Option<R>,
    pending: usize,
}

/// Wrapper enforcing at most one fresh invocation per time window
///
/// Two states:
/// - **Open** (more than `wait` since the last run, or never run): the call
///   runs the function immediately and returns its result.
/// - **Cooldown**: the call schedules a deferred re-attempt after `wait`
///   and returns the previous stored result. The returned value on this
///   path is stale by design - it is never the result of the call being
///   deferred. The re-attempt goes through the same two-state check.
///
/// Cloning the wrapper shares the same window and state.
pub struct Throttle<F, A, R> {
    inner: Arc<Mutex<ThrottleInner<F, R>>>,
    wait: Duration,
    _args: PhantomData<fn(A)>,
}

impl<F, A, R> Clone for Throttle<F, A, R> {
    fn clone(&self) -> Self {
        Throttle {
            inner: Arc::clone(&self.inner),
            wait: self.wait,
            _args: PhantomData,
        }
    }
}

/// Wrap `func` so it runs at most once per `wait` window
pub fn throttle<F, A, R>(func: F, wait: Duration) -> Throttle<F, A, R>
where
    F: FnMut(A) -> R + Send + 'static,
    A: Clone + Send + 'static,
    R: Clone + Send + 'static,
{
    Throttle {
        inner: Arc::new(Mutex::new(ThrottleInner {
            func,
            last_called: None,
            last_result: None,
            pending: 0,
        })),
        wait,
        _args: PhantomData,
    }
}

impl<F, A, R> Throttle<F, A, R>
where
    F: FnMut(A) -> R + Send + 'static,
    A: Clone + Send + 'static,
    R: Clone + Send + 'static,
{
    /// Run the function if the window is open; otherwise defer and return
    /// the previous result
    ///
    /// `None` only before the first successful run. Deferred re-attempts
    /// are scheduled on the ambient Tokio runtime, so cooldown-path calls
    /// must happen inside one.
    pub fn call(&self, args: A) -> Option<R> {
        let mut inner = self.inner.lock();

        let open = inner
            .last_called
            .map_or(true, |at| at.elapsed() > self.wait);

        if open {
            inner.last_called = Some(Instant::now());
            let result = (inner.func)(args);
            inner.last_result = Some(result.clone());
            return Some(result);
        }

        inner.pending += 1;
        let stale = inner.last_result.clone();
        drop(inner);

        tracing::debug!(wait_ms = self.wait.as_millis() as u64, "throttle cooldown, deferring");

        let retry = self.clone();
        let wait = self.wait;
        tokio::spawn(async move {
            tokio::time::sleep(wait).await;
            retry.call(args);
            retry.inner.lock().pending -= 1;
        });

        stale
    }

    /// Number of deferred re-attempts that have not fired yet
    pub fn pending(&self) -> usize {
        self.inner.lock().pending
    }
}
