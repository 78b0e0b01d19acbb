//! Run-once decorator

use std::marker::PhantomData;

/// Wrapper that invokes its function at most once
///
/// The first call runs the function and stores the result; every later
/// call returns a clone of that stored result, regardless of arguments.
pub struct Once<F, A, R> {
    func: F,
    fired: bool,
    result: Option<R>,
    _args: PhantomData<fn(A)>,
}

/// Wrap `func` so it only ever runs once
pub fn once<F, A, R>(func: F) -> Once<F, A, R>
where
    F: FnMut(A) -> R,
{
    Once {
        func,
        fired: false,
        result: None,
        _args: PhantomData,
    }
}

impl<F, A, R> Once<F, A, R>
where
    F: FnMut(A) -> R,
    R: Clone,
{
    /// Run the function on the first call; replay the result afterwards
    pub fn call(&mut self, args: A) -> R {
        if !self.fired {
            self.result = Some((self.func)(args));
            self.fired = true;
        }

        self.result.clone().expect("result is stored before fired is set")
    }

    /// Whether the wrapped function has run
    pub fn has_fired(&self) -> bool {
        self.fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_once_runs_exactly_once() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);

        let mut add_one = once(move |n: i32| {
            counter.set(counter.get() + 1);
            n + 1
        });

        assert!(!add_one.has_fired());
        assert_eq!(add_one.call(5), 6);
        assert!(add_one.has_fired());

        // later calls replay the stored result, whatever the arguments
        assert_eq!(add_one.call(100), 6);
        assert_eq!(add_one.call(-3), 6);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_once_stores_unit_results() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);

        let mut fire = once(move |()| {
            counter.set(counter.get() + 1);
        });

        fire.call(());
        fire.call(());

        assert_eq!(calls.get(), 1);
    }
}
