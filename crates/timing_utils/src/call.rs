//! One-shot call timing

use crate::clock::{elapsed_seconds, now};

/// Call `f` and return its result together with the elapsed seconds.
///
/// Nothing is logged. Arguments are passed by capturing them in the closure.
/// If `f` panics the panic propagates and no timing is produced.
///
/// # Example
///
/// ```rust
/// use timing_utils::time_call;
///
/// let add = |a: i32, b: i32| a + b;
/// let (sum, seconds) = time_call(|| add(2, 3));
/// assert_eq!(sum, 5);
/// assert!(seconds >= 0.0);
/// ```
#[inline]
pub fn time_call<F, R>(f: F) -> (R, f64)
where
    F: FnOnce() -> R,
{
    let started = now();
    let outcome = f();
    let finished = now();
    (outcome, elapsed_seconds(started, finished))
}
