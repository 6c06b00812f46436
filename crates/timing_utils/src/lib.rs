//! Timing Utilities
//!
//! This crate provides small, stateless helpers for measuring how long a unit of
//! work takes and reporting it through [`tracing`]:
//! - [`timed!`] wraps a function definition and logs every call at DEBUG level
//! - [`time_call`] runs a closure and hands back `(result, elapsed_seconds)` without logging
//! - [`timed_context!`] / [`TimedContext`] time a block and log at INFO level on every exit path
//!
//! Durations are reported in seconds, rounded to two decimal places, with the
//! message template `"{label} ran in {seconds}s"`.
//!
//! # Feature Flags
//!
//! - `subscriber` (default): Enables [`init_tracing`] and [`init_tracing_with_filter`]
//!
//! # Example
//!
//! ```rust
//! use timing_utils::{time_call, timed, timed_context};
//!
//! timed! {
//!     /// Adds two numbers.
//!     fn add(a: i32, b: i32) -> i32 {
//!         a + b
//!     }
//! }
//!
//! assert_eq!(add(1, 2), 3);
//!
//! let (sum, seconds) = time_call(|| add(2, 3));
//! assert_eq!(sum, 5);
//! assert!(seconds >= 0.0);
//!
//! {
//!     timed_context!("db", q = "select 1");
//!     // ... query ...
//! } // INFO "db ran in 0.0s" with extra = {"q":"select 1"}
//! ```

mod call;
mod clock;
mod context;
mod emit;
mod error;
mod logger;
#[cfg(feature = "subscriber")]
mod subscriber;
mod timed;

pub use call::time_call;
pub use clock::{elapsed_seconds, format_seconds, now};
pub use context::{timed_block, timed_context, TimedContext};
pub use emit::{emit_debug_duration, emit_duration, Fields};
pub use error::{TimingError, TimingResult};
pub use logger::{default_logger, resolve_logger, Logger};
#[cfg(feature = "subscriber")]
pub use subscriber::{init_tracing, init_tracing_with_filter};
pub use timed::{run_timed, Timed};
