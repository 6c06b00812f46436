//! Timestamps and elapsed-time arithmetic

use std::sync::OnceLock;
use std::time::Instant;

/// Anchor every timestamp is measured from. Set on first use.
static ANCHOR: OnceLock<Instant> = OnceLock::new();

/// Get the current timestamp in seconds.
///
/// Timestamps are only meaningful relative to each other. They are backed by
/// [`Instant`], so successive calls on one thread never go backwards.
#[inline]
pub fn now() -> f64 {
    let anchor = *ANCHOR.get_or_init(Instant::now);
    Instant::now().duration_since(anchor).as_secs_f64()
}

/// Compute `end - start` rounded to two decimal places.
///
/// Exact ties round to even. A negative difference is returned as is;
/// nothing is clamped.
///
/// # Example
///
/// ```rust
/// use timing_utils::elapsed_seconds;
///
/// assert_eq!(elapsed_seconds(10.0, 11.256), 1.26);
/// assert_eq!(elapsed_seconds(5.0, 4.5), -0.5);
/// ```
#[inline]
pub fn elapsed_seconds(start: f64, end: f64) -> f64 {
    round_hundredths(end - start)
}

/// Format seconds for a log message.
///
/// Always keeps at least one fractional digit, so whole numbers read `1.0` rather than `1`.
pub fn format_seconds(seconds: f64) -> String {
    format!("{seconds:?}")
}

fn round_hundredths(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}
