//! Scoped block timing
//!
//! [`TimedContext`] is an RAII guard: it captures a start timestamp when created
//! and emits one INFO record when the scope ends. The record is emitted on every
//! exit path, including early returns, `?` and panics unwinding through the scope.

use crate::clock::{elapsed_seconds, now};
use crate::emit::{emit_duration, Fields};
use crate::logger::{resolve_logger, Logger};
use serde_json::Value;
use std::borrow::Cow;

/// Start timing a block under `label`.
///
/// The returned guard reports when dropped; bind it to a named variable
/// (`let _timer = ...`) so it lives until the end of the scope.
///
/// # Example
///
/// ```rust
/// use timing_utils::timed_context;
///
/// fn load() {
///     let _timer = timed_context("load").with_field("source", "disk");
///     // ... loading code ...
/// } // INFO "load ran in 0.0s" with extra = {"source":"disk"}
/// # load();
/// ```
#[must_use = "the block is timed until this guard is dropped"]
pub fn timed_context(label: impl Into<Cow<'static, str>>) -> TimedContext {
    TimedContext::new(label)
}

/// Time `f` as a labelled block and return its result.
///
/// The closure form of [`TimedContext`]: the record is emitted even if `f` panics.
pub fn timed_block<R>(
    label: impl Into<Cow<'static, str>>,
    logger: Option<&Logger>,
    fields: Option<Fields>,
    f: impl FnOnce() -> R,
) -> R {
    let mut guard = TimedContext::new(label);
    if let Some(logger) = logger {
        guard = guard.with_logger(logger.clone());
    }
    if let Some(fields) = fields {
        guard = guard.with_fields(fields);
    }
    let outcome = f();
    drop(guard);
    outcome
}

/// A guard that reports the time between its creation and its end.
pub struct TimedContext {
    label: Cow<'static, str>,
    logger: Option<Logger>,
    fields: Fields,
    start: f64,
    reported: bool,
}

impl TimedContext {
    /// Create a guard. Timing starts immediately.
    pub fn new(label: impl Into<Cow<'static, str>>) -> Self {
        Self {
            label: label.into(),
            logger: None,
            fields: Fields::new(),
            start: now(),
            reported: false,
        }
    }

    /// Report through a specific logger instead of the default.
    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Attach one structured field to the record.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key, value);
        self
    }

    /// Attach several structured fields to the record.
    pub fn with_fields(mut self, fields: Fields) -> Self {
        self.fields.extend(fields);
        self
    }

    /// Get the label.
    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Get the attached fields.
    #[inline]
    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    /// Get the start timestamp.
    #[inline]
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Get the rounded seconds elapsed so far.
    #[inline]
    pub fn elapsed(&self) -> f64 {
        elapsed_seconds(self.start, now())
    }

    /// End the scope now, report, and return the reported seconds.
    ///
    /// Dropping the guard afterwards does not report again.
    pub fn finish(mut self) -> f64 {
        self.report()
    }

    fn report(&mut self) -> f64 {
        let end = now();
        self.reported = true;
        let seconds = elapsed_seconds(self.start, end);
        emit_duration(
            resolve_logger(self.logger.as_ref()),
            &self.label,
            seconds,
            Some(&self.fields),
        );
        seconds
    }
}

impl Drop for TimedContext {
    fn drop(&mut self) {
        if !self.reported {
            self.report();
        }
    }
}

impl std::fmt::Debug for TimedContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimedContext")
            .field("label", &self.label)
            .field("fields", &self.fields)
            .field("start", &self.start)
            .field("reported", &self.reported)
            .finish_non_exhaustive()
    }
}

/// Macro for timing the rest of the enclosing scope.
///
/// Creates a [`TimedContext`] guard that reports at INFO level when the scope
/// ends, however it ends. Extra `key = value` pairs become structured fields on
/// the record; an optional leading `logger = expr` routes the record to a
/// specific [`Logger`] (or `&Logger`).
///
/// # Example
///
/// ```rust
/// use timing_utils::timed_context;
///
/// fn query() {
///     timed_context!("db", q = "select 1", rows = 3);
///     // ... query ...
/// } // Guard reports here
/// # query();
/// ```
#[macro_export]
macro_rules! timed_context {
    ($label:expr, logger = $logger:expr $(, $key:ident = $value:expr)* $(,)?) => {
        let _timed_context = $crate::TimedContext::new($label)
            .with_logger(::core::clone::Clone::clone(
                ::core::borrow::Borrow::<$crate::Logger>::borrow(&$logger),
            ))
            $(.with_field(::core::stringify!($key), $value))*;
    };
    ($label:expr $(, $key:ident = $value:expr)* $(,)?) => {
        let _timed_context = $crate::TimedContext::new($label)
            $(.with_field(::core::stringify!($key), $value))*;
    };
}
