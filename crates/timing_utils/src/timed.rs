//! Per-call function timing

use crate::clock::{elapsed_seconds, now};
use crate::emit::emit_debug_duration;
use crate::logger::{resolve_logger, Logger};
use std::borrow::Cow;

/// Run `f` and log how long it took at DEBUG level under `name`.
///
/// The record is emitted only after `f` returns. A panic unwinds straight
/// through and leaves no record. `Err` values are ordinary returns and are timed.
pub fn run_timed<R>(name: &str, logger: Option<&Logger>, f: impl FnOnce() -> R) -> R {
    let started = now();
    let outcome = f();
    let finished = now();
    emit_debug_duration(resolve_logger(logger), name, elapsed_seconds(started, finished));
    outcome
}

/// Wrap a function definition so every call is timed.
///
/// The function keeps its name, visibility, attributes and signature. Each call
/// logs `"{name} ran in {seconds}s"` at DEBUG level after the body returns.
///
/// Two forms are accepted:
///
/// - `timed! { fn f(..) -> T { .. } }` logs through the [default logger](crate::default_logger)
/// - `timed! { logger = expr; fn f(..) -> T { .. } }` logs through `expr`, a
///   [`Logger`] or `&Logger` evaluated on each call
///
/// The parameter list is re-emitted as written, so `mut` bindings, destructuring
/// patterns and `self` receivers all work. Generic functions are not supported;
/// use [`run_timed`] or [`Timed`] for those.
///
/// # Example
///
/// ```rust
/// use timing_utils::{timed, Logger};
///
/// timed! {
///     /// Adds two numbers.
///     pub fn add(a: i32, b: i32) -> i32 {
///         a + b
///     }
/// }
///
/// static QUIET: Logger = Logger::ambient();
///
/// timed! {
///     logger = QUIET;
///     fn mul(a: i32, b: i32) -> i32 {
///         a * b
///     }
/// }
///
/// assert_eq!(add(1, 2), 3);
/// assert_eq!(mul(2, 3), 6);
/// ```
#[macro_export]
macro_rules! timed {
    (
        logger = $logger:expr;
        $(#[$meta:meta])*
        $vis:vis fn $name:ident($($params:tt)*) -> $ret:ty $body:block
    ) => {
        $(#[$meta])*
        $vis fn $name($($params)*) -> $ret {
            $crate::run_timed(
                ::core::stringify!($name),
                ::core::option::Option::Some(::core::borrow::Borrow::<$crate::Logger>::borrow(&$logger)),
                move || -> $ret { $body },
            )
        }
    };
    (
        logger = $logger:expr;
        $(#[$meta:meta])*
        $vis:vis fn $name:ident($($params:tt)*) $body:block
    ) => {
        $(#[$meta])*
        $vis fn $name($($params)*) {
            $crate::run_timed(
                ::core::stringify!($name),
                ::core::option::Option::Some(::core::borrow::Borrow::<$crate::Logger>::borrow(&$logger)),
                move || $body,
            )
        }
    };
    (
        $(#[$meta:meta])*
        $vis:vis fn $name:ident($($params:tt)*) -> $ret:ty $body:block
    ) => {
        $(#[$meta])*
        $vis fn $name($($params)*) -> $ret {
            $crate::run_timed(
                ::core::stringify!($name),
                ::core::option::Option::None,
                move || -> $ret { $body },
            )
        }
    };
    (
        $(#[$meta:meta])*
        $vis:vis fn $name:ident($($params:tt)*) $body:block
    ) => {
        $(#[$meta])*
        $vis fn $name($($params)*) {
            $crate::run_timed(::core::stringify!($name), ::core::option::Option::None, move || $body)
        }
    };
}

/// A callable wrapped so every call is timed.
///
/// The value-level counterpart of [`timed!`], for closures, function pointers,
/// and functions that the macro cannot rewrite. The default name is the last
/// path segment of the callable's type name, so wrapping a function item keeps
/// its name.
///
/// # Example
///
/// ```rust
/// use timing_utils::Timed;
///
/// fn answer() -> u32 {
///     42
/// }
///
/// let mut timed = Timed::new(answer);
/// assert_eq!(timed.name(), "answer");
/// assert_eq!(timed.call(), 42);
///
/// let mut double = Timed::named("double", |x: u32| x * 2);
/// assert_eq!(double.call_with(21), 42);
/// ```
pub struct Timed<F> {
    func: F,
    name: Cow<'static, str>,
    logger: Option<Logger>,
}

impl<F> Timed<F> {
    /// Wrap a callable, naming it after its type.
    pub fn new(func: F) -> Self {
        Self {
            func,
            name: Cow::Borrowed(short_type_name::<F>()),
            logger: None,
        }
    }

    /// Wrap a callable under an explicit name.
    pub fn named(name: impl Into<Cow<'static, str>>, func: F) -> Self {
        Self {
            func,
            name: name.into(),
            logger: None,
        }
    }

    /// Log through a specific logger instead of the default.
    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Get the name used in log records.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the logger this wrapper was configured with, if any.
    #[inline]
    pub fn logger(&self) -> Option<&Logger> {
        self.logger.as_ref()
    }

    /// Unwrap the callable.
    pub fn into_inner(self) -> F {
        self.func
    }

    /// Call a zero-argument callable.
    pub fn call<R>(&mut self) -> R
    where
        F: FnMut() -> R,
    {
        run_timed(&self.name, self.logger.as_ref(), || (self.func)())
    }

    /// Call a single-argument callable. Pass a tuple for more.
    pub fn call_with<A, R>(&mut self, arg: A) -> R
    where
        F: FnMut(A) -> R,
    {
        run_timed(&self.name, self.logger.as_ref(), || (self.func)(arg))
    }
}

impl<F> std::fmt::Debug for Timed<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Timed")
            .field("name", &self.name)
            .field("logger", &self.logger)
            .finish_non_exhaustive()
    }
}

/// Last path segment of a type name, without generic arguments.
fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = match full.find('<') {
        Some(index) => &full[..index],
        None => full,
    };
    match base.rfind("::") {
        Some(index) => &base[index + 2..],
        None => base,
    }
}
