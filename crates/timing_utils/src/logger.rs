//! Logger handles and default logger resolution

use std::sync::OnceLock;
use tracing::{Dispatch, Subscriber};

/// Process-wide default logger
static DEFAULT_LOGGER: OnceLock<Logger> = OnceLock::new();

/// Get the process-wide default logger.
///
/// Created on first use and shared afterwards; every call returns the same
/// instance. The default is ambient: it emits through whichever `tracing`
/// dispatcher is current for the calling thread, with this crate's module path
/// as the record target.
pub fn default_logger() -> &'static Logger {
    DEFAULT_LOGGER.get_or_init(Logger::ambient)
}

/// Resolve an optional logger handle.
///
/// A supplied handle is returned unchanged; otherwise the [`default_logger`].
#[inline]
pub fn resolve_logger(selected: Option<&Logger>) -> &Logger {
    match selected {
        Some(logger) => logger,
        None => default_logger(),
    }
}

/// A handle through which timing records are emitted.
///
/// A logger is either ambient, emitting through the thread's current `tracing`
/// dispatcher, or bound to a specific [`Dispatch`]. Binding lets callers route
/// one timer's output to a dedicated subscriber without touching the global one.
#[derive(Debug, Clone, Default)]
pub struct Logger {
    dispatch: Option<Dispatch>,
}

impl Logger {
    /// Create a logger that emits through the current dispatcher.
    pub const fn ambient() -> Self {
        Self { dispatch: None }
    }

    /// Create a logger bound to a dispatcher.
    pub fn from_dispatch(dispatch: Dispatch) -> Self {
        Self {
            dispatch: Some(dispatch),
        }
    }

    /// Create a logger bound to a subscriber.
    pub fn from_subscriber<S>(subscriber: S) -> Self
    where
        S: Subscriber + Send + Sync + 'static,
    {
        Self::from_dispatch(Dispatch::new(subscriber))
    }

    /// Check whether this logger follows the current dispatcher.
    #[inline]
    pub fn is_ambient(&self) -> bool {
        self.dispatch.is_none()
    }

    /// Get the bound dispatcher, if any.
    #[inline]
    pub fn dispatch(&self) -> Option<&Dispatch> {
        self.dispatch.as_ref()
    }

    /// Run `f` with this logger's dispatcher as the thread default.
    ///
    /// Ambient loggers run `f` directly.
    pub fn in_scope<T>(&self, f: impl FnOnce() -> T) -> T {
        match &self.dispatch {
            Some(dispatch) => tracing::dispatcher::with_default(dispatch, f),
            None => f(),
        }
    }
}

impl From<Dispatch> for Logger {
    fn from(dispatch: Dispatch) -> Self {
        Self::from_dispatch(dispatch)
    }
}
