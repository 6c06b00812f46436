//! Error types for the timing utilities.
//!
//! The timing primitives themselves never fail; errors only arise while
//! installing a subscriber.

use thiserror::Error;

/// Errors that can occur while setting up timing output.
#[derive(Debug, Error)]
pub enum TimingError {
    /// A global subscriber could not be installed
    #[error("Subscriber init error: {0}")]
    SubscriberInit(String),

    /// A filter directive string could not be parsed
    #[error("Invalid filter directive: {0}")]
    InvalidFilter(String),
}

/// Result type for timing setup operations.
pub type TimingResult<T> = Result<T, TimingError>;
