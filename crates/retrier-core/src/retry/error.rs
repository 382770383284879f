//! Errors returned by the retry loop.

use std::error::Error;
use std::fmt;

/// Sentinel for attempt-ceiling exhaustion. Compared by type, never by message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("max retries exceeded")]
pub struct MaxRetriesExceeded;

static MAX_RETRIES_EXCEEDED: MaxRetriesExceeded = MaxRetriesExceeded;

/// Error returned by [`Retrier::run`](super::Retrier::run).
#[derive(Debug)]
pub enum RetryError<E> {
    /// The operation failed and declined another attempt. Holds its error as returned.
    Operation(E),
    /// The operation still asked to retry when the limit was reached.
    MaxRetries { attempts: u32 },
}

impl<E> RetryError<E> {
    pub fn is_max_retries(&self) -> bool {
        matches!(self, RetryError::MaxRetries { .. })
    }

    /// The operation's own error, if that is what ended the loop.
    pub fn operation(&self) -> Option<&E> {
        match self {
            RetryError::Operation(e) => Some(e),
            RetryError::MaxRetries { .. } => None,
        }
    }

    pub fn into_operation(self) -> Option<E> {
        match self {
            RetryError::Operation(e) => Some(e),
            RetryError::MaxRetries { .. } => None,
        }
    }
}

impl<E: fmt::Display> fmt::Display for RetryError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RetryError::Operation(e) => write!(f, "{}", e),
            RetryError::MaxRetries { attempts } => write!(f, "gave up after {} attempts", attempts),
        }
    }
}

impl<E> Error for RetryError<E>
where
    E: Error + 'static,
{
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            // Display already forwards to the operation error.
            RetryError::Operation(e) => e.source(),
            RetryError::MaxRetries { .. } => Some(&MAX_RETRIES_EXCEEDED),
        }
    }
}

/// True iff the loop ended on the max-retries sentinel.
pub fn is_max_retries<E>(err: &RetryError<E>) -> bool {
    err.is_max_retries()
}

/// Type-erased variant of [`is_max_retries`]: walks the `source()` chain
/// looking for [`MaxRetriesExceeded`]. Works on `anyhow::Error` via `as_ref()`.
pub fn is_max_retries_error(err: &(dyn Error + 'static)) -> bool {
    let mut cur = Some(err);
    while let Some(e) = cur {
        if e.is::<MaxRetriesExceeded>() {
            return true;
        }
        cur = e.source();
    }
    false
}
