//! Bounded retry loop.
//!
//! A [`Retrier`] calls an operation with attempt numbers 1, 2, ... until the
//! operation succeeds, declines to retry, or the attempt limit is spent. The
//! loop never catches panics; an operation that wants a panic reported as an
//! error wraps its own body in [`guard`].

mod error;
mod guard;
mod policy;
mod run;

pub use error::{is_max_retries, is_max_retries_error, MaxRetriesExceeded, RetryError};
pub use guard::{guard, Panicked};
pub use policy::{Retrier, RetryDecision, DEFAULT_MAX_RETRIES};
pub use run::run;
