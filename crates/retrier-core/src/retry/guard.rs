//! Convert a panic inside one unit of work into an ordinary error.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

/// A panic caught by [`guard`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("panic: {message}")]
pub struct Panicked {
    message: String,
}

impl Panicked {
    /// The panic message, or a placeholder when the payload was not a string.
    pub fn message(&self) -> &str {
        &self.message
    }

    fn from_payload(payload: Box<dyn Any + Send>) -> Self {
        let message = match payload.downcast::<String>() {
            Ok(s) => *s,
            Err(payload) => match payload.downcast_ref::<&'static str>() {
                Some(s) => (*s).to_string(),
                None => "unknown panic payload".to_string(),
            },
        };
        Self { message }
    }
}

/// Runs `f` and returns its value, or the panic it raised as [`Panicked`].
///
/// Meant to be called from inside a retry callback. State that `f` mutates
/// may be left half-updated when it panics. The process panic hook still runs,
/// so the message is also printed to stderr.
pub fn guard<T, F>(f: F) -> Result<T, Panicked>
where
    F: FnOnce() -> T,
{
    panic::catch_unwind(AssertUnwindSafe(f)).map_err(Panicked::from_payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passes_value_through() {
        assert_eq!(guard(|| 7), Ok(7));
    }

    #[test]
    fn str_payload() {
        let err = guard(|| -> u8 { panic!("something went badly wrong") }).unwrap_err();
        assert_eq!(err.message(), "something went badly wrong");
        assert_eq!(err.to_string(), "panic: something went badly wrong");
    }

    #[test]
    fn formatted_payload() {
        let n = 3;
        let err = guard(|| -> u8 { panic!("attempt {} failed", n) }).unwrap_err();
        assert_eq!(err.to_string(), "panic: attempt 3 failed");
    }

    #[test]
    fn non_string_payload() {
        let err = guard(|| std::panic::panic_any(42u32)).unwrap_err();
        assert_eq!(err.message(), "unknown panic payload");
    }
}
