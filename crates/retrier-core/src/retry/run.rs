//! Retry loop: call the operation until it succeeds, declines, or runs out of attempts.

use super::error::RetryError;
use super::policy::{Retrier, RetryDecision};

impl Retrier {
    /// Runs `f` with attempt numbers starting at 1.
    ///
    /// `f` returns whether another attempt is wanted along with its outcome.
    /// An `Ok` ends the loop whatever the flag says. An `Err` with the flag
    /// unset is returned as [`RetryError::Operation`]. An `Err` with the flag
    /// set on the last permitted attempt yields [`RetryError::MaxRetries`].
    ///
    /// Panics raised by `f` are not caught.
    pub fn run<T, E, F>(&self, mut f: F) -> Result<T, RetryError<E>>
    where
        F: FnMut(u32) -> (bool, Result<T, E>),
    {
        let mut attempt = 1u32;
        loop {
            let (should_retry, outcome) = f(attempt);
            let err = match outcome {
                Ok(value) => return Ok(value),
                Err(e) => e,
            };
            match self.decide(attempt, should_retry) {
                RetryDecision::Stop => {
                    tracing::debug!(attempt, "attempt failed, operation declined retry");
                    return Err(RetryError::Operation(err));
                }
                RetryDecision::Exhausted => {
                    tracing::debug!(attempt, "attempt failed, max retries exceeded");
                    return Err(RetryError::MaxRetries { attempts: attempt });
                }
                RetryDecision::Retry => {
                    tracing::debug!(attempt, "attempt failed, retrying");
                    attempt += 1;
                }
            }
        }
    }
}

/// Runs `f` under the default limit ([`DEFAULT_MAX_RETRIES`](super::DEFAULT_MAX_RETRIES)).
pub fn run<T, E, F>(f: F) -> Result<T, RetryError<E>>
where
    F: FnMut(u32) -> (bool, Result<T, E>),
{
    Retrier::default().run(f)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attempts_are_numbered_from_one() {
        let mut seen = Vec::new();
        let res: Result<(), _> = Retrier::new(4).run(|attempt| {
            seen.push(attempt);
            (true, Err("fail"))
        });
        assert!(res.unwrap_err().is_max_retries());
        assert_eq!(seen, vec![1, 2, 3, 4]);
    }

    #[test]
    fn returns_success_value() {
        let res: Result<u32, RetryError<&str>> = Retrier::new(5).run(|attempt| {
            if attempt < 3 {
                (true, Err("not yet"))
            } else {
                (true, Ok(attempt * 10))
            }
        });
        assert_eq!(res.unwrap(), 30);
    }

    #[test]
    fn limit_of_one_runs_once() {
        let mut calls = 0;
        let res: Result<(), _> = Retrier::new(1).run(|_| {
            calls += 1;
            (true, Err("fail"))
        });
        assert!(res.unwrap_err().is_max_retries());
        assert_eq!(calls, 1);
    }

    #[test]
    fn refusal_on_last_attempt_keeps_operation_error() {
        let res: Result<(), _> = Retrier::new(3).run(|attempt| (attempt < 3, Err(attempt)));
        match res {
            Err(RetryError::Operation(last)) => assert_eq!(last, 3),
            other => panic!("expected operation error, got {:?}", other),
        }
    }

    #[test]
    fn free_function_uses_default_limit() {
        let mut calls = 0;
        let res: Result<(), _> = run(|_| {
            calls += 1;
            (true, Err(()))
        });
        assert!(matches!(res, Err(RetryError::MaxRetries { attempts: 10 })));
        assert_eq!(calls, 10);
    }
}
