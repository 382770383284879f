use crate::config::RetrierConfig;

/// Attempt limit used when nothing else is configured.
pub const DEFAULT_MAX_RETRIES: u32 = 10;

/// What the loop does after a failed attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryDecision {
    /// Call the operation again with the next attempt number.
    Retry,
    /// The operation declined another attempt; surface its error.
    Stop,
    /// The operation asked for another attempt but the limit is spent.
    Exhausted,
}

/// Retry loop settings.
///
/// Each value owns its own limit, so callers that want a different ceiling
/// build their own `Retrier` instead of touching shared state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Retrier {
    /// Maximum number of attempts (including the first). Never zero.
    max_retries: u32,
}

impl Default for Retrier {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_RETRIES)
    }
}

impl Retrier {
    /// A limit of 0 is raised to 1: the operation always runs at least once.
    pub fn new(max_retries: u32) -> Self {
        Self {
            max_retries: max_retries.max(1),
        }
    }

    pub fn from_config(cfg: &RetrierConfig) -> Self {
        Self::new(cfg.max_retries)
    }

    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    /// Decide what follows a failed attempt.
    ///
    /// `attempt` is 1-based (1 = first attempt). A refusal always wins over
    /// the limit, so the final attempt's own error is kept when it declined.
    pub fn decide(&self, attempt: u32, should_retry: bool) -> RetryDecision {
        if !should_retry {
            RetryDecision::Stop
        } else if attempt >= self.max_retries {
            RetryDecision::Exhausted
        } else {
            RetryDecision::Retry
        }
    }
}
