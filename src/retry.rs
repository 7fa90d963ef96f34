use std::time::Duration;

use crate::error::RequestError;

/// Connection-wide retry policy.
///
/// A single boolean switch with a fixed backoff delay, applied uniformly to
/// every retryable failure. Retries are capped by `max_attempts` (counting
/// the first attempt) rather than running unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    enabled: bool,
    delay: Duration,
    max_attempts: u32,
}

impl RetryPolicy {
    /// Default cap on total attempts when retrying is enabled.
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;

    /// No retries: the first failure is surfaced to the caller.
    #[must_use]
    pub const fn disabled() -> Self {
        Self {
            enabled: false,
            delay: Duration::from_millis(1000),
            max_attempts: 1,
        }
    }

    /// Retry with a fixed `delay` between attempts, up to
    /// [`Self::DEFAULT_MAX_ATTEMPTS`] attempts in total.
    #[must_use]
    pub const fn fixed(delay: Duration) -> Self {
        Self {
            enabled: true,
            delay,
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Overrides the total attempt cap.
    ///
    /// # Panics
    ///
    /// Panics if `max_attempts` is zero.
    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        assert!(max_attempts > 0, "at least one attempt is required");
        self.max_attempts = max_attempts;
        self
    }

    /// Whether retrying is enabled at all.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Backoff delay between attempts.
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Whether another attempt may follow `err`, given how many attempts
    /// have already run.
    pub(crate) const fn should_retry(&self, err: &RequestError, attempts: u32) -> bool {
        self.enabled && err.is_retryable() && attempts < self.max_attempts
    }

    /// Constant-interval backoff for [`backoff::future::retry`].
    ///
    /// The attempt cap is enforced by the executor, not by an elapsed-time
    /// limit, so `max_elapsed_time` is disabled here.
    pub(crate) fn backoff(&self) -> backoff::ExponentialBackoff {
        backoff::ExponentialBackoff {
            initial_interval: self.delay,
            max_interval: self.delay,
            multiplier: 1.0,
            randomization_factor: 0.0,
            max_elapsed_time: None,
            ..backoff::ExponentialBackoff::default()
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::disabled()
    }
}
