//! Bounded retry schedule for archive requests.

use crate::error::ArchiveError;
use std::time::Duration;

/// How many attempts a request gets and how long to wait between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_tries: u32,
    /// Multiplied by the attempt number after a rate-limit response.
    pub rate_limit_step: Duration,
    /// Flat wait after any other failure.
    pub failure_wait: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        RetryPolicy {
            max_tries: 3,
            rate_limit_step: Duration::from_secs(5),
            failure_wait: Duration::from_secs(2),
        }
    }
}

impl RetryPolicy {
    /// A policy that never sleeps, for tests and offline sources.
    pub fn immediate(max_tries: u32) -> Self {
        RetryPolicy {
            max_tries,
            rate_limit_step: Duration::ZERO,
            failure_wait: Duration::ZERO,
        }
    }

    /// Wait before the next attempt after `attempt` (1-based) failed with
    /// `error`. `None` once the attempts are used up.
    pub fn delay_after(&self, attempt: u32, error: &ArchiveError) -> Option<Duration> {
        if attempt >= self.max_tries {
            return None;
        }
        if error.is_rate_limited() {
            Some(self.rate_limit_step * attempt)
        } else {
            Some(self.failure_wait)
        }
    }
}
