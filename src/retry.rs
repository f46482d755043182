//! Bounded fixed-delay retry for widgets whose markup may arrive late.
//!
//! A [`Retry`] owns its attempt counter, so each mount task carries its own
//! budget instead of sharing page-wide state. The host moves the `Retry` into
//! the timer callback that performs the next attempt.

#[cfg(test)]
#[path = "retry_test.rs"]
mod retry_test;

use serde::Deserialize;

use crate::consts::{NAV_MOUNT_DELAY_MS, NAV_MOUNT_RETRIES};

/// How many times to retry and how long to wait between attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RetryPolicy {
    /// Retries allowed after the initial attempt.
    pub max_retries: u32,
    /// Delay before each retry, in milliseconds.
    pub delay_ms: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self { max_retries: NAV_MOUNT_RETRIES, delay_ms: NAV_MOUNT_DELAY_MS }
    }
}

/// Retry counter for a single task.
#[derive(Debug, Clone)]
pub struct Retry {
    policy: RetryPolicy,
    used: u32,
}

impl Retry {
    #[must_use]
    pub fn new(policy: RetryPolicy) -> Self {
        Self { policy, used: 0 }
    }

    /// Retries consumed so far.
    #[must_use]
    pub fn used(&self) -> u32 {
        self.used
    }

    /// Whether no retries remain.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.used >= self.policy.max_retries
    }

    /// Delay before the next retry in milliseconds, or `None` once exhausted.
    pub fn next_delay_ms(&mut self) -> Option<u32> {
        if self.is_exhausted() {
            return None;
        }
        self.used += 1;
        Some(self.policy.delay_ms)
    }
}
