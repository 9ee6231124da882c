//! Retry policy for hub requests
//!
//! A request is attempted up to `attempts` times. After every failed attempt
//! except the last one the executor pauses for a fixed `delay`. There is no
//! exponential growth: the hub is either reachable again after a short pause
//! or it is not.

use std::time::Duration;

use crate::constants::{DEFAULT_RETRIES, DEFAULT_RETRY_DELAY};
use crate::error::{Error, Result};

/// Bounded retry budget with a fixed pause between attempts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    attempts: u32,
    delay: Duration,
}

impl RetryPolicy {
    /// Create a policy allowing `attempts` tries
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRetryBudget`] when `attempts` is zero.
    pub fn new(attempts: u32, delay: Duration) -> Result<Self> {
        if attempts == 0 {
            return Err(Error::InvalidRetryBudget(attempts));
        }

        Ok(Self { attempts, delay })
    }

    /// Maximum number of attempts
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Pause between two attempts
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Pause to take after the failed attempt number `attempt` (1-based)
    ///
    /// Returns `None` once the budget is spent.
    pub fn delay_after(&self, attempt: u32) -> Option<Duration> {
        (attempt < self.attempts).then_some(self.delay)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            attempts: DEFAULT_RETRIES,
            delay: DEFAULT_RETRY_DELAY,
        }
    }
}
