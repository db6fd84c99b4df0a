//! Explicit retry state machine for the page fetch.
//!
//! `Idle -> Attempting(n) -> Success | Failed` with a bounded attempt count
//! and fixed backoff between attempts, expressed as a policy parameter
//! rather than embedded control flow.

use std::thread;
use std::time::Duration;

/// How many times to try and how long to wait between tries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Maximum number of attempts (at least one is always made).
    pub max_attempts: u32,
    /// Fixed sleep between consecutive attempts.
    pub backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            backoff: Duration::from_secs(2),
        }
    }
}

/// Observable state of the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryState {
    /// No attempt started yet.
    Idle,
    /// Attempt `n` (1-based) is in flight.
    Attempting(u32),
    /// An attempt succeeded.
    Success,
    /// All attempts failed.
    Failed,
}

/// The retry driver. One value per protected operation.
#[derive(Debug)]
pub struct Retry {
    policy: RetryPolicy,
    state: RetryState,
}

impl Retry {
    /// Create an idle machine with the given policy.
    #[must_use]
    pub const fn new(policy: RetryPolicy) -> Self {
        Self {
            policy,
            state: RetryState::Idle,
        }
    }

    /// The current state.
    #[must_use]
    pub const fn state(&self) -> RetryState {
        self.state
    }

    /// Drive `op` through the state machine: call it up to
    /// `max_attempts` times (1-based attempt number passed in), sleeping
    /// `backoff` between failures, and return the first success or the
    /// last error.
    ///
    /// # Errors
    ///
    /// Returns the final attempt's error when every attempt fails.
    pub fn run<T, E>(&mut self, mut op: impl FnMut(u32) -> Result<T, E>) -> Result<T, E> {
        let attempts = self.policy.max_attempts.max(1);
        let mut attempt = 0;
        loop {
            attempt += 1;
            self.state = RetryState::Attempting(attempt);
            match op(attempt) {
                Ok(value) => {
                    self.state = RetryState::Success;
                    return Ok(value);
                }
                Err(err) if attempt >= attempts => {
                    self.state = RetryState::Failed;
                    return Err(err);
                }
                Err(_) => thread::sleep(self.policy.backoff),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quick_policy(max_attempts: u32) -> RetryPolicy {
        RetryPolicy {
            max_attempts,
            backoff: Duration::ZERO,
        }
    }

    #[test]
    fn test_success_on_first_attempt() {
        let mut retry = Retry::new(quick_policy(3));
        assert_eq!(retry.state(), RetryState::Idle);
        let result: Result<u32, ()> = retry.run(|_| Ok(7));
        assert_eq!(result, Ok(7));
        assert_eq!(retry.state(), RetryState::Success);
    }

    #[test]
    fn test_recovers_after_failures() {
        let mut retry = Retry::new(quick_policy(3));
        let result: Result<u32, &str> = retry.run(|attempt| {
            if attempt < 3 {
                Err("flaky")
            } else {
                Ok(attempt)
            }
        });
        assert_eq!(result, Ok(3));
        assert_eq!(retry.state(), RetryState::Success);
    }

    #[test]
    fn test_exhaustion_returns_last_error() {
        let mut retry = Retry::new(quick_policy(2));
        let mut calls = 0;
        let result: Result<(), u32> = retry.run(|attempt| {
            calls += 1;
            Err(attempt)
        });
        assert_eq!(result, Err(2));
        assert_eq!(calls, 2);
        assert_eq!(retry.state(), RetryState::Failed);
    }

    #[test]
    fn test_zero_attempts_still_tries_once() {
        let mut retry = Retry::new(quick_policy(0));
        let result: Result<(), &str> = retry.run(|_| Err("nope"));
        assert!(result.is_err());
        assert_eq!(retry.state(), RetryState::Failed);
    }
}
