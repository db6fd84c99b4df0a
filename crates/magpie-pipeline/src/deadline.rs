//! Wall-clock budget for the fetch-and-prepare step.

use std::time::{Duration, Instant};

/// A fixed point in time the run must not outlive.
///
/// The page fetch and every external stylesheet fetch take the remaining
/// budget (clamped to their own per-request timeout); once the budget is
/// exhausted the run is reported as timed out and remaining fetches are
/// dropped.
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    end: Instant,
}

impl Deadline {
    /// Start a budget of `total` from now.
    #[must_use]
    pub fn new(total: Duration) -> Self {
        Self {
            end: Instant::now() + total,
        }
    }

    /// Time left, or `None` when the budget is spent.
    #[must_use]
    pub fn remaining(&self) -> Option<Duration> {
        let now = Instant::now();
        if now >= self.end {
            None
        } else {
            Some(self.end - now)
        }
    }

    /// The smaller of `timeout` and the remaining budget, or `None` when
    /// the budget is spent.
    #[must_use]
    pub fn clamp(&self, timeout: Duration) -> Option<Duration> {
        self.remaining().map(|rest| rest.min(timeout))
    }

    /// Whether the budget is spent.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.remaining().is_none()
    }
}
