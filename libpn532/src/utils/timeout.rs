//! Timeout helpers used across the crate.
//!
//! The PN532 is polled rather than interrupt driven, so every wait in the
//! driver is expressed as a [`Deadline`] checked between polls.

use std::time::{Duration, Instant};

/// Default time the driver waits for an ACK or a response, in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 1000;

/// Default interval between two readiness polls, in milliseconds.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 10;

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

/// Convenience: default command timeout as Duration.
pub fn default_timeout() -> Duration {
    ms(DEFAULT_TIMEOUT_MS)
}

/// A point in time after which a wait is abandoned.
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    at: Instant,
}

impl Deadline {
    /// Deadline `timeout` from now.
    pub fn after(timeout: Duration) -> Self {
        Self {
            at: Instant::now() + timeout,
        }
    }

    /// Time left before the deadline, zero once it has passed.
    pub fn remaining(&self) -> Duration {
        self.at.saturating_duration_since(Instant::now())
    }

    /// True once the deadline has passed.
    pub fn expired(&self) -> bool {
        self.remaining().is_zero()
    }

    /// How long to sleep before the next poll: the poll interval, cut short
    /// so the sleep never overshoots the deadline.
    pub fn next_sleep(&self, interval: Duration) -> Duration {
        self.remaining().min(interval)
    }
}
