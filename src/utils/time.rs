use std::time::Duration;

use tokio::time::Instant;

/// Absolute expiry computed once from a relative duration.
///
/// Shared across the lifetime of a single polling or waiting operation
/// and never re-extended implicitly.
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    expiry: Instant,
}

impl Deadline {
    pub fn after(timeout: Duration) -> Self {
        Self {
            expiry: Instant::now() + timeout,
        }
    }

    pub fn expired(&self) -> bool {
        Instant::now() >= self.expiry
    }

    /// Time left before expiry; zero once past it.
    pub fn remaining(&self) -> Duration {
        self.expiry.saturating_duration_since(Instant::now())
    }
}
