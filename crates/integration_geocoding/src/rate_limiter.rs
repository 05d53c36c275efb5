//! Minimum-interval rate limiter shared by all geocoding providers
//!
//! Nominatim's usage policy allows at most one request per second. The same
//! clock gates every provider, so one resolution occupies one slot no matter
//! how many providers it ends up trying.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::debug;

/// Spaces out resolution slots by at least `min_interval`
///
/// Clones share the same clock.
#[derive(Debug, Clone)]
pub struct RateLimiter {
    min_interval: Duration,
    last_request_at: Arc<Mutex<Option<Instant>>>,
}

impl RateLimiter {
    /// Create a limiter with no prior request recorded
    #[must_use]
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_request_at: Arc::new(Mutex::new(None)),
        }
    }

    /// Configured minimum interval
    #[must_use]
    pub const fn min_interval(&self) -> Duration {
        self.min_interval
    }

    /// Wait for the next slot, record it and return its start time
    ///
    /// The lock is held across the sleep so a concurrent caller always
    /// computes its wait from the timestamp this call writes.
    pub async fn acquire(&self) -> Instant {
        let mut last = self.last_request_at.lock().await;

        if let Some(previous) = *last {
            let elapsed = previous.elapsed();
            if elapsed < self.min_interval {
                let wait = self.min_interval.saturating_sub(elapsed);
                debug!(?wait, "Rate limiting geocoding request");
                tokio::time::sleep(wait).await;
            }
        }

        let now = Instant::now();
        *last = Some(now);
        now
    }

    /// Start time of the most recent slot, if any
    pub async fn last_request_at(&self) -> Option<Instant> {
        *self.last_request_at.lock().await
    }
}
