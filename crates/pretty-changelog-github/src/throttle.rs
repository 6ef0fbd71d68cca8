//! Rate-limit back-off before remote requests.

use std::thread;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tracing::warn;

use crate::{GithubClient, GithubResult, Quota};

/// Remaining requests at or below which the client waits.
pub const QUOTA_THRESHOLD: u64 = 100;

/// Wait used when the reported reset time has already passed.
pub const FALLBACK_WAIT: Duration = Duration::from_secs(15);

/// Default number of waits before giving up and proceeding.
pub const DEFAULT_MAX_WAITS: u32 = 10;

/// Time source for the back-off loop.
pub trait Clock {
    /// Returns the current time.
    fn now(&self) -> DateTime<Utc>;

    /// Blocks for `duration`.
    fn sleep(&self, duration: Duration);
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn sleep(&self, duration: Duration) {
        thread::sleep(duration);
    }
}

/// Something that reports the remaining API quota.
pub trait QuotaSource {
    /// Returns the current quota.
    ///
    /// # Errors
    ///
    /// Returns an error if the quota cannot be queried.
    fn quota(&self) -> GithubResult<Quota>;
}

impl QuotaSource for GithubClient {
    fn quota(&self) -> GithubResult<Quota> {
        self.rate_limit()
    }
}

/// Bounded wait loop keeping requests away from the rate limit.
#[derive(Debug, Clone)]
pub struct Throttle<C: Clock = SystemClock> {
    clock: C,
    max_waits: u32,
}

impl Default for Throttle {
    fn default() -> Self {
        Self::new(SystemClock)
    }
}

impl<C: Clock> Throttle<C> {
    /// Creates a throttle driven by `clock`.
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            max_waits: DEFAULT_MAX_WAITS,
        }
    }

    /// Sets how many times the loop may sleep.
    #[must_use]
    pub fn with_max_waits(mut self, max_waits: u32) -> Self {
        self.max_waits = max_waits;
        self
    }

    /// Waits until the quota is above [`QUOTA_THRESHOLD`].
    ///
    /// Never fails: an unreadable quota or an exhausted wait budget is
    /// logged and the caller proceeds. Returns the number of sleeps.
    pub fn wait<Q: QuotaSource + ?Sized>(&self, source: &Q) -> u32 {
        for waits in 0..=self.max_waits {
            let quota = match source.quota() {
                Ok(quota) => quota,
                Err(err) => {
                    warn!(error = %err, "could not check rate limits, hoping for the best");
                    return waits;
                }
            };

            if quota.remaining > QUOTA_THRESHOLD {
                return waits;
            }

            if waits == self.max_waits {
                warn!(
                    remaining = quota.remaining,
                    waits, "still close to rate limiting, continuing anyway"
                );
                return waits;
            }

            let delay = self.delay_until(quota.reset);
            warn!(
                remaining = quota.remaining,
                delay_secs = delay.as_secs(),
                "token too close to rate limiting, sleeping before continuing"
            );
            self.clock.sleep(delay);
        }

        self.max_waits
    }

    fn delay_until(&self, reset: i64) -> Duration {
        DateTime::from_timestamp(reset, 0)
            .and_then(|reset| (reset - self.clock.now()).to_std().ok())
            .filter(|delay| !delay.is_zero())
            .unwrap_or(FALLBACK_WAIT)
    }
}
