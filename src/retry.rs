//! Bounded exponential-backoff retry for fallible async operations.

use log::{debug, warn};
use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;

/// Retry policy: up to `max_attempts` total calls, waiting
/// `base_delay * factor^(n-1)` after the n-th failure.
///
/// The default matches the suggestion endpoint's needs: 5 attempts with
/// waits of 800, 1600, 3200 and 6400 ms. Waits are `tokio::time::sleep`
/// suspension points, so other requests keep being served while one
/// request backs off.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    max_attempts: u32,
    base_delay: Duration,
    factor: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        RetryPolicy {
            max_attempts: 5,
            base_delay: Duration::from_millis(800),
            factor: 2,
        }
    }
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, base_delay: Duration, factor: u32) -> Self {
        RetryPolicy {
            max_attempts: max_attempts.max(1),
            base_delay,
            factor,
        }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Delay inserted after the `failures`-th consecutive failure (1-based).
    fn delay_after(&self, failures: u32) -> Duration {
        self.base_delay * self.factor.saturating_pow(failures - 1)
    }

    /// Run `op` until it succeeds or the attempt ceiling is reached.
    ///
    /// The first success is returned immediately. When every attempt
    /// fails, the last error is returned as-is, never wrapped, so the
    /// caller can still match on its kind.
    pub async fn run<T, E, F, Fut>(&self, mut op: F) -> Result<T, E>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: std::fmt::Display,
    {
        let mut attempt = 1;
        loop {
            match op().await {
                Ok(value) => return Ok(value),
                Err(err) => {
                    if attempt >= self.max_attempts {
                        warn!("attempt {attempt}/{} failed: {err}; giving up", self.max_attempts);
                        return Err(err);
                    }
                    let delay = self.delay_after(attempt);
                    warn!(
                        "attempt {attempt}/{} failed: {err}; retrying in {delay:?}",
                        self.max_attempts
                    );
                    debug!("backoff sleep {delay:?}");
                    sleep(delay).await;
                    attempt += 1;
                }
            }
        }
    }
}
