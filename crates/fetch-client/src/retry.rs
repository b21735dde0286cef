//! Exponential-backoff retry for list requests.

use std::collections::hash_map::RandomState;
use std::hash::{BuildHasher, Hasher};
use std::time::Duration;

use crate::FetchClientError;
use crate::config::RetryConfig;

/// Execute `op`, retrying on retryable errors with exponential backoff.
///
/// Non-retryable errors are returned immediately. When every attempt fails
/// with a retryable error the last one is wrapped in
/// [`FetchClientError::RetriesExhausted`].
pub(crate) fn retry_op<T, F>(config: &RetryConfig, mut op: F) -> Result<T, FetchClientError>
where
    F: FnMut() -> Result<T, FetchClientError>,
{
    let mut backoff = Backoff::new(config);
    let mut attempts = 1;
    loop {
        match op() {
            Ok(val) => return Ok(val),
            Err(e) if !e.is_retryable() => return Err(e),
            Err(e) if attempts >= config.max_attempts => {
                return Err(FetchClientError::RetriesExhausted {
                    attempts,
                    last_error: Box::new(e),
                });
            }
            Err(e) => {
                let delay = backoff.step();
                tracing::debug!(attempt = attempts, ?delay, error = %e, "retrying list fetch");
                std::thread::sleep(delay);
                attempts += 1;
            }
        }
    }
}

/// Waits between attempts: doubling from `initial_delay` up to `max_delay`.
struct Backoff {
    next: Duration,
    max: Duration,
    jitter: bool,
}

impl Backoff {
    fn new(config: &RetryConfig) -> Self {
        Self {
            next: config.initial_delay.min(config.max_delay),
            max: config.max_delay,
            jitter: config.jitter,
        }
    }

    fn step(&mut self) -> Duration {
        let wait = self.next;
        self.next = wait.saturating_mul(2).min(self.max);
        if self.jitter { jittered(wait) } else { wait }
    }
}

/// A duration in `[wait / 2, wait]`.
fn jittered(wait: Duration) -> Duration {
    let noise = RandomState::new().build_hasher().finish() % 1024;
    wait / 2 + wait.mul_f64(noise as f64 / 2048.0)
}
