use std::future::Future;
use std::time::Duration;

use rand::Rng;
use tracing::{error, warn};

use crate::error::{ClientError, ErrorKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub initial_delay: Duration,
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_delay: Duration::from_millis(1000),
            max_delay: Duration::from_millis(30_000),
        }
    }
}

impl RetryPolicy {
    /// Delay before retry number `attempt + 1`: doubling from `initial_delay`, capped at
    /// `max_delay`, plus up to 10% jitter.
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let base = self
            .initial_delay
            .checked_mul(2u32.saturating_pow(attempt))
            .unwrap_or(self.max_delay)
            .min(self.max_delay);
        let jitter_ms = (base.as_millis() / 10) as u64;
        if jitter_ms == 0 {
            return base;
        }
        base + Duration::from_millis(rand::thread_rng().gen_range(0..=jitter_ms))
    }

    pub fn should_retry(&self, kind: ErrorKind, attempt: u32) -> bool {
        kind.is_retryable() && attempt < self.max_retries
    }
}

/// Runs `call` until it succeeds, fails with a non-retryable error, or runs out of retries.
pub async fn with_retry<T, F, Fut>(policy: &RetryPolicy, op: &str, mut call: F) -> Result<T, ClientError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, ClientError>>,
{
    let mut attempt = 0u32;
    loop {
        match call().await {
            Ok(value) => return Ok(value),
            Err(e) if policy.should_retry(e.kind(), attempt) => {
                let delay = policy.delay_for(attempt);
                warn!(
                    op,
                    attempt = attempt + 1,
                    max_retries = policy.max_retries,
                    kind = ?e.kind(),
                    delay_ms = delay.as_millis() as u64,
                    error = %e,
                    "Upstream call failed, retrying"
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            Err(e) => {
                if attempt > 0 {
                    error!(op, attempts = attempt + 1, kind = ?e.kind(), error = %e, "Upstream call failed after retries");
                }
                return Err(e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn fast(max_retries: u32) -> RetryPolicy {
        RetryPolicy { max_retries, initial_delay: Duration::from_millis(1), max_delay: Duration::from_millis(4) }
    }

    #[test]
    fn delay_doubles_and_caps() {
        let p = RetryPolicy { max_retries: 10, initial_delay: Duration::from_millis(1000), max_delay: Duration::from_millis(5000) };
        for (attempt, base) in [(0u32, 1000u64), (1, 2000), (2, 4000), (3, 5000), (30, 5000)] {
            let d = p.delay_for(attempt).as_millis() as u64;
            assert!(d >= base && d <= base + base / 10, "attempt {attempt}: {d}ms");
        }
    }

    #[test]
    fn retry_budget_and_kind() {
        let p = fast(2);
        assert!(p.should_retry(ErrorKind::RateLimit, 0));
        assert!(p.should_retry(ErrorKind::Server, 1));
        assert!(!p.should_retry(ErrorKind::Server, 2));
        assert!(!p.should_retry(ErrorKind::Auth, 0));
    }

    #[tokio::test]
    async fn retries_transient_failures_then_succeeds() {
        let calls = AtomicU32::new(0);
        let result = with_retry(&fast(3), "test", || async {
            if calls.fetch_add(1, Ordering::SeqCst) < 2 {
                Err(ClientError::Connection("reset".into()))
            } else {
                Ok("done")
            }
        })
        .await;
        assert_eq!(result.unwrap(), "done");
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn auth_errors_fail_immediately() {
        let calls = AtomicU32::new(0);
        let result: Result<(), _> = with_retry(&fast(3), "test", || async {
            calls.fetch_add(1, Ordering::SeqCst);
            Err(ClientError::Auth("bad key".into()))
        })
        .await;
        assert!(matches!(result, Err(ClientError::Auth(_))));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn gives_up_after_max_retries() {
        let calls = AtomicU32::new(0);
        let result: Result<(), _> = with_retry(&fast(2), "test", || async {
            calls.fetch_add(1, Ordering::SeqCst);
            Err(ClientError::RateLimited("429".into()))
        })
        .await;
        assert!(matches!(result, Err(ClientError::RateLimited(_))));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }
}
