//! Fixed-delay retry for upstream requests.
//!
//! Only timeouts and connection failures are retried. Once the attempt budget
//! is spent the last cause surfaces as [`Error::GatewayTimeout`]; any other
//! transport fault ends the loop immediately as [`Error::BadGateway`].

use crate::{Error, Result};
use std::future::Future;
use std::time::Duration;

/// How many times to try an upstream request and how long to wait in between.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Maximum number of attempts (including the initial one).
    pub max_attempts: u32,
    /// Fixed pause between two attempts.
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            delay: Duration::from_secs(1),
        }
    }
}

/// Outcome of a single failed attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Failure {
    /// Timeout or connection failure, worth another try.
    Transient(String),
    Fatal(String),
}

impl From<reqwest::Error> for Failure {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() || err.is_connect() {
            Failure::Transient(err.to_string())
        } else {
            Failure::Fatal(err.to_string())
        }
    }
}

/// Run `op` until it succeeds, fails fatally or exhausts `policy`.
///
/// `op` receives the 1-based attempt number.
pub async fn run_with_retry<T, F, Fut>(policy: &RetryPolicy, mut op: F) -> Result<T>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = std::result::Result<T, Failure>>,
{
    let max_attempts = policy.max_attempts.max(1);
    let mut attempt = 1;
    loop {
        match op(attempt).await {
            Ok(value) => return Ok(value),
            Err(Failure::Fatal(cause)) => return Err(Error::BadGateway(cause)),
            Err(Failure::Transient(cause)) if attempt >= max_attempts => {
                return Err(Error::GatewayTimeout {
                    attempts: attempt,
                    cause,
                });
            }
            Err(Failure::Transient(cause)) => {
                tracing::warn!(attempt, max_attempts, %cause, "upstream request failed, retrying");
                tokio::time::sleep(policy.delay).await;
                attempt += 1;
            }
        }
    }
}
