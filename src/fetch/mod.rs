//! Upstream HTTP collaborators: the conjugation page fetcher and the
//! pass-through word lookup.

mod client;
mod retry;

pub use client::PageFetcher;
pub use retry::{run_with_retry, Failure, RetryPolicy};
