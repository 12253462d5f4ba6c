//! Trait abstraction for the submission delay to enable mocking in tests

use async_trait::async_trait;

/// Simulated network latency between accepting a message and reporting success
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionDelay: Send + Sync {
    /// Resolve once the simulated send has completed
    async fn wait(&self);
}
