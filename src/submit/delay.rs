//! Timer-backed submission delay

use super::traits::SubmissionDelay;
use async_trait::async_trait;
use std::time::Duration;

/// Default simulated latency
pub const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_millis(2000);

/// Waits a fixed duration on the tokio timer
#[derive(Debug, Clone, Copy)]
pub struct TimerDelay {
    duration: Duration,
}

impl TimerDelay {
    pub fn new(duration: Duration) -> Self {
        Self { duration }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }
}

impl Default for TimerDelay {
    fn default() -> Self {
        Self::new(DEFAULT_SUBMIT_DELAY)
    }
}

#[async_trait]
impl SubmissionDelay for TimerDelay {
    async fn wait(&self) {
        tracing::debug!("Simulating send for {:?}", self.duration);
        tokio::time::sleep(self.duration).await;
    }
}
