//! Simulated message delivery

mod delay;
mod traits;

pub use delay::{TimerDelay, DEFAULT_SUBMIT_DELAY};
pub use traits::SubmissionDelay;

#[cfg(test)]
pub use traits::MockSubmissionDelay;
