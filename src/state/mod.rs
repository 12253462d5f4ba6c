//! Application state module

mod forms;
mod notification;
mod submission;

pub use forms::*;
pub use notification::*;
pub use submission::*;
