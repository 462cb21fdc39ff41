//! Alpha-view token alert queue.

pub mod queue;
pub mod types;

pub use queue::{FileQueue, QueuedTokenAlert};
pub use types::TokenAlert;
