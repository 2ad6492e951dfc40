//! Queue presentation model for publish attempts.
//!
//! A [`PublishQueue`] is the client-visible history of fan-outs: one item
//! per destination per submission, created synchronously before any I/O
//! and updated as outcomes arrive. Items are never removed automatically.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod queue;

pub use queue::{PublishQueue, QueueItem, QueueState};
