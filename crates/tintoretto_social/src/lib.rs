//! Destination adapters and the fan-out publisher.
//!
//! One authored [`PublishRequest`] fans out to N destination endpoints.
//! Each destination's wire shape lives in an [`AdapterSpec`]; the
//! [`FanoutPublisher`] resolves adapters, validates locally, dispatches
//! through the transport seam, and folds every result — success or
//! failure — into per-destination outcomes. No destination's failure
//! ever aborts its siblings.
//!
//! [`PublishRequest`]: tintoretto_core::PublishRequest

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod adapters;
mod publisher;
mod registry;
mod report;

pub use publisher::FanoutPublisher;
pub use registry::{AdapterRegistry, AdapterSpec};
pub use report::PublishReport;
