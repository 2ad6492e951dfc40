//! Trait definitions for Tintoretto's credential and transport seams.
//!
//! The fan-out publisher depends on these traits rather than on concrete
//! HTTP machinery, so credentials are injected by the caller and dispatch
//! can be faked in tests.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod credentials;
mod transport;

pub use credentials::{CredentialStore, EnvCredentials, StaticCredentials};
pub use transport::{WireRequest, WireResponse, WireTransport};
