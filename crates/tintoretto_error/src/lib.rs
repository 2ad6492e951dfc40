//! Error types for the Tintoretto library.
//!
//! This crate provides the foundation error types used throughout the Tintoretto ecosystem.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use tintoretto_error::{TintorettoResult, HttpError};
//!
//! fn fetch_data() -> TintorettoResult<String> {
//!     Err(HttpError::new("Connection refused"))?
//! }
//!
//! match fetch_data() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod http;
mod json;
mod config;
mod core;
mod upload;
mod publish;
mod queue;
mod error;

pub use http::HttpError;
pub use json::JsonError;
pub use config::ConfigError;
pub use core::{CoreError, CoreErrorKind};
pub use upload::{UploadError, UploadErrorKind};
pub use publish::{PublishError, PublishErrorKind};
pub use queue::{QueueError, QueueErrorKind};
pub use error::{TintorettoError, TintorettoErrorKind, TintorettoResult};
