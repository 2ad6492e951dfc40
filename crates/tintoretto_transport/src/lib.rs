//! Transport implementations for Tintoretto.
//!
//! Two concerns live here: [`UploadClient`], which pushes local binaries to
//! the storage endpoint with chunked progress reporting and per-upload
//! cancellation, and [`HttpTransport`], the production [`WireTransport`]
//! implementation the fan-out publisher dispatches through.
//!
//! [`WireTransport`]: tintoretto_interface::WireTransport

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod http;
mod mime;
mod upload;

pub use http::HttpTransport;
pub use upload::{FileUpload, ProgressSink, UploadClient};
