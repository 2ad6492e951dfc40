//! Tintoretto - Multi-Destination Content Publishing
//!
//! Tintoretto takes one authored piece of content and delivers it to N
//! heterogeneous destinations independently: uploads media with live
//! progress and per-upload cancellation, translates the request into each
//! destination's wire shape, and collects one outcome per destination
//! without letting any failure abort its siblings.
//!
//! # Features
//!
//! - **Upload Transport**: chunked multipart uploads with percent progress
//!   and independent cancellation tokens per file
//! - **Adapter Registry**: per-destination wire shapes (JSON or multipart)
//!   with local validation before any network call
//! - **Fan-Out Publisher**: order-preserving, failure-isolated dispatch
//!   with a credential short-circuit
//! - **Publish Queue**: synchronous, history-preserving presentation model
//!   of every attempt
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use tintoretto::{
//!     Destination, FanoutPublisher, HttpTransport, PublishReport, PublishRequest,
//!     StaticCredentials, TintorettoConfig,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = TintorettoConfig::load()?;
//!     let transport = HttpTransport::new(config.publisher())?;
//!     let publisher = FanoutPublisher::new(
//!         transport,
//!         StaticCredentials::new(std::env::var("TINTORETTO_API_TOKEN")?),
//!         config.publisher(),
//!     );
//!
//!     let request = PublishRequest::builder()
//!         .content("hello, fediverse")
//!         .destinations(vec![Destination::Mastodon, Destination::Facebook])
//!         .build()?;
//!     let outcomes = publisher.publish(&request).await;
//!     println!("{}", PublishReport::from_outcomes(&outcomes).summary());
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Tintoretto is organized as a workspace with focused crates:
//!
//! - `tintoretto_error` - Error types
//! - `tintoretto_core` - Core data types (MediaAsset, PublishRequest, etc.)
//! - `tintoretto_interface` - CredentialStore and WireTransport seams
//! - `tintoretto_transport` - Upload and wire transport implementations
//! - `tintoretto_social` - Destination adapters and the fan-out publisher
//! - `tintoretto_queue` - Queue presentation model
//!
//! This crate (`tintoretto`) re-exports everything for convenience.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub use tintoretto_core::{
    Destination, DestinationOutcome, MediaAsset, MediaKind, MultipartField, PublishRequest,
    PublishRequestBuilder, PublishRequestBuilderError, PublisherConfig, PublisherConfigBuilder,
    StorageConfig, StorageConfigBuilder, TintorettoConfig, UploadState, VideoMeta, WireEncoding,
    WirePayload,
};
pub use tintoretto_error::{
    ConfigError, CoreError, CoreErrorKind, HttpError, JsonError, PublishError, PublishErrorKind,
    QueueError, QueueErrorKind, TintorettoError, TintorettoErrorKind, TintorettoResult,
    UploadError, UploadErrorKind,
};
pub use tintoretto_interface::{
    CredentialStore, EnvCredentials, StaticCredentials, WireRequest, WireResponse, WireTransport,
};
pub use tintoretto_queue::{PublishQueue, QueueItem, QueueState};
pub use tintoretto_social::{AdapterRegistry, AdapterSpec, FanoutPublisher, PublishReport};
pub use tintoretto_transport::{FileUpload, HttpTransport, ProgressSink, UploadClient};
