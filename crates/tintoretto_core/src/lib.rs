//! Core data types for the Tintoretto publishing library.
//!
//! This crate provides the foundation data types used across all Tintoretto interfaces.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod destination;
mod media;
mod outcome;
mod request;
mod wire;

pub use config::{
    PublisherConfig, PublisherConfigBuilder, StorageConfig, StorageConfigBuilder,
    TintorettoConfig,
};
pub use destination::Destination;
pub use media::{MediaAsset, MediaKind, UploadState};
pub use outcome::DestinationOutcome;
pub use request::{
    PublishRequest, PublishRequestBuilder, PublishRequestBuilderError, VideoMeta,
};
pub use wire::{MultipartField, WireEncoding, WirePayload};
