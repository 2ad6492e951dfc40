//! Publish request types.

use crate::Destination;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Destination-specific configuration for video-hosting platforms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct VideoMeta {
    /// Video title
    title: String,
    /// Video description
    description: String,
}

impl VideoMeta {
    /// Create video metadata.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// The unit submitted to the fan-out publisher.
///
/// Carries the authored text, the resolved URLs of completed uploads, and
/// the ordered destinations to dispatch to. Built through the generated
/// builder, which rejects an empty or duplicated destination list.
///
/// # Examples
///
/// ```
/// use tintoretto_core::{Destination, PublishRequest};
///
/// let request = PublishRequest::builder()
///     .content("hello")
///     .destinations(vec![Destination::Facebook, Destination::Mastodon])
///     .build()
///     .unwrap();
/// assert_eq!(request.destinations().len(), 2);
///
/// let empty = PublishRequest::builder()
///     .content("hello")
///     .destinations(vec![])
///     .build();
/// assert!(empty.is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, derive_builder::Builder)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct PublishRequest {
    /// Authored text content
    content: String,
    /// Ordered remote URLs of completed media uploads
    #[builder(default)]
    media: Vec<String>,
    /// Destinations to dispatch to, in order
    destinations: Vec<Destination>,
    /// Optional video metadata for video-hosting destinations
    #[builder(default)]
    video_meta: Option<VideoMeta>,
}

impl PublishRequest {
    /// Start building a publish request.
    pub fn builder() -> PublishRequestBuilder {
        PublishRequestBuilder::default()
    }
}

impl PublishRequestBuilder {
    fn validate(&self) -> Result<(), String> {
        let Some(destinations) = &self.destinations else {
            return Ok(());
        };
        if destinations.is_empty() {
            return Err("at least one destination is required".to_string());
        }
        let mut seen = std::collections::HashSet::new();
        for destination in destinations {
            if !seen.insert(destination) {
                return Err(format!("duplicate destination: {}", destination));
            }
        }
        Ok(())
    }
}
