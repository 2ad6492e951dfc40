//! Destination identifiers for supported platforms.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tintoretto_error::{CoreError, CoreErrorKind, TintorettoResult};

/// A platform content can be published to.
///
/// The string form is the wire identifier used in queue items, outcomes,
/// and configuration.
///
/// # Examples
///
/// ```
/// use tintoretto_core::Destination;
///
/// assert_eq!(Destination::Facebook.as_str(), "facebook");
/// assert_eq!(Destination::parse("mastodon").unwrap(), Destination::Mastodon);
/// assert!(Destination::parse("friendster").is_err());
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::EnumString,
    derive_more::Display,
)]
#[strum(ascii_case_insensitive)]
pub enum Destination {
    /// Facebook page feed
    #[display("facebook")]
    #[strum(serialize = "facebook")]
    #[serde(rename = "facebook")]
    Facebook,
    /// Instagram feed (media required)
    #[display("instagram")]
    #[strum(serialize = "instagram")]
    #[serde(rename = "instagram")]
    Instagram,
    /// X, formerly Twitter
    #[display("x")]
    #[strum(serialize = "x", serialize = "twitter")]
    #[serde(rename = "x")]
    XTwitter,
    /// LinkedIn member feed
    #[display("linkedin")]
    #[strum(serialize = "linkedin")]
    #[serde(rename = "linkedin")]
    LinkedIn,
    /// Any Mastodon instance (multipart status endpoint)
    #[display("mastodon")]
    #[strum(serialize = "mastodon")]
    #[serde(rename = "mastodon")]
    Mastodon,
    /// YouTube video upload
    #[display("youtube")]
    #[strum(serialize = "youtube")]
    #[serde(rename = "youtube")]
    YouTube,
}

impl Destination {
    /// Convert to the wire identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Destination::Facebook => "facebook",
            Destination::Instagram => "instagram",
            Destination::XTwitter => "x",
            Destination::LinkedIn => "linkedin",
            Destination::Mastodon => "mastodon",
            Destination::YouTube => "youtube",
        }
    }

    /// Parse a wire identifier, reporting unknown ids as a core error.
    pub fn parse(s: &str) -> TintorettoResult<Self> {
        Self::from_str(s)
            .map_err(|_| CoreError::new(CoreErrorKind::UnknownDestination(s.to_string())).into())
    }
}
