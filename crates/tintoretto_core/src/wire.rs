//! Wire payload shapes produced by destination adapters.

use crate::MediaKind;
use serde_json::Value as JsonValue;

/// Encoding a destination endpoint expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum WireEncoding {
    /// `application/json` body
    #[display("json")]
    Json,
    /// `multipart/form-data` body
    #[display("multipart")]
    Multipart,
}

/// One field of a multipart payload.
///
/// Media fields stay declarative here: the transport re-fetches the remote
/// URL and attaches the bytes at dispatch time, so payload construction
/// never touches the network.
#[derive(Debug, Clone, PartialEq)]
pub enum MultipartField {
    /// Plain text field
    Text {
        /// Form field name
        name: String,
        /// Field value
        value: String,
    },
    /// Already-hosted media to re-fetch and attach as a binary part
    RemoteMedia {
        /// Form field name
        name: String,
        /// URL of the hosted media
        url: String,
        /// Content kind, used for the part's MIME type
        kind: MediaKind,
    },
}

/// A destination-ready request body.
#[derive(Debug, Clone, PartialEq)]
pub enum WirePayload {
    /// JSON body
    Json(JsonValue),
    /// Multipart form body
    Multipart(Vec<MultipartField>),
}

impl WirePayload {
    /// The encoding of this payload.
    pub fn encoding(&self) -> WireEncoding {
        match self {
            WirePayload::Json(_) => WireEncoding::Json,
            WirePayload::Multipart(_) => WireEncoding::Multipart,
        }
    }
}
