//! Media asset types and the upload lifecycle.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tintoretto_error::{CoreError, CoreErrorKind, TintorettoResult};
use uuid::Uuid;

/// Kind of media content.
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
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    /// Image content (PNG, JPEG, WebP, etc.)
    #[display("image")]
    Image,
    /// Video content (MP4, WebM, etc.)
    #[display("video")]
    Video,
    /// Anything else (documents, audio, archives)
    #[display("other")]
    Other,
}

impl MediaKind {
    /// Infer the kind from a MIME type string.
    ///
    /// # Examples
    ///
    /// ```
    /// use tintoretto_core::MediaKind;
    ///
    /// assert_eq!(MediaKind::from_mime("image/png"), MediaKind::Image);
    /// assert_eq!(MediaKind::from_mime("video/mp4"), MediaKind::Video);
    /// assert_eq!(MediaKind::from_mime("application/pdf"), MediaKind::Other);
    /// ```
    pub fn from_mime(mime: &str) -> Self {
        if mime.starts_with("image/") {
            MediaKind::Image
        } else if mime.starts_with("video/") {
            MediaKind::Video
        } else {
            MediaKind::Other
        }
    }

    /// Convert to string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
            MediaKind::Other => "other",
        }
    }
}

/// Upload lifecycle state of a media asset.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum UploadState {
    /// Selected but not yet sent
    #[display("pending")]
    Pending,
    /// Transfer in progress
    #[display("uploading")]
    Uploading,
    /// Stored; a remote URL is available
    #[display("complete")]
    Complete,
    /// Canceled by the user before completion
    #[display("canceled")]
    Canceled,
    /// Transfer failed
    #[display("failed")]
    Failed,
}

impl UploadState {
    /// Whether the state admits no further transitions.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            UploadState::Complete | UploadState::Canceled | UploadState::Failed
        )
    }
}

/// One binary selected for upload, tracked through its lifecycle.
///
/// A `MediaAsset` carries a remote URL exactly when its state is
/// [`UploadState::Complete`]. All mutation goes through the transition
/// methods, which enforce the lifecycle.
///
/// # Examples
///
/// ```
/// use tintoretto_core::{MediaAsset, UploadState};
///
/// let mut asset = MediaAsset::new("portrait.png", "image/png");
/// assert_eq!(*asset.state(), UploadState::Pending);
/// assert!(asset.remote_url().is_none());
///
/// asset.begin_upload().unwrap();
/// asset.set_progress(40).unwrap();
/// asset.complete("https://cdn.example.com/portrait.png").unwrap();
/// assert!(asset.remote_url().is_some());
/// assert_eq!(*asset.progress(), 100);
/// ```
#[derive(Debug, Clone, Getters)]
pub struct MediaAsset {
    /// Stable identifier for UI bookkeeping
    id: Uuid,
    /// Original file name as selected
    file_name: String,
    /// MIME type reported for the file
    mime_type: String,
    /// Inferred content kind
    kind: MediaKind,
    /// Upload progress, 0-100
    progress: u8,
    /// Current lifecycle state
    state: UploadState,
    /// Durable URL, present only once the upload completes
    remote_url: Option<String>,
    /// Failure reason, present only in the failed state
    failure: Option<String>,
}

impl MediaAsset {
    /// Create a pending asset for a selected file.
    pub fn new(file_name: impl Into<String>, mime_type: impl Into<String>) -> Self {
        let mime_type = mime_type.into();
        let kind = MediaKind::from_mime(&mime_type);
        Self {
            id: Uuid::new_v4(),
            file_name: file_name.into(),
            mime_type,
            kind,
            progress: 0,
            state: UploadState::Pending,
            remote_url: None,
            failure: None,
        }
    }

    fn reject(&self, to: &str) -> CoreError {
        CoreError::new(CoreErrorKind::InvalidTransition(format!(
            "{} -> {} for asset {}",
            self.state, to, self.id
        )))
    }

    /// Mark the asset as uploading.
    pub fn begin_upload(&mut self) -> TintorettoResult<()> {
        match self.state {
            UploadState::Pending => {
                self.state = UploadState::Uploading;
                Ok(())
            }
            _ => Err(self.reject("uploading"))?,
        }
    }

    /// Record transfer progress. Only valid while uploading; clamped to 0-100.
    pub fn set_progress(&mut self, pct: u8) -> TintorettoResult<()> {
        match self.state {
            UploadState::Uploading => {
                self.progress = pct.min(100);
                Ok(())
            }
            _ => Err(self.reject("uploading (progress)"))?,
        }
    }

    /// Complete the upload with its durable URL.
    pub fn complete(&mut self, url: impl Into<String>) -> TintorettoResult<()> {
        match self.state {
            UploadState::Uploading => {
                self.state = UploadState::Complete;
                self.progress = 100;
                self.remote_url = Some(url.into());
                Ok(())
            }
            _ => Err(self.reject("complete"))?,
        }
    }

    /// Cancel a pending or in-flight upload.
    pub fn cancel(&mut self) -> TintorettoResult<()> {
        match self.state {
            UploadState::Pending | UploadState::Uploading => {
                self.state = UploadState::Canceled;
                Ok(())
            }
            _ => Err(self.reject("canceled"))?,
        }
    }

    /// Record an upload failure.
    pub fn fail(&mut self, reason: impl Into<String>) -> TintorettoResult<()> {
        match self.state {
            UploadState::Pending | UploadState::Uploading => {
                self.state = UploadState::Failed;
                self.failure = Some(reason.into());
                Ok(())
            }
            _ => Err(self.reject("failed"))?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_present_only_when_complete() {
        let mut asset = MediaAsset::new("clip.mp4", "video/mp4");
        assert_eq!(asset.kind(), &MediaKind::Video);
        assert!(asset.remote_url().is_none());

        asset.begin_upload().unwrap();
        assert!(asset.remote_url().is_none());

        asset.complete("https://cdn.example.com/clip.mp4").unwrap();
        assert_eq!(*asset.state(), UploadState::Complete);
        assert!(asset.remote_url().is_some());
    }

    #[test]
    fn terminal_states_reject_transitions() {
        let mut asset = MediaAsset::new("a.png", "image/png");
        asset.begin_upload().unwrap();
        asset.cancel().unwrap();

        assert!(asset.begin_upload().is_err());
        assert!(asset.set_progress(10).is_err());
        assert!(asset.complete("https://cdn.example.com/a.png").is_err());
        assert_eq!(*asset.state(), UploadState::Canceled);
        assert!(asset.remote_url().is_none());
    }

    #[test]
    fn progress_clamps_to_100() {
        let mut asset = MediaAsset::new("a.png", "image/png");
        asset.begin_upload().unwrap();
        asset.set_progress(250).unwrap();
        assert_eq!(*asset.progress(), 100);
    }

    #[test]
    fn failure_records_reason() {
        let mut asset = MediaAsset::new("a.png", "image/png");
        asset.begin_upload().unwrap();
        asset.fail("connection reset").unwrap();
        assert_eq!(*asset.state(), UploadState::Failed);
        assert_eq!(asset.failure().as_deref(), Some("connection reset"));
    }
}
