//! Upload transport error types.

/// Kinds of upload errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum UploadErrorKind {
    /// Upload was canceled before completion
    #[display("Upload aborted")]
    Aborted,
    /// Transport-level failure (connection, DNS, timeout)
    #[display("Network error: {}", _0)]
    Network(String),
    /// Storage endpoint returned a non-2xx status
    #[display("Upload rejected ({}): {}", status, message)]
    Rejected {
        /// HTTP status code returned by the storage endpoint
        status: u16,
        /// Error message from the response body, or a generic status message
        message: String,
    },
    /// Response body did not contain the expected URL field
    #[display("Malformed upload response: {}", _0)]
    MalformedResponse(String),
    /// Local source file could not be read
    #[display("Source read failed: {}", _0)]
    Source(String),
}

impl UploadErrorKind {
    /// Whether retrying the upload could succeed.
    ///
    /// Only transport-level failures are worth retrying; cancellation and
    /// endpoint rejections are final.
    pub fn is_retryable(&self) -> bool {
        matches!(self, UploadErrorKind::Network(_))
    }
}

/// Upload error with location tracking.
///
/// # Examples
///
/// ```
/// use tintoretto_error::{UploadError, UploadErrorKind};
///
/// let err = UploadError::new(UploadErrorKind::Aborted);
/// assert!(format!("{}", err).contains("aborted"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Upload Error: {} at line {} in {}", kind, line, file)]
pub struct UploadError {
    /// The kind of error that occurred
    pub kind: UploadErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl UploadError {
    /// Create a new upload error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: UploadErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
