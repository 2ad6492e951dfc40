//! Publishing error types.

/// Kinds of publish errors.
///
/// Each kind maps to one failure class a destination outcome can carry.
/// None of these abort sibling destinations; the publisher converts them
/// into per-destination failure outcomes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum PublishErrorKind {
    /// No bearer credential available; blocks every destination
    #[display("Missing credential")]
    MissingCredential,
    /// No adapter registered for the destination
    #[display("Unsupported destination: {}", _0)]
    UnsupportedDestination(String),
    /// Adapter-level precondition not met; rejected before dispatch
    #[display("Validation failed for {}: {}", destination, reason)]
    ValidationFailed {
        /// Destination whose validation predicate rejected the request
        destination: String,
        /// Why the request was rejected
        reason: String,
    },
    /// Transport-level failure reaching the destination endpoint
    #[display("Network error: {}", _0)]
    Network(String),
    /// Destination endpoint returned a non-2xx status
    #[display("{} rejected the request ({}): {}", destination, status, message)]
    RemoteRejected {
        /// Destination that rejected the request
        destination: String,
        /// HTTP status code
        status: u16,
        /// Error message from the response body, or the status text
        message: String,
    },
}

/// Publish error with location tracking.
///
/// # Examples
///
/// ```
/// use tintoretto_error::{PublishError, PublishErrorKind};
///
/// let err = PublishError::new(PublishErrorKind::MissingCredential);
/// assert!(format!("{}", err).contains("Missing credential"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Publish Error: {} at line {} in {}", kind, line, file)]
pub struct PublishError {
    /// The kind of error that occurred
    pub kind: PublishErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl PublishError {
    /// Create a new publish error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: PublishErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
