//! Core data model error types.

/// Kinds of core data model errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum CoreErrorKind {
    /// Attempted a state transition the media asset lifecycle does not allow
    #[display("Invalid state transition: {}", _0)]
    InvalidTransition(String),
    /// Publish request failed build-time validation
    #[display("Invalid publish request: {}", _0)]
    InvalidRequest(String),
    /// A destination identifier could not be parsed
    #[display("Unknown destination: {}", _0)]
    UnknownDestination(String),
}

/// Core error with location tracking.
///
/// # Examples
///
/// ```
/// use tintoretto_error::{CoreError, CoreErrorKind};
///
/// let err = CoreError::new(CoreErrorKind::InvalidRequest("no destinations".to_string()));
/// assert!(format!("{}", err).contains("no destinations"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Core Error: {} at line {} in {}", kind, line, file)]
pub struct CoreError {
    /// The kind of error that occurred
    pub kind: CoreErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl CoreError {
    /// Create a new core error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: CoreErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
