//! Top-level error wrapper types.

use crate::{ConfigError, CoreError, HttpError, JsonError, PublishError, QueueError, UploadError};

/// This is the foundation error enum. Each Tintoretto crate contributes
/// the variants for its own domain.
///
/// # Examples
///
/// ```
/// use tintoretto_error::{TintorettoError, HttpError};
///
/// let http_err = HttpError::new("Connection failed");
/// let err: TintorettoError = http_err.into();
/// assert!(format!("{}", err).contains("HTTP Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum TintorettoErrorKind {
    /// HTTP error
    #[from(HttpError)]
    Http(HttpError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Core data model error
    #[from(CoreError)]
    Core(CoreError),
    /// Upload transport error
    #[from(UploadError)]
    Upload(UploadError),
    /// Publishing error
    #[from(PublishError)]
    Publish(PublishError),
    /// Queue presentation error
    #[from(QueueError)]
    Queue(QueueError),
}

/// Tintoretto error with kind discrimination.
///
/// # Examples
///
/// ```
/// use tintoretto_error::{TintorettoError, TintorettoResult, ConfigError};
///
/// fn might_fail() -> TintorettoResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Tintoretto Error: {}", _0)]
pub struct TintorettoError(Box<TintorettoErrorKind>);

impl TintorettoError {
    /// Create a new error from a kind.
    pub fn new(kind: TintorettoErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &TintorettoErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to TintorettoErrorKind
impl<T> From<T> for TintorettoError
where
    T: Into<TintorettoErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Tintoretto operations.
///
/// # Examples
///
/// ```
/// use tintoretto_error::{TintorettoResult, HttpError};
///
/// fn fetch_data() -> TintorettoResult<String> {
///     Err(HttpError::new("404 Not Found"))?
/// }
/// ```
pub type TintorettoResult<T> = std::result::Result<T, TintorettoError>;
