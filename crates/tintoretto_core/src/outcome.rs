//! Per-destination publish outcomes.

use crate::Destination;
use chrono::{DateTime, Utc};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// The terminal result of one destination's publish attempt.
///
/// Exactly one outcome exists per requested destination after a fan-out
/// completes. A success carries the destination's parsed response body;
/// a failure carries a human-readable reason.
///
/// # Examples
///
/// ```
/// use tintoretto_core::{Destination, DestinationOutcome};
///
/// let ok = DestinationOutcome::success(Destination::Facebook, serde_json::json!({"id": "42"}));
/// assert!(*ok.success());
///
/// let err = DestinationOutcome::failure(Destination::Instagram, "Validation failed");
/// assert!(!*err.success());
/// assert_eq!(err.error().as_deref(), Some("Validation failed"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct DestinationOutcome {
    /// Destination this outcome belongs to
    destination: Destination,
    /// Whether the destination accepted the publish
    success: bool,
    /// Parsed 2xx response body, present on success
    payload: Option<JsonValue>,
    /// Failure reason, present on failure
    error: Option<String>,
    /// When the attempt settled
    completed_at: DateTime<Utc>,
}

impl DestinationOutcome {
    /// Record a successful publish with the destination's response body.
    pub fn success(destination: Destination, payload: JsonValue) -> Self {
        Self {
            destination,
            success: true,
            payload: Some(payload),
            error: None,
            completed_at: Utc::now(),
        }
    }

    /// Record a failed publish with its reason.
    pub fn failure(destination: Destination, error: impl Into<String>) -> Self {
        Self {
            destination,
            success: false,
            payload: None,
            error: Some(error.into()),
            completed_at: Utc::now(),
        }
    }
}
