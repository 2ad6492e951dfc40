//! The wire dispatch seam used by the fan-out publisher.

use async_trait::async_trait;
use derive_getters::Getters;
use serde_json::Value as JsonValue;
use tintoretto_core::{Destination, WirePayload};
use tintoretto_error::TintorettoResult;

/// One destination-bound request, ready for dispatch.
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct WireRequest {
    /// Destination this request targets
    destination: Destination,
    /// Fully resolved endpoint URL
    endpoint: String,
    /// Bearer token for the Authorization header
    bearer: String,
    /// Request body
    payload: WirePayload,
}

impl WireRequest {
    /// Assemble a dispatch-ready request.
    pub fn new(
        destination: Destination,
        endpoint: impl Into<String>,
        bearer: impl Into<String>,
        payload: WirePayload,
    ) -> Self {
        Self {
            destination,
            endpoint: endpoint.into(),
            bearer: bearer.into(),
            payload,
        }
    }
}

/// What came back from a destination endpoint.
///
/// Non-2xx statuses are data here, not transport errors; the publisher
/// decides how to fold them into an outcome.
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct WireResponse {
    /// HTTP status code
    status: u16,
    /// Parsed JSON body, when one was present and parseable
    body: Option<JsonValue>,
}

impl WireResponse {
    /// Create a response from a status and optional parsed body.
    pub fn new(status: u16, body: Option<JsonValue>) -> Self {
        Self { status, body }
    }

    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Best-effort extraction of an error message from the body.
    ///
    /// Destination endpoints report failures as `error.message`, `error`,
    /// or `message`; the first string found wins.
    pub fn error_message(&self) -> Option<String> {
        let body = self.body.as_ref()?;
        if let Some(message) = body.pointer("/error/message").and_then(JsonValue::as_str) {
            return Some(message.to_string());
        }
        if let Some(message) = body.get("error").and_then(JsonValue::as_str) {
            return Some(message.to_string());
        }
        body.get("message")
            .and_then(JsonValue::as_str)
            .map(str::to_string)
    }
}

/// Dispatches one wire request and returns the endpoint's response.
///
/// Implementations return `Err` only for transport-level failures
/// (connection, DNS, timeout); an HTTP error status is a normal
/// [`WireResponse`].
#[async_trait]
pub trait WireTransport: Send + Sync {
    /// Send the request and collect the response.
    async fn dispatch(&self, request: &WireRequest) -> TintorettoResult<WireResponse>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn error_message_prefers_nested_error() {
        let response = WireResponse::new(
            400,
            Some(json!({"error": {"message": "bad caption"}, "message": "outer"})),
        );
        assert_eq!(response.error_message().as_deref(), Some("bad caption"));
    }

    #[test]
    fn error_message_falls_back_to_flat_fields() {
        let flat = WireResponse::new(403, Some(json!({"error": "forbidden"})));
        assert_eq!(flat.error_message().as_deref(), Some("forbidden"));

        let message_only = WireResponse::new(500, Some(json!({"message": "boom"})));
        assert_eq!(message_only.error_message().as_deref(), Some("boom"));

        let empty = WireResponse::new(502, None);
        assert!(empty.error_message().is_none());
    }

    #[test]
    fn success_range() {
        assert!(WireResponse::new(204, None).is_success());
        assert!(!WireResponse::new(302, None).is_success());
        assert!(!WireResponse::new(404, None).is_success());
    }
}
