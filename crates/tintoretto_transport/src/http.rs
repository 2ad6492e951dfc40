//! Production wire transport backed by reqwest.

use crate::mime::{file_name_from_url, part_mime};
use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::AUTHORIZATION;
use reqwest::multipart::{Form, Part};
use serde_json::Value as JsonValue;
use tintoretto_core::{MultipartField, PublisherConfig, WirePayload};
use tintoretto_error::{HttpError, TintorettoResult};
use tintoretto_interface::{WireRequest, WireResponse, WireTransport};
use tracing::{debug, instrument};

/// Dispatches wire requests over HTTP with bearer authentication.
///
/// JSON payloads go out as `application/json` bodies. Multipart payloads
/// re-fetch each hosted media URL and attach the bytes as binary parts,
/// since multipart-only destinations do not accept URLs.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Create a transport with the configured request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &PublisherConfig) -> TintorettoResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(*config.timeout_secs()))
            .build()
            .map_err(|e| HttpError::new(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { client })
    }

    async fn build_form(&self, fields: &[MultipartField]) -> TintorettoResult<Form> {
        let mut form = Form::new();
        for field in fields {
            match field {
                MultipartField::Text { name, value } => {
                    form = form.text(name.clone(), value.clone());
                }
                MultipartField::RemoteMedia { name, url, kind } => {
                    debug!(url = %url, "Re-fetching hosted media for multipart dispatch");
                    let response = self.client.get(url).send().await.map_err(|e| {
                        HttpError::new(format!("Media fetch failed for {}: {}", url, e))
                    })?;
                    if !response.status().is_success() {
                        Err(HttpError::new(format!(
                            "Media fetch for {} returned HTTP {}",
                            url,
                            response.status().as_u16()
                        )))?;
                    }
                    let bytes = response.bytes().await.map_err(|e| {
                        HttpError::new(format!("Media fetch failed for {}: {}", url, e))
                    })?;
                    let part = Part::bytes(bytes.to_vec())
                        .file_name(file_name_from_url(url))
                        .mime_str(part_mime(kind, url))
                        .map_err(|e| {
                            HttpError::new(format!("Invalid media part for {}: {}", url, e))
                        })?;
                    form = form.part(name.clone(), part);
                }
            }
        }
        Ok(form)
    }
}

#[async_trait]
impl WireTransport for HttpTransport {
    #[instrument(skip(self, request), fields(destination = %request.destination(), endpoint = %request.endpoint()))]
    async fn dispatch(&self, request: &WireRequest) -> TintorettoResult<WireResponse> {
        let builder = self
            .client
            .post(request.endpoint())
            .header(AUTHORIZATION, format!("Bearer {}", request.bearer()));

        let builder = match request.payload() {
            WirePayload::Json(body) => builder.json(body),
            WirePayload::Multipart(fields) => builder.multipart(self.build_form(fields).await?),
        };

        debug!("Dispatching destination request");
        let response = builder
            .send()
            .await
            .map_err(|e| HttpError::new(format!("Request failed: {}", e)))?;

        let status = response.status().as_u16();
        let text = response.text().await.unwrap_or_default();
        let body: Option<JsonValue> = serde_json::from_str(&text).ok();
        Ok(WireResponse::new(status, body))
    }
}
