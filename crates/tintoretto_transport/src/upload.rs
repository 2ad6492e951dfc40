//! Upload transport with chunked progress and per-upload cancellation.

use crate::mime::mime_from_name;
use async_stream::stream;
use bytes::Bytes;
use derive_getters::Getters;
use futures_util::Stream;
use reqwest::multipart::{Form, Part};
use reqwest::{Body, Client};
use serde_json::Value as JsonValue;
use std::sync::Arc;
use tintoretto_core::StorageConfig;
use tintoretto_error::{
    HttpError, TintorettoErrorKind, TintorettoResult, UploadError, UploadErrorKind,
};
use tintoretto_interface::WireResponse;
use tokio_util::sync::CancellationToken;
use tracing::{debug, instrument, warn};

/// Callback invoked with integer percent as upload bytes go out.
pub type ProgressSink = Arc<dyn Fn(u8) + Send + Sync>;

/// A local binary staged for upload.
#[derive(Debug, Clone, Getters)]
pub struct FileUpload {
    /// File name sent to the storage endpoint
    file_name: String,
    /// MIME type of the payload
    mime_type: String,
    /// File contents
    data: Arc<Vec<u8>>,
}

impl FileUpload {
    /// Stage in-memory bytes for upload.
    pub fn new(
        file_name: impl Into<String>,
        mime_type: impl Into<String>,
        data: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            data: Arc::new(data),
        }
    }

    /// Read a file from disk, inferring its MIME type from the extension.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub async fn read(path: impl AsRef<std::path::Path>) -> TintorettoResult<Self> {
        let path = path.as_ref();
        let data = tokio::fs::read(path).await.map_err(|e| {
            UploadError::new(UploadErrorKind::Source(format!(
                "{}: {}",
                path.display(),
                e
            )))
        })?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| "upload".to_string());
        let mime_type = mime_from_name(&file_name).to_string();
        Ok(Self {
            file_name,
            mime_type,
            data: Arc::new(data),
        })
    }
}

/// Yields the payload in fixed-size slices, reporting percent progress as
/// each slice goes out and stopping as soon as the token fires.
///
/// Progress is never reported after cancellation: the cancel check happens
/// before each slice, and a fired token ends the stream with an error.
fn progress_chunks(
    data: Arc<Vec<u8>>,
    chunk_size: usize,
    progress: ProgressSink,
    cancel: CancellationToken,
) -> impl Stream<Item = Result<Bytes, std::io::Error>> {
    stream! {
        let total = data.len().max(1);
        let chunk_size = chunk_size.max(1);
        let mut sent = 0usize;
        let mut last_pct = None;
        while sent < data.len() {
            if cancel.is_cancelled() {
                yield Err(std::io::Error::other("upload canceled"));
                return;
            }
            let end = (sent + chunk_size).min(data.len());
            let slice = Bytes::copy_from_slice(&data[sent..end]);
            sent = end;
            let pct = ((sent * 100) / total) as u8;
            if last_pct != Some(pct) {
                progress(pct);
                last_pct = Some(pct);
            }
            yield Ok(slice);
        }
    }
}

/// Client for the storage endpoint's direct-upload API.
///
/// One `upload` call issues one multipart POST carrying the binary payload
/// and the configured upload preset. Concurrent uploads are independent;
/// each owns its own cancellation token.
#[derive(Debug, Clone)]
pub struct UploadClient {
    client: Client,
    config: StorageConfig,
}

impl UploadClient {
    /// Create an upload client for the configured storage endpoint.
    pub fn new(config: StorageConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Upload one file, resolving to its durable URL.
    ///
    /// Progress lands on `progress` as integer percent. Canceling the token
    /// settles the call with an abort error and suppresses any further
    /// progress; first settlement wins. Transient network failures retry
    /// with bounded exponential backoff, never after cancellation.
    ///
    /// # Errors
    ///
    /// - `UploadErrorKind::Aborted` when the token fires before completion
    /// - `UploadErrorKind::Network` on transport failure (after retries)
    /// - `UploadErrorKind::Rejected` on a non-2xx from the storage endpoint
    /// - `UploadErrorKind::MalformedResponse` when the success body lacks
    ///   the URL field
    #[instrument(skip(self, upload, progress, cancel), fields(file = %upload.file_name(), size = upload.data().len()))]
    pub async fn upload(
        &self,
        upload: &FileUpload,
        progress: ProgressSink,
        cancel: CancellationToken,
    ) -> TintorettoResult<String> {
        use tokio_retry2::{
            Retry, RetryError,
            strategy::{ExponentialBackoff, jitter},
        };

        let max_retries = *self.config.max_retries();
        if max_retries == 0 {
            return self.attempt(upload, &progress, &cancel).await;
        }

        let retry_strategy = ExponentialBackoff::from_millis(*self.config.retry_backoff_ms())
            .factor(2)
            .max_delay(std::time::Duration::from_secs(30))
            .map(jitter)
            .take(max_retries);

        Retry::spawn(retry_strategy, || async {
            match self.attempt(upload, &progress, &cancel).await {
                Ok(url) => Ok(url),
                Err(e) => {
                    let retryable = matches!(
                        e.kind(),
                        TintorettoErrorKind::Upload(u) if u.kind.is_retryable()
                    );
                    if retryable && !cancel.is_cancelled() {
                        warn!(error = %e, "Upload attempt failed, will retry");
                        Err(RetryError::Transient {
                            err: e,
                            retry_after: None,
                        })
                    } else {
                        Err(RetryError::Permanent(e))
                    }
                }
            }
        })
        .await
    }

    async fn attempt(
        &self,
        upload: &FileUpload,
        progress: &ProgressSink,
        cancel: &CancellationToken,
    ) -> TintorettoResult<String> {
        if cancel.is_cancelled() {
            return Err(UploadError::new(UploadErrorKind::Aborted).into());
        }

        let body_stream = progress_chunks(
            upload.data().clone(),
            *self.config.chunk_size(),
            progress.clone(),
            cancel.clone(),
        );
        let part = Part::stream_with_length(
            Body::wrap_stream(body_stream),
            upload.data().len() as u64,
        )
        .file_name(upload.file_name().clone())
        .mime_str(upload.mime_type())
        .map_err(|e| {
            HttpError::new(format!("Invalid MIME type {}: {}", upload.mime_type(), e))
        })?;
        let form = Form::new()
            .part("file", part)
            .text("upload_preset", self.config.upload_preset().clone());

        debug!(endpoint = %self.config.endpoint(), "Sending upload request");
        let request = self.client.post(self.config.endpoint()).multipart(form).send();

        let response = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                return Err(UploadError::new(UploadErrorKind::Aborted).into());
            }
            result = request => result.map_err(|e| {
                if cancel.is_cancelled() {
                    UploadError::new(UploadErrorKind::Aborted)
                } else {
                    UploadError::new(UploadErrorKind::Network(format!("Request failed: {}", e)))
                }
            })?,
        };

        let status = response.status().as_u16();
        if !response.status().is_success() {
            let text = response.text().await.unwrap_or_default();
            let body: Option<JsonValue> = serde_json::from_str(&text).ok();
            let message = WireResponse::new(status, body)
                .error_message()
                .unwrap_or_else(|| format!("HTTP {}", status));
            return Err(UploadError::new(UploadErrorKind::Rejected { status, message }).into());
        }

        let body: JsonValue = response.json().await.map_err(|e| {
            UploadError::new(UploadErrorKind::MalformedResponse(format!(
                "Failed to parse response: {}",
                e
            )))
        })?;
        body.get("secure_url")
            .and_then(JsonValue::as_str)
            .map(str::to_string)
            .ok_or_else(|| {
                UploadError::new(UploadErrorKind::MalformedResponse(
                    "missing secure_url field".to_string(),
                ))
                .into()
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::StreamExt;
    use std::sync::Mutex;

    fn recording_sink() -> (ProgressSink, Arc<Mutex<Vec<u8>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let writer = seen.clone();
        let sink: ProgressSink = Arc::new(move |pct| writer.lock().unwrap().push(pct));
        (sink, seen)
    }

    #[tokio::test]
    async fn progress_reaches_100_in_order() {
        let (sink, seen) = recording_sink();
        let data = Arc::new(vec![0u8; 1000]);
        let stream = progress_chunks(data, 100, sink, CancellationToken::new());
        let chunks: Vec<_> = stream.collect().await;

        assert_eq!(chunks.len(), 10);
        assert!(chunks.iter().all(Result::is_ok));
        let seen = seen.lock().unwrap();
        assert_eq!(*seen.last().unwrap(), 100);
        assert!(seen.windows(2).all(|w| w[0] < w[1]));
    }

    #[tokio::test]
    async fn cancel_stops_progress_mid_stream() {
        let (sink, seen) = recording_sink();
        let data = Arc::new(vec![0u8; 1000]);
        let cancel = CancellationToken::new();
        let mut stream = Box::pin(progress_chunks(data, 100, sink, cancel.clone()));

        for _ in 0..4 {
            assert!(stream.next().await.unwrap().is_ok());
        }
        let reported_before = seen.lock().unwrap().len();
        cancel.cancel();

        assert!(stream.next().await.unwrap().is_err());
        assert!(stream.next().await.is_none());
        assert_eq!(seen.lock().unwrap().len(), reported_before);
    }

    #[tokio::test]
    async fn sibling_stream_unaffected_by_cancellation() {
        let (sink_a, seen_a) = recording_sink();
        let (sink_b, seen_b) = recording_sink();
        let cancel_a = CancellationToken::new();
        let cancel_b = CancellationToken::new();
        let mut stream_a =
            Box::pin(progress_chunks(Arc::new(vec![0u8; 500]), 100, sink_a, cancel_a.clone()));
        let stream_b =
            Box::pin(progress_chunks(Arc::new(vec![0u8; 500]), 100, sink_b, cancel_b));

        assert!(stream_a.next().await.unwrap().is_ok());
        cancel_a.cancel();
        assert!(stream_a.next().await.unwrap().is_err());

        let chunks_b: Vec<_> = stream_b.collect().await;
        assert!(chunks_b.iter().all(Result::is_ok));
        assert_eq!(*seen_b.lock().unwrap().last().unwrap(), 100);
        assert_eq!(*seen_a.lock().unwrap().last().unwrap(), 20);
    }

    #[tokio::test]
    async fn precancelled_upload_aborts_without_progress() {
        let config = StorageConfig::builder()
            .endpoint("https://store.invalid/upload")
            .upload_preset("test")
            .build()
            .unwrap();
        let client = UploadClient::new(config);
        let (sink, seen) = recording_sink();
        let cancel = CancellationToken::new();
        cancel.cancel();

        let upload = FileUpload::new("a.png", "image/png", vec![1, 2, 3]);
        let result = client.upload(&upload, sink, cancel).await;

        let err = result.unwrap_err();
        assert!(matches!(
            err.kind(),
            TintorettoErrorKind::Upload(u) if u.kind == UploadErrorKind::Aborted
        ));
        assert!(seen.lock().unwrap().is_empty());
    }
}
