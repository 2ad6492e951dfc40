//! End-to-end flow: compose, queue, fan out, and reconcile outcomes.

use async_trait::async_trait;
use serde_json::json;
use std::sync::{Arc, Mutex};
use tintoretto::{
    CredentialStore, Destination, FanoutPublisher, HttpError, MediaAsset, PublishQueue,
    PublishReport, PublishRequest, PublisherConfig, QueueState, TintorettoResult, UploadState,
    WireRequest, WireResponse, WireTransport,
};

/// Scripted transport: instagram always rejects, everyone else accepts.
struct ScriptedTransport {
    calls: Arc<Mutex<Vec<WireRequest>>>,
}

#[async_trait]
impl WireTransport for ScriptedTransport {
    async fn dispatch(&self, request: &WireRequest) -> TintorettoResult<WireResponse> {
        self.calls.lock().unwrap().push(request.clone());
        match request.destination() {
            Destination::Instagram => Ok(WireResponse::new(
                422,
                Some(json!({"error": {"message": "unsupported aspect ratio"}})),
            )),
            Destination::LinkedIn => Err(HttpError::new("connection reset by peer"))?,
            _ => Ok(WireResponse::new(200, Some(json!({"id": "remote-1"})))),
        }
    }
}

struct Token;

impl CredentialStore for Token {
    fn bearer_token(&self) -> Option<String> {
        Some("integration-token".to_string())
    }
}

#[tokio::test]
async fn full_publish_flow_reconciles_queue_and_report() {
    dotenvy::dotenv().ok();
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    // Compose: one uploaded image feeding the request.
    let mut asset = MediaAsset::new("sunset.png", "image/png");
    asset.begin_upload().unwrap();
    asset.set_progress(60).unwrap();
    asset
        .complete("https://cdn.example.com/sunset.png")
        .unwrap();
    assert_eq!(*asset.state(), UploadState::Complete);

    let request = PublishRequest::builder()
        .content("golden hour over the lagoon")
        .media(vec![asset.remote_url().clone().unwrap()])
        .destinations(vec![
            Destination::Facebook,
            Destination::Instagram,
            Destination::LinkedIn,
            Destination::Mastodon,
        ])
        .build()
        .unwrap();

    // Queue rows exist before any dispatch settles.
    let mut queue = PublishQueue::new();
    let ids = queue.submit(&request);
    assert_eq!(queue.in_state(QueueState::Pending).len(), 4);

    let calls = Arc::new(Mutex::new(Vec::new()));
    let transport = ScriptedTransport {
        calls: calls.clone(),
    };
    let config = PublisherConfig::builder()
        .api_base("https://api.example.com/v1")
        .build()
        .unwrap();
    let publisher = FanoutPublisher::new(transport, Token, &config);

    for id in &ids {
        queue.mark_publishing(*id).unwrap();
    }
    let outcomes = publisher.publish(&request).await;

    // One outcome per destination, isolation across mixed failures.
    assert_eq!(outcomes.len(), 4);
    assert!(*outcomes[0].success());
    assert!(!*outcomes[1].success());
    assert!(!*outcomes[2].success());
    assert!(*outcomes[3].success());
    assert_eq!(calls.lock().unwrap().len(), 4);

    for (id, outcome) in ids.iter().zip(&outcomes) {
        queue.apply_outcome(*id, outcome).unwrap();
    }
    assert_eq!(queue.in_state(QueueState::Completed).len(), 2);
    assert_eq!(queue.in_state(QueueState::Failed).len(), 2);

    let report = PublishReport::from_outcomes(&outcomes);
    assert!(!report.all_succeeded());
    let summary = report.summary();
    assert!(summary.contains("2 of 4 destinations succeeded"));
    assert!(summary.contains("instagram (") && summary.contains("unsupported aspect ratio"));
    assert!(summary.contains("linkedin (") && summary.contains("connection reset by peer"));
}
