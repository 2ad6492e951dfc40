//! Queue items and their lifecycle.

use chrono::{DateTime, Utc};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tintoretto_core::{Destination, DestinationOutcome, PublishRequest};
use tintoretto_error::{QueueError, QueueErrorKind, TintorettoResult};
use tracing::{debug, warn};
use uuid::Uuid;

/// Maximum characters of content shown in a queue item.
const SNIPPET_LEN: usize = 80;

/// Display state of one queued publish attempt.
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
pub enum QueueState {
    /// Created, not yet dispatched
    #[display("pending")]
    Pending,
    /// Dispatch in flight
    #[display("publishing")]
    Publishing,
    /// Destination accepted the publish
    #[display("completed")]
    Completed,
    /// Destination attempt failed
    #[display("failed")]
    Failed,
}

impl QueueState {
    /// Whether the state admits no further transitions.
    pub fn is_terminal(&self) -> bool {
        matches!(self, QueueState::Completed | QueueState::Failed)
    }
}

/// One destination's row in the queue.
///
/// Progress renders as 0 for pending/failed, indeterminate while
/// publishing, and 100 once completed; the UI reads `progress()` and
/// `state()` together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct QueueItem {
    /// Stable identifier
    id: Uuid,
    /// Destination this row tracks
    destination: Destination,
    /// Truncated content for display
    snippet: String,
    /// Current display state
    state: QueueState,
    /// Render progress, 0 or 100
    progress: u8,
    /// Failure reason once failed
    error: Option<String>,
    /// When the row was created
    created_at: DateTime<Utc>,
    /// Last state change
    updated_at: DateTime<Utc>,
}

impl QueueItem {
    fn new(destination: Destination, snippet: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            destination,
            snippet,
            state: QueueState::Pending,
            progress: 0,
            error: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn transition(&mut self, state: QueueState) {
        self.state = state;
        self.updated_at = Utc::now();
    }
}

/// Truncate on a char boundary, appending an ellipsis when cut.
fn snippet_of(content: &str) -> String {
    if content.chars().count() <= SNIPPET_LEN {
        return content.to_string();
    }
    let cut: String = content.chars().take(SNIPPET_LEN).collect();
    format!("{}…", cut)
}

/// Client-visible history of publish attempts.
///
/// `submit` creates one pending item per destination synchronously, before
/// any network call resolves. Outcomes move items to a terminal state;
/// terminal items never transition again, and nothing is removed
/// automatically.
///
/// # Examples
///
/// ```
/// use tintoretto_core::{Destination, DestinationOutcome, PublishRequest};
/// use tintoretto_queue::{PublishQueue, QueueState};
///
/// let request = PublishRequest::builder()
///     .content("hello")
///     .destinations(vec![Destination::Facebook])
///     .build()
///     .unwrap();
///
/// let mut queue = PublishQueue::new();
/// let ids = queue.submit(&request);
/// assert_eq!(*queue.item(ids[0]).unwrap().state(), QueueState::Pending);
///
/// let outcome = DestinationOutcome::success(Destination::Facebook, serde_json::json!({}));
/// queue.apply_outcome(ids[0], &outcome).unwrap();
/// assert_eq!(*queue.item(ids[0]).unwrap().state(), QueueState::Completed);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PublishQueue {
    items: Vec<QueueItem>,
}

impl PublishQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create one pending item per requested destination.
    ///
    /// Runs synchronously so the caller can render the rows before any
    /// network promise settles. Returns the new item ids in destination
    /// order.
    pub fn submit(&mut self, request: &PublishRequest) -> Vec<Uuid> {
        let snippet = snippet_of(request.content());
        let ids = request
            .destinations()
            .iter()
            .map(|destination| {
                let item = QueueItem::new(*destination, snippet.clone());
                let id = *item.id();
                debug!(id = %id, destination = %destination, "Queued publish attempt");
                self.items.push(item);
                id
            })
            .collect();
        ids
    }

    /// Mark an item as in flight.
    ///
    /// # Errors
    ///
    /// Returns an error if no item has the given id.
    pub fn mark_publishing(&mut self, id: Uuid) -> TintorettoResult<()> {
        let item = self.item_mut(id)?;
        if item.state.is_terminal() {
            warn!(id = %id, state = %item.state, "Ignoring transition out of terminal state");
            return Ok(());
        }
        item.transition(QueueState::Publishing);
        Ok(())
    }

    /// Fold a destination outcome into the matching item.
    ///
    /// Completed items get 100% progress; failed items drop to 0% and
    /// keep the outcome's error message. Terminal items are left alone.
    ///
    /// # Errors
    ///
    /// Returns an error if no item has the given id.
    pub fn apply_outcome(&mut self, id: Uuid, outcome: &DestinationOutcome) -> TintorettoResult<()> {
        let item = self.item_mut(id)?;
        if item.state.is_terminal() {
            warn!(id = %id, state = %item.state, "Ignoring transition out of terminal state");
            return Ok(());
        }
        if *outcome.success() {
            item.transition(QueueState::Completed);
            item.progress = 100;
        } else {
            item.transition(QueueState::Failed);
            item.progress = 0;
            item.error = outcome.error().clone();
        }
        Ok(())
    }

    /// Look up one item.
    pub fn item(&self, id: Uuid) -> Option<&QueueItem> {
        self.items.iter().find(|item| *item.id() == id)
    }

    fn item_mut(&mut self, id: Uuid) -> TintorettoResult<&mut QueueItem> {
        self.items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| QueueError::new(QueueErrorKind::ItemNotFound(id.to_string())).into())
    }

    /// Every item, oldest first.
    pub fn items(&self) -> &[QueueItem] {
        &self.items
    }

    /// Items currently in the given state.
    pub fn in_state(&self, state: QueueState) -> Vec<&QueueItem> {
        self.items
            .iter()
            .filter(|item| *item.state() == state)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(destinations: Vec<Destination>) -> PublishRequest {
        PublishRequest::builder()
            .content("a".repeat(200))
            .destinations(destinations)
            .build()
            .unwrap()
    }

    #[test]
    fn submit_creates_pending_items_synchronously() {
        let mut queue = PublishQueue::new();
        let ids = queue.submit(&request(vec![
            Destination::Facebook,
            Destination::Mastodon,
        ]));

        assert_eq!(ids.len(), 2);
        assert_eq!(queue.in_state(QueueState::Pending).len(), 2);
        assert_eq!(
            *queue.item(ids[1]).unwrap().destination(),
            Destination::Mastodon
        );
    }

    #[test]
    fn snippet_truncates_long_content() {
        let mut queue = PublishQueue::new();
        let ids = queue.submit(&request(vec![Destination::Facebook]));
        let snippet = queue.item(ids[0]).unwrap().snippet();
        assert_eq!(snippet.chars().count(), SNIPPET_LEN + 1);
        assert!(snippet.ends_with('…'));
    }

    #[test]
    fn items_reach_exactly_one_terminal_state() {
        let mut queue = PublishQueue::new();
        let ids = queue.submit(&request(vec![
            Destination::Facebook,
            Destination::Instagram,
        ]));

        queue.mark_publishing(ids[0]).unwrap();
        queue
            .apply_outcome(
                ids[0],
                &DestinationOutcome::success(Destination::Facebook, json!({})),
            )
            .unwrap();
        queue
            .apply_outcome(
                ids[1],
                &DestinationOutcome::failure(Destination::Instagram, "media required"),
            )
            .unwrap();

        let completed = queue.item(ids[0]).unwrap();
        assert_eq!(*completed.state(), QueueState::Completed);
        assert_eq!(*completed.progress(), 100);

        let failed = queue.item(ids[1]).unwrap();
        assert_eq!(*failed.state(), QueueState::Failed);
        assert_eq!(*failed.progress(), 0);
        assert_eq!(failed.error().as_deref(), Some("media required"));
    }

    #[test]
    fn terminal_items_never_transition_again() {
        let mut queue = PublishQueue::new();
        let ids = queue.submit(&request(vec![Destination::Facebook]));
        queue
            .apply_outcome(
                ids[0],
                &DestinationOutcome::failure(Destination::Facebook, "boom"),
            )
            .unwrap();

        // A late success outcome must not resurrect the item.
        queue
            .apply_outcome(
                ids[0],
                &DestinationOutcome::success(Destination::Facebook, json!({})),
            )
            .unwrap();
        queue.mark_publishing(ids[0]).unwrap();

        let item = queue.item(ids[0]).unwrap();
        assert_eq!(*item.state(), QueueState::Failed);
        assert_eq!(item.error().as_deref(), Some("boom"));
    }

    #[test]
    fn history_is_never_dropped() {
        let mut queue = PublishQueue::new();
        for _ in 0..3 {
            queue.submit(&request(vec![Destination::Facebook]));
        }
        assert_eq!(queue.items().len(), 3);
    }

    #[test]
    fn unknown_id_is_an_error() {
        let mut queue = PublishQueue::new();
        let missing = Uuid::new_v4();
        assert!(queue.mark_publishing(missing).is_err());
    }
}
