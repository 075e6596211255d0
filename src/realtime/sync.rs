use futures::StreamExt;
use redis::Client;
use serde::Deserialize;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, error, info};
use uuid::Uuid;

use crate::cache::query::{QueryCache, QueryKey};

/// Redis channel carrying row-level change events for the notifications
/// table, any operation type, any row.
pub const CHANGE_CHANNEL: &str = "notifications:changes";

/// A change-feed event. Parsed leniently and used for logging only; the
/// delivery itself is what invalidates the cache.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChangeEvent {
    #[serde(default)]
    pub op: Option<String>,
    #[serde(default)]
    pub id: Option<Uuid>,
}

/// Owns an active change-feed subscription. Dropping the guard (or calling
/// `deactivate`) tears the subscription down; no event is processed after
/// that on any exit path.
#[derive(Debug)]
pub struct SubscriptionGuard {
    feed: JoinHandle<()>,
    apply: JoinHandle<()>,
}

impl SubscriptionGuard {
    /// Close the subscription. Same effect as dropping the guard; provided
    /// so the teardown can be explicit at the owning call site.
    pub fn deactivate(self) {}
}

impl Drop for SubscriptionGuard {
    fn drop(&mut self) {
        self.feed.abort();
        self.apply.abort();
        info!("Realtime sync deactivated");
    }
}

pub struct RealtimeSync;

impl RealtimeSync {
    /// Open the change-feed subscription and start invalidating the
    /// notification cache on every delivered event.
    ///
    /// At most one subscription exists per returned guard. Reconnection of
    /// a dropped channel is the Redis client's concern; there is no retry
    /// or backoff here.
    pub fn activate(client: Client, cache: Arc<QueryCache>) -> SubscriptionGuard {
        let (tx, rx) = mpsc::channel::<ChangeEvent>(64);

        let feed = tokio::spawn(async move {
            run_change_feed(client, tx).await;
        });
        let apply = tokio::spawn(apply_change_events(rx, cache));

        SubscriptionGuard { feed, apply }
    }
}

/// Subscribe to the Redis change channel and forward each delivered event.
async fn run_change_feed(client: Client, tx: mpsc::Sender<ChangeEvent>) {
    let mut pubsub = match client.get_async_pubsub().await {
        Ok(pubsub) => pubsub,
        Err(e) => {
            error!("Failed to get Redis PubSub connection: {}", e);
            return;
        }
    };

    if let Err(e) = pubsub.subscribe(CHANGE_CHANNEL).await {
        error!("Failed to subscribe to change feed: {}", e);
        return;
    }
    info!("Subscribed to change feed on channel: {}", CHANGE_CHANNEL);

    let mut stream = pubsub.on_message();
    while let Some(msg) = stream.next().await {
        let payload: String = match msg.get_payload() {
            Ok(payload) => payload,
            Err(e) => {
                error!("Failed to get change event payload: {}", e);
                continue;
            }
        };

        // A malformed payload still counts as a change event.
        let event = serde_json::from_str::<ChangeEvent>(&payload).unwrap_or_default();
        if tx.send(event).await.is_err() {
            break;
        }
    }
}

/// Invalidate the notification cache for every received change event. The
/// event payload is never merged into the cache; a full refetch is always
/// forced instead.
async fn apply_change_events(mut events: mpsc::Receiver<ChangeEvent>, cache: Arc<QueryCache>) {
    while let Some(event) = events.recv().await {
        debug!("Change event received: op={:?} id={:?}", event.op, event.id);
        cache.invalidate(QueryKey::Notifications).await;
    }
}
