use std::future::Future;
use std::sync::Arc;
use tokio::sync::{watch, Mutex};
use tracing::{debug, info};

use crate::notification::model::Notification;

/// Keys for cached query results. One variant per known query kind, so a
/// typo cannot address a cache entry that does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKey {
    Notifications,
}

impl QueryKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryKey::Notifications => "notifications",
        }
    }
}

/// In-process cache for query results, one slot per `QueryKey`.
///
/// Invalidations bump an epoch published on a watch channel so active
/// observers know to refetch.
#[derive(Debug)]
pub struct QueryCache {
    notifications: Mutex<Option<Arc<Vec<Notification>>>>,
    epoch: watch::Sender<u64>,
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryCache {
    pub fn new() -> Self {
        let (epoch, _) = watch::channel(0);
        Self {
            notifications: Mutex::new(None),
            epoch,
        }
    }

    /// Return the cached value for `key`, running `fetch` to fill the slot
    /// on a miss.
    ///
    /// The slot's mutex is held across the fill, so at most one fetch per
    /// key is in flight; concurrent callers wait on the lock and then read
    /// the fresh entry. A failed fetch leaves the slot empty and the error
    /// propagates to the caller.
    pub async fn get_or_fetch<F, Fut, E>(
        &self,
        key: QueryKey,
        fetch: F,
    ) -> Result<Arc<Vec<Notification>>, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<Notification>, E>>,
    {
        let QueryKey::Notifications = key;

        let mut slot = self.notifications.lock().await;
        if let Some(cached) = slot.as_ref() {
            debug!("Cache hit for key: {}", key.as_str());
            return Ok(Arc::clone(cached));
        }

        debug!("Cache miss for key: {}", key.as_str());
        let fresh = Arc::new(fetch().await?);
        *slot = Some(Arc::clone(&fresh));
        Ok(fresh)
    }

    /// Drop the entry for `key` and bump the invalidation epoch. The next
    /// read refetches from the source of truth.
    pub async fn invalidate(&self, key: QueryKey) {
        let QueryKey::Notifications = key;

        let mut slot = self.notifications.lock().await;
        *slot = None;
        drop(slot);

        self.epoch.send_modify(|epoch| *epoch += 1);
        info!("Invalidated cache for key: {}", key.as_str());
    }

    /// Watch the invalidation epoch. Observers refetch whenever it changes.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.epoch.subscribe()
    }
}
