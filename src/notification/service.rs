use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::cache::query::{QueryCache, QueryKey};
use crate::notification::model::{Notification, NotificationError};
use crate::notification::store::NotificationStore;

/// Read/mark-read access to notifications, cached under
/// `QueryKey::Notifications`.
///
/// Consistency with the store is reached only through invalidation and
/// refetch; nothing here mutates the cached snapshot in place.
#[derive(Clone)]
pub struct NotificationService {
    store: Arc<dyn NotificationStore>,
    cache: Arc<QueryCache>,
}

impl NotificationService {
    pub fn new(store: Arc<dyn NotificationStore>, cache: Arc<QueryCache>) -> Self {
        Self { store, cache }
    }

    /// The current notification list, newest first. Served from cache while
    /// fresh; a cold or invalidated cache triggers a store read.
    pub async fn fetch_notifications(&self) -> Result<Arc<Vec<Notification>>, NotificationError> {
        self.cache
            .get_or_fetch(QueryKey::Notifications, || async {
                info!("Fetching notifications from store");
                self.store.list_notifications().await
            })
            .await
    }

    /// Mark one notification read, then invalidate the cached list so the
    /// next read observes the change.
    pub async fn mark_read(&self, id: Uuid) -> Result<(), NotificationError> {
        // A failed write leaves the cache alone; the cached snapshot is
        // still valid in that case.
        self.store.mark_read(id).await?;
        info!("Marked notification {} as read", id);
        self.cache.invalidate(QueryKey::Notifications).await;
        Ok(())
    }

    pub fn cache(&self) -> &Arc<QueryCache> {
        &self.cache
    }
}
