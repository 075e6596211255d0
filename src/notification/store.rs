use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::notification::model::{Notification, NotificationError};

/// Remote source of truth for notification rows.
///
/// Row visibility is the store's access policy; nothing in this layer
/// filters by user.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationStore: Send + Sync {
    /// List every visible notification, newest first. Ordering is issued to
    /// the store and the response order is trusted.
    async fn list_notifications(&self) -> Result<Vec<Notification>, NotificationError>;

    /// Flag a single notification as read.
    async fn mark_read(&self, id: Uuid) -> Result<(), NotificationError>;
}

#[derive(Debug, Clone)]
pub struct PgNotificationStore {
    pool: PgPool,
}

impl PgNotificationStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NotificationStore for PgNotificationStore {
    async fn list_notifications(&self) -> Result<Vec<Notification>, NotificationError> {
        sqlx::query_as::<_, Notification>(
            "SELECT id, user_id, notification_type, title, message, read, created_at
             FROM notifications
             ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(NotificationError::Fetch)
    }

    async fn mark_read(&self, id: Uuid) -> Result<(), NotificationError> {
        // A zero-row update (unknown id) is a successful no-op, matching the
        // store's single-row update semantics.
        sqlx::query("UPDATE notifications SET read = true WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(NotificationError::Update)
    }
}
