use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A notification row as owned by the remote store. Mirrored locally as an
/// immutable snapshot; the only write this layer performs is the read flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Notification {
    #[schema(value_type = String, format = "uuid")]
    pub id: Uuid,
    #[schema(value_type = String, format = "uuid")]
    pub user_id: Uuid,
    /// Free-form category string.
    #[serde(rename = "type")]
    pub notification_type: String,
    pub title: String,
    pub message: String,
    pub read: bool,
    /// Sole sort key, descending (newest first).
    #[schema(value_type = String, format = "date-time")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, thiserror::Error)]
pub enum NotificationError {
    #[error("Failed to fetch notifications: {0}")]
    Fetch(#[source] sqlx::Error),

    #[error("Failed to update notification: {0}")]
    Update(#[source] sqlx::Error),
}
