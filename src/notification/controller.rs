use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use tracing::{error, info};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::notification::model::Notification;
use crate::notification::service::NotificationService;

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

/// List notifications
///
/// Returns the notification list, newest first. Served from the query cache
/// while fresh.
#[utoipa::path(
    get,
    path = "/api/notifications",
    responses(
        (status = 200, description = "Notifications retrieved successfully", body = [Notification]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "notifications"
)]
pub async fn list_notifications(State(service): State<NotificationService>) -> Response {
    match service.fetch_notifications().await {
        Ok(notifications) => {
            info!("Retrieved {} notifications", notifications.len());
            (StatusCode::OK, Json((*notifications).clone())).into_response()
        }
        Err(e) => {
            error!("Error fetching notifications: {:?}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to fetch notifications".to_string(),
                    code: "FETCH_FAILED".to_string(),
                }),
            )
                .into_response()
        }
    }
}

#[derive(Debug, serde::Deserialize)]
pub struct NotificationIdPathParam {
    id: Uuid,
}

/// Mark a notification as read
///
/// Flags the notification and invalidates the cached list; consumers see
/// the change after the next refetch.
#[utoipa::path(
    post,
    path = "/api/notifications/{id}/read",
    params(
        ("id" = String, Path, description = "Notification ID")
    ),
    responses(
        (status = 204, description = "Notification marked as read"),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "notifications"
)]
pub async fn mark_read(
    Path(params): Path<NotificationIdPathParam>,
    State(service): State<NotificationService>,
) -> Response {
    match service.mark_read(params.id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => {
            error!("Error marking notification {} as read: {:?}", params.id, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to update notification".to_string(),
                    code: "UPDATE_FAILED".to_string(),
                }),
            )
                .into_response()
        }
    }
}
