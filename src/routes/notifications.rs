use axum::{
    routing::{get, post},
    Router,
};

use crate::notification::controller;
use crate::notification::service::NotificationService;
use crate::websocket::notifications::ws_handler;

/// Create a router for notifications
pub fn routes(service: NotificationService) -> Router {
    Router::new()
        .route("/api/notifications", get(controller::list_notifications))
        .route("/api/notifications/:id/read", post(controller::mark_read))
        .route("/api/notifications/ws", get(ws_handler))
        .with_state(service)
}
