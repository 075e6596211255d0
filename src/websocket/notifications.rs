use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::IntoResponse,
};
use futures::{stream::SplitSink, SinkExt, StreamExt};
use tracing::{debug, error, info};

use crate::notification::service::NotificationService;

/// Handle incoming WebSocket connection
///
/// Each connection is an active observer of the notification cache: it gets
/// the current list on connect and a fresh snapshot after every
/// invalidation.
pub async fn ws_handler(
    ws: WebSocketUpgrade,
    State(service): State<NotificationService>,
) -> impl IntoResponse {
    info!("Client connected to notifications WebSocket");
    ws.on_upgrade(move |socket| handle_connection(socket, service))
}

async fn handle_connection(socket: WebSocket, service: NotificationService) {
    let (mut sender, mut receiver) = socket.split();
    let mut invalidations = service.cache().subscribe();

    // Initial snapshot so the client does not wait for the first change.
    if let Err(e) = push_snapshot(&mut sender, &service).await {
        error!("Failed to send initial notification snapshot: {}", e);
        return;
    }

    loop {
        tokio::select! {
            changed = invalidations.changed() => {
                if changed.is_err() {
                    break;
                }
                debug!("Cache invalidated, pushing fresh snapshot");
                if let Err(e) = push_snapshot(&mut sender, &service).await {
                    error!("Failed to push notification snapshot: {}", e);
                    break;
                }
            }
            msg = receiver.next() => {
                match msg {
                    Some(Ok(Message::Close(_))) | None => {
                        info!("WebSocket closed by client");
                        break;
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        error!("WebSocket error: {}", e);
                        break;
                    }
                }
            }
        }
    }

    info!("Notifications WebSocket connection closed");
}

/// Refetch the notification list and send it as one JSON text frame.
async fn push_snapshot(
    sender: &mut SplitSink<WebSocket, Message>,
    service: &NotificationService,
) -> Result<(), String> {
    let notifications = service
        .fetch_notifications()
        .await
        .map_err(|e| e.to_string())?;
    let payload = serde_json::to_string(&*notifications).map_err(|e| e.to_string())?;
    sender
        .send(Message::Text(payload))
        .await
        .map_err(|e| e.to_string())
}
