use axum::{routing::any, Router};
use std::sync::Arc;

use crate::upload::controller;
use crate::upload::service::Uploader;

/// Create a router for uploads
pub fn routes(uploader: Arc<dyn Uploader>) -> Router {
    // Registered for any method: the handler answers wrong verbs with the
    // 405 body instead of a bare router rejection.
    Router::new()
        .route("/api/upload", any(controller::upload))
        .with_state(uploader)
}
