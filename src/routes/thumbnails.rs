use axum::{routing::get, Router};

use crate::thumbnail::controller;

/// Create a router for thumbnail selection
pub fn routes() -> Router {
    Router::new().route("/api/thumbnails", get(controller::get_thumbnail))
}
