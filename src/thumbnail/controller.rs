use axum::{
    extract::Query,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde::Deserialize;
use tracing::debug;

use crate::thumbnail::model::{Thumbnail, ThumbnailSize};
use crate::thumbnail::selector::select_thumbnail;

#[derive(Debug, Deserialize)]
pub struct ThumbnailParams {
    #[serde(rename = "type")]
    pub content_type: String,
    pub thumbnail_url: Option<String>,
    pub size: Option<ThumbnailSize>,
}

/// Select a thumbnail representation
///
/// Maps a MIME type and optional thumbnail URL to an image preview, a video
/// preview, or a category glyph.
#[utoipa::path(
    get,
    path = "/api/thumbnails",
    params(
        ("type" = String, Query, description = "MIME type of the file"),
        ("thumbnail_url" = Option<String>, Query, description = "URL of a pixel-accurate thumbnail, if one exists"),
        ("size" = Option<String>, Query, description = "Size tier: small, medium or large", example = "medium")
    ),
    responses(
        (status = 200, description = "Thumbnail selected", body = Thumbnail)
    ),
    tag = "thumbnails"
)]
pub async fn get_thumbnail(Query(params): Query<ThumbnailParams>) -> impl IntoResponse {
    let size = params.size.unwrap_or(ThumbnailSize::Medium);
    debug!("Selecting thumbnail for type: {}", params.content_type);

    let thumbnail = select_thumbnail(&params.content_type, params.thumbnail_url.as_deref(), size);
    (StatusCode::OK, Json(thumbnail))
}
