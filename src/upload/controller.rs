use axum::{
    extract::State,
    http::{Method, StatusCode},
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;
use tracing::info;

use crate::upload::model::{UploadBody, UploadFailure, UploadOutcome, UploadRequest, UploadResult};
use crate::upload::service::{handle_upload, Uploader};

/// Upload a file
///
/// Accepts a JSON body with a required `file` field, an optional
/// `upload_to_ipfs` flag and an optional `metadata` map, and delegates to
/// the configured uploader.
#[utoipa::path(
    post,
    path = "/api/upload",
    request_body = UploadBody,
    responses(
        (status = 200, description = "Upload succeeded", body = UploadResult),
        (status = 400, description = "Missing file or upload rejected", body = UploadFailure),
        (status = 405, description = "Method not allowed", body = UploadFailure),
        (status = 500, description = "Unexpected failure during upload", body = UploadFailure)
    ),
    tag = "upload"
)]
pub async fn upload(
    method: Method,
    State(uploader): State<Arc<dyn Uploader>>,
    body: Option<Json<UploadBody>>,
) -> Response {
    // The route accepts any method so the handler's own check answers 405
    // instead of a bare router rejection.
    let body = body.map(|Json(body)| body).unwrap_or_default();
    let request = UploadRequest { method, body };

    match handle_upload(request, uploader.as_ref()).await {
        UploadOutcome::Ok(result) => {
            info!("Upload succeeded: {:?}", result.url);
            (StatusCode::OK, Json(result)).into_response()
        }
        UploadOutcome::ClientError(error) => {
            (StatusCode::BAD_REQUEST, Json(UploadFailure::new(error))).into_response()
        }
        UploadOutcome::ServerError(error) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(UploadFailure::new(error)),
        )
            .into_response(),
        UploadOutcome::MethodNotAllowed => (
            StatusCode::METHOD_NOT_ALLOWED,
            Json(UploadFailure::new("Method not allowed".to_string())),
        )
            .into_response(),
    }
}
