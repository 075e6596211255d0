use axum::http::Method;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use utoipa::ToSchema;

/// Body fields recognized by the upload endpoint. Anything else in the
/// payload is ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UploadBody {
    /// File content. Required; an empty string counts as missing.
    pub file: Option<String>,
    #[serde(default)]
    pub upload_to_ipfs: bool,
    #[serde(default)]
    pub metadata: HashMap<String, String>,
}

/// An upload request, decoupled from any particular transport binding.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    pub method: Method,
    pub body: UploadBody,
}

/// What the upload delegate reports back. `success` is the delegate's own
/// verdict and drives the response status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UploadResult {
    pub success: bool,
    pub url: Option<String>,
    pub error: Option<String>,
}

/// Typed outcome of handling an upload request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    Ok(UploadResult),
    ClientError(String),
    ServerError(String),
    MethodNotAllowed,
}

/// Error body for rejected uploads, shaped `{success: false, error}`.
#[derive(Debug, Serialize, ToSchema)]
pub struct UploadFailure {
    pub success: bool,
    pub error: String,
}

impl UploadFailure {
    pub fn new(error: String) -> Self {
        Self {
            success: false,
            error,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("No file provided")]
    MissingFile,

    #[error("{0}")]
    Unexpected(String),
}
