use async_trait::async_trait;
use axum::http::Method;
use std::collections::HashMap;
use tracing::error;

use crate::upload::model::{UploadError, UploadOutcome, UploadRequest, UploadResult};

/// Fallback message when a failing delegate reports nothing useful.
const GENERIC_UPLOAD_ERROR: &str = "Upload failed";

/// The external upload function this handler delegates to.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Uploader: Send + Sync {
    async fn upload(
        &self,
        file: &str,
        upload_to_ipfs: bool,
        metadata: &HashMap<String, String>,
    ) -> Result<UploadResult, UploadError>;
}

/// Handle an upload request.
///
/// Only POST is allowed, `file` must be present, and everything past that
/// is the delegate's business. No retry, no timeout, no further validation.
pub async fn handle_upload(request: UploadRequest, uploader: &dyn Uploader) -> UploadOutcome {
    if request.method != Method::POST {
        return UploadOutcome::MethodNotAllowed;
    }

    let file = match request.body.file {
        Some(file) if !file.is_empty() => file,
        _ => return UploadOutcome::ClientError(UploadError::MissingFile.to_string()),
    };

    match uploader
        .upload(&file, request.body.upload_to_ipfs, &request.body.metadata)
        .await
    {
        Ok(result) if result.success => UploadOutcome::Ok(result),
        Ok(result) => UploadOutcome::ClientError(
            result
                .error
                .unwrap_or_else(|| GENERIC_UPLOAD_ERROR.to_string()),
        ),
        Err(e) => {
            error!("Upload delegate failed: {}", e);
            let message = e.to_string();
            UploadOutcome::ServerError(if message.is_empty() {
                GENERIC_UPLOAD_ERROR.to_string()
            } else {
                message
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::upload::model::UploadBody;

    fn request(method: Method, file: Option<&str>) -> UploadRequest {
        UploadRequest {
            method,
            body: UploadBody {
                file: file.map(str::to_string),
                upload_to_ipfs: false,
                metadata: HashMap::new(),
            },
        }
    }

    #[tokio::test]
    async fn wrong_method_is_rejected_without_invoking_the_delegate() {
        let mut uploader = MockUploader::new();
        uploader.expect_upload().times(0);

        for method in [Method::GET, Method::PUT, Method::DELETE] {
            let outcome = handle_upload(request(method, Some("content")), &uploader).await;
            assert_eq!(outcome, UploadOutcome::MethodNotAllowed);
        }
    }

    #[tokio::test]
    async fn missing_file_is_rejected_without_invoking_the_delegate() {
        let mut uploader = MockUploader::new();
        uploader.expect_upload().times(0);

        let outcome = handle_upload(request(Method::POST, None), &uploader).await;
        assert_eq!(
            outcome,
            UploadOutcome::ClientError("No file provided".to_string())
        );

        let outcome = handle_upload(request(Method::POST, Some("")), &uploader).await;
        assert_eq!(
            outcome,
            UploadOutcome::ClientError("No file provided".to_string())
        );
    }

    #[tokio::test]
    async fn delegate_success_flag_drives_the_outcome() {
        let mut uploader = MockUploader::new();
        uploader.expect_upload().times(1).returning(|_, _, _| {
            Ok(UploadResult {
                success: true,
                url: Some("/uploads/abc".to_string()),
                error: None,
            })
        });

        let outcome = handle_upload(request(Method::POST, Some("content")), &uploader).await;
        assert_eq!(
            outcome,
            UploadOutcome::Ok(UploadResult {
                success: true,
                url: Some("/uploads/abc".to_string()),
                error: None,
            })
        );
    }

    #[tokio::test]
    async fn delegate_rejection_surfaces_its_own_error() {
        let mut uploader = MockUploader::new();
        uploader.expect_upload().times(1).returning(|_, _, _| {
            Ok(UploadResult {
                success: false,
                url: None,
                error: Some("unsupported file".to_string()),
            })
        });

        let outcome = handle_upload(request(Method::POST, Some("content")), &uploader).await;
        assert_eq!(
            outcome,
            UploadOutcome::ClientError("unsupported file".to_string())
        );
    }

    #[tokio::test]
    async fn delegate_rejection_without_a_message_gets_the_generic_one() {
        let mut uploader = MockUploader::new();
        uploader.expect_upload().times(1).returning(|_, _, _| {
            Ok(UploadResult {
                success: false,
                url: None,
                error: None,
            })
        });

        let outcome = handle_upload(request(Method::POST, Some("content")), &uploader).await;
        assert_eq!(outcome, UploadOutcome::ClientError("Upload failed".to_string()));
    }

    #[tokio::test]
    async fn delegate_errors_surface_their_message_as_a_server_error() {
        let mut uploader = MockUploader::new();
        uploader
            .expect_upload()
            .times(1)
            .returning(|_, _, _| Err(UploadError::Unexpected("disk full".to_string())));

        let outcome = handle_upload(request(Method::POST, Some("content")), &uploader).await;
        assert_eq!(outcome, UploadOutcome::ServerError("disk full".to_string()));
    }

    #[tokio::test]
    async fn delegate_errors_without_a_message_get_the_generic_one() {
        let mut uploader = MockUploader::new();
        uploader
            .expect_upload()
            .times(1)
            .returning(|_, _, _| Err(UploadError::Unexpected(String::new())));

        let outcome = handle_upload(request(Method::POST, Some("content")), &uploader).await;
        assert_eq!(outcome, UploadOutcome::ServerError("Upload failed".to_string()));
    }

    #[test]
    fn body_defaults_apply_to_omitted_fields() {
        let body: UploadBody = serde_json::from_str(r#"{"file":"content"}"#).unwrap();
        assert_eq!(body.file.as_deref(), Some("content"));
        assert!(!body.upload_to_ipfs);
        assert!(body.metadata.is_empty());
    }
}
