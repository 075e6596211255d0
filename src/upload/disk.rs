use async_trait::async_trait;
use std::collections::HashMap;
use std::path::PathBuf;
use tokio::fs;
use tracing::{info, warn};
use uuid::Uuid;

use crate::upload::model::{UploadError, UploadResult};
use crate::upload::service::Uploader;

/// Filesystem-backed upload delegate. Payloads land in a flat directory
/// keyed by a fresh UUID, with an optional metadata sidecar next to them.
#[derive(Debug, Clone)]
pub struct DiskUploader {
    base_path: PathBuf,
}

impl DiskUploader {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }
}

#[async_trait]
impl Uploader for DiskUploader {
    async fn upload(
        &self,
        file: &str,
        upload_to_ipfs: bool,
        metadata: &HashMap<String, String>,
    ) -> Result<UploadResult, UploadError> {
        if upload_to_ipfs {
            warn!("IPFS uploads are not configured, storing on disk instead");
        }

        let id = Uuid::new_v4();
        let path = self.base_path.join(id.to_string());

        fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| UploadError::Unexpected(e.to_string()))?;
        fs::write(&path, file.as_bytes())
            .await
            .map_err(|e| UploadError::Unexpected(e.to_string()))?;

        if !metadata.is_empty() {
            let sidecar = self.base_path.join(format!("{}.json", id));
            let json = serde_json::to_string(metadata)
                .map_err(|e| UploadError::Unexpected(e.to_string()))?;
            fs::write(&sidecar, json)
                .await
                .map_err(|e| UploadError::Unexpected(e.to_string()))?;
        }

        info!("Stored upload {} ({} bytes)", id, file.len());
        Ok(UploadResult {
            success: true,
            url: Some(format!("/uploads/{}", id)),
            error: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir() -> PathBuf {
        std::env::temp_dir().join(format!("media-notify-uploads-{}", Uuid::new_v4()))
    }

    #[tokio::test]
    async fn stores_the_payload_and_reports_success() {
        let dir = scratch_dir();
        let uploader = DiskUploader::new(&dir);

        let result = uploader
            .upload("file content", false, &HashMap::new())
            .await
            .unwrap();

        assert!(result.success);
        let url = result.url.unwrap();
        let id = url.rsplit('/').next().unwrap();
        let stored = fs::read_to_string(dir.join(id)).await.unwrap();
        assert_eq!(stored, "file content");

        let _ = fs::remove_dir_all(&dir).await;
    }

    #[tokio::test]
    async fn writes_a_metadata_sidecar_when_present() {
        let dir = scratch_dir();
        let uploader = DiskUploader::new(&dir);

        let mut metadata = HashMap::new();
        metadata.insert("name".to_string(), "photo.png".to_string());

        let result = uploader.upload("bytes", false, &metadata).await.unwrap();
        let url = result.url.unwrap();
        let id = url.rsplit('/').next().unwrap();

        let sidecar = fs::read_to_string(dir.join(format!("{}.json", id)))
            .await
            .unwrap();
        let parsed: HashMap<String, String> = serde_json::from_str(&sidecar).unwrap();
        assert_eq!(parsed.get("name").map(String::as_str), Some("photo.png"));

        let _ = fs::remove_dir_all(&dir).await;
    }
}
