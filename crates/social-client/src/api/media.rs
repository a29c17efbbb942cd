//! Media upload (end-user surface).

use crate::ApiClient;
use social_core::models::UploadResult;
use social_core::Result;
use std::path::Path;

impl ApiClient {
    /// Uploads a local file to the media store.
    pub async fn upload_media(&self, file: &Path) -> Result<UploadResult> {
        self.upload("/api/media/upload", file).await
    }
}
