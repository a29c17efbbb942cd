//! Admin points adjustment, audit logs, media upload.

use crate::ApiClient;
use serde_json::Value;
use social_core::models::{items_from, PageQuery, PointsAdjustRequest, UploadResult};
use social_core::Result;
use std::path::Path;

impl ApiClient {
    /// Adjusts a user's points balance by a signed amount.
    pub async fn admin_adjust_points(&self, request: &PointsAdjustRequest) -> Result<()> {
        let _: Value = self.post("/admin/points/adjust", request).await?;
        Ok(())
    }

    /// Lists audit log rows. The row shape is backend-owned.
    pub async fn admin_audit_logs(&self, page: &PageQuery) -> Result<Vec<Value>> {
        let value = self
            .get_query("/admin/audit/logs", &self.page_pairs(page))
            .await?;
        items_from(value)
    }

    /// Uploads a local file to the media store (admin surface).
    pub async fn admin_upload_media(&self, file: &Path) -> Result<UploadResult> {
        self.upload("/admin/media/upload", file).await
    }
}
