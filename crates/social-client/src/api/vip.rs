//! VIP subscription status endpoint.

use crate::ApiClient;
use social_core::models::VipStatus;
use social_core::Result;

impl ApiClient {
    /// Fetches the authenticated user's VIP status.
    pub async fn vip_status(&self) -> Result<VipStatus> {
        self.get("/api/vip/status").await
    }
}
