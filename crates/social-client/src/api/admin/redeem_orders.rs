//! Admin redemption order management.

use crate::ApiClient;
use serde_json::Value;
use social_core::models::{items_from, CreateOrderRequest, PageQuery, RedeemOrder};
use social_core::{Result, SocialError};

impl ApiClient {
    /// Lists redemption orders across all users.
    pub async fn admin_list_redeem_orders(&self, page: &PageQuery) -> Result<Vec<RedeemOrder>> {
        let value = self
            .get_query("/admin/redeem/orders", &self.page_pairs(page))
            .await?;
        items_from(value)
    }

    /// Fetches one redemption order.
    pub async fn admin_get_redeem_order(&self, id: u64) -> Result<RedeemOrder> {
        self.get(&format!("/admin/redeem/orders/{}", id)).await
    }

    /// Creates an order on a user's behalf (counter redemption).
    pub async fn admin_create_redeem_order(
        &self,
        request: &CreateOrderRequest,
    ) -> Result<RedeemOrder> {
        if request.items.is_empty() {
            return Err(SocialError::invalid_input("订单不能为空"));
        }
        self.post("/admin/redeem/orders", request).await
    }

    /// Marks an order as used (picked up).
    pub async fn admin_use_redeem_order(&self, id: u64) -> Result<()> {
        let _: Value = self
            .put_empty(&format!("/admin/redeem/orders/{}/use", id))
            .await?;
        Ok(())
    }

    /// Cancels an order and refunds its points.
    pub async fn admin_cancel_redeem_order(&self, id: u64) -> Result<()> {
        let _: Value = self
            .put_empty(&format!("/admin/redeem/orders/{}/cancel", id))
            .await?;
        Ok(())
    }
}
