//! Redemption order endpoints (end-user surface).

use crate::ApiClient;
use serde_json::Value;
use social_core::models::{items_from, CreateOrderItem, CreateOrderRequest, PageQuery, RedeemOrder};
use social_core::{Result, SocialError};

impl ApiClient {
    /// Lists the user's redemption orders.
    pub async fn redeem_orders(&self, page: &PageQuery) -> Result<Vec<RedeemOrder>> {
        let value = self
            .get_query("/api/redeem/orders", &self.page_pairs(page))
            .await?;
        items_from(value)
    }

    /// Fetches one redemption order.
    pub async fn redeem_order(&self, id: u64) -> Result<RedeemOrder> {
        self.get(&format!("/api/redeem/orders/{}", id)).await
    }

    /// Places a redemption order for the given items.
    pub async fn create_redeem_order(&self, items: Vec<CreateOrderItem>) -> Result<RedeemOrder> {
        if items.is_empty() {
            return Err(SocialError::invalid_input("订单不能为空"));
        }
        self.post("/api/redeem/orders", &CreateOrderRequest::new(items))
            .await
    }

    /// Cancels an unredeemed order.
    pub async fn cancel_redeem_order(&self, id: u64) -> Result<()> {
        let _: Value = self
            .put_empty(&format!("/api/redeem/orders/{}/cancel", id))
            .await?;
        Ok(())
    }
}
