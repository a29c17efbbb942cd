//! Shop (goods) endpoints.

use crate::ApiClient;
use social_core::models::{items_from, Goods, PageQuery};
use social_core::Result;

impl ApiClient {
    /// Lists redeemable goods.
    pub async fn list_goods(&self, page: &PageQuery) -> Result<Vec<Goods>> {
        let value = self.get_query("/api/goods", &self.page_pairs(page)).await?;
        items_from(value)
    }

    /// Fetches one shop item.
    pub async fn get_goods(&self, id: u64) -> Result<Goods> {
        self.get(&format!("/api/goods/{}", id)).await
    }
}
