//! Admin goods CRUD.

use crate::ApiClient;
use serde_json::Value;
use social_core::models::{items_from, Goods, GoodsInput, PageQuery};
use social_core::Result;

impl ApiClient {
    /// Lists goods, optionally filtered by status.
    pub async fn admin_list_goods(
        &self,
        page: &PageQuery,
        status: Option<i32>,
    ) -> Result<Vec<Goods>> {
        let mut query = self.page_pairs(page);
        if let Some(status) = status {
            query.push(("status", status.to_string()));
        }
        let value = self.get_query("/admin/goods", &query).await?;
        items_from(value)
    }

    /// Fetches one item for editing.
    pub async fn admin_get_goods(&self, id: u64) -> Result<Goods> {
        self.get(&format!("/admin/goods/{}", id)).await
    }

    /// Creates a shop item.
    pub async fn admin_create_goods(&self, input: &GoodsInput) -> Result<Goods> {
        self.post("/admin/goods", input).await
    }

    /// Updates a shop item.
    pub async fn admin_update_goods(&self, id: u64, input: &GoodsInput) -> Result<()> {
        let _: Value = self.put(&format!("/admin/goods/{}", id), input).await?;
        Ok(())
    }

    /// Deletes a shop item.
    pub async fn admin_delete_goods(&self, id: u64) -> Result<()> {
        let _: Value = self.delete(&format!("/admin/goods/{}", id)).await?;
        Ok(())
    }
}
