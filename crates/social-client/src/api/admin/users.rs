//! Admin user management.

use crate::ApiClient;
use serde_json::Value;
use social_core::models::{items_from, AdminUserUpdate, PageQuery, UserProfile};
use social_core::Result;

impl ApiClient {
    /// Lists registered users.
    pub async fn admin_list_users(&self, page: &PageQuery) -> Result<Vec<UserProfile>> {
        let value = self.get_query("/admin/users", &self.page_pairs(page)).await?;
        items_from(value)
    }

    /// Fetches one user.
    pub async fn admin_get_user(&self, id: u64) -> Result<UserProfile> {
        self.get(&format!("/admin/users/{}", id)).await
    }

    /// Updates a user's profile or status.
    pub async fn admin_update_user(&self, id: u64, update: &AdminUserUpdate) -> Result<()> {
        let _: Value = self.put(&format!("/admin/users/{}", id), update).await?;
        Ok(())
    }

    /// Records a drink consumption for a user.
    pub async fn admin_use_drinks(&self, id: u64) -> Result<()> {
        let _: Value = self
            .put_empty(&format!("/admin/users/{}/drinks/use", id))
            .await?;
        Ok(())
    }
}
