//! Admin task definition CRUD.

use crate::ApiClient;
use serde_json::Value;
use social_core::models::{items_from, PageQuery, TaskDef, TaskDefInput};
use social_core::Result;

impl ApiClient {
    /// Lists task definitions, optionally filtered by status.
    pub async fn admin_list_task_defs(
        &self,
        page: &PageQuery,
        status: Option<i32>,
    ) -> Result<Vec<TaskDef>> {
        let mut query = self.page_pairs(page);
        if let Some(status) = status {
            query.push(("status", status.to_string()));
        }
        let value = self.get_query("/admin/task-defs", &query).await?;
        items_from(value)
    }

    /// Fetches one task definition for editing.
    pub async fn admin_get_task_def(&self, id: u64) -> Result<TaskDef> {
        self.get(&format!("/admin/task-defs/{}", id)).await
    }

    /// Creates a task definition.
    pub async fn admin_create_task_def(&self, input: &TaskDefInput) -> Result<TaskDef> {
        self.post("/admin/task-defs", input).await
    }

    /// Updates a task definition.
    pub async fn admin_update_task_def(&self, id: u64, input: &TaskDefInput) -> Result<()> {
        let _: Value = self.put(&format!("/admin/task-defs/{}", id), input).await?;
        Ok(())
    }

    /// Deletes a task definition.
    pub async fn admin_delete_task_def(&self, id: u64) -> Result<()> {
        let _: Value = self.delete(&format!("/admin/task-defs/{}", id)).await?;
        Ok(())
    }
}
