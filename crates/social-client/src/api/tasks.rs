//! Task endpoints: listing, daily check-in, reward claiming.

use crate::ApiClient;
use serde_json::Value;
use social_core::models::{items_from, TaskDef};
use social_core::{Result, SocialError};

impl ApiClient {
    /// Lists the active task definitions.
    pub async fn tasks(&self) -> Result<Vec<TaskDef>> {
        let value = self.get("/api/tasks").await?;
        items_from(value)
    }

    /// Performs the daily check-in.
    pub async fn checkin(&self) -> Result<()> {
        let _: Value = self.post_empty("/api/tasks/checkin").await?;
        Ok(())
    }

    /// Claims the reward of a completed task.
    pub async fn claim_task(&self, task_code: &str) -> Result<()> {
        let task_code = task_code.trim();
        if task_code.is_empty() {
            return Err(SocialError::invalid_input("taskCode 不能为空"));
        }
        let _: Value = self
            .post_empty(&format!("/api/tasks/{}/claim", task_code))
            .await?;
        Ok(())
    }
}
