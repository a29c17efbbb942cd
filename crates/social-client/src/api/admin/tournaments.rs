//! Admin tournament CRUD and result publication.

use crate::ApiClient;
use serde_json::Value;
use social_core::models::{items_from, PageQuery, Tournament, TournamentInput};
use social_core::Result;

impl ApiClient {
    /// Lists tournaments across all statuses.
    pub async fn admin_list_tournaments(&self, page: &PageQuery) -> Result<Vec<Tournament>> {
        let value = self
            .get_query("/admin/tournaments", &self.page_pairs(page))
            .await?;
        items_from(value)
    }

    /// Fetches one tournament for editing.
    pub async fn admin_get_tournament(&self, id: u64) -> Result<Tournament> {
        self.get(&format!("/admin/tournaments/{}", id)).await
    }

    /// Creates a tournament.
    pub async fn admin_create_tournament(&self, input: &TournamentInput) -> Result<Tournament> {
        self.post("/admin/tournaments", input).await
    }

    /// Updates a tournament.
    pub async fn admin_update_tournament(&self, id: u64, input: &TournamentInput) -> Result<()> {
        let _: Value = self
            .put(&format!("/admin/tournaments/{}", id), input)
            .await?;
        Ok(())
    }

    /// Deletes a tournament.
    pub async fn admin_delete_tournament(&self, id: u64) -> Result<()> {
        let _: Value = self.delete(&format!("/admin/tournaments/{}", id)).await?;
        Ok(())
    }

    /// Publishes the final results of a tournament.
    pub async fn admin_publish_results(&self, id: u64) -> Result<()> {
        let _: Value = self
            .post_empty(&format!("/admin/tournaments/{}/results/publish", id))
            .await?;
        Ok(())
    }

    /// Grants the awards of a finished tournament.
    pub async fn admin_grant_awards(&self, id: u64) -> Result<()> {
        let _: Value = self
            .post_empty(&format!("/admin/tournaments/{}/awards/grant", id))
            .await?;
        Ok(())
    }
}
