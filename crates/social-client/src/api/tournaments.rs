//! Tournament endpoints (end-user surface).

use crate::ApiClient;
use serde_json::Value;
use social_core::models::{
    items_from, JoinedTournament, PageQuery, Tournament, TournamentResults,
};
use social_core::Result;

impl ApiClient {
    /// Lists published tournaments.
    pub async fn list_tournaments(&self, page: &PageQuery) -> Result<Vec<Tournament>> {
        let value = self
            .get_query("/api/tournaments", &self.page_pairs(page))
            .await?;
        items_from(value)
    }

    /// Lists tournaments the user joined.
    pub async fn joined_tournaments(&self, page: &PageQuery) -> Result<Vec<JoinedTournament>> {
        let value = self
            .get_query("/api/tournaments/joined", &self.page_pairs(page))
            .await?;
        items_from(value)
    }

    /// Fetches one tournament.
    pub async fn tournament(&self, id: u64) -> Result<Tournament> {
        self.get(&format!("/api/tournaments/{}", id)).await
    }

    /// Enrolls the user in a tournament.
    pub async fn join_tournament(&self, id: u64) -> Result<()> {
        let _: Value = self
            .post_empty(&format!("/api/tournaments/{}/join", id))
            .await?;
        Ok(())
    }

    /// Withdraws the user's enrollment.
    pub async fn cancel_tournament_join(&self, id: u64) -> Result<()> {
        let _: Value = self
            .put_empty(&format!("/api/tournaments/{}/cancel", id))
            .await?;
        Ok(())
    }

    /// Fetches a tournament's leaderboard plus the caller's own row.
    pub async fn tournament_results(
        &self,
        id: u64,
        page: &PageQuery,
    ) -> Result<TournamentResults> {
        self.get_query(
            &format!("/api/tournaments/{}/results", id),
            &self.page_pairs(page),
        )
        .await
    }
}
