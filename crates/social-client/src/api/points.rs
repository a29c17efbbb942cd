//! Points balance and ledger endpoints.

use crate::ApiClient;
use social_core::models::{items_from, LedgerEntry, PageQuery, PointsBalance};
use social_core::Result;

impl ApiClient {
    /// Fetches the authenticated user's points balance.
    pub async fn points_balance(&self) -> Result<PointsBalance> {
        self.get("/api/points/balance").await
    }

    /// Fetches a page of the user's points ledger.
    pub async fn points_ledgers(&self, page: &PageQuery) -> Result<Vec<LedgerEntry>> {
        let value = self
            .get_query("/api/points/ledgers", &self.page_pairs(page))
            .await?;
        items_from(value)
    }
}
