//! API facade: one thin async method per backend endpoint.
//!
//! Each method builds the path/query, calls the request client, and decodes
//! the unwrapped payload. No retries, no caching between calls, presence-only
//! validation before submission.

pub mod admin;
pub mod auth;
pub mod goods;
pub mod media;
pub mod points;
pub mod redeem;
pub mod tasks;
pub mod tournaments;
pub mod users;
pub mod vip;

use crate::ApiClient;
use social_core::models::PageQuery;

impl ApiClient {
    /// Renders `page` for the configured pagination convention.
    pub(crate) fn page_pairs(&self, page: &PageQuery) -> Vec<(&'static str, String)> {
        page.query_pairs(self.config().pagination)
    }
}
