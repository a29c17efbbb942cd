//! Points balance and ledger payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Response of `GET /api/points/balance`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointsBalance {
    pub balance: i64,
}

/// A single points ledger row (`GET /api/points/ledgers`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LedgerEntry {
    pub id: u64,
    pub change_amount: i64,
    pub balance_after: i64,
    pub biz_type: String,
    pub biz_id: String,
    pub remark: String,
    pub created_at: Option<DateTime<Utc>>,
}

/// Payload for `POST /admin/points/adjust`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointsAdjustRequest {
    pub user_id: u64,
    pub change_amount: i64,
    #[serde(default)]
    pub remark: String,
}
