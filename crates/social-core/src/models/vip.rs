//! VIP subscription status payload.

use serde::{Deserialize, Serialize};

/// Response of `GET /api/vip/status`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VipStatus {
    pub is_vip: bool,
    /// RFC 3339 expiry, empty when the user never subscribed.
    pub expire_at: String,
    pub status: String,
}
