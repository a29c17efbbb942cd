//! Redemption order payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A redemption order (`/api/redeem/orders`, `/admin/redeem/orders`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RedeemOrder {
    pub id: u64,
    pub order_no: String,
    pub user_id: u64,
    /// CREATED / USED / CANCELED.
    pub status: String,
    pub total_points: i64,
    pub used_by_admin_id: u64,
    pub used_at: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
    pub items: Vec<RedeemOrderItem>,
}

/// A line item inside a redemption order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RedeemOrderItem {
    pub id: u64,
    pub redeem_order_id: u64,
    pub goods_id: u64,
    pub quantity: i32,
    pub points_price: i64,
}

/// One item of a new redemption order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderItem {
    pub goods_id: u64,
    pub quantity: i32,
    pub points_price: i64,
}

/// Payload for `POST /api/redeem/orders` and `POST /admin/redeem/orders`.
///
/// `user_id` is only meaningful on the admin surface; the app endpoint
/// derives the user from the bearer token.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateOrderRequest {
    #[serde(skip_serializing_if = "is_zero")]
    pub user_id: u64,
    pub items: Vec<CreateOrderItem>,
}

fn is_zero(v: &u64) -> bool {
    *v == 0
}

impl CreateOrderRequest {
    pub fn new(items: Vec<CreateOrderItem>) -> Self {
        Self { user_id: 0, items }
    }

    pub fn for_user(user_id: u64, items: Vec<CreateOrderItem>) -> Self {
        Self { user_id, items }
    }
}
