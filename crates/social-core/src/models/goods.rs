//! Goods (redeemable shop items) payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A shop item as returned by `/api/goods` and `/admin/goods`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Goods {
    pub id: u64,
    pub name: String,
    pub cover_url: String,
    pub image_urls: Vec<String>,
    pub points_price: i64,
    pub stock: i32,
    pub status: i32,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Create/update payload for the admin goods endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GoodsInput {
    pub name: String,
    pub cover_url: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub image_urls: Vec<String>,
    pub points_price: i64,
    pub stock: i32,
    pub status: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goods_wire_shape() {
        let goods: Goods = serde_json::from_str(
            r#"{"id": 3, "name": "马克杯", "pointsPrice": 1200, "stock": 5, "status": 1}"#,
        )
        .unwrap();
        assert_eq!(goods.points_price, 1200);
        assert!(goods.image_urls.is_empty());
    }
}
