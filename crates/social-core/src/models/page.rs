//! Pagination parameters and list-response tolerance.

use crate::config::PaginationStyle;
use crate::error::Result;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Page window for list endpoints.
///
/// The same query maps onto either pagination convention; `cursor` is only
/// consulted under [`PaginationStyle::CursorLimit`] and falls back to the
/// offset rendered as an opaque cursor when unset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageQuery {
    pub offset: u64,
    pub limit: u64,
    pub cursor: Option<String>,
}

impl PageQuery {
    pub fn new(offset: u64, limit: u64) -> Self {
        Self {
            offset,
            limit,
            cursor: None,
        }
    }

    /// First page with the backend's customary window of 50.
    pub fn first() -> Self {
        Self::new(0, 50)
    }

    pub fn with_cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }

    /// Renders the query pairs for the configured pagination convention.
    pub fn query_pairs(&self, style: PaginationStyle) -> Vec<(&'static str, String)> {
        match style {
            PaginationStyle::OffsetLimit => vec![
                ("offset", self.offset.to_string()),
                ("limit", self.limit.to_string()),
            ],
            PaginationStyle::CursorLimit => vec![
                (
                    "cursor",
                    self.cursor
                        .clone()
                        .unwrap_or_else(|| self.offset.to_string()),
                ),
                ("limit", self.limit.to_string()),
            ],
        }
    }
}

/// Extracts the items of a list response.
///
/// List endpoints answer either with a bare JSON array or with an
/// `{"items": [...]}` object; anything else yields an empty list, matching
/// the forgiving behavior of the original clients.
pub fn items_from<T: DeserializeOwned>(value: Value) -> Result<Vec<T>> {
    let items = match value {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("items") {
            Some(Value::Array(items)) => items,
            _ => return Ok(Vec::new()),
        },
        _ => return Ok(Vec::new()),
    };
    items
        .into_iter()
        .map(|item| serde_json::from_value(item).map_err(Into::into))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_offset_limit_pairs() {
        let page = PageQuery::new(20, 10);
        assert_eq!(
            page.query_pairs(PaginationStyle::OffsetLimit),
            vec![("offset", "20".to_string()), ("limit", "10".to_string())]
        );
    }

    #[test]
    fn test_cursor_pairs_fall_back_to_offset() {
        let page = PageQuery::new(20, 10);
        assert_eq!(
            page.query_pairs(PaginationStyle::CursorLimit),
            vec![("cursor", "20".to_string()), ("limit", "10".to_string())]
        );
        let page = page.with_cursor("abc");
        assert_eq!(
            page.query_pairs(PaginationStyle::CursorLimit)[0].1,
            "abc".to_string()
        );
    }

    #[test]
    fn test_items_from_bare_array() {
        let items: Vec<i64> = items_from(json!([1, 2, 3])).unwrap();
        assert_eq!(items, vec![1, 2, 3]);
    }

    #[test]
    fn test_items_from_wrapped_object() {
        let items: Vec<i64> = items_from(json!({"items": [4, 5]})).unwrap();
        assert_eq!(items, vec![4, 5]);
    }

    #[test]
    fn test_items_from_other_shapes_is_empty() {
        let items: Vec<i64> = items_from(json!({"total": 3})).unwrap();
        assert!(items.is_empty());
        let items: Vec<i64> = items_from(Value::Null).unwrap();
        assert!(items.is_empty());
    }
}
