//! List requests and the envelopes the backend answers them with.

use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::BTreeMap;

use super::api_error::ApiError;

/// `?page=&limit=&<filters>` of a collection request. `page` is 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub page: u32,
    pub limit: u32,
    pub filters: BTreeMap<String, String>,
}

impl ListQuery {
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page: page.max(1),
            limit: limit.max(1),
            filters: BTreeMap::new(),
        }
    }

    pub fn with_filter(mut self, key: &str, value: &str) -> Self {
        if !value.trim().is_empty() {
            self.filters.insert(key.to_string(), value.trim().to_string());
        }
        self
    }

    /// Ordered `(key, value)` pairs; page and limit first, then non-empty
    /// filters in key order.
    pub fn params(&self) -> Vec<(String, String)> {
        let mut params = vec![
            ("page".to_string(), self.page.to_string()),
            ("limit".to_string(), self.limit.to_string()),
        ];
        params.extend(
            self.filters
                .iter()
                .filter(|(_, v)| !v.trim().is_empty())
                .map(|(k, v)| (k.clone(), v.clone())),
        );
        params
    }
}

/// Derived page-local triple. `total` is whatever the backend reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
}

impl Pagination {
    pub fn total_pages(&self) -> u32 {
        total_pages(self.total, self.limit)
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    /// "Page 1 of 1"
    pub fn label(&self) -> String {
        format!("Page {} of {}", self.page, self.total_pages())
    }
}

pub fn total_pages(total: u64, limit: u32) -> u32 {
    if total == 0 || limit == 0 {
        return 1;
    }
    let pages = (total + limit as u64 - 1) / limit as u64;
    pages.clamp(1, u32::MAX as u64) as u32
}

/// One decoded page of a collection.
#[derive(Debug, Clone, PartialEq)]
pub struct ListPage<T> {
    pub items: Vec<T>,
    pub total: u64,
}

impl<T: DeserializeOwned> ListPage<T> {
    /// Decode any of the list envelopes the backend uses:
    ///
    /// - `{"data": [..], "pagination": {"total": N}}`
    /// - `{"data": {"<collection>": [..]}, "total": N}`
    /// - `{"data": [..], "total": N}`
    /// - `[..]`
    ///
    /// A missing total falls back to the number of rows received.
    pub fn from_envelope(value: Value, collection: &str) -> Result<Self, ApiError> {
        let total = find_total(&value);
        let rows = match value {
            Value::Array(rows) => rows,
            Value::Object(mut map) => {
                let data = map.remove("data").unwrap_or(Value::Null);
                match data {
                    Value::Array(rows) => rows,
                    Value::Object(mut inner) => take_rows(&mut inner, collection)?,
                    Value::Null => take_rows(&mut map, collection)?,
                    other => {
                        return Err(ApiError::Decode(format!(
                            "unexpected 'data' in list response: {}",
                            other
                        )))
                    }
                }
            }
            other => {
                return Err(ApiError::Decode(format!(
                    "unexpected list response: {}",
                    other
                )))
            }
        };

        let items = rows
            .into_iter()
            .map(serde_json::from_value::<T>)
            .collect::<Result<Vec<T>, _>>()
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        let total = total.unwrap_or(items.len() as u64);

        Ok(ListPage { items, total })
    }
}

fn take_rows(map: &mut serde_json::Map<String, Value>, collection: &str) -> Result<Vec<Value>, ApiError> {
    let keys = [
        collection.to_string(),
        collection.replace('-', "_"),
        "items".to_string(),
        "rows".to_string(),
    ];
    for key in keys.iter() {
        if let Some(Value::Array(rows)) = map.remove(key) {
            return Ok(rows);
        }
    }
    // Single unnamed array, e.g. {"data": {"records": [..]}}
    let mut arrays = map.values_mut().filter(|v| v.is_array());
    match (arrays.next(), arrays.next()) {
        (Some(Value::Array(rows)), None) => Ok(std::mem::take(rows)),
        _ => Err(ApiError::Decode(format!(
            "list response has no '{}' collection",
            collection
        ))),
    }
}

fn find_total(value: &Value) -> Option<u64> {
    let candidates = [
        value.pointer("/pagination/total"),
        value.pointer("/total"),
        value.pointer("/data/pagination/total"),
        value.pointer("/data/total"),
        value.pointer("/meta/total"),
    ];
    candidates.into_iter().flatten().find_map(as_count)
}

fn as_count(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

/// Unwrap a single-entity response that may or may not be wrapped in
/// `{"data": ..}`.
pub fn decode_entity<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    let inner = match value {
        Value::Object(mut map) if map.contains_key("data") && !map.contains_key("id") => {
            map.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    };
    serde_json::from_value(inner).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Row {
        id: i64,
        name: String,
    }

    #[test]
    fn test_roles_scenario_envelope() {
        let body = json!({"data": {"roles": [{"id": 1, "name": "Admin"}]}, "total": 1});
        let page = ListPage::<Row>::from_envelope(body, "roles").unwrap();
        assert_eq!(page.items, vec![Row { id: 1, name: "Admin".into() }]);
        assert_eq!(page.total, 1);
        let pagination = Pagination { page: 1, limit: 10, total: page.total };
        assert_eq!(pagination.label(), "Page 1 of 1");
    }

    #[test]
    fn test_data_with_pagination_block() {
        let body = json!({
            "data": [{"id": 1, "name": "a"}, {"id": 2, "name": "b"}],
            "pagination": {"total": 42, "page": 1, "limit": 2}
        });
        let page = ListPage::<Row>::from_envelope(body, "assets").unwrap();
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.total, 42);
    }

    #[test]
    fn test_bare_array_uses_row_count() {
        let body = json!([{"id": 1, "name": "a"}]);
        let page = ListPage::<Row>::from_envelope(body, "tools").unwrap();
        assert_eq!(page.total, 1);
    }

    #[test]
    fn test_hyphenated_collection_key() {
        let body = json!({"data": {"work_orders": [{"id": 5, "name": "fix"}]}, "total": "7"});
        let page = ListPage::<Row>::from_envelope(body, "work-orders").unwrap();
        assert_eq!(page.items[0].id, 5);
        assert_eq!(page.total, 7);
    }

    #[test]
    fn test_bad_row_is_decode_error() {
        let body = json!({"data": [{"id": "x"}]});
        assert!(matches!(
            ListPage::<Row>::from_envelope(body, "assets"),
            Err(ApiError::Decode(_))
        ));
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(101, 25), 5);
    }

    #[test]
    fn test_limit_change_keeps_total() {
        let a = Pagination { page: 2, limit: 10, total: 95 };
        let b = Pagination { limit: 50, ..a };
        assert_eq!(a.total, b.total);
        assert_eq!(a.total_pages(), 10);
        assert_eq!(b.total_pages(), 2);
    }

    #[test]
    fn test_query_params_skip_blank_filters() {
        let query = ListQuery::new(0, 10)
            .with_filter("search", " laptop ")
            .with_filter("status", "");
        assert_eq!(
            query.params(),
            vec![
                ("page".to_string(), "1".to_string()),
                ("limit".to_string(), "10".to_string()),
                ("search".to_string(), "laptop".to_string()),
            ]
        );
    }

    #[test]
    fn test_decode_entity_wrapped_and_bare() {
        let wrapped: Row = decode_entity(json!({"data": {"id": 3, "name": "c"}})).unwrap();
        let bare: Row = decode_entity(json!({"id": 3, "name": "c"})).unwrap();
        assert_eq!(wrapped, bare);
    }
}
