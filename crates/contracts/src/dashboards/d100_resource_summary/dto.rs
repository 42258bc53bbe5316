use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One number on a dashboard widget, e.g. `("in_maintenance", "In maintenance", 3)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardTile {
    pub key: String,
    pub label: String,
    pub value: f64,
}

impl DashboardTile {
    pub fn new(key: impl Into<String>, value: f64) -> Self {
        let key = key.into();
        Self {
            label: humanize(&key),
            key,
            value,
        }
    }

    /// Integers render without a fraction, money keeps two decimals.
    pub fn display_value(&self) -> String {
        if self.value.fract() == 0.0 && self.value.abs() < 1e15 {
            format!("{}", self.value as i64)
        } else {
            format!("{:.2}", self.value)
        }
    }
}

/// Aggregate counters returned by `GET /api/<segment>/dashboard`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub tiles: Vec<DashboardTile>,
}

impl DashboardSummary {
    /// Accepts a flat object of numbers or the same wrapped in `{"data": ...}`.
    /// Nested objects one level deep are flattened as `parent_child`; anything
    /// that is not a number is skipped. `total*` keys come first.
    pub fn from_value(value: &Value) -> Self {
        let root = match value.get("data") {
            Some(Value::Object(inner)) => inner,
            _ => match value {
                Value::Object(map) => map,
                _ => return Self::default(),
            },
        };

        let mut tiles = Vec::new();
        collect(root, None, &mut tiles);
        tiles.sort_by_key(|tile| !tile.key.starts_with("total"));
        Self { tiles }
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.tiles.iter().find(|t| t.key == key).map(|t| t.value)
    }
}

fn collect(map: &Map<String, Value>, prefix: Option<&str>, tiles: &mut Vec<DashboardTile>) {
    for (key, value) in map {
        let full_key = match prefix {
            Some(prefix) => format!("{prefix}_{key}"),
            None => key.clone(),
        };
        match value {
            Value::Object(inner) if prefix.is_none() => collect(inner, Some(&full_key), tiles),
            other => {
                if let Some(number) = as_number(other) {
                    tiles.push(DashboardTile::new(full_key, number));
                }
            }
        }
    }
}

fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// `"low_stock_count"` -> `"Low stock count"`.
pub fn humanize(key: &str) -> String {
    let spaced = key.replace(['_', '-'], " ");
    let mut chars = spaced.trim().chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_flat_summary() {
        let summary = DashboardSummary::from_value(&json!({
            "active": 7, "total": 10, "label": "ignored", "total_cost": "1520.5"
        }));
        assert_eq!(summary.tiles.len(), 3);
        assert!(summary.tiles[0].key.starts_with("total"));
        assert!(summary.tiles[1].key.starts_with("total"));
        assert_eq!(summary.get("total_cost"), Some(1520.5));
        assert_eq!(summary.get("label"), None);
    }

    #[test]
    fn test_wrapped_and_nested() {
        let summary = DashboardSummary::from_value(&json!({
            "data": { "by_status": { "open": 2, "completed": 5 }, "overdue": 1 }
        }));
        assert_eq!(summary.get("by_status_open"), Some(2.0));
        assert_eq!(summary.get("overdue"), Some(1.0));
        let tile = summary.tiles.iter().find(|t| t.key == "by_status_completed").unwrap();
        assert_eq!(tile.label, "By status completed");
    }

    #[test]
    fn test_non_object_is_empty() {
        assert!(DashboardSummary::from_value(&json!([1, 2])).is_empty());
    }

    #[test]
    fn test_display_value() {
        assert_eq!(DashboardTile::new("total", 12.0).display_value(), "12");
        assert_eq!(DashboardTile::new("cost", 3.5).display_value(), "3.50");
    }
}
