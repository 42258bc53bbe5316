//! Generic CRUD service. One implementation serves every entity through the
//! [`Resource`] trait; only the URL segment differs.

use contracts::dashboards::d100_resource_summary::DashboardSummary;
use contracts::domain::common::EntityId;
use contracts::shared::api_error::ApiError;
use contracts::shared::list::{decode_entity, ListPage, ListQuery};
use contracts::shared::resource::Resource;
use serde::Serialize;
use serde_json::Value;

use crate::shared::api_utils::{self, Method};

/// Rows requested when filling a lookup select.
const LOOKUP_LIMIT: u32 = 100;

pub async fn list<R: Resource>(query: &ListQuery) -> Result<ListPage<R>, ApiError> {
    let value = api_utils::get_json(&R::collection_path(), &query.params()).await?;
    ListPage::from_envelope(value, R::SEGMENT)
}

pub async fn get<R: Resource>(id: EntityId) -> Result<R, ApiError> {
    let value = api_utils::get_json(&R::item_path(id), &[]).await?;
    decode_entity(value)
}

/// Returns the record as persisted, carrying the id the backend assigned.
pub async fn create<R: Resource>(draft: &R::Draft) -> Result<R, ApiError> {
    let value = api_utils::send_json(Method::Post, &R::collection_path(), draft).await?;
    decode_entity(value)
}

pub async fn update<R: Resource>(id: EntityId, draft: &R::Draft) -> Result<R, ApiError> {
    let value = api_utils::send_json(Method::Put, &R::item_path(id), draft).await?;
    decode_entity(value)
}

pub async fn remove<R: Resource>(id: EntityId) -> Result<(), ApiError> {
    api_utils::delete(&R::item_path(id)).await
}

pub async fn dashboard<R: Resource>() -> Result<DashboardSummary, ApiError> {
    let value = api_utils::get_json(&R::dashboard_path(), &[]).await?;
    Ok(DashboardSummary::from_value(&value))
}

/// Entity sub-action such as `POST /api/assets/:id/assign`.
pub async fn action<R: Resource, B: Serialize>(
    id: EntityId,
    action: &str,
    method: Method,
    body: &B,
) -> Result<Value, ApiError> {
    api_utils::send_json(method, &R::action_path(id, action), body).await
}

/// `(id, label)` pairs for a foreign-key select.
pub async fn lookup(segment: &str) -> Result<Vec<(EntityId, String)>, ApiError> {
    let params = ListQuery::new(1, LOOKUP_LIMIT).params();
    let value = api_utils::get_json(&format!("/api/{}", segment), &params).await?;
    let page = ListPage::<Value>::from_envelope(value, segment)?;
    Ok(page.items.iter().filter_map(lookup_option).collect())
}

fn lookup_option(row: &Value) -> Option<(EntityId, String)> {
    let id: EntityId = serde_json::from_value(row.get("id")?.clone()).ok()?;
    let label = ["full_name", "name", "title", "username"]
        .iter()
        .filter_map(|key| row.get(*key).and_then(Value::as_str))
        .find(|s| !s.trim().is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("#{}", id));
    Some((id, label))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_lookup_option_prefers_full_name() {
        let (id, label) =
            lookup_option(&json!({"id": 4, "username": "jd", "full_name": "Jane Doe"})).unwrap();
        assert_eq!(id.value(), 4);
        assert_eq!(label, "Jane Doe");
    }

    #[test]
    fn test_lookup_option_falls_back_to_id() {
        let (_, label) = lookup_option(&json!({"id": 9, "name": "  "})).unwrap();
        assert_eq!(label, "#9");
        assert!(lookup_option(&json!({"name": "no id"})).is_none());
    }
}
