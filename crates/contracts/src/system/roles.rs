use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::permissions::Permission;
use crate::domain::common::EntityId;
use crate::shared::resource::Resource;
use crate::shared::validation::{FieldErrors, Validate, ValidationRules};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub permissions: Vec<Permission>,
    #[serde(default)]
    pub users_count: Option<u64>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Role {
    pub fn permission_ids(&self) -> BTreeSet<EntityId> {
        self.permissions.iter().map(|p| p.id).collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoleDraft {
    pub name: String,
    pub description: String,
}

impl Validate for RoleDraft {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.check(
            "name",
            ValidationRules::required()
                .with_max_length(64)
                .validate_string(&self.name, "Name"),
        );
        errors
    }
}

/// Body of `PUT /api/roles/:id/permissions`; replaces the full set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RolePermissionsUpdate {
    pub permission_ids: Vec<EntityId>,
}

impl RolePermissionsUpdate {
    pub fn from_selection(selected: &BTreeSet<EntityId>) -> Self {
        Self {
            permission_ids: selected.iter().copied().collect(),
        }
    }
}

impl Resource for Role {
    type Draft = RoleDraft;

    const SEGMENT: &'static str = "roles";
    const LABEL: &'static str = "Roles";
    const SINGULAR: &'static str = "role";

    fn id(&self) -> EntityId {
        self.id
    }

    fn title(&self) -> String {
        self.name.clone()
    }

    fn to_draft(&self) -> RoleDraft {
        RoleDraft {
            name: self.name.clone(),
            description: self.description.clone().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list::decode_entity;
    use serde_json::json;

    #[test]
    fn test_permission_update_body() {
        let role: Role = serde_json::from_value(json!({
            "id": 1,
            "name": "Admin",
            "permissions": [{"id": 3, "name": "roles.view"}, {"id": 1, "name": "assets.view"}]
        }))
        .unwrap();
        let body = RolePermissionsUpdate::from_selection(&role.permission_ids());
        assert_eq!(serde_json::to_value(body).unwrap(), json!({"permission_ids": [1, 3]}));
    }

    #[test]
    fn test_paths() {
        let role: Role = serde_json::from_value(json!({"id": 9, "name": "Auditor"})).unwrap();
        assert_eq!(Role::collection_path(), "/api/roles");
        assert_eq!(Role::action_path(role.id, "permissions"), "/api/roles/9/permissions");
        assert_eq!(Role::permission(crate::shared::resource::Action::Update), "roles.update");
    }

    #[test]
    fn test_detail_carries_permissions_list_row_does_not() {
        let row: Role = serde_json::from_value(json!({"id": 4, "name": "Editor", "users_count": 3})).unwrap();
        assert!(row.permission_ids().is_empty());

        let detail: Role = decode_entity(json!({
            "data": {
                "id": 4,
                "name": "Editor",
                "permissions": [{"id": 7, "name": "assets.update"}, {"id": 2, "name": "assets.view"}]
            }
        }))
        .unwrap();
        let ids: Vec<i64> = detail.permission_ids().iter().map(|id| id.value()).collect();
        assert_eq!(ids, vec![2, 7]);
    }
}
