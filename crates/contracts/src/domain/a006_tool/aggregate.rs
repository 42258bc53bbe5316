use serde::{Deserialize, Serialize};

use crate::domain::common::{blank_as_null, EntityId, EntityStatus};
use crate::shared::resource::Resource;
use crate::shared::validation::{FieldErrors, Validate, ValidationRules};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tool {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub tool_code: String,
    #[serde(default)]
    pub category_id: Option<EntityId>,
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default)]
    pub assigned_to: Option<EntityId>,
    #[serde(default)]
    pub assigned_to_name: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub status: EntityStatus,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Tool {
    pub fn is_checked_out(&self) -> bool {
        self.assigned_to.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToolDraft {
    pub name: String,
    pub tool_code: String,
    pub category_id: Option<EntityId>,
    #[serde(serialize_with = "blank_as_null")]
    pub location: String,
    pub status: EntityStatus,
    #[serde(serialize_with = "blank_as_null")]
    pub notes: String,
}

impl Validate for ToolDraft {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.check(
            "name",
            ValidationRules::required()
                .with_max_length(255)
                .validate_string(&self.name, "Name"),
        );
        errors.check(
            "tool_code",
            ValidationRules::required()
                .with_max_length(64)
                .validate_string(&self.tool_code, "Tool code"),
        );
        errors
    }
}

impl Resource for Tool {
    type Draft = ToolDraft;

    const SEGMENT: &'static str = "tools";
    const LABEL: &'static str = "Tools";
    const SINGULAR: &'static str = "tool";
    const HAS_DASHBOARD: bool = true;

    fn id(&self) -> EntityId {
        self.id
    }

    fn title(&self) -> String {
        format!("{} ({})", self.name, self.tool_code)
    }

    fn to_draft(&self) -> ToolDraft {
        ToolDraft {
            name: self.name.clone(),
            tool_code: self.tool_code.clone(),
            category_id: self.category_id,
            location: self.location.clone().unwrap_or_default(),
            status: self.status,
            notes: self.notes.clone().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_checked_out() {
        let drill: Tool = serde_json::from_value(json!({
            "id": 3, "name": "Drill", "tool_code": "T-3", "assigned_to": 7
        }))
        .unwrap();
        assert!(drill.is_checked_out());
        assert_eq!(drill.title(), "Drill (T-3)");
        assert_eq!(Tool::action_path(drill.id, "assign"), "/api/tools/3/assign");
    }
}
