use serde::{Deserialize, Serialize};

use crate::domain::common::EntityId;
use crate::shared::resource::Resource;
use crate::shared::validation::{FieldErrors, Validate, ValidationRules};

/// A permission string such as `assets.view`, grouped by module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Permission {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub module: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Permission {
    /// Module for grouping: explicit `module`, else the part before the dot.
    pub fn group(&self) -> String {
        self.module
            .clone()
            .filter(|m| !m.trim().is_empty())
            .or_else(|| self.name.split_once('.').map(|(m, _)| m.to_string()))
            .unwrap_or_else(|| "other".to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PermissionDraft {
    pub name: String,
    pub description: String,
    pub module: String,
}

impl Validate for PermissionDraft {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.check(
            "name",
            ValidationRules::required()
                .with_max_length(100)
                .validate_string(&self.name, "Name"),
        );
        if self.name.contains(char::is_whitespace) {
            errors.add("name", "Name must not contain spaces");
        }
        errors
    }
}

impl Resource for Permission {
    type Draft = PermissionDraft;

    const SEGMENT: &'static str = "permissions";
    const LABEL: &'static str = "Permissions";
    const SINGULAR: &'static str = "permission";

    fn id(&self) -> EntityId {
        self.id
    }

    fn title(&self) -> String {
        self.name.clone()
    }

    fn to_draft(&self) -> PermissionDraft {
        PermissionDraft {
            name: self.name.clone(),
            description: self.description.clone().unwrap_or_default(),
            module: self.module.clone().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_group_falls_back_to_prefix() {
        let p: Permission =
            serde_json::from_value(json!({"id": 1, "name": "assets.view"})).unwrap();
        assert_eq!(p.group(), "assets");
        let p: Permission =
            serde_json::from_value(json!({"id": 2, "name": "export", "module": "reports"})).unwrap();
        assert_eq!(p.group(), "reports");
    }

    #[test]
    fn test_name_without_spaces() {
        let draft = PermissionDraft {
            name: "assets view".into(),
            ..Default::default()
        };
        assert!(draft.validate().get("name").is_some());
    }
}
