use serde::{Deserialize, Serialize};

use crate::domain::common::{blank_as_null, EntityId, EntityStatus};
use crate::shared::resource::Resource;
use crate::shared::validation::{FieldErrors, Validate, ValidationRules};

/// Which kind of record a category classifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryKind {
    #[default]
    Asset,
    Accessory,
    Consumable,
    License,
    Tool,
    #[serde(other)]
    Other,
}

impl CategoryKind {
    pub const ALL: [CategoryKind; 5] = [
        CategoryKind::Asset,
        CategoryKind::Accessory,
        CategoryKind::Consumable,
        CategoryKind::License,
        CategoryKind::Tool,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            CategoryKind::Asset => "asset",
            CategoryKind::Accessory => "accessory",
            CategoryKind::Consumable => "consumable",
            CategoryKind::License => "license",
            CategoryKind::Tool => "tool",
            CategoryKind::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategoryKind::Asset => "Asset",
            CategoryKind::Accessory => "Accessory",
            CategoryKind::Consumable => "Consumable",
            CategoryKind::License => "License",
            CategoryKind::Tool => "Tool",
            CategoryKind::Other => "Other",
        }
    }

    pub fn from_code(code: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|kind| kind.code() == code)
            .unwrap_or(CategoryKind::Other)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category_type: CategoryKind,
    #[serde(default)]
    pub status: EntityStatus,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryDraft {
    pub name: String,
    #[serde(serialize_with = "blank_as_null")]
    pub description: String,
    pub category_type: CategoryKind,
    pub status: EntityStatus,
}

impl Validate for CategoryDraft {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.check(
            "name",
            ValidationRules::required()
                .with_max_length(100)
                .validate_string(&self.name, "Name"),
        );
        errors
    }
}

impl Resource for Category {
    type Draft = CategoryDraft;

    const SEGMENT: &'static str = "categories";
    const LABEL: &'static str = "Categories";
    const SINGULAR: &'static str = "category";

    fn id(&self) -> EntityId {
        self.id
    }

    fn title(&self) -> String {
        self.name.clone()
    }

    fn to_draft(&self) -> CategoryDraft {
        CategoryDraft {
            name: self.name.clone(),
            description: self.description.clone().unwrap_or_default(),
            category_type: self.category_type,
            status: self.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_codes() {
        for kind in CategoryKind::ALL {
            assert_eq!(CategoryKind::from_code(kind.code()), kind);
        }
        let kind: CategoryKind = serde_json::from_str("\"vehicle\"").unwrap();
        assert_eq!(kind, CategoryKind::Other);
    }
}
