use serde::{Deserialize, Serialize};

use crate::domain::common::{blank_as_null, EntityId, EntityStatus};
use crate::shared::resource::Resource;
use crate::shared::validation::{FieldErrors, Validate, ValidationRules};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Consumable {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub category_id: Option<EntityId>,
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default)]
    pub quantity: i64,
    #[serde(default)]
    pub min_quantity: i64,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub status: EntityStatus,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Consumable {
    pub fn is_low_stock(&self) -> bool {
        self.quantity <= self.min_quantity
    }

    /// "12 boxes", or the bare number when no unit is set.
    pub fn quantity_label(&self) -> String {
        match self.unit.as_deref().map(str::trim) {
            Some(unit) if !unit.is_empty() => format!("{} {}", self.quantity, unit),
            _ => self.quantity.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConsumableDraft {
    pub name: String,
    pub category_id: Option<EntityId>,
    pub quantity: i64,
    pub min_quantity: i64,
    #[serde(serialize_with = "blank_as_null")]
    pub unit: String,
    #[serde(serialize_with = "blank_as_null")]
    pub location: String,
    pub status: EntityStatus,
}

impl Validate for ConsumableDraft {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.check(
            "name",
            ValidationRules::required()
                .with_max_length(255)
                .validate_string(&self.name, "Name"),
        );
        let non_negative = ValidationRules::none().with_min(0.0);
        errors.check(
            "quantity",
            non_negative.validate_number(self.quantity as f64, "Quantity"),
        );
        errors.check(
            "min_quantity",
            non_negative.validate_number(self.min_quantity as f64, "Minimum quantity"),
        );
        errors
    }
}

impl Resource for Consumable {
    type Draft = ConsumableDraft;

    const SEGMENT: &'static str = "consumables";
    const LABEL: &'static str = "Consumables";
    const SINGULAR: &'static str = "consumable";
    const HAS_DASHBOARD: bool = true;

    fn id(&self) -> EntityId {
        self.id
    }

    fn title(&self) -> String {
        self.name.clone()
    }

    fn to_draft(&self) -> ConsumableDraft {
        ConsumableDraft {
            name: self.name.clone(),
            category_id: self.category_id,
            quantity: self.quantity,
            min_quantity: self.min_quantity,
            unit: self.unit.clone().unwrap_or_default(),
            location: self.location.clone().unwrap_or_default(),
            status: self.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_quantity_label() {
        let toner: Consumable = serde_json::from_value(json!({
            "id": 1, "name": "Toner", "quantity": 12, "min_quantity": 2, "unit": "boxes"
        }))
        .unwrap();
        assert_eq!(toner.quantity_label(), "12 boxes");
        assert!(!toner.is_low_stock());
    }

    #[test]
    fn test_negative_quantity_rejected() {
        let draft = ConsumableDraft {
            name: "Paper".into(),
            quantity: -1,
            ..Default::default()
        };
        assert!(draft.validate().get("quantity").is_some());
    }
}
