use serde::{Deserialize, Serialize};

use crate::domain::common::{blank_as_null, EntityId, EntityStatus};
use crate::shared::resource::Resource;
use crate::shared::validation::{FieldErrors, Validate, ValidationRules};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Accessory {
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

impl Accessory {
    pub fn is_low_stock(&self) -> bool {
        self.quantity <= self.min_quantity
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccessoryDraft {
    pub name: String,
    pub category_id: Option<EntityId>,
    pub quantity: i64,
    pub min_quantity: i64,
    #[serde(serialize_with = "blank_as_null")]
    pub location: String,
    pub status: EntityStatus,
    #[serde(serialize_with = "blank_as_null")]
    pub notes: String,
}

impl Validate for AccessoryDraft {
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

impl Resource for Accessory {
    type Draft = AccessoryDraft;

    const SEGMENT: &'static str = "accessories";
    const LABEL: &'static str = "Accessories";
    const SINGULAR: &'static str = "accessory";
    const HAS_DASHBOARD: bool = true;

    fn id(&self) -> EntityId {
        self.id
    }

    fn title(&self) -> String {
        self.name.clone()
    }

    fn to_draft(&self) -> AccessoryDraft {
        AccessoryDraft {
            name: self.name.clone(),
            category_id: self.category_id,
            quantity: self.quantity,
            min_quantity: self.min_quantity,
            location: self.location.clone().unwrap_or_default(),
            status: self.status,
            notes: self.notes.clone().unwrap_or_default(),
        }
    }
}

/// Body of `POST /api/accessories/:id/assign`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessoryAssignment {
    pub user_id: Option<EntityId>,
    pub quantity: i64,
    #[serde(serialize_with = "blank_as_null")]
    pub notes: String,
}

impl Default for AccessoryAssignment {
    fn default() -> Self {
        Self {
            user_id: None,
            quantity: 1,
            notes: String::new(),
        }
    }
}

impl AccessoryAssignment {
    /// Checks that need the row being assigned from.
    pub fn validate_against(&self, accessory: &Accessory) -> FieldErrors {
        let mut errors = self.validate();
        if self.quantity > accessory.quantity {
            errors.add(
                "quantity",
                format!("Only {} in stock", accessory.quantity),
            );
        }
        errors
    }
}

impl Validate for AccessoryAssignment {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.check(
            "user_id",
            ValidationRules::required().validate_option(&self.user_id, "User"),
        );
        errors.check(
            "quantity",
            ValidationRules::none()
                .with_min(1.0)
                .validate_number(self.quantity as f64, "Quantity"),
        );
        errors
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovementType {
    #[default]
    In,
    Out,
    Adjustment,
}

impl MovementType {
    pub const ALL: [MovementType; 3] = [MovementType::In, MovementType::Out, MovementType::Adjustment];

    pub fn code(&self) -> &'static str {
        match self {
            MovementType::In => "in",
            MovementType::Out => "out",
            MovementType::Adjustment => "adjustment",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MovementType::In => "Stock in",
            MovementType::Out => "Stock out",
            MovementType::Adjustment => "Adjustment",
        }
    }

    pub fn from_code(code: &str) -> Self {
        match code {
            "out" => MovementType::Out,
            "adjustment" => MovementType::Adjustment,
            _ => MovementType::In,
        }
    }
}

/// Body of `POST /api/accessories/:id/stock-movement`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockMovement {
    pub movement_type: MovementType,
    pub quantity: i64,
    #[serde(serialize_with = "blank_as_null")]
    pub reason: String,
}

impl Default for StockMovement {
    fn default() -> Self {
        Self {
            movement_type: MovementType::In,
            quantity: 1,
            reason: String::new(),
        }
    }
}

impl StockMovement {
    /// Quantity the row would show after the movement is applied.
    pub fn resulting_quantity(&self, current: i64) -> i64 {
        match self.movement_type {
            MovementType::In => current + self.quantity,
            MovementType::Out => current - self.quantity,
            MovementType::Adjustment => self.quantity,
        }
    }
}

impl Validate for StockMovement {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        let min = match self.movement_type {
            MovementType::Adjustment => 0.0,
            _ => 1.0,
        };
        errors.check(
            "quantity",
            ValidationRules::none()
                .with_min(min)
                .validate_number(self.quantity as f64, "Quantity"),
        );
        if self.movement_type == MovementType::Adjustment && self.reason.trim().is_empty() {
            errors.add("reason", "Reason is required for adjustments");
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn cables() -> Accessory {
        serde_json::from_value(json!({
            "id": 5, "name": "USB-C cable", "quantity": 3, "min_quantity": 5
        }))
        .unwrap()
    }

    #[test]
    fn test_low_stock() {
        assert!(cables().is_low_stock());
    }

    #[test]
    fn test_assignment_checks_stock() {
        let user: EntityId = serde_json::from_value(json!(8)).unwrap();
        let assignment = AccessoryAssignment {
            user_id: Some(user),
            quantity: 4,
            notes: String::new(),
        };
        assert!(assignment.validate().is_empty());
        assert_eq!(
            assignment.validate_against(&cables()).get("quantity"),
            Some("Only 3 in stock")
        );
        assert!(AccessoryAssignment::default().validate().get("user_id").is_some());
    }

    #[test]
    fn test_stock_movement() {
        let out = StockMovement {
            movement_type: MovementType::Out,
            quantity: 2,
            reason: String::new(),
        };
        assert_eq!(out.resulting_quantity(3), 1);
        assert_eq!(
            serde_json::to_value(&out).unwrap(),
            json!({"movement_type": "out", "quantity": 2, "reason": null})
        );

        let adjust = StockMovement {
            movement_type: MovementType::Adjustment,
            quantity: 10,
            reason: String::new(),
        };
        assert_eq!(adjust.resulting_quantity(3), 10);
        assert!(adjust.validate().get("reason").is_some());
    }
}
