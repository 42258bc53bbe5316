use serde::{Deserialize, Serialize};

use crate::domain::common::{blank_as_null, check_optional_date, EntityId, EntityStatus};
use crate::shared::resource::Resource;
use crate::shared::validation::{FieldErrors, Validate, ValidationRules};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub asset_tag: String,
    #[serde(default)]
    pub serial_number: Option<String>,
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
    pub purchase_date: Option<String>,
    #[serde(default)]
    pub purchase_cost: Option<f64>,
    #[serde(default)]
    pub status: EntityStatus,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetDraft {
    pub name: String,
    pub asset_tag: String,
    #[serde(serialize_with = "blank_as_null")]
    pub serial_number: String,
    pub category_id: Option<EntityId>,
    #[serde(serialize_with = "blank_as_null")]
    pub location: String,
    #[serde(serialize_with = "blank_as_null")]
    pub purchase_date: String,
    pub purchase_cost: Option<f64>,
    pub status: EntityStatus,
    #[serde(serialize_with = "blank_as_null")]
    pub notes: String,
}

impl Validate for AssetDraft {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.check(
            "name",
            ValidationRules::required()
                .with_max_length(255)
                .validate_string(&self.name, "Name"),
        );
        errors.check(
            "asset_tag",
            ValidationRules::required()
                .with_max_length(64)
                .validate_string(&self.asset_tag, "Asset tag"),
        );
        errors.check(
            "purchase_date",
            check_optional_date(&self.purchase_date, "Purchase date"),
        );
        if let Some(cost) = self.purchase_cost {
            errors.check(
                "purchase_cost",
                ValidationRules::none()
                    .with_min(0.0)
                    .validate_number(cost, "Purchase cost"),
            );
        }
        errors
    }
}

impl Resource for Asset {
    type Draft = AssetDraft;

    const SEGMENT: &'static str = "assets";
    const LABEL: &'static str = "Assets";
    const SINGULAR: &'static str = "asset";
    const HAS_DASHBOARD: bool = true;

    fn id(&self) -> EntityId {
        self.id
    }

    fn title(&self) -> String {
        if self.asset_tag.is_empty() {
            self.name.clone()
        } else {
            format!("{} ({})", self.name, self.asset_tag)
        }
    }

    fn to_draft(&self) -> AssetDraft {
        AssetDraft {
            name: self.name.clone(),
            asset_tag: self.asset_tag.clone(),
            serial_number: self.serial_number.clone().unwrap_or_default(),
            category_id: self.category_id,
            location: self.location.clone().unwrap_or_default(),
            purchase_date: self.purchase_date.clone().unwrap_or_default(),
            purchase_cost: self.purchase_cost,
            status: self.status,
            notes: self.notes.clone().unwrap_or_default(),
        }
    }
}

/// Body of `PATCH /api/assets/:id/assign`; `user_id: null` checks the
/// asset back in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetAssignment {
    pub user_id: Option<EntityId>,
    #[serde(serialize_with = "blank_as_null")]
    pub notes: String,
}

impl Validate for AssetAssignment {
    fn validate(&self) -> FieldErrors {
        FieldErrors::new()
    }
}

/// Body of `POST /api/assets/:id/transfer`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetTransfer {
    pub to_location: String,
    pub to_user_id: Option<EntityId>,
    #[serde(serialize_with = "blank_as_null")]
    pub notes: String,
}

impl Validate for AssetTransfer {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.check(
            "to_location",
            ValidationRules::required().validate_string(&self.to_location, "Destination"),
        );
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Asset {
        serde_json::from_value(json!({
            "id": 12,
            "name": "ThinkPad T14",
            "asset_tag": "IT-0012",
            "category_id": 3,
            "status": "maintenance",
            "purchase_cost": 1299.5,
            "created_at": "2024-01-05T08:00:00Z"
        }))
        .unwrap()
    }

    #[test]
    fn test_decode_minimal_row() {
        let asset: Asset = serde_json::from_value(json!({"id": 1, "name": "Desk"})).unwrap();
        assert_eq!(asset.status, EntityStatus::Active);
        assert_eq!(asset.title(), "Desk");
    }

    #[test]
    fn test_draft_body_never_carries_id() {
        let body = serde_json::to_value(sample().to_draft()).unwrap();
        assert!(body.get("id").is_none());
        assert_eq!(body["asset_tag"], json!("IT-0012"));
        assert_eq!(body["status"], json!("maintenance"));
        assert_eq!(body["location"], json!(null));
    }

    #[test]
    fn test_draft_validation() {
        let mut draft = sample().to_draft();
        assert!(draft.validate().is_empty());
        draft.purchase_date = "yesterday".into();
        draft.purchase_cost = Some(-5.0);
        let errors = draft.validate();
        assert!(errors.get("purchase_date").is_some());
        assert!(errors.get("purchase_cost").is_some());
    }

    #[test]
    fn test_transfer_requires_destination() {
        assert!(AssetTransfer::default().validate().get("to_location").is_some());
        let transfer = AssetTransfer {
            to_location: "Warehouse B".into(),
            ..Default::default()
        };
        assert!(transfer.validate().is_empty());
    }

    #[test]
    fn test_checkin_sends_null_user() {
        let body = serde_json::to_value(AssetAssignment::default()).unwrap();
        assert_eq!(body, json!({"user_id": null, "notes": null}));
    }
}
