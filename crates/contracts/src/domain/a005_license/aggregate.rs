use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::{blank_as_null, check_optional_date, parse_date, EntityId, EntityStatus};
use crate::shared::resource::Resource;
use crate::shared::validation::{FieldErrors, Validate, ValidationRules};

/// Licenses expiring within this many days are flagged.
pub const EXPIRY_WARNING_DAYS: i64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expiry {
    /// No expiration date recorded.
    Perpetual,
    Valid,
    ExpiringSoon { days_left: i64 },
    Expired,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct License {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub product_key: Option<String>,
    #[serde(default)]
    pub vendor: Option<String>,
    #[serde(default)]
    pub seats: i64,
    #[serde(default)]
    pub seats_used: i64,
    #[serde(default)]
    pub expiration_date: Option<String>,
    #[serde(default)]
    pub status: EntityStatus,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl License {
    pub fn seats_available(&self) -> i64 {
        (self.seats - self.seats_used).max(0)
    }

    pub fn expiry(&self, today: NaiveDate) -> Expiry {
        let Some(date) = self.expiration_date.as_deref().and_then(parse_date) else {
            return Expiry::Perpetual;
        };
        let days_left = (date - today).num_days();
        if days_left < 0 {
            Expiry::Expired
        } else if days_left <= EXPIRY_WARNING_DAYS {
            Expiry::ExpiringSoon { days_left }
        } else {
            Expiry::Valid
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LicenseDraft {
    pub name: String,
    #[serde(serialize_with = "blank_as_null")]
    pub product_key: String,
    #[serde(serialize_with = "blank_as_null")]
    pub vendor: String,
    pub seats: i64,
    #[serde(serialize_with = "blank_as_null")]
    pub expiration_date: String,
    pub status: EntityStatus,
}

impl Validate for LicenseDraft {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.check(
            "name",
            ValidationRules::required()
                .with_max_length(255)
                .validate_string(&self.name, "Name"),
        );
        errors.check(
            "seats",
            ValidationRules::none()
                .with_min(1.0)
                .validate_number(self.seats as f64, "Seats"),
        );
        errors.check(
            "expiration_date",
            check_optional_date(&self.expiration_date, "Expiration date"),
        );
        errors
    }
}

impl Resource for License {
    type Draft = LicenseDraft;

    const SEGMENT: &'static str = "licenses";
    const LABEL: &'static str = "Licenses";
    const SINGULAR: &'static str = "license";
    const HAS_DASHBOARD: bool = true;

    fn id(&self) -> EntityId {
        self.id
    }

    fn title(&self) -> String {
        self.name.clone()
    }

    fn to_draft(&self) -> LicenseDraft {
        LicenseDraft {
            name: self.name.clone(),
            product_key: self.product_key.clone().unwrap_or_default(),
            vendor: self.vendor.clone().unwrap_or_default(),
            seats: self.seats,
            expiration_date: self.expiration_date.clone().unwrap_or_default(),
            status: self.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn license(expiration: Option<&str>) -> License {
        serde_json::from_value(json!({
            "id": 1, "name": "Office", "seats": 10, "seats_used": 12,
            "expiration_date": expiration
        }))
        .unwrap()
    }

    #[test]
    fn test_expiry() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        assert_eq!(license(None).expiry(today), Expiry::Perpetual);
        assert_eq!(license(Some("2024-05-31")).expiry(today), Expiry::Expired);
        assert_eq!(
            license(Some("2024-06-11")).expiry(today),
            Expiry::ExpiringSoon { days_left: 10 }
        );
        assert_eq!(license(Some("2025-01-01")).expiry(today), Expiry::Valid);
    }

    #[test]
    fn test_seats_available_never_negative() {
        assert_eq!(license(None).seats_available(), 0);
    }

    #[test]
    fn test_draft_requires_a_seat() {
        let draft = LicenseDraft {
            name: "IDE".into(),
            seats: 0,
            ..Default::default()
        };
        assert!(draft.validate().get("seats").is_some());
    }
}
