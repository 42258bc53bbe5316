//! Client-side draft checks and the field-error map shared with backend
//! validation payloads.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Field name -> message, plus an optional message not tied to any field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldErrors {
    pub fields: BTreeMap<String, String>,
    pub general: Option<String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.general.is_none()
    }

    /// Keeps the first message recorded for a field.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.fields.entry(field.into()).or_insert_with(|| message.into());
    }

    pub fn set_general(&mut self, message: impl Into<String>) {
        self.general = Some(message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// Run one rule and record its message under `field` on failure.
    pub fn check(&mut self, field: &str, result: Result<(), String>) {
        if let Err(message) = result {
            self.add(field, message);
        }
    }

    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

/// Implemented by every draft type. An empty map means the draft may be sent.
pub trait Validate {
    fn validate(&self) -> FieldErrors;
}

/// Validation rules for a single field
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ValidationRules {
    pub required: bool,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
}

impl ValidationRules {
    pub const fn none() -> Self {
        Self {
            required: false,
            min: None,
            max: None,
            min_length: None,
            max_length: None,
        }
    }

    pub const fn required() -> Self {
        Self {
            required: true,
            ..Self::none()
        }
    }

    pub const fn with_max_length(self, max: usize) -> Self {
        Self {
            max_length: Some(max),
            ..self
        }
    }

    pub const fn with_min(self, min: f64) -> Self {
        Self {
            min: Some(min),
            ..self
        }
    }

    pub fn validate_string(&self, value: &str, field_label: &str) -> Result<(), String> {
        let len = value.trim().chars().count();
        if self.required && len == 0 {
            return Err(format!("{} is required", field_label));
        }
        if let Some(min) = self.min_length {
            if len > 0 && len < min {
                return Err(format!("{} must be at least {} characters", field_label, min));
            }
        }
        if let Some(max) = self.max_length {
            if len > max {
                return Err(format!("{} must be at most {} characters", field_label, max));
            }
        }
        Ok(())
    }

    pub fn validate_number(&self, value: f64, field_label: &str) -> Result<(), String> {
        if let Some(min) = self.min {
            if value < min {
                return Err(format!("{} must be at least {}", field_label, min));
            }
        }
        if let Some(max) = self.max {
            if value > max {
                return Err(format!("{} must be at most {}", field_label, max));
            }
        }
        Ok(())
    }

    pub fn validate_option<T>(&self, value: &Option<T>, field_label: &str) -> Result<(), String> {
        if self.required && value.is_none() {
            return Err(format!("{} is required", field_label));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_string_rejects_blank() {
        let rules = ValidationRules::required();
        assert!(rules.validate_string("   ", "Name").is_err());
        assert!(rules.validate_string("Laptop", "Name").is_ok());
    }

    #[test]
    fn test_max_length() {
        let rules = ValidationRules::none().with_max_length(3);
        assert!(rules.validate_string("abcd", "Code").is_err());
        assert!(rules.validate_string("", "Code").is_ok());
    }

    #[test]
    fn test_number_bounds() {
        let rules = ValidationRules::none().with_min(0.0);
        assert_eq!(
            rules.validate_number(-1.0, "Quantity"),
            Err("Quantity must be at least 0".to_string())
        );
        assert!(rules.validate_number(0.0, "Quantity").is_ok());
    }

    #[test]
    fn test_field_errors_keep_first_message() {
        let mut errors = FieldErrors::new();
        errors.add("name", "first");
        errors.add("name", "second");
        assert_eq!(errors.get("name"), Some("first"));
        assert!(errors.clone().into_result().is_err());
        assert!(FieldErrors::new().into_result().is_ok());
    }
}
