//! Error taxonomy for calls against the REST backend.

use serde_json::Value;
use thiserror::Error;

use super::validation::FieldErrors;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Transport(String),

    #[error("{message}")]
    Validation { message: String, fields: FieldErrors },

    #[error("Not authenticated")]
    Unauthorized,

    #[error("Permission denied: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Server error {status}: {message}")]
    Server { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Classify a non-2xx response. `body` is the raw response text, which
    /// may be JSON in one of the shapes the backend emits, or plain text.
    pub fn from_response(status: u16, body: &str) -> Self {
        let payload: Option<Value> = serde_json::from_str(body).ok();
        let message = payload
            .as_ref()
            .and_then(extract_message)
            .unwrap_or_else(|| fallback_message(status, body));

        match status {
            401 => ApiError::Unauthorized,
            403 => ApiError::Forbidden(message),
            404 => ApiError::NotFound(message),
            400 | 422 => {
                let mut fields = payload
                    .as_ref()
                    .map(extract_field_errors)
                    .unwrap_or_default();
                // A field the form has no input for must still surface.
                if fields.general.is_none() {
                    fields.set_general(message.clone());
                }
                ApiError::Validation { message, fields }
            }
            _ => ApiError::Server { status, message },
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }

    /// Errors a form modal renders: per-field messages when the backend sent
    /// them, otherwise one general line.
    pub fn field_errors(&self) -> FieldErrors {
        match self {
            ApiError::Validation { fields, .. } if !fields.is_empty() => fields.clone(),
            other => {
                let mut errors = FieldErrors::new();
                errors.set_general(other.to_string());
                errors
            }
        }
    }
}

fn fallback_message(status: u16, body: &str) -> String {
    let text = body.trim();
    if text.is_empty() {
        format!("HTTP {}", status)
    } else {
        text.chars().take(300).collect()
    }
}

fn extract_message(payload: &Value) -> Option<String> {
    ["message", "error", "detail"]
        .iter()
        .find_map(|key| payload.get(*key).and_then(Value::as_str))
        .map(str::to_string)
}

fn extract_field_errors(payload: &Value) -> FieldErrors {
    let mut errors = FieldErrors::new();
    match payload.get("errors") {
        // {"errors": {"name": "required"}} or {"errors": {"name": ["required", ...]}}
        Some(Value::Object(map)) => {
            for (field, value) in map {
                if let Some(message) = first_message(value) {
                    errors.add(field.clone(), message);
                }
            }
        }
        // {"errors": [{"field": "name", "message": "required"}]}
        Some(Value::Array(items)) => {
            for item in items {
                let field = item
                    .get("field")
                    .or_else(|| item.get("path"))
                    .and_then(Value::as_str);
                let message = item
                    .get("message")
                    .or_else(|| item.get("msg"))
                    .and_then(Value::as_str);
                match (field, message) {
                    (Some(field), Some(message)) => errors.add(field, message),
                    (None, Some(message)) => errors.set_general(message),
                    _ => {}
                }
            }
        }
        _ => {}
    }
    errors
}

fn first_message(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Array(items) => items.iter().find_map(|v| v.as_str().map(str::to_string)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized() {
        assert_eq!(ApiError::from_response(401, ""), ApiError::Unauthorized);
        assert!(ApiError::from_response(401, "{}").is_unauthorized());
    }

    #[test]
    fn test_validation_with_field_map() {
        let body = r#"{"message":"Validation failed","errors":{"name":["Name is required"],"quantity":"Must be positive"}}"#;
        let err = ApiError::from_response(422, body);
        let fields = err.field_errors();
        assert_eq!(fields.get("name"), Some("Name is required"));
        assert_eq!(fields.get("quantity"), Some("Must be positive"));
        assert_eq!(err.to_string(), "Validation failed");
    }

    #[test]
    fn test_validation_with_field_list() {
        let body = r#"{"errors":[{"field":"email","message":"Email is taken"},{"message":"Check the form"}]}"#;
        let fields = ApiError::from_response(400, body).field_errors();
        assert_eq!(fields.get("email"), Some("Email is taken"));
        assert_eq!(fields.general.as_deref(), Some("Check the form"));
    }

    #[test]
    fn test_validation_without_fields_becomes_general_line() {
        let fields = ApiError::from_response(400, r#"{"error":"Duplicate asset tag"}"#).field_errors();
        assert!(fields.fields.is_empty());
        assert_eq!(fields.general.as_deref(), Some("Duplicate asset tag"));
    }

    #[test]
    fn test_not_found_and_server_errors() {
        assert_eq!(
            ApiError::from_response(404, r#"{"message":"Asset not found"}"#),
            ApiError::NotFound("Asset not found".to_string())
        );
        assert_eq!(
            ApiError::from_response(500, "boom"),
            ApiError::Server {
                status: 500,
                message: "boom".to_string()
            }
        );
        assert_eq!(
            ApiError::from_response(503, ""),
            ApiError::Server {
                status: 503,
                message: "HTTP 503".to_string()
            }
        );
    }

    #[test]
    fn test_non_validation_error_renders_as_general_line() {
        let fields = ApiError::Transport("offline".to_string()).field_errors();
        assert_eq!(fields.general.as_deref(), Some("Network error: offline"));
    }

    #[test]
    fn test_field_error_keeps_top_level_message() {
        let body = r#"{"message":"Validation failed","errors":{"serial":"already taken"}}"#;
        let fields = ApiError::from_response(422, body).field_errors();
        assert_eq!(fields.get("serial"), Some("already taken"));
        assert_eq!(fields.general.as_deref(), Some("Validation failed"));
    }
}
