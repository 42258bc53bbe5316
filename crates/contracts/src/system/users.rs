use serde::{Deserialize, Serialize};

use crate::domain::common::{EntityId, EntityStatus};
use crate::shared::resource::Resource;
use crate::shared::validation::{FieldErrors, Validate, ValidationRules};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: EntityId,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub role_id: Option<EntityId>,
    #[serde(default)]
    pub role_name: Option<String>,
    #[serde(default)]
    pub status: EntityStatus,
    #[serde(default)]
    pub last_login_at: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserDraft {
    pub username: String,
    pub email: String,
    pub full_name: String,
    /// Sent only when filled in; an edit without a password keeps the old one.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub password: String,
    pub role_id: Option<EntityId>,
    pub status: EntityStatus,
}

impl Validate for UserDraft {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.check(
            "username",
            ValidationRules::required()
                .with_max_length(64)
                .validate_string(&self.username, "Username"),
        );
        errors.check(
            "email",
            ValidationRules::required().validate_string(&self.email, "Email"),
        );
        if !self.email.trim().is_empty() && !self.email.contains('@') {
            errors.add("email", "Email must contain '@'");
        }
        if !self.password.is_empty() && self.password.chars().count() < 8 {
            errors.add("password", "Password must be at least 8 characters");
        }
        errors
    }
}

impl Resource for User {
    type Draft = UserDraft;

    const SEGMENT: &'static str = "users";
    const LABEL: &'static str = "Users";
    const SINGULAR: &'static str = "user";

    fn id(&self) -> EntityId {
        self.id
    }

    fn title(&self) -> String {
        self.username.clone()
    }

    fn to_draft(&self) -> UserDraft {
        UserDraft {
            username: self.username.clone(),
            email: self.email.clone().unwrap_or_default(),
            full_name: self.full_name.clone().unwrap_or_default(),
            password: String::new(),
            role_id: self.role_id,
            status: self.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_edit_draft_does_not_send_password() {
        let user: User = serde_json::from_value(json!({
            "id": 4, "username": "mlee", "email": "mlee@example.com", "role_id": 2
        }))
        .unwrap();
        let body = serde_json::to_value(user.to_draft()).unwrap();
        assert!(body.get("password").is_none());
        assert_eq!(body["role_id"], json!(2));
    }

    #[test]
    fn test_validation() {
        let draft = UserDraft {
            username: "mlee".into(),
            email: "not-an-email".into(),
            password: "short".into(),
            ..Default::default()
        };
        let errors = draft.validate();
        assert!(errors.get("email").is_some());
        assert!(errors.get("password").is_some());
        assert!(errors.get("username").is_none());
    }
}
