use serde::{Deserialize, Serialize};

use crate::domain::common::EntityId;

/// Grants every permission when present in a user's permission list.
pub const ALL_PERMISSIONS: &str = "*";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(alias = "access_token")]
    pub token: String,
    pub user: UserInfo,
}

/// The signed-in user as returned by `/api/auth/me`. Permissions are loaded
/// once per session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: EntityId,
    pub username: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub permissions: Vec<String>,
}

impl UserInfo {
    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions
            .iter()
            .any(|p| p == permission || p == ALL_PERMISSIONS)
    }

    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.username)
    }
}

/// Process-wide session. Starts in `Initializing` while a stored token is
/// being verified so gates do not redirect before the answer arrives.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionState {
    #[default]
    Initializing,
    Anonymous,
    Authenticated { token: String, user: UserInfo },
}

impl SessionState {
    /// First transition at startup. Returns the token that still has to be
    /// verified, if any.
    pub fn init(stored_token: Option<String>) -> (SessionState, Option<String>) {
        match stored_token.filter(|t| !t.trim().is_empty()) {
            Some(token) => (SessionState::Initializing, Some(token)),
            None => (SessionState::Anonymous, None),
        }
    }

    pub fn verified(token: String, user: UserInfo) -> SessionState {
        SessionState::Authenticated { token, user }
    }

    pub fn sign_in(response: LoginResponse) -> SessionState {
        SessionState::Authenticated {
            token: response.token,
            user: response.user,
        }
    }

    /// Verification failed, the user logged out, or any call answered 401.
    pub fn teardown() -> SessionState {
        SessionState::Anonymous
    }

    pub fn is_resolved(&self) -> bool {
        !matches!(self, SessionState::Initializing)
    }

    pub fn token(&self) -> Option<&str> {
        match self {
            SessionState::Authenticated { token, .. } => Some(token),
            _ => None,
        }
    }

    pub fn user(&self) -> Option<&UserInfo> {
        match self {
            SessionState::Authenticated { user, .. } => Some(user),
            _ => None,
        }
    }

    pub fn can(&self, permission: &str) -> bool {
        self.user()
            .map(|u| u.has_permission(permission))
            .unwrap_or(false)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    /// Token verification still running; render a placeholder.
    Pending,
    RedirectToLogin,
    Denied { permission: String },
    Granted,
}

/// Session check first, then permission membership.
pub fn evaluate_gate(session: &SessionState, required: Option<&str>) -> GateDecision {
    match session {
        SessionState::Initializing => GateDecision::Pending,
        SessionState::Anonymous => GateDecision::RedirectToLogin,
        SessionState::Authenticated { user, .. } => match required {
            Some(permission) if !user.has_permission(permission) => GateDecision::Denied {
                permission: permission.to_string(),
            },
            _ => GateDecision::Granted,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn user(permissions: &[&str]) -> UserInfo {
        serde_json::from_value(json!({
            "id": 1,
            "username": "jdoe",
            "permissions": permissions,
        }))
        .unwrap()
    }

    fn signed_in(permissions: &[&str]) -> SessionState {
        SessionState::verified("t0k3n".into(), user(permissions))
    }

    #[test]
    fn test_init_without_token_is_anonymous() {
        assert_eq!(SessionState::init(None), (SessionState::Anonymous, None));
        assert_eq!(SessionState::init(Some("  ".into())), (SessionState::Anonymous, None));
    }

    #[test]
    fn test_init_with_token_waits_for_verification() {
        let (state, to_verify) = SessionState::init(Some("abc".into()));
        assert_eq!(state, SessionState::Initializing);
        assert_eq!(to_verify.as_deref(), Some("abc"));
        assert_eq!(evaluate_gate(&state, None), GateDecision::Pending);
    }

    #[test]
    fn test_anonymous_redirects() {
        assert_eq!(
            evaluate_gate(&SessionState::Anonymous, Some("assets.view")),
            GateDecision::RedirectToLogin
        );
    }

    #[test]
    fn test_missing_permission_is_denied() {
        let session = signed_in(&["assets.view"]);
        assert_eq!(
            evaluate_gate(&session, Some("roles.view")),
            GateDecision::Denied { permission: "roles.view".into() }
        );
        assert_eq!(evaluate_gate(&session, Some("assets.view")), GateDecision::Granted);
        assert_eq!(evaluate_gate(&session, None), GateDecision::Granted);
    }

    #[test]
    fn test_wildcard_grants_everything() {
        let session = signed_in(&[ALL_PERMISSIONS]);
        assert_eq!(evaluate_gate(&session, Some("roles.update")), GateDecision::Granted);
        assert!(session.can("permissions.delete"));
    }

    #[test]
    fn test_teardown_clears_token() {
        let session = signed_in(&[]);
        assert_eq!(session.token(), Some("t0k3n"));
        let session = SessionState::teardown();
        assert_eq!(session.token(), None);
        assert!(!session.can("assets.view"));
    }

    #[test]
    fn test_login_response_accepts_access_token_alias() {
        let response: LoginResponse = serde_json::from_value(json!({
            "access_token": "abc",
            "user": {"id": 2, "username": "admin", "full_name": "Site Admin", "permissions": ["*"]}
        }))
        .unwrap();
        let session = SessionState::sign_in(response);
        assert_eq!(session.user().map(|u| u.display_name()), Some("Site Admin"));
    }
}
