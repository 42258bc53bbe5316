use contracts::shared::api_error::ApiError;
use contracts::shared::list::decode_entity;
use contracts::system::auth::{LoginRequest, LoginResponse, UserInfo};
use gloo_net::http::Request;

use crate::shared::api_utils::{self, api_base, Method};

/// Login with username and password
pub async fn login(username: String, password: String) -> Result<LoginResponse, ApiError> {
    let request = LoginRequest { username, password };
    let value = api_utils::send_json(Method::Post, "/api/auth/login", &request).await?;
    decode_entity(value)
}

/// Current user for `token`. The token is passed explicitly because it is
/// verified before being trusted.
pub async fn me(token: &str) -> Result<UserInfo, ApiError> {
    let url = format!("{}/api/auth/me", api_base());
    let response = Request::get(&url)
        .header("Authorization", &format!("Bearer {}", token))
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    if !response.ok() {
        return Err(ApiError::from_response(status, &text));
    }
    let value = serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))?;
    decode_entity(value)
}

/// Best effort; the local session is torn down whatever the answer.
pub async fn logout() -> Result<(), ApiError> {
    api_utils::send_json(Method::Post, "/api/auth/logout", &serde_json::json!({}))
        .await
        .map(|_| ())
}
