//! HTTP plumbing shared by every page.
//!
//! All requests carry the stored bearer token and every non-2xx answer is
//! turned into an [`ApiError`] so callers can route it to a form, a list
//! banner or the session.

use contracts::shared::api_error::ApiError;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::Serialize;
use serde_json::Value;

use crate::shared::config::config;
use crate::system::auth::storage;

/// Write verbs accepted by [`send_json`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Post,
    Put,
    Patch,
}

impl Method {
    fn as_str(&self) -> &'static str {
        match self {
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
        }
    }
}

/// Get the base URL for API requests.
///
/// `api.base_url` wins when configured; otherwise the page's own protocol and
/// host are used with `api.port`.
pub fn api_base() -> String {
    if let Some(base) = config().api.base_url.as_deref() {
        return base.to_string();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, config().api.port)
}

/// `base + path`, followed by the url-encoded query string when `params` is
/// not empty.
pub fn build_url(base: &str, path: &str, params: &[(String, String)]) -> String {
    let mut url = format!("{}{}", base, path);
    if !params.is_empty() {
        let query = params
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");
        url.push('?');
        url.push_str(&query);
    }
    url
}

fn with_auth(builder: RequestBuilder) -> RequestBuilder {
    match storage::get_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

/// Body text parsed as JSON; an empty body becomes `null`.
fn parse_body(text: &str) -> Result<Value, ApiError> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
}

async fn read(response: Response, method: &str, url: &str) -> Result<Value, ApiError> {
    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    if !response.ok() {
        let error = ApiError::from_response(status, &text);
        log::warn!("{} {} -> {}: {}", method, url, status, error);
        return Err(error);
    }
    log::debug!("{} {} -> {}", method, url, status);
    parse_body(&text)
}

/// `GET path?params` with the bearer token.
pub async fn get_json(path: &str, params: &[(String, String)]) -> Result<Value, ApiError> {
    let url = build_url(&api_base(), path, params);
    let response = with_auth(Request::get(&url))
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    read(response, "GET", &url).await
}

/// JSON write with the bearer token.
pub async fn send_json<B: Serialize>(
    method: Method,
    path: &str,
    body: &B,
) -> Result<Value, ApiError> {
    let url = build_url(&api_base(), path, &[]);
    let builder = match method {
        Method::Post => Request::post(&url),
        Method::Put => Request::put(&url),
        Method::Patch => Request::patch(&url),
    };
    let response = with_auth(builder)
        .json(body)
        .map_err(|e| ApiError::Decode(format!("Failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    read(response, method.as_str(), &url).await
}

/// `DELETE path` with the bearer token. Any 2xx counts as success.
pub async fn delete(path: &str) -> Result<(), ApiError> {
    let url = build_url(&api_base(), path, &[]);
    let response = with_auth(Request::delete(&url))
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    read(response, "DELETE", &url).await.map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url_without_params() {
        assert_eq!(
            build_url("http://localhost:3000", "/api/assets", &[]),
            "http://localhost:3000/api/assets"
        );
    }

    #[test]
    fn test_build_url_encodes_params() {
        let params = vec![
            ("page".to_string(), "2".to_string()),
            ("search".to_string(), "dell & hp".to_string()),
        ];
        assert_eq!(
            build_url("", "/api/assets", &params),
            "/api/assets?page=2&search=dell%20%26%20hp"
        );
    }

    #[test]
    fn test_parse_body() {
        assert_eq!(parse_body("").unwrap(), Value::Null);
        assert_eq!(parse_body("{\"ok\":true}").unwrap()["ok"], true);
        assert!(matches!(parse_body("<html>"), Err(ApiError::Decode(_))));
    }
}
