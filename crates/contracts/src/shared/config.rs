use serde::{Deserialize, Serialize};

use super::list_state::FilterResetPolicy;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConsoleConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub list: ListConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Full origin of the backend, e.g. `https://inventory.example.com`.
    /// When absent the page's own host is used with `port`.
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListConfig {
    #[serde(default = "default_limit")]
    pub default_limit: u32,
    #[serde(default = "default_page_size_options")]
    pub page_size_options: Vec<u32>,
    #[serde(default)]
    pub reset_page_on_filter: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthConfig {
    #[serde(default = "default_token_key")]
    pub token_storage_key: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_port() -> u16 {
    3000
}

fn default_limit() -> u32 {
    10
}

fn default_page_size_options() -> Vec<u32> {
    vec![10, 25, 50, 100]
}

fn default_token_key() -> String {
    "auth_token".to_string()
}

fn default_level() -> String {
    "debug".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            port: default_port(),
        }
    }
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            page_size_options: default_page_size_options(),
            reset_page_on_filter: false,
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_storage_key: default_token_key(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

/// Default configuration embedded in the bundle
pub const DEFAULT_CONFIG: &str = r#"
[api]
port = 3000

[list]
default_limit = 10
page_size_options = [10, 25, 50, 100]
reset_page_on_filter = false

[auth]
token_storage_key = "auth_token"

[logging]
level = "debug"
"#;

impl ConsoleConfig {
    pub fn from_toml(contents: &str) -> anyhow::Result<Self> {
        let config: ConsoleConfig = toml::from_str(contents)?;
        config.validated()
    }

    pub fn embedded() -> anyhow::Result<Self> {
        Self::from_toml(DEFAULT_CONFIG)
    }

    /// Reject values the list pages cannot work with.
    pub fn validated(mut self) -> anyhow::Result<Self> {
        if self.list.default_limit == 0 {
            anyhow::bail!("list.default_limit must be greater than zero");
        }
        self.list.page_size_options.retain(|size| *size > 0);
        if !self.list.page_size_options.contains(&self.list.default_limit) {
            self.list.page_size_options.push(self.list.default_limit);
            self.list.page_size_options.sort_unstable();
        }
        if let Some(base) = self.api.base_url.as_mut() {
            while base.ends_with('/') {
                base.pop();
            }
        }
        Ok(self)
    }

    pub fn filter_reset_policy(&self) -> FilterResetPolicy {
        FilterResetPolicy::from_flag(self.list.reset_page_on_filter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = ConsoleConfig::embedded().unwrap();
        assert_eq!(config, ConsoleConfig::default());
        assert_eq!(config.api.port, 3000);
        assert_eq!(config.auth.token_storage_key, "auth_token");
        assert_eq!(config.filter_reset_policy(), FilterResetPolicy::KeepPage);
    }

    #[test]
    fn test_partial_override() {
        let config = ConsoleConfig::from_toml(
            r#"
            [api]
            base_url = "https://inventory.example.com/"

            [list]
            default_limit = 20
            reset_page_on_filter = true
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url.as_deref(), Some("https://inventory.example.com"));
        assert_eq!(config.list.page_size_options, vec![10, 20, 25, 50, 100]);
        assert_eq!(config.filter_reset_policy(), FilterResetPolicy::ResetToFirst);
    }

    #[test]
    fn test_zero_limit_is_rejected() {
        assert!(ConsoleConfig::from_toml("[list]\ndefault_limit = 0\n").is_err());
    }
}
