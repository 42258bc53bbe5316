use web_sys::window;

use crate::shared::config::config;

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

fn token_key() -> &'static str {
    &config().auth.token_storage_key
}

/// Save the bearer token to localStorage
pub fn save_token(token: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(token_key(), token);
    }
}

/// Get the bearer token from localStorage
pub fn get_token() -> Option<String> {
    get_local_storage()?
        .get_item(token_key())
        .ok()?
        .filter(|token| !token.trim().is_empty())
}

pub fn clear_token() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(token_key());
    }
}
