//! Runtime configuration for the console.
//!
//! Defaults are embedded in the bundle; a deployment may override any section
//! by defining `window.__CONSOLE_CONFIG__` before the wasm module starts.

use contracts::shared::config::ConsoleConfig;
use once_cell::sync::OnceCell;
use wasm_bindgen::JsValue;

const OVERRIDE_KEY: &str = "__CONSOLE_CONFIG__";

static CONFIG: OnceCell<ConsoleConfig> = OnceCell::new();

/// The active configuration, loaded on first use.
pub fn config() -> &'static ConsoleConfig {
    CONFIG.get_or_init(load)
}

fn load() -> ConsoleConfig {
    let embedded = match ConsoleConfig::embedded() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Embedded config is invalid, using defaults: {:#}", e);
            ConsoleConfig::default()
        }
    };

    let Some(value) = window_override() else {
        return embedded;
    };

    match serde_wasm_bindgen::from_value::<ConsoleConfig>(value) {
        Ok(config) => match config.validated() {
            Ok(config) => {
                log::info!("Using config from window.{}", OVERRIDE_KEY);
                config
            }
            Err(e) => {
                log::warn!("Ignoring window.{}: {:#}", OVERRIDE_KEY, e);
                embedded
            }
        },
        Err(e) => {
            log::warn!("Ignoring window.{}: {}", OVERRIDE_KEY, e);
            embedded
        }
    }
}

fn window_override() -> Option<JsValue> {
    let window = web_sys::window()?;
    let value = js_sys::Reflect::get(&window, &JsValue::from_str(OVERRIDE_KEY)).ok()?;
    if value.is_undefined() || value.is_null() {
        None
    } else {
        Some(value)
    }
}
