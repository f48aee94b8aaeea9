use leptos::{mount_to_body, view};
use wasm_bindgen::prelude::*;

use crate::app::App;
use crate::config::AppConfig;
use crate::domain::logging::LogComponent;

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod event_utils;
pub mod infrastructure;
pub mod time_utils;
pub mod view_state;

/// Module start hook: panic hook and browser clock
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();
    domain::logging::init_time_provider(Box::new(infrastructure::services::BrowserTimeProvider));
}

/// Mount the app on `<body>`.
///
/// `config_json` is an optional [`AppConfig`] document; missing keys use
/// the defaults. Invalid JSON is returned to the caller as an error.
/// The console logger is installed here at the configured level; only the
/// first mount sets it.
#[wasm_bindgen]
pub fn mount(config_json: Option<String>) -> Result<(), JsValue> {
    let config =
        AppConfig::from_optional_json(config_json.as_deref()).map_err(|e| JsValue::from_str(&e.to_string()))?;

    domain::logging::init_logger(Box::new(infrastructure::services::ConsoleLogger::new(config.log_level)));

    log_info!(
        LogComponent::Presentation("Mount"),
        "🚀 Mounting with API {} (log level {})",
        config.api_base_url,
        config.log_level
    );

    mount_to_body(move || view! { <App config=config /> });
    Ok(())
}
