//! Application Configuration
//!
//! Compile-time defaults, optionally overridden at runtime by a
//! `window.__TASKBOARD_CONFIG__` object set before the bundle loads.

use board_dnd::SensorConfig;
use serde::Deserialize;
use thiserror::Error;
use tracing::Level;
use wasm_bindgen::JsValue;

use crate::api::DEFAULT_AUTH_COOKIE;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";
pub const DEFAULT_TOAST_TTL_MS: u32 = 4000;

/// Global the host page may set to override defaults
pub const RUNTIME_CONFIG_KEY: &str = "__TASKBOARD_CONFIG__";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("runtime config is malformed: {0}")]
    Malformed(String),
    #[error("api_base_url must not be empty")]
    EmptyApiUrl,
    #[error("unknown log level {0:?}")]
    LogLevel(String),
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Prefix of every task API route, without the trailing slash
    pub api_base_url: String,
    /// Cookie holding the bearer token
    pub auth_cookie: String,
    pub toast_ttl_ms: u32,
    pub log_level: String,
    pub sensors: SensorConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: option_env!("TASKBOARD_API_URL")
                .unwrap_or(DEFAULT_API_BASE_URL)
                .to_string(),
            auth_cookie: DEFAULT_AUTH_COOKIE.to_string(),
            toast_ttl_ms: DEFAULT_TOAST_TTL_MS,
            log_level: option_env!("TASKBOARD_LOG").unwrap_or("info").to_string(),
            sensors: SensorConfig::default(),
        }
    }
}

impl AppConfig {
    /// Overrides in JSON form; absent keys keep their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(|e| ConfigError::Malformed(e.to_string()))?;
        config.validated()
    }

    pub fn from_js(value: JsValue) -> Result<Self, ConfigError> {
        let config: Self = serde_wasm_bindgen::from_value(value).map_err(|e| ConfigError::Malformed(e.to_string()))?;
        config.validated()
    }

    /// Defaults merged with the page's runtime overrides, if any
    pub fn load() -> Result<Self, ConfigError> {
        let Some(window) = web_sys::window() else {
            return Ok(Self::default());
        };
        let value = js_sys::Reflect::get(&window, &JsValue::from_str(RUNTIME_CONFIG_KEY))
            .map_err(|_| ConfigError::Malformed(format!("window.{} is not readable", RUNTIME_CONFIG_KEY)))?;
        if value.is_undefined() || value.is_null() {
            return Ok(Self::default());
        }
        Self::from_js(value)
    }

    pub fn level(&self) -> Result<Level, ConfigError> {
        self.log_level
            .parse::<Level>()
            .map_err(|_| ConfigError::LogLevel(self.log_level.clone()))
    }

    fn validated(mut self) -> Result<Self, ConfigError> {
        self.api_base_url = self.api_base_url.trim().trim_end_matches('/').to_string();
        if self.api_base_url.is_empty() {
            return Err(ConfigError::EmptyApiUrl);
        }
        self.level()?;
        Ok(self)
    }
}
