use crate::domain::dashboard::{DEFAULT_SETTLE_MS, ResponsePolicy};
use crate::domain::errors::ConfigError;
use crate::domain::market_data::Ticker;
use std::str::FromStr;

pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";
pub const DEFAULT_TICKER: &str = "AAPL";

/// `window` globals that override the defaults at startup
pub const API_BASE_GLOBAL: &str = "STOCK_DASHBOARD_API_BASE";
pub const RESPONSE_POLICY_GLOBAL: &str = "STOCK_DASHBOARD_RESPONSE_POLICY";

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub api_base_url: String,
    pub debounce_ms: u32,
    pub initial_ticker: Ticker,
    pub response_policy: ResponsePolicy,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE.to_string(),
            debounce_ms: DEFAULT_SETTLE_MS,
            initial_ticker: Ticker::from(DEFAULT_TICKER),
            response_policy: ResponsePolicy::default(),
        }
    }
}

impl DashboardConfig {
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    pub fn with_debounce_ms(mut self, debounce_ms: u32) -> Self {
        self.debounce_ms = debounce_ms;
        self
    }

    pub fn with_initial_ticker(mut self, ticker: &str) -> Self {
        self.initial_ticker = Ticker::normalize(ticker);
        self
    }

    pub fn with_response_policy(mut self, policy: ResponsePolicy) -> Self {
        self.response_policy = policy;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_base_url.trim().is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }
        if self.debounce_ms == 0 {
            return Err(ConfigError::ZeroDebounce);
        }
        Ok(())
    }

    /// Apply optional string overrides, as read from the page
    pub fn with_overrides(
        mut self,
        api_base: Option<String>,
        policy: Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(url) = api_base {
            self.api_base_url = url;
        }
        if let Some(policy) = policy {
            self.response_policy =
                ResponsePolicy::from_str(&policy).map_err(|_| ConfigError::UnknownPolicy(policy))?;
        }
        self.validate()?;
        Ok(self)
    }

    /// Defaults overridden by the `window` globals, when the page sets them
    pub fn from_window() -> Result<Self, ConfigError> {
        Self::default().with_overrides(read_global(API_BASE_GLOBAL), read_global(RESPONSE_POLICY_GLOBAL))
    }
}

fn read_global(key: &str) -> Option<String> {
    let window = gloo::utils::window();
    js_sys::Reflect::get(&window, &wasm_bindgen::JsValue::from_str(key))
        .ok()
        .and_then(|value| value.as_string())
}
