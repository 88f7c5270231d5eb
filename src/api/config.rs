//! Board API configuration
//!
//! An explicitly constructed configuration object passed to the HTTP
//! client: base URL, bearer token, app identity headers, request
//! timeout. Nothing here is global; callers build one and hand it to
//! [`crate::api::HttpBoardApi::new`].

use std::time::Duration;

/// Connection settings for the remote board API
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL, e.g. `http://api-test-board.com:8000/api`
    pub base_url: String,
    /// Bearer token attached to every request, when present
    pub auth_token: Option<String>,
    /// Sent as the `X-App-Name` header
    pub app_name: String,
    /// Sent as the `X-App-Version` header
    pub app_version: String,
    /// Per-request timeout
    pub timeout: Duration,
    /// Log every request and response at debug level
    pub debug: bool,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            auth_token: None,
            app_name: "Board Yet".to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            timeout: Duration::from_secs(10),
            debug: false,
        }
    }

    /// Read settings from `BOARDYET_*` environment variables, falling
    /// back to the defaults of [`ApiConfig::new`]
    pub fn from_env() -> Self {
        let base_url = std::env::var("BOARDYET_API_URL")
            .unwrap_or_else(|_| "http://api-test-board.com:8000/api".to_string());
        let mut config = Self::new(base_url);
        if let Ok(token) = std::env::var("BOARDYET_API_TOKEN") {
            if !token.is_empty() {
                config.auth_token = Some(token);
            }
        }
        if let Ok(name) = std::env::var("BOARDYET_APP_NAME") {
            config.app_name = name;
        }
        config.debug = std::env::var("BOARDYET_DEBUG").map(|v| v == "true").unwrap_or(false);
        config
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    pub fn with_debug(mut self) -> Self {
        self.debug = true;
        self
    }
}
