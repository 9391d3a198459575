//! Runtime configuration for the UI.
//!
//! # Design
//! - Plain data with defaults; the wasm shell fills it from the page location.
//! - Values are clamped on construction so callers never see a zero timeout.

use tracing::level_filters::LevelFilter;

/// Default API origin used when the page location cannot be parsed.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:7070";
/// Default upper bound on a login round-trip.
pub const DEFAULT_LOGIN_TIMEOUT_MS: u32 = 15_000;
/// Smallest accepted login timeout.
pub const MIN_LOGIN_TIMEOUT_MS: u32 = 1_000;

/// Log level used when none is stored.
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::INFO;

/// Parse a stored log level name, case-insensitively.
#[must_use]
pub fn parse_log_level(value: &str) -> Option<LevelFilter> {
    match value.trim().to_ascii_lowercase().as_str() {
        "off" => Some(LevelFilter::OFF),
        "error" => Some(LevelFilter::ERROR),
        "warn" => Some(LevelFilter::WARN),
        "info" => Some(LevelFilter::INFO),
        "debug" => Some(LevelFilter::DEBUG),
        "trace" => Some(LevelFilter::TRACE),
        _ => None,
    }
}

/// Resolved UI configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiConfig {
    api_base_url: String,
    login_timeout_ms: u32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            login_timeout_ms: DEFAULT_LOGIN_TIMEOUT_MS,
        }
    }
}

impl UiConfig {
    /// Override the API origin; trailing slashes are dropped.
    #[must_use]
    pub fn with_api_base_url(mut self, base: impl Into<String>) -> Self {
        let base = base.into();
        let trimmed = base.trim().trim_end_matches('/');
        if !trimmed.is_empty() {
            self.api_base_url = trimmed.to_string();
        }
        self
    }

    /// Override the login timeout, clamped to [`MIN_LOGIN_TIMEOUT_MS`].
    #[must_use]
    pub fn with_login_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.login_timeout_ms = timeout_ms.max(MIN_LOGIN_TIMEOUT_MS);
        self
    }

    /// API origin without a trailing slash.
    #[must_use]
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    /// Login timeout in milliseconds.
    #[must_use]
    pub const fn login_timeout_ms(&self) -> u32 {
        self.login_timeout_ms
    }

    /// Absolute URL for an API path.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url, path.trim_start_matches('/'))
    }
}

/// Map the page origin to the API origin.
///
/// The dev server on port 8080 talks to the API on 7070; every other origin is
/// assumed to serve the API itself.
#[must_use]
pub fn api_base_for_origin(protocol: &str, host: &str, port: &str) -> String {
    let mapped_port = match port {
        "" => None,
        "8080" => Some("7070"),
        other => Some(other),
    };
    let mut base = format!("{protocol}//{host}");
    if let Some(port) = mapped_port {
        base.push(':');
        base.push_str(port);
    }
    base
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let config = UiConfig::default();
        assert_eq!(config.api_base_url(), DEFAULT_API_BASE_URL);
        assert_eq!(config.login_timeout_ms(), DEFAULT_LOGIN_TIMEOUT_MS);
    }

    #[test]
    fn builders_normalise_input() {
        let config = UiConfig::default()
            .with_api_base_url("https://api.cafechain.app/")
            .with_login_timeout_ms(0);
        assert_eq!(config.api_base_url(), "https://api.cafechain.app");
        assert_eq!(config.login_timeout_ms(), MIN_LOGIN_TIMEOUT_MS);
        assert_eq!(
            config.endpoint("/api/auth/login"),
            "https://api.cafechain.app/api/auth/login"
        );
    }

    #[test]
    fn blank_base_keeps_previous() {
        let config = UiConfig::default().with_api_base_url("  ");
        assert_eq!(config.api_base_url(), DEFAULT_API_BASE_URL);
    }

    #[test]
    fn log_levels_parse_loosely() {
        assert_eq!(parse_log_level("DEBUG"), Some(LevelFilter::DEBUG));
        assert_eq!(parse_log_level(" warn "), Some(LevelFilter::WARN));
        assert_eq!(parse_log_level("verbose"), None);
    }

    #[test]
    fn origin_mapping_swaps_dev_port() {
        assert_eq!(
            api_base_for_origin("http:", "localhost", "8080"),
            "http://localhost:7070"
        );
        assert_eq!(
            api_base_for_origin("https:", "cafechain.app", ""),
            "https://cafechain.app"
        );
        assert_eq!(
            api_base_for_origin("http:", "10.0.0.2", "3000"),
            "http://10.0.0.2:3000"
        );
    }
}
