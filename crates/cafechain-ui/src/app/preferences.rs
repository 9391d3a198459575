//! Persistence and environment helpers for the app shell.

use crate::core::auth::SessionPersistence;
use crate::core::config::{UiConfig, api_base_for_origin};
use crate::core::session::Session;
use gloo::storage::{LocalStorage, Storage};
use gloo::utils::window;
use serde::Serialize;
use tracing::warn;
use web_sys::Url;

pub(crate) const SESSION_KEY: &str = "cafechain.session";
pub(crate) const LOG_LEVEL_KEY: &str = "cafechain.log_level";
pub(crate) const API_BASE_KEY: &str = "cafechain.api_base";
pub(crate) const LOGIN_TIMEOUT_KEY: &str = "cafechain.login_timeout_ms";

/// Resolve runtime configuration from the page location and storage overrides.
pub(crate) fn load_config() -> UiConfig {
    let mut config = UiConfig::default().with_api_base_url(api_base_url());
    if let Ok(base) = LocalStorage::get::<String>(API_BASE_KEY) {
        config = config.with_api_base_url(base);
    }
    if let Ok(timeout_ms) = LocalStorage::get::<u32>(LOGIN_TIMEOUT_KEY) {
        config = config.with_login_timeout_ms(timeout_ms);
    }
    config
}

pub(crate) fn load_log_level() -> Option<String> {
    LocalStorage::get::<String>(LOG_LEVEL_KEY).ok()
}

pub(crate) fn api_base_url() -> String {
    let href = window()
        .location()
        .href()
        .unwrap_or_else(|_| "http://localhost:8080".to_string());
    match Url::new(&href) {
        Ok(url) => api_base_for_origin(&url.protocol(), &url.hostname(), &url.port()),
        Err(_) => crate::core::config::DEFAULT_API_BASE_URL.to_string(),
    }
}

/// `localStorage`-backed session mirror.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct LocalSessionStore;

impl SessionPersistence for LocalSessionStore {
    fn load(&self) -> Option<Session> {
        match LocalStorage::get::<Session>(SESSION_KEY) {
            Ok(session) => Some(session),
            Err(gloo::storage::errors::StorageError::KeyNotFound(_)) => None,
            Err(err) => {
                log_storage_error("get", SESSION_KEY, &err.to_string());
                delete_storage(SESSION_KEY);
                None
            }
        }
    }

    fn save(&self, session: &Session) {
        set_storage(SESSION_KEY, session);
    }

    fn clear(&self) {
        delete_storage(SESSION_KEY);
    }
}

fn set_storage<T: Serialize>(key: &'static str, value: T) {
    if let Err(err) = LocalStorage::set(key, value) {
        log_storage_error("set", key, &err.to_string());
    }
}

fn delete_storage(key: &'static str) {
    LocalStorage::delete(key);
}

fn log_storage_error(operation: &'static str, key: &'static str, detail: &str) {
    warn!(operation, key, detail, "storage operation failed");
}
