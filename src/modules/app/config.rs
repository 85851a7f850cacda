use log::warn;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::{
    CONFIG_FILE, DEBOUNCE_WAIT_MS, MAX_ACTIVE_TOASTS, REQUEST_TIMEOUT_MS,
    TOAST_DEFAULT_DURATION_MS,
};

/// Client configuration, read once at startup.
///
/// The file is optional: a missing or unreadable config falls back to
/// the built-in defaults instead of failing the bootstrap, and fields
/// left out of the file keep their default values.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub debounce_wait_ms: u64,
    pub request_timeout_ms: u64,
    pub toast_duration_ms: u64,
    pub max_active_toasts: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: "/api".to_string(),
            debounce_wait_ms: DEBOUNCE_WAIT_MS,
            request_timeout_ms: REQUEST_TIMEOUT_MS,
            toast_duration_ms: TOAST_DEFAULT_DURATION_MS,
            max_active_toasts: MAX_ACTIVE_TOASTS,
        }
    }
}

impl ClientConfig {
    /// Load from the well-known config path.
    pub fn load() -> Self {
        Self::load_from(CONFIG_FILE)
    }

    /// Load from an explicit path, falling back to defaults when the
    /// file is missing or malformed.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Self {
        let contents = match std::fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(_) => return Self::default(), // no config file is fine
        };

        match serde_json::from_str(&contents) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Malformed client config at {}: {}. Using defaults.",
                    path.as_ref().display(),
                    e
                );
                Self::default()
            }
        }
    }
}
