//! User settings for Fintrix
//!
//! Holds the display currency, the webhook endpoints used by the assistant and
//! wallet widgets, request timing, and the default log filter.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::paths::FintrixPaths;
use crate::error::FintrixError;

/// Default endpoint for the chat assistant webhook
pub const DEFAULT_ASSISTANT_URL: &str =
    "https://maestro007.app.n8n.cloud/webhook-test/d9f82c89-602e-4245-a833-5ee896a6c2aa";

/// Default endpoint for the wallet summary webhook
pub const DEFAULT_WALLET_URL: &str = "https://maestro007.app.n8n.cloud/webhook-test/fintrix-update";

/// User settings for Fintrix
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used for totals that span records
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Assistant webhook endpoint
    #[serde(default = "default_assistant_url")]
    pub assistant_url: String,

    /// Wallet summary webhook endpoint
    #[serde(default = "default_wallet_url")]
    pub wallet_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Wallet refresh interval in seconds for watch mode
    #[serde(default = "default_wallet_refresh_secs")]
    pub wallet_refresh_secs: u64,

    /// Client tag sent with wallet summary requests
    #[serde(default = "default_client_tag")]
    pub client_tag: String,

    /// Default tracing filter directive (overridden by `RUST_LOG`)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_assistant_url() -> String {
    DEFAULT_ASSISTANT_URL.to_string()
}

fn default_wallet_url() -> String {
    DEFAULT_WALLET_URL.to_string()
}

fn default_request_timeout_secs() -> u64 {
    5
}

fn default_wallet_refresh_secs() -> u64 {
    5 * 60
}

fn default_client_tag() -> String {
    "fintrix-app".to_string()
}

fn default_log_level() -> String {
    "fintrix=warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            assistant_url: default_assistant_url(),
            wallet_url: default_wallet_url(),
            request_timeout_secs: default_request_timeout_secs(),
            wallet_refresh_secs: default_wallet_refresh_secs(),
            client_tag: default_client_tag(),
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Request timeout as a Duration (at least one second)
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }

    /// Wallet refresh interval as a Duration (at least one second)
    pub fn wallet_refresh(&self) -> Duration {
        Duration::from_secs(self.wallet_refresh_secs.max(1))
    }

    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &FintrixPaths) -> Result<Self, FintrixError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                FintrixError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                FintrixError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FintrixPaths) -> Result<(), FintrixError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            FintrixError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            FintrixError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}
