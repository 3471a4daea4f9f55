//! Application configuration with persistence.
//!
//! The configuration file lives at `<config dir>/lazywallet/config.json`.
//! Missing fields fall back to their defaults, so a partial file is valid.
//! Command-line flags are layered on top with [`AppConfig::apply_overrides`].
//!
//! # Example
//!
//! ```ignore
//! let mut config = AppConfig::load();
//! config.wallet_address = Some("0x5290...".into());
//! config.save()?;
//! ```

use color_eyre::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

use super::platform::AppPaths;
use crate::client::HttpConfig;
use crate::client::http::DEFAULT_TIMEOUT_SECS;
use crate::domain::TokenFormat;
use crate::domain::amount::MAX_TOKEN_DECIMALS;

/// Backend used when nothing else is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

/// Accepted range for `request_timeout_secs`.
pub const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;

// ============================================================================
// AppConfig
// ============================================================================

/// Persistent settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL of the transfer history backend.
    pub api_base_url: String,
    /// Wallet whose transfers are shown. `None` means do not fetch.
    pub wallet_address: Option<String>,
    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
    /// Scale and symbol used to format quantities.
    pub token: TokenFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            wallet_address: None,
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            token: TokenFormat::default(),
        }
    }
}

/// Values given on the command line. `None` leaves the file value alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub wallet_address: Option<String>,
    pub api_base_url: Option<String>,
    pub request_timeout_secs: Option<u64>,
    pub token_symbol: Option<String>,
    pub token_decimals: Option<u32>,
}

impl AppConfig {
    /// Loads the configuration from disk.
    ///
    /// A missing or unreadable file yields the defaults; the reason is
    /// logged rather than returned.
    #[must_use]
    pub fn load() -> Self {
        match Self::try_load() {
            Ok(config) => config,
            Err(err) => {
                tracing::info!("Config load failed, using defaults: {err}");
                Self::default()
            }
        }
    }

    /// Attempts to load the configuration from its default location.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be determined, the file cannot be
    /// read, or the JSON content cannot be parsed.
    pub fn try_load() -> Result<Self> {
        Self::load_from(&AppPaths::new().config_file()?)
    }

    /// Saves the configuration to its default location.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be determined or the file cannot
    /// be written.
    pub fn save(&self) -> Result<()> {
        self.save_to(&AppPaths::new().config_file()?)
    }

    /// Reads a configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let mut config: Self = serde_json::from_str(&content)?;
        config.enforce_limits();
        Ok(config)
    }

    /// Writes the configuration as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Layers command-line values over the loaded configuration.
    pub fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(address) = overrides.wallet_address {
            self.wallet_address = Some(address);
        }
        if let Some(url) = overrides.api_base_url {
            self.api_base_url = url;
        }
        if let Some(secs) = overrides.request_timeout_secs {
            self.request_timeout_secs = secs;
        }
        if let Some(symbol) = overrides.token_symbol {
            self.token.symbol = symbol;
        }
        if let Some(decimals) = overrides.token_decimals {
            self.token.decimals = decimals;
        }
        self.enforce_limits();
    }

    /// Clamps the timeout and token scale into their supported ranges.
    fn enforce_limits(&mut self) {
        let timeout = self
            .request_timeout_secs
            .clamp(MIN_REQUEST_TIMEOUT_SECS, MAX_REQUEST_TIMEOUT_SECS);
        if timeout != self.request_timeout_secs {
            tracing::warn!(
                requested = self.request_timeout_secs,
                used = timeout,
                "Request timeout out of range"
            );
            self.request_timeout_secs = timeout;
        }

        if self.token.decimals > MAX_TOKEN_DECIMALS {
            tracing::warn!(
                requested = self.token.decimals,
                used = MAX_TOKEN_DECIMALS,
                "Token decimals out of range"
            );
            self.token.decimals = MAX_TOKEN_DECIMALS;
        }
    }

    /// HTTP settings derived from this configuration.
    #[must_use]
    pub fn http_config(&self) -> HttpConfig {
        HttpConfig::with_timeout(Duration::from_secs(self.request_timeout_secs))
    }
}

// ============================================================================
// Tests
// ============================================================================
