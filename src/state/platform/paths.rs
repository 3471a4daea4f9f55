//! Platform-specific locations of the config and log files.
//!
//! | Platform | Config | Log |
//! |----------|--------|-----|
//! | Linux | `~/.config/lazywallet/config.json` | `~/.local/share/lazywallet/lazywallet.log` |
//! | macOS | `~/Library/Application Support/lazywallet/config.json` | same directory |
//! | Windows | `%APPDATA%/lazywallet/config.json` | `%APPDATA%/lazywallet/lazywallet.log` |

use color_eyre::{Result, eyre::eyre};
use std::fs;
use std::path::PathBuf;

// ============================================================================
// Constants
// ============================================================================

/// Application name used for directory naming.
pub const APP_NAME: &str = "lazywallet";

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Default log file name.
pub const LOG_FILE_NAME: &str = "lazywallet.log";

// ============================================================================
// AppPaths
// ============================================================================

/// Resolves application directories, creating them on first use.
#[derive(Debug, Clone)]
pub struct AppPaths {
    app_name: String,
}

impl Default for AppPaths {
    fn default() -> Self {
        Self::new()
    }
}

impl AppPaths {
    #[must_use]
    pub fn new() -> Self {
        Self {
            app_name: APP_NAME.to_string(),
        }
    }

    /// Returns the configuration directory, creating it if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be determined or created.
    pub fn config_dir(&self) -> Result<PathBuf> {
        let base = dirs::config_dir().ok_or_else(|| {
            eyre!(
                "Could not determine config directory. Expected XDG_CONFIG_HOME or ~/.config on Linux, ~/Library/Application Support on macOS, %APPDATA% on Windows"
            )
        })?;
        self.ensure(base)
    }

    /// Returns the data directory, creating it if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be determined or created.
    pub fn data_dir(&self) -> Result<PathBuf> {
        let base = dirs::data_dir().ok_or_else(|| eyre!("Could not find data directory"))?;
        self.ensure(base)
    }

    fn ensure(&self, mut base: PathBuf) -> Result<PathBuf> {
        base.push(&self.app_name);
        fs::create_dir_all(&base)?;
        Ok(base)
    }

    /// Path of `config.json`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration directory cannot be determined or created.
    pub fn config_file(&self) -> Result<PathBuf> {
        Ok(self.config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Path of the tracing log file.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be determined or created.
    pub fn log_file(&self) -> Result<PathBuf> {
        Ok(self.data_dir()?.join(LOG_FILE_NAME))
    }
}

// ============================================================================
// Tests
// ============================================================================
