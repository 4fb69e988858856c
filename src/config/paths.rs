//! Path management for SaveMore
//!
//! Provides XDG-compliant path resolution for configuration and assets.
//!
//! ## Path Resolution Order
//!
//! 1. `SAVEMORE_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/savemore` or `~/.config/savemore`
//! 3. Windows: `%APPDATA%\savemore`

use std::path::PathBuf;

use crate::error::SaveMoreError;

/// Manages all paths used by SaveMore
#[derive(Debug, Clone)]
pub struct SaveMorePaths {
    /// Base directory for all SaveMore data
    base_dir: PathBuf,
}

impl SaveMorePaths {
    /// Create a new SaveMorePaths instance
    ///
    /// Path resolution:
    /// 1. `SAVEMORE_DATA_DIR` env var (explicit override)
    /// 2. Unix: `$XDG_CONFIG_HOME/savemore` or `~/.config/savemore`
    /// 3. Windows: `%APPDATA%\savemore`
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, SaveMoreError> {
        let base_dir = if let Ok(custom) = std::env::var("SAVEMORE_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create SaveMorePaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/savemore/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the config directory (same as base for simplicity)
    pub fn config_dir(&self) -> PathBuf {
        self.base_dir.clone()
    }

    /// Get the assets directory (~/.config/savemore/assets/)
    pub fn assets_dir(&self) -> PathBuf {
        self.base_dir.join("assets")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), SaveMoreError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| SaveMoreError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.assets_dir())
            .map_err(|e| SaveMoreError::Io(format!("Failed to create assets directory: {}", e)))?;

        Ok(())
    }

    /// Check if SaveMore has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, SaveMoreError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(custom) => PathBuf::from(custom),
        Err(_) => {
            let home = std::env::var("HOME")
                .map_err(|_| SaveMoreError::Config("Could not determine home directory".into()))?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("savemore"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, SaveMoreError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| SaveMoreError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("savemore"))
}
