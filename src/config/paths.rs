//! Path management for xpense
//!
//! Resolves the single data directory that holds both stores.
//!
//! ## Path Resolution Order
//!
//! 1. `XPENSE_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_DATA_HOME/xpense` or `~/.local/share/xpense`
//! 3. Windows: `%APPDATA%\xpense`

use std::path::PathBuf;

use crate::error::XpenseError;

/// Environment variable that overrides the data directory (useful for tests)
pub const DATA_DIR_ENV: &str = "XPENSE_DATA_DIR";

/// Manages all paths used by xpense
#[derive(Debug, Clone)]
pub struct XpensePaths {
    /// Directory holding the expense and budget files
    data_dir: PathBuf,
}

impl XpensePaths {
    /// Create a new XpensePaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no override is set and the home directory cannot
    /// be determined.
    pub fn new() -> Result<Self, XpenseError> {
        let data_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { data_dir })
    }

    /// Create XpensePaths with a custom data directory (useful for testing)
    pub fn with_data_dir(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    /// Get the data directory
    pub fn data_dir(&self) -> &PathBuf {
        &self.data_dir
    }

    /// Get the path to expenses.csv
    pub fn expenses_file(&self) -> PathBuf {
        self.data_dir.join("expenses.csv")
    }

    /// Get the path to budgets.json
    pub fn budgets_file(&self) -> PathBuf {
        self.data_dir.join("budgets.json")
    }

    /// Ensure the data directory exists
    pub fn ensure_directories(&self) -> Result<(), XpenseError> {
        std::fs::create_dir_all(&self.data_dir)
            .map_err(|e| XpenseError::Io(format!("Failed to create data directory: {}", e)))?;
        Ok(())
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, XpenseError> {
    // Unix (Linux/macOS): Use XDG_DATA_HOME if set, otherwise ~/.local/share
    let data_base = std::env::var("XDG_DATA_HOME")
        .map(PathBuf::from)
        .or_else(|_| {
            std::env::var("HOME")
                .map(|home| PathBuf::from(home).join(".local").join("share"))
                .map_err(|_| {
                    XpenseError::Io("Could not determine home directory".to_string())
                })
        })?;
    Ok(data_base.join("xpense"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, XpenseError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| XpenseError::Io("Could not determine APPDATA directory".to_string()))?;
    Ok(PathBuf::from(appdata).join("xpense"))
}
