//! Path management for budgetdesk
//!
//! ## Path Resolution Order
//!
//! 1. `BUDGETDESK_DATA_DIR` environment variable (if set)
//! 2. The platform config directory from `directories::ProjectDirs`
//!    (`~/.config/budgetdesk` on Linux)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::DeskError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "BUDGETDESK_DATA_DIR";

/// Manages all paths used by budgetdesk
#[derive(Debug, Clone)]
pub struct BudgetDeskPaths {
    /// Base directory for settings, token and log
    base_dir: PathBuf,
}

impl BudgetDeskPaths {
    /// Create a new BudgetDeskPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, DeskError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create paths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the stored bearer token
    pub fn token_file(&self) -> PathBuf {
        self.base_dir.join("token")
    }

    /// Get the path to the log file used while the TUI owns the terminal
    pub fn log_file(&self) -> PathBuf {
        self.base_dir.join("budgetdesk.log")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), DeskError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| DeskError::Io(format!("Failed to create base directory: {}", e)))
    }
}

fn resolve_default_path() -> Result<PathBuf, DeskError> {
    ProjectDirs::from("", "", "budgetdesk")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| DeskError::Config("Could not determine a home directory".into()))
}
