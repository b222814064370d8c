//! User settings for budgetdesk
//!
//! Manages the budget service location, display currency and UI timings.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::paths::BudgetDeskPaths;
use crate::error::DeskError;

/// User settings for budgetdesk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Base URL of the budget service (without the `/api/budgets` path)
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// ISO currency code used when formatting amounts
    #[serde(default = "default_currency_code")]
    pub currency_code: String,

    /// How long the success toast stays up, in milliseconds
    #[serde(default = "default_notification_duration_ms")]
    pub notification_duration_ms: u64,

    /// Request timeout in seconds; `None` keeps the transport default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,

    /// TUI tick rate in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_schema_version() -> u32 {
    1
}

fn default_api_base_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_currency_code() -> String {
    "KWD".to_string()
}

fn default_notification_duration_ms() -> u64 {
    3000
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            api_base_url: default_api_base_url(),
            currency_code: default_currency_code(),
            notification_duration_ms: default_notification_duration_ms(),
            request_timeout_secs: None,
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &BudgetDeskPaths) -> Result<Self, DeskError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| DeskError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents)
                .map_err(|e| DeskError::Config(format!("Failed to parse settings file: {}", e)))?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &BudgetDeskPaths) -> Result<(), DeskError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| DeskError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| DeskError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Success toast lifetime
    pub fn notification_duration(&self) -> Duration {
        Duration::from_millis(self.notification_duration_ms)
    }

    /// Optional request timeout
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.api_base_url, "http://localhost:5000");
        assert_eq!(settings.currency_code, "KWD");
        assert_eq!(settings.notification_duration(), Duration::from_millis(3000));
        assert!(settings.request_timeout().is_none());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetDeskPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.api_base_url = "https://budgets.example.com".into();
        settings.request_timeout_secs = Some(10);
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.api_base_url, "https://budgets.example.com");
        assert_eq!(loaded.request_timeout(), Some(Duration::from_secs(10)));
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let loaded: Settings = serde_json::from_str(r#"{"currency_code":"USD"}"#).unwrap();
        assert_eq!(loaded.currency_code, "USD");
        assert_eq!(loaded.notification_duration_ms, 3000);
        assert_eq!(loaded.tick_rate_ms, 250);
    }

    #[test]
    fn test_corrupt_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetDeskPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "{ not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, DeskError::Config(_)));
    }
}
