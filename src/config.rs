//! Configuration for the theme controller and the desktop host.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::preference::ThemePreference;

/// Storage key used when none is configured.
pub const DEFAULT_STORAGE_KEY: &str = "folio-theme";

/// Controller settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Used when nothing is stored yet. Not written back on its own.
    pub default_preference: ThemePreference,
    /// Key the explicit choice is persisted under.
    pub storage_key: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            default_preference: ThemePreference::System,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}

impl ThemeConfig {
    pub fn with_default_preference(mut self, preference: ThemePreference) -> Self {
        self.default_preference = preference;
        self
    }

    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }
}

/// Desktop host settings, optionally read from a JSON file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory name under the user's config dir.
    pub app_name: String,
    pub window_title: String,
    pub window_size: [f32; 2],
    pub theme: ThemeConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_name: "folio".to_string(),
            window_title: "Portfolio".to_string(),
            window_size: [1100.0, 800.0],
            // The page ships dark unless the visitor picks otherwise
            theme: ThemeConfig::default().with_default_preference(ThemePreference::Dark),
        }
    }
}

impl AppConfig {
    /// Reads a config file. Missing fields keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let json_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_json(&json_str)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn from_json(json_str: &str) -> Result<Self> {
        Ok(serde_json::from_str(json_str)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_config_default() {
        let config = ThemeConfig::default();
        assert_eq!(config.default_preference, ThemePreference::System);
        assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
    }

    #[test]
    fn test_app_config_defaults_to_dark() {
        assert_eq!(AppConfig::default().theme.default_preference, ThemePreference::Dark);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config =
            AppConfig::from_json(r#"{"theme": {"default_preference": "system"}}"#).unwrap();
        assert_eq!(config.theme.default_preference, ThemePreference::System);
        assert_eq!(config.theme.storage_key, DEFAULT_STORAGE_KEY);
        assert_eq!(config.app_name, "folio");
    }

    #[test]
    fn test_invalid_preference_in_json() {
        assert!(AppConfig::from_json(r#"{"theme": {"default_preference": "blue"}}"#).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = AppConfig::load(Path::new("/nonexistent/folio.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
