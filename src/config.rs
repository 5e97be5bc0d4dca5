//! Configuration handling for the TUI

use crate::i18n::Language;
use crate::preferences::{Preferences, Theme};
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Default request timeout for API calls
const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Base URL of the project API (e.g. `http://localhost:8000/api`)
    pub api_base_url: Option<String>,
    /// Request timeout in seconds
    pub request_timeout_secs: Option<u64>,
    /// Interface language
    pub language: Option<Language>,
    /// Color theme
    pub theme: Option<Theme>,
}

impl TuiConfig {
    /// Application directories shared by config, data and token files
    pub fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("io", "buildyourproject", "byp-tui")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: TuiConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }

    pub fn preferences(&self) -> Preferences {
        Preferences {
            language: self.language.unwrap_or_default(),
            theme: self.theme.unwrap_or_default(),
        }
    }

    pub fn set_preferences(&mut self, prefs: Preferences) {
        self.language = Some(prefs.language);
        self.theme = Some(prefs.theme);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = TuiConfig::default();
        assert!(config.api_base_url.is_none());
        assert!(config.request_timeout_secs.is_none());
        assert!(config.language.is_none());
        assert!(config.theme.is_none());
    }

    #[test]
    fn test_serialization() {
        let config = TuiConfig {
            api_base_url: Some("https://api.example.org/api".to_string()),
            request_timeout_secs: Some(5),
            language: Some(Language::Pt),
            theme: Some(Theme::Light),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: TuiConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(
            parsed.api_base_url,
            Some("https://api.example.org/api".to_string())
        );
        assert_eq!(parsed.request_timeout_secs, Some(5));
        assert_eq!(parsed.language, Some(Language::Pt));
        assert_eq!(parsed.theme, Some(Theme::Light));
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: TuiConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.api_base_url.is_none());
        assert_eq!(parsed.preferences(), Preferences::default());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"theme": "light", "unknown_field": "value"}"#;
        let parsed: TuiConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.theme, Some(Theme::Light));
    }

    #[test]
    fn test_request_timeout_default() {
        let config = TuiConfig::default();
        assert_eq!(config.request_timeout(), Duration::from_secs(15));
    }

    #[test]
    fn test_set_preferences_round_trip() {
        let mut config = TuiConfig::default();
        let prefs = Preferences {
            language: Language::Pt,
            theme: Theme::Light,
        };
        config.set_preferences(prefs);
        assert_eq!(config.preferences(), prefs);
    }

    #[test]
    fn test_load_returns_ok() {
        // Falls back to defaults when no file exists
        let result = TuiConfig::load();
        assert!(result.is_ok());
    }
}
