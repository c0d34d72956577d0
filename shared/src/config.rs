//! Tunable limits for the settings screen.
//!
//! Every field has a default matching the shipped game, so a partial JSON
//! document only needs to name the values it overrides.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Limits and presentation settings used by the settings view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsConfig {
    /// Shortest accepted display name, in characters
    pub min_name_len: usize,
    /// Longest accepted display name, in characters
    pub max_name_len: usize,
    /// Longest accepted profile picture URL, in characters
    pub max_picture_url_len: usize,
    /// Game title shown in the document title
    pub app_title: String,
    /// How long a toast stays on screen before dismissing itself
    pub toast_timeout_ms: u32,
}

impl Default for SettingsConfig {
    fn default() -> Self {
        Self {
            min_name_len: 4,
            max_name_len: 16,
            max_picture_url_len: 255,
            app_title: "Honey Clicker".to_string(),
            toast_timeout_ms: 3000,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse settings config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("min_name_len must be at least 1")]
    ZeroMinNameLen,
    #[error("min_name_len ({min}) exceeds max_name_len ({max})")]
    NameBoundsInverted { min: usize, max: usize },
    #[error("max_picture_url_len must be at least 1")]
    ZeroPictureUrlLen,
}

impl SettingsConfig {
    /// Parse a JSON document and check that its bounds are usable
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SettingsConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_name_len == 0 {
            return Err(ConfigError::ZeroMinNameLen);
        }
        if self.min_name_len > self.max_name_len {
            return Err(ConfigError::NameBoundsInverted {
                min: self.min_name_len,
                max: self.max_name_len,
            });
        }
        if self.max_picture_url_len == 0 {
            return Err(ConfigError::ZeroPictureUrlLen);
        }
        Ok(())
    }

    /// Title for the settings page, e.g. "Settings - Bob - Honey Clicker"
    pub fn settings_title(&self, name: Option<&str>) -> String {
        match name {
            Some(name) => format!("Settings - {} - {}", name, self.app_title),
            None => format!("Settings - {}", self.app_title),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits() {
        let config = SettingsConfig::default();
        assert_eq!(config.min_name_len, 4);
        assert_eq!(config.max_name_len, 16);
        assert_eq!(config.max_picture_url_len, 255);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = SettingsConfig::from_json(r#"{ "max_name_len": 20 }"#).unwrap();
        assert_eq!(config.max_name_len, 20);
        assert_eq!(config.min_name_len, 4);
        assert_eq!(config.app_title, "Honey Clicker");
    }

    #[test]
    fn test_rejects_inverted_name_bounds() {
        let err = SettingsConfig::from_json(r#"{ "min_name_len": 10, "max_name_len": 5 }"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::NameBoundsInverted { min: 10, max: 5 }));
    }

    #[test]
    fn test_rejects_zero_limits() {
        assert!(matches!(
            SettingsConfig::from_json(r#"{ "min_name_len": 0 }"#),
            Err(ConfigError::ZeroMinNameLen)
        ));
        assert!(matches!(
            SettingsConfig::from_json(r#"{ "max_picture_url_len": 0 }"#),
            Err(ConfigError::ZeroPictureUrlLen)
        ));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            SettingsConfig::from_json("{ not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_settings_title() {
        let config = SettingsConfig::default();
        assert_eq!(
            config.settings_title(Some("Bob")),
            "Settings - Bob - Honey Clicker"
        );
        assert_eq!(config.settings_title(None), "Settings - Honey Clicker");
    }
}
