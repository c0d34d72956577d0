use anyhow::Context;
use shared::SettingsConfig;

use crate::services::logging::Logger;

const SETTINGS_JSON: &str = include_str!("../../settings.json");

/// Parse the settings bundled with the build
pub fn load_config() -> anyhow::Result<SettingsConfig> {
    SettingsConfig::from_json(SETTINGS_JSON).context("invalid bundled settings.json")
}

/// Bundled settings, or the built-in defaults if they cannot be used
pub fn config_or_default() -> SettingsConfig {
    match load_config() {
        Ok(config) => config,
        Err(e) => {
            Logger::warn_with_component("config", &format!("{:#}; using defaults", e));
            SettingsConfig::default()
        }
    }
}
