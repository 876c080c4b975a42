use serde::Deserialize;
use std::path::Path;
use thiserror::Error;
use tracing::warn;

use super::config_dirs::project_config_dir;

/// Errors produced while reading the settings file.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("settings parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

/// User settings, loaded once at startup from `settings.toml`.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Built-in theme name ("festive", "dark", "light") or a path to a
    /// palette TOML file.
    pub theme: String,
    /// Keep the roster when returning from the results screen to the
    /// collect screen. When false the roster is cleared on the way back.
    pub keep_roster: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            theme: "festive".to_string(),
            keep_roster: true,
        }
    }
}

/// Load settings from the default per-user config location. A missing file
/// yields defaults silently; an unreadable or unparsable file yields
/// defaults with a warning so a typo never blocks startup.
pub fn load_settings() -> Settings {
    let Some(dir) = project_config_dir() else {
        return Settings::default();
    };
    let path = dir.join("settings.toml");
    if !path.exists() {
        return Settings::default();
    }
    match load_settings_from(&path) {
        Ok(s) => s,
        Err(e) => {
            warn!(path = %path.display(), "ignoring bad settings file: {e}");
            Settings::default()
        }
    }
}

/// Load settings from an explicit path, propagating failures to the caller
/// (used for `--config`, where a broken file should be reported).
pub fn load_settings_from(path: &Path) -> Result<Settings, SettingsError> {
    let raw = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_festive_and_keep_roster() {
        let s = Settings::default();
        assert_eq!(s.theme, "festive");
        assert!(s.keep_roster);
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let s: Settings = toml::from_str("theme = \"light\"").unwrap();
        assert_eq!(s.theme, "light");
        assert!(s.keep_roster);
    }
}
