use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to access config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("could not determine config directory")]
    NoConfigDir,
}

/// Application configuration
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub theme: ThemeConfig,
    pub window: WindowConfig,
    pub navigation: NavigationConfig,
    pub logging: LoggingConfig,
}

/// Theme configuration
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ThemeConfig {
    /// "dark" or "light"
    pub mode: String,
}

/// Window configuration
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    /// Initial width (in pixels)
    pub width: f32,
    /// Initial height (in pixels)
    pub height: f32,
    pub title: String,
}

/// Navigation container behavior
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct NavigationConfig {
    /// Treat Escape as a back gesture
    pub back_on_escape: bool,
    /// Show the breadcrumb trail in the top bar
    pub show_breadcrumbs: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default tracing directive, overridden by RUST_LOG
    pub filter: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        ThemeConfig {
            mode: "dark".to_string(),
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            width: 800.0,
            height: 600.0,
            title: "navstack".to_string(),
        }
    }
}

impl Default for NavigationConfig {
    fn default() -> Self {
        NavigationConfig {
            back_on_escape: true,
            show_breadcrumbs: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            filter: "info".to_string(),
        }
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "navstack")
            .map(|proj_dirs| proj_dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from the default location. A missing file (or no
    /// config directory at all) yields the defaults.
    pub fn try_load() -> Result<Self, ConfigError> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Config::default()),
        }
    }

    /// Unwraps a load result, logging the error and falling back to defaults.
    pub fn or_default(result: Result<Self, ConfigError>) -> Self {
        result.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "using default configuration");
            Config::default()
        })
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        // Create config directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<PathBuf, ConfigError> {
        let path = Self::config_path().ok_or(ConfigError::NoConfigDir)?;
        self.save_to(&path)?;
        tracing::info!(path = %path.display(), "wrote configuration");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.theme.mode, "dark");
        assert_eq!(config.window.width, 800.0);
        assert_eq!(config.window.height, 600.0);
        assert!(config.navigation.back_on_escape);
        assert!(config.navigation.show_breadcrumbs);
        assert_eq!(config.logging.filter, "info");
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.theme.mode = "light".to_string();
        config.navigation.back_on_escape = false;
        config.save_to(&path).expect("Failed to save");

        let loaded = Config::load_from(&path).expect("Failed to load");
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "[navigation]\nshow_breadcrumbs = false\n").expect("Failed to write");

        let loaded = Config::load_from(&path).expect("Failed to load");
        assert!(!loaded.navigation.show_breadcrumbs);
        assert!(loaded.navigation.back_on_escape);
        assert_eq!(loaded.theme.mode, "dark");
    }

    #[test]
    fn test_invalid_file_is_parse_error() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "theme = [").expect("Failed to write");

        assert!(matches!(Config::load_from(&path), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_or_default_falls_back_on_error() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "[window]\nwidth = \"wide\"\n").expect("Failed to write");

        let config = Config::or_default(Config::load_from(&path));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_or_default_keeps_loaded_config() {
        let mut expected = Config::default();
        expected.theme.mode = "light".to_string();

        let config = Config::or_default(Ok(expected.clone()));
        assert_eq!(config, expected);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let result = Config::load_from(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
