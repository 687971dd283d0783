//! Configuration management for authform.
//!
//! Loads configuration from ${AUTHFORM_HOME}/config.toml with sensible defaults.
//! Nothing here affects validation or mode handling; it only feeds the
//! presentation layer.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub mod paths {
    //! Path resolution for authform configuration and data directories.
    //!
    //! AUTHFORM_HOME resolution order:
    //! 1. AUTHFORM_HOME environment variable (if set)
    //! 2. ~/.config/authform (default)
    //! 3. ./.authform when no home directory can be determined

    use std::path::PathBuf;

    /// Returns the authform home directory.
    pub fn authform_home() -> PathBuf {
        if let Ok(home) = std::env::var("AUTHFORM_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir().map_or_else(
            || PathBuf::from(".authform"),
            |h| h.join(".config").join("authform"),
        )
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        authform_home().join("config.toml")
    }

    /// Returns the directory log files are written to.
    pub fn logs_dir() -> PathBuf {
        authform_home().join("logs")
    }
}

fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

/// Color scheme, as written in the config file.
///
/// Values are color names or `#rrggbb`; the TUI parses them when it builds
/// its palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub primary: String,
    pub background: String,
    pub card_background: String,
    pub text: String,
    pub text_secondary: String,
    pub error: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            primary: "blue".to_string(),
            background: "#1a1a1a".to_string(),
            card_background: "#2d2d2d".to_string(),
            text: "white".to_string(),
            text_secondary: "#b0bec5".to_string(),
            error: "#ef5350".to_string(),
        }
    }
}

/// Card geometry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Width of the form card in columns.
    pub card_width: u16,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            card_width: Config::DEFAULT_CARD_WIDTH,
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Terminal window title
    pub title: String,

    /// Heading shown above the fields
    pub heading: String,

    /// Seconds a notification stays visible (0 keeps it until the next key)
    pub notification_secs: u32,

    #[serde(default)]
    pub layout: LayoutConfig,

    #[serde(default)]
    pub theme: ThemeConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: Self::DEFAULT_TITLE.to_string(),
            heading: Self::DEFAULT_HEADING.to_string(),
            notification_secs: Self::DEFAULT_NOTIFICATION_SECS,
            layout: LayoutConfig::default(),
            theme: ThemeConfig::default(),
        }
    }
}

impl Config {
    const DEFAULT_TITLE: &str = "Mukund";
    const DEFAULT_HEADING: &str = "Welcome!";
    const DEFAULT_NOTIFICATION_SECS: u32 = 4;
    const DEFAULT_CARD_WIDTH: u16 = 44;

    /// Loads configuration from the default config path.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// How long a notification stays up, or `None` to keep it until the next key.
    pub fn notification_timeout(&self) -> Option<Duration> {
        if self.notification_secs == 0 {
            None
        } else {
            Some(Duration::from_secs(u64::from(self.notification_secs)))
        }
    }

    /// Creates a default config file at the given path.
    ///
    /// # Errors
    /// Returns an error if the file already exists or cannot be written.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        Self::write_config(path, default_config_template())
    }

    fn write_config(path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let tmp_path = path.with_extension("toml.tmp");
        fs::write(&tmp_path, content)
            .with_context(|| format!("Failed to write config to {}", tmp_path.display()))?;
        fs::rename(&tmp_path, path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                tmp_path.display(),
                path.display()
            )
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("nonexistent.toml");

        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.title, "Mukund");
        assert_eq!(config.heading, "Welcome!");
    }

    #[test]
    fn test_load_partial_config_merges_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");

        fs::write(
            &config_path,
            "heading = \"Hello\"\n[theme]\nprimary = \"cyan\"\n",
        )
        .unwrap();

        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(config.heading, "Hello");
        assert_eq!(config.theme.primary, "cyan");
        assert_eq!(config.theme.error, "#ef5350");
        assert_eq!(config.layout.card_width, 44);
    }

    #[test]
    fn test_load_invalid_toml_mentions_path() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(&config_path, "notification_secs = \"soon\"").unwrap();

        let err = Config::load_from(&config_path).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse config"));
    }

    #[test]
    fn test_default_template_matches_defaults() {
        let parsed: Config = toml::from_str(default_config_template()).unwrap();
        assert_eq!(parsed, Config::default());
    }

    #[test]
    fn test_init_creates_config_with_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("subdir").join("config.toml");

        Config::init(&config_path).unwrap();

        assert!(config_path.exists());
        let contents = fs::read_to_string(&config_path).unwrap();
        assert!(contents.contains("heading = \"Welcome!\""));
        assert!(contents.contains("[theme]"));
    }

    #[test]
    fn test_init_fails_if_exists() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");

        fs::write(&config_path, "").unwrap();

        assert!(Config::init(&config_path).is_err());
    }

    #[test]
    fn test_notification_timeout_zero_disables() {
        let config = Config {
            notification_secs: 0,
            ..Default::default()
        };
        assert_eq!(config.notification_timeout(), None);
        assert_eq!(
            Config::default().notification_timeout(),
            Some(Duration::from_secs(4))
        );
    }
}
