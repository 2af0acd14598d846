//! Configuration loading and management
//!
//! Configuration is loaded from `~/.config/ryze/config.toml`
//!
//! This module follows the XDG Base Directory Specification:
//! - Config: `$XDG_CONFIG_HOME/ryze/` (~/.config/ryze/)
//! - Data: `$XDG_DATA_HOME/ryze/` (~/.local/share/ryze/)
//! - State/Logs: `$XDG_STATE_HOME/ryze/` (~/.local/state/ryze/)
//!
//! The analytics rules carry no knobs: the insight decision table and
//! band boundaries are fixed contracts, so the config surface is limited
//! to ambient concerns.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::PathBuf;

/// Returns a best-effort home directory path.
fn home_dir() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Returns XDG_CONFIG_HOME or ~/.config
fn xdg_config_home() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".config"))
}

/// Returns XDG_DATA_HOME or ~/.local/share
fn xdg_data_home() -> PathBuf {
    std::env::var("XDG_DATA_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".local/share"))
}

/// Returns XDG_STATE_HOME or ~/.local/state
fn xdg_state_home() -> PathBuf {
    std::env::var("XDG_STATE_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".local/state"))
}

/// Main configuration struct
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Maximum number of log files to keep
    #[serde(default = "default_max_log_files")]
    pub max_files: usize,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            max_files: default_max_log_files(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_max_log_files() -> usize {
    5
}

impl Config {
    /// Load configuration from the default path
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            tracing::info!("No config file found at {:?}, using defaults", config_path);
            return Ok(Config::default());
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read config file {:?}: {}", path, e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;

        Ok(config)
    }

    /// Returns the default config file path
    ///
    /// `$XDG_CONFIG_HOME/ryze/config.toml` (~/.config/ryze/config.toml)
    pub fn config_path() -> PathBuf {
        xdg_config_home().join("ryze").join("config.toml")
    }

    /// Returns the data directory path (where the shell persists the journal)
    ///
    /// `$XDG_DATA_HOME/ryze/` (~/.local/share/ryze/)
    pub fn data_dir() -> PathBuf {
        xdg_data_home().join("ryze")
    }

    /// Returns the state directory path (for logs)
    ///
    /// `$XDG_STATE_HOME/ryze/` (~/.local/state/ryze/)
    pub fn state_dir() -> PathBuf {
        xdg_state_home().join("ryze")
    }

    /// Returns the journal file path the application shell persists to
    ///
    /// `$XDG_DATA_HOME/ryze/journal.json`. The encoding is the shell's
    /// concern; this crate only names the location.
    pub fn journal_path() -> PathBuf {
        Self::data_dir().join("journal.json")
    }

    /// Returns the log file path
    ///
    /// `$XDG_STATE_HOME/ryze/ryze.log` (~/.local/state/ryze/ryze.log)
    pub fn log_path() -> PathBuf {
        Self::state_dir().join("ryze.log")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.max_files, 5);
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
[logging]
level = "debug"
max_files = 10
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.max_files, 10);
    }

    #[test]
    fn test_partial_config_falls_back_to_defaults() {
        let toml = r#"
[logging]
level = "trace"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.logging.level, "trace");
        assert_eq!(config.logging.max_files, 5);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[logging]\nlevel = \"warn\"").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.logging.level, "warn");

        let missing = dir.path().join("nope.toml");
        assert!(Config::load_from(&missing).is_err());
    }

    #[test]
    fn test_paths_end_with_app_names() {
        assert!(Config::config_path().ends_with("ryze/config.toml"));
        assert!(Config::journal_path().ends_with("ryze/journal.json"));
        assert!(Config::log_path().ends_with("ryze/ryze.log"));
    }
}
