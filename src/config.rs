// Application configuration.
// Loads the backend base URL from a TOML file with an environment override.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::Deserialize;

use crate::error::Result;

const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Environment variable that overrides the configured base URL.
pub const API_URL_ENV: &str = "EASEL_API_URL";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EaselConfig {
    /// Base URL of the portfolio backend, without a trailing slash.
    pub api_base_url: String,
}

impl Default for EaselConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

impl EaselConfig {
    /// Load configuration: defaults, then the config file if present,
    /// then the environment override.
    pub fn load() -> Result<Self> {
        let mut config = match config_path() {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };
        config.apply_env();
        Ok(config)
    }

    /// Parse a config file, falling back to defaults if it does not exist.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)?;
        let mut config: EaselConfig = toml::from_str(&contents)?;
        config.normalize();
        Ok(config)
    }

    fn apply_env(&mut self) {
        if let Ok(url) = std::env::var(API_URL_ENV) {
            if !url.trim().is_empty() {
                self.api_base_url = url;
            }
        }
        self.normalize();
    }

    fn normalize(&mut self) {
        while self.api_base_url.ends_with('/') {
            self.api_base_url.pop();
        }
    }
}

/// Path to the config file (~/.config/easel/config.toml on Linux).
pub fn config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "easel").map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Directory for log files (~/.local/share/easel on Linux).
pub fn data_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "easel").map(|dirs| dirs.data_dir().to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_base_url() {
        let config = EaselConfig::default();
        assert_eq!(config.api_base_url, "http://localhost:8000");
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");

        let config = EaselConfig::from_file(&path).unwrap();
        assert_eq!(config.api_base_url, "http://localhost:8000");
    }

    #[test]
    fn test_file_overrides_default() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "api_base_url = \"https://art.example.com\"\n").unwrap();

        let config = EaselConfig::from_file(&path).unwrap();
        assert_eq!(config.api_base_url, "https://art.example.com");
    }

    #[test]
    fn test_trailing_slash_stripped() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "api_base_url = \"https://art.example.com/\"\n").unwrap();

        let config = EaselConfig::from_file(&path).unwrap();
        assert_eq!(config.api_base_url, "https://art.example.com");
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "api_base_url = [not toml").unwrap();

        assert!(EaselConfig::from_file(&path).is_err());
    }
}
