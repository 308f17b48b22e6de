//! User configuration loaded from `~/.postdesk/config.yaml`

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{
    BASE_URL_ENV, CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_BASE_URL, DEFAULT_POSTS_LIMIT,
    DEFAULT_TIMEOUT_SECS,
};
use crate::i18n::Locale;

/// Application settings. Every field is optional in the file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub base_url: String,
    pub posts_limit: u32,
    pub timeout_secs: u64,
    pub locale: Locale,
    /// Directory for the log file (defaults to the config directory)
    pub log_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_url: String::from(DEFAULT_BASE_URL),
            posts_limit: DEFAULT_POSTS_LIMIT,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            locale: Locale::default(),
            log_dir: None,
        }
    }
}

impl Config {
    /// Directory holding the config file and logs
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(CONFIG_DIR_NAME)
    }

    pub fn default_path() -> PathBuf {
        Self::config_dir().join(CONFIG_FILE_NAME)
    }

    /// Load from the default location, then apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(&Self::default_path())?;
        if let Ok(url) = std::env::var(BASE_URL_ENV) {
            config.apply_base_url_override(url);
        }
        Ok(config)
    }

    /// Load from a specific file. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        if content.trim().is_empty() {
            return Ok(Config::default());
        }
        let config: Config = serde_yaml::from_str(&content)
            .with_context(|| format!("parsing {}", path.display()))?;
        Ok(config)
    }

    /// Write the config as YAML, creating the parent directory
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            if !dir.exists() {
                fs::create_dir_all(dir)?;
            }
        }
        let content = serde_yaml::to_string(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Write a default config file so users have something to edit.
    /// Returns whether a file was created.
    pub fn write_default_if_missing(path: &Path) -> Result<bool> {
        if path.exists() {
            return Ok(false);
        }
        Config::default()
            .save(path)
            .with_context(|| format!("writing {}", path.display()))?;
        Ok(true)
    }

    pub fn apply_base_url_override(&mut self, url: String) {
        let url = url.trim();
        if !url.is_empty() {
            self.base_url = url.trim_end_matches('/').to_string();
        }
    }

    pub fn log_dir(&self) -> PathBuf {
        self.log_dir.clone().unwrap_or_else(Self::config_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("nope.yaml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.posts_limit, 10);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "locale: ru\nposts_limit: 5\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.locale, Locale::Ru);
        assert_eq!(config.posts_limit, 5);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.yaml");
        let config = Config {
            base_url: "http://localhost:3000".into(),
            ..Config::default()
        };
        config.save(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "posts_limit: [not a number").unwrap();
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_base_url_override_trims_slash() {
        let mut config = Config::default();
        config.apply_base_url_override("http://example.test/ ".into());
        assert_eq!(config.base_url, "http://example.test");

        config.apply_base_url_override("   ".into());
        assert_eq!(config.base_url, "http://example.test");
    }

    #[test]
    fn test_default_file_written_once() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.yaml");

        assert!(Config::write_default_if_missing(&path).unwrap());
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());

        fs::write(&path, "locale: ru\n").unwrap();
        assert!(!Config::write_default_if_missing(&path).unwrap());
        assert_eq!(Config::load_from(&path).unwrap().locale, Locale::Ru);
    }
}
