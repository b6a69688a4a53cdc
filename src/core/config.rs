use crate::core::dirs::get_config_directory;
use crate::core::error::{LazyTfError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = "config.json";

/// Where to look for Terraform projects and which directories to skip.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
    pub search_paths: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ignore_patterns: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            search_paths: vec![
                ".".to_string(),
                "~/Projects".to_string(),
                "~/Documents".to_string(),
            ],
            ignore_patterns: vec![
                "node_modules".to_string(),
                ".git".to_string(),
                "vendor".to_string(),
                ".terraform".to_string(),
            ],
        }
    }
}

impl Config {
    pub fn config_path() -> Result<PathBuf> {
        Ok(get_config_directory()?.join(CONFIG_FILE_NAME))
    }

    /// Loads the user config, falling back to defaults when no file exists.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| LazyTfError::config_read_failed(path, e))?;
        serde_json::from_str(&content).map_err(|e| LazyTfError::config_parse_failed(path, e))
    }

    /// Loads the config, writing the defaults to disk on first run.
    pub fn load_or_create() -> Result<Self> {
        let path = Self::config_path()?;
        if path.exists() {
            Self::load_from(&path)
        } else {
            let config = Self::default();
            config.save_to(&path)?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| LazyTfError::config_write_failed(parent, e))?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|e| LazyTfError::config_write_failed(path, e))?;
        log::debug!("Saved config to {}", path.display());
        Ok(())
    }

    pub fn exists() -> bool {
        Self::config_path().map(|p| p.exists()).unwrap_or(false)
    }

    /// Applies one-off command line overrides on top of the loaded config.
    pub fn with_overrides(mut self, search_paths: Vec<String>, ignore_patterns: Vec<String>) -> Self {
        if !search_paths.is_empty() {
            self.search_paths = search_paths;
        }
        if !ignore_patterns.is_empty() {
            self.ignore_patterns = ignore_patterns;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = Config {
            search_paths: vec!["/srv/infra".to_string()],
            ignore_patterns: vec!["archive".to_string()],
        };
        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_ignore_patterns_are_optional() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"search_paths": ["~/infra"]}"#).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.search_paths, vec!["~/infra".to_string()]);
        assert!(config.ignore_patterns.is_empty());
    }

    #[test]
    fn test_invalid_json_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "search_paths: [oops").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, LazyTfError::ConfigParseFailed { .. }));
    }

    #[test]
    fn test_with_overrides_keeps_unset_fields() {
        let config = Config::default().with_overrides(vec!["/tmp/x".to_string()], Vec::new());
        assert_eq!(config.search_paths, vec!["/tmp/x".to_string()]);
        assert_eq!(config.ignore_patterns, Config::default().ignore_patterns);
    }
}
