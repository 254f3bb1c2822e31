//! Tinct configuration file handling

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "tinct.toml";

/// Top-level Tinct configuration (tinct.toml)
#[derive(Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct TinctConfig {
    #[serde(default)]
    pub registry: RegistryConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Where registry items are written and served from
#[derive(Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct RegistryConfig {
    /// Public base URL of the hosted registry files
    #[serde(default = "default_registry_url")]
    pub url: String,
    /// Output directory for `tinct registry`
    #[serde(default = "default_registry_output")]
    pub output: PathBuf,
}

fn default_registry_url() -> String {
    "https://tinct.dev/r".to_string()
}

fn default_registry_output() -> PathBuf {
    PathBuf::from("public/r")
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            url: default_registry_url(),
            output: default_registry_output(),
        }
    }
}

/// Persisted editor state location
#[derive(Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct StorageConfig {
    #[serde(default = "default_storage_dir")]
    pub dir: PathBuf,
}

fn default_storage_dir() -> PathBuf {
    PathBuf::from(".tinct")
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: default_storage_dir(),
        }
    }
}

impl TinctConfig {
    /// Load configuration from a file or a directory containing tinct.toml.
    ///
    /// A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let config_path = if path.is_dir() {
            path.join(CONFIG_FILE)
        } else {
            path.to_path_buf()
        };

        if !config_path.exists() {
            tracing::debug!("no {} found, using defaults", config_path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        let config: TinctConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?;

        Ok(config)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = TinctConfig::load(dir.path()).unwrap();
        assert_eq!(config, TinctConfig::default());
        assert_eq!(config.storage.dir, PathBuf::from(".tinct"));
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE),
            "[registry]\nurl = \"https://themes.example.com/r\"\n",
        )
        .unwrap();

        let config = TinctConfig::load(dir.path()).unwrap();
        assert_eq!(config.registry.url, "https://themes.example.com/r");
        assert_eq!(config.registry.output, PathBuf::from("public/r"));
        assert_eq!(config.storage, StorageConfig::default());
    }

    #[test]
    fn explicit_file_path_and_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        let mut config = TinctConfig::default();
        config.storage.dir = PathBuf::from("state");
        fs::write(&path, config.to_toml().unwrap()).unwrap();

        assert_eq!(TinctConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "[registry\n").unwrap();
        assert!(TinctConfig::load(&path).is_err());
    }
}
