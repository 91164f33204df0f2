//! AEGIS configuration file handling

use aegis_theme::ThemeConfig;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Top-level AEGIS configuration (aegis.toml)
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct AegisConfig {
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Where persisted preferences live
#[derive(Debug, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Preference file (relative to the working directory)
    #[serde(default = "default_storage_path")]
    pub path: PathBuf,
}

fn default_storage_path() -> PathBuf {
    PathBuf::from(".aegis/state.toml")
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_storage_path(),
        }
    }
}

impl AegisConfig {
    /// Load configuration from a file or a directory containing aegis.toml.
    ///
    /// A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let config_path = if path.is_dir() {
            path.join("aegis.toml")
        } else {
            path.to_path_buf()
        };

        if !config_path.exists() {
            tracing::debug!("{} not found, using defaults", config_path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        let config: AegisConfig = toml::from_str(&content)
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
    use aegis_theme::{Palette, ThemeId};

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AegisConfig::load(dir.path()).unwrap();
        assert_eq!(config.theme, ThemeConfig::default());
        assert_eq!(config.storage.path, PathBuf::from(".aegis/state.toml"));
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("aegis.toml"),
            "[theme]\ndefault_theme = \"verdant-jade-light\"\n",
        )
        .unwrap();

        let config = AegisConfig::load(dir.path()).unwrap();
        assert_eq!(
            config.theme.default_theme,
            ThemeId::light(Palette::VerdantJade)
        );
        assert_eq!(config.theme.persist_debounce_ms, 100);
        assert_eq!(config.theme.theme_key, "aegis-theme");
    }

    #[test]
    fn unknown_default_theme_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("custom.toml");
        fs::write(&file, "[theme]\ndefault_theme = \"neon\"\n").unwrap();

        let err = AegisConfig::load(&file).unwrap_err();
        assert!(format!("{err:#}").contains("neon"));
    }

    #[test]
    fn defaults_round_trip_through_toml() {
        let text = AegisConfig::default().to_toml().unwrap();
        let parsed: AegisConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed.theme, ThemeConfig::default());
    }
}
