//! Theme engine configuration

use crate::error::ThemeError;
use crate::theme::ThemeId;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Settings for a [`crate::ThemeContext`]
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeConfig {
    /// Theme used when nothing is persisted
    #[serde(default)]
    pub default_theme: ThemeId,
    /// Debounce window for theme persistence, in milliseconds
    #[serde(default = "default_debounce_ms")]
    pub persist_debounce_ms: u64,
    /// Storage key holding the active theme identifier
    #[serde(default = "default_theme_key")]
    pub theme_key: String,
    /// Storage key holding the active scope
    #[serde(default = "default_scope_key")]
    pub scope_key: String,
}

fn default_debounce_ms() -> u64 {
    100
}

fn default_theme_key() -> String {
    "aegis-theme".to_string()
}

fn default_scope_key() -> String {
    "aegis-theme-scope".to_string()
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            default_theme: ThemeId::DEFAULT,
            persist_debounce_ms: default_debounce_ms(),
            theme_key: default_theme_key(),
            scope_key: default_scope_key(),
        }
    }
}

impl ThemeConfig {
    pub fn persist_debounce(&self) -> Duration {
        Duration::from_millis(self.persist_debounce_ms)
    }

    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.persist_debounce_ms = debounce.as_millis() as u64;
        self
    }

    /// Parse from TOML; missing fields take their defaults
    pub fn from_toml(src: &str) -> Result<Self, ThemeError> {
        Ok(toml::from_str(src)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Palette;

    #[test]
    fn empty_toml_gives_defaults() {
        assert_eq!(ThemeConfig::from_toml("").unwrap(), ThemeConfig::default());
    }

    #[test]
    fn overrides_are_read() {
        let config = ThemeConfig::from_toml(
            r#"
default_theme = "arctic-frost-light"
persist_debounce_ms = 250
"#,
        )
        .unwrap();

        assert_eq!(config.default_theme, ThemeId::light(Palette::ArcticFrost));
        assert_eq!(config.persist_debounce(), Duration::from_millis(250));
        assert_eq!(config.theme_key, "aegis-theme");
        assert_eq!(config.scope_key, "aegis-theme-scope");
    }

    #[test]
    fn unknown_default_theme_is_rejected() {
        let err = ThemeConfig::from_toml("default_theme = \"disco\"").unwrap_err();
        assert!(matches!(err, ThemeError::Config(_)));
        assert!(err.to_string().contains("disco"), "{err}");
    }

    #[test]
    fn with_debounce_round_trips() {
        let config = ThemeConfig::default().with_debounce(Duration::from_millis(7));
        assert_eq!(config.persist_debounce_ms, 7);
    }
}
