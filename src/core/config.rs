//! Configuration management.
//!
//! Handles loading configuration from TOML files. Only UI concerns are
//! configurable in the prototype; workspace data is seeded in code.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// UI/TUI settings
    pub ui: UiConfig,
}

/// UI/TUI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Color theme name (built-in: default, dracula, latte)
    pub theme: String,

    /// Whether to open the rationale panel by default on the
    /// recommendation view
    pub show_rationale: bool,

    /// Custom theme color overrides (hex format: "#RRGGBB")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_colors: Option<CustomColorsConfig>,
}

/// Custom color configuration for theme overrides.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomColorsConfig {
    /// Primary accent color (headers, selected items)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary: Option<String>,
    /// Secondary accent color (online dots, success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary: Option<String>,
    /// Tertiary accent color (badges, highlights)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
    /// Main text color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Dimmed text color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_dim: Option<String>,
    /// Muted text color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_muted: Option<String>,
    /// Background color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    /// Selected item background
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_bg: Option<String>,
    /// Border color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border: Option<String>,
    /// Success color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<String>,
    /// Warning color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    /// Error color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Looks for config in:
    /// 1. `.huddle.toml` in current directory
    /// 2. `~/.config/huddle/config.toml`
    /// 3. Falls back to defaults
    pub fn load() -> anyhow::Result<Self> {
        let local_config = PathBuf::from(".huddle.toml");
        if local_config.exists() {
            return Self::load_from_file(&local_config);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let global_config = config_dir.join("huddle").join("config.toml");
            if global_config.exists() {
                return Self::load_from_file(&global_config);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific file.
    pub fn load_from_file(path: &PathBuf) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Get the config directory path.
    pub fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("huddle"))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self { ui: UiConfig::default() }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { theme: "default".to_string(), show_rationale: true, custom_colors: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.ui.theme, "default");
        assert!(config.ui.show_rationale);
        assert!(config.ui.custom_colors.is_none());
    }

    #[test]
    fn test_parse_partial_toml() {
        let config: Config = toml::from_str(
            r#"
            [ui]
            theme = "dracula"
            "#,
        )
        .unwrap();
        assert_eq!(config.ui.theme, "dracula");
        assert!(config.ui.show_rationale, "unset fields keep defaults");
    }

    #[test]
    fn test_parse_custom_colors() {
        let config: Config = toml::from_str(
            r##"
            [ui]
            theme = "default"

            [ui.custom_colors]
            primary = "#A06CFF"
            "##,
        )
        .unwrap();
        let colors = config.ui.custom_colors.unwrap();
        assert_eq!(colors.primary.as_deref(), Some("#A06CFF"));
        assert!(colors.background.is_none());
    }

    #[test]
    fn test_roundtrip() {
        let config = Config::default();
        let toml = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.ui.theme, config.ui.theme);
    }
}
