//! Theme support for the TUI.
//!
//! Provides customizable color themes including built-ins and custom color
//! overrides from the config file.

use ratatui::style::Color;

use crate::core::CustomColorsConfig;

/// A complete color theme for the TUI.
///
/// Themes are runtime-only - configuration happens through the config file
/// with hex color strings which are parsed into Theme at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Theme name for display and configuration
    pub name: String,
    /// Primary accent color (headers, selected items, the wizard button)
    pub primary: Color,
    /// Secondary accent color (online dots, success indicators)
    pub secondary: Color,
    /// Tertiary accent color (badges, unread counts)
    pub accent: Color,
    /// Main text color
    pub text: Color,
    /// Dimmed text color (descriptions, secondary info)
    pub text_dim: Color,
    /// Muted text color (placeholders, hints)
    pub text_muted: Color,
    /// Background color (Reset uses terminal default)
    pub background: Color,
    /// Selected item background
    pub selected_bg: Color,
    /// Border color
    pub border: Color,
    /// Success indicator color
    pub success: Color,
    /// Warning indicator color
    pub warning: Color,
    /// Error indicator color
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    /// Default theme - dark, with the wizard's purple as primary.
    pub fn default_theme() -> Self {
        Self {
            name: "default".to_string(),
            primary: Color::Rgb(160, 108, 255),   // Purple
            secondary: Color::Rgb(16, 185, 129),  // Emerald
            accent: Color::Rgb(251, 146, 60),     // Orange
            text: Color::White,
            text_dim: Color::Rgb(156, 163, 175),  // Gray-400
            text_muted: Color::Rgb(107, 114, 128), // Gray-500
            background: Color::Reset,
            selected_bg: Color::Rgb(55, 65, 81),  // Gray-700
            border: Color::Rgb(75, 85, 99),       // Gray-600
            success: Color::Rgb(34, 197, 94),     // Green
            warning: Color::Rgb(234, 179, 8),     // Yellow
            error: Color::Rgb(239, 68, 68),       // Red
        }
    }

    /// Dracula theme - dark purple and pink.
    pub fn dracula() -> Self {
        Self {
            name: "dracula".to_string(),
            primary: Color::Rgb(189, 147, 249),   // Purple
            secondary: Color::Rgb(80, 250, 123),  // Green
            accent: Color::Rgb(255, 121, 198),    // Pink
            text: Color::Rgb(248, 248, 242),      // Foreground
            text_dim: Color::Rgb(189, 147, 249),  // Purple (dimmed)
            text_muted: Color::Rgb(98, 114, 164), // Comment
            background: Color::Rgb(40, 42, 54),   // Background
            selected_bg: Color::Rgb(68, 71, 90),  // Current Line
            border: Color::Rgb(68, 71, 90),       // Selection
            success: Color::Rgb(80, 250, 123),    // Green
            warning: Color::Rgb(255, 184, 108),   // Orange
            error: Color::Rgb(255, 85, 85),       // Red
        }
    }

    /// Catppuccin Latte theme - light pastel colors.
    pub fn latte() -> Self {
        Self {
            name: "latte".to_string(),
            primary: Color::Rgb(136, 57, 239),    // Mauve
            secondary: Color::Rgb(64, 160, 43),   // Green
            accent: Color::Rgb(254, 100, 11),     // Peach
            text: Color::Rgb(76, 79, 105),        // Text
            text_dim: Color::Rgb(92, 95, 119),    // Subtext1
            text_muted: Color::Rgb(140, 143, 161), // Overlay1
            background: Color::Rgb(239, 241, 245), // Base
            selected_bg: Color::Rgb(220, 224, 232), // Surface0
            border: Color::Rgb(188, 192, 204),    // Surface1
            success: Color::Rgb(64, 160, 43),     // Green
            warning: Color::Rgb(223, 142, 29),    // Yellow
            error: Color::Rgb(210, 15, 57),       // Red
        }
    }

    /// Get a theme by name (case-insensitive).
    pub fn by_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "default" => Some(Self::default_theme()),
            "dracula" => Some(Self::dracula()),
            "latte" | "catppuccin-latte" | "catppuccin_latte" => Some(Self::latte()),
            _ => None,
        }
    }

    /// List all available built-in theme names.
    pub fn available_themes() -> Vec<&'static str> {
        vec!["default", "dracula", "latte"]
    }

    /// Apply custom color overrides from the config file.
    pub fn apply_overrides(&mut self, custom: &CustomColorsConfig) {
        fn apply(slot: &mut Color, hex: Option<&String>) {
            if let Some(color) = hex.and_then(|h| parse_hex_color(h)) {
                *slot = color;
            }
        }

        apply(&mut self.primary, custom.primary.as_ref());
        apply(&mut self.secondary, custom.secondary.as_ref());
        apply(&mut self.accent, custom.accent.as_ref());
        apply(&mut self.text, custom.text.as_ref());
        apply(&mut self.text_dim, custom.text_dim.as_ref());
        apply(&mut self.text_muted, custom.text_muted.as_ref());
        apply(&mut self.background, custom.background.as_ref());
        apply(&mut self.selected_bg, custom.selected_bg.as_ref());
        apply(&mut self.border, custom.border.as_ref());
        apply(&mut self.success, custom.success.as_ref());
        apply(&mut self.warning, custom.warning.as_ref());
        apply(&mut self.error, custom.error.as_ref());
    }
}

/// Parse a hex color string (#RRGGBB or RRGGBB) into a Color.
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

    Some(Color::Rgb(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme() {
        let theme = Theme::default();
        assert_eq!(theme.name, "default");
    }

    #[test]
    fn test_theme_by_name() {
        assert!(Theme::by_name("dracula").is_some());
        assert!(Theme::by_name("DRACULA").is_some());
        assert!(Theme::by_name("latte").is_some());
        assert!(Theme::by_name("unknown-theme").is_none());
    }

    #[test]
    fn test_all_builtin_themes_valid() {
        for name in Theme::available_themes() {
            let theme =
                Theme::by_name(name).unwrap_or_else(|| panic!("Theme {} should exist", name));
            assert!(!theme.name.is_empty());
        }
    }

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#FF0000"), Some(Color::Rgb(255, 0, 0)));
        assert_eq!(parse_hex_color("00FF00"), Some(Color::Rgb(0, 255, 0)));
        assert_eq!(parse_hex_color("#A06CFF"), Some(Color::Rgb(160, 108, 255)));
        assert_eq!(parse_hex_color("invalid"), None);
        assert_eq!(parse_hex_color("#FFF"), None);
    }

    #[test]
    fn test_parse_hex_color_rejects_non_ascii() {
        // Six bytes but not six hex digits; must not slice mid-character.
        assert_eq!(parse_hex_color("aé✓"), None);
        assert_eq!(parse_hex_color("#ééé"), None);
        assert_eq!(parse_hex_color("12 456"), None);
    }

    #[test]
    fn test_apply_overrides() {
        let mut theme = Theme::default_theme();
        let custom = CustomColorsConfig {
            primary: Some("#123456".to_string()),
            error: Some("not-a-color".to_string()),
            ..Default::default()
        };
        theme.apply_overrides(&custom);
        assert_eq!(theme.primary, Color::Rgb(0x12, 0x34, 0x56));
        // Invalid hex leaves the slot untouched.
        assert_eq!(theme.error, Theme::default_theme().error);
    }
}
