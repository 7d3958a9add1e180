//! Theme support for the design sidebar.
//!
//! Built-in palettes modelled on editor colour schemes (Dark Modern, Light Modern,
//! Dracula, One Dark Pro) and a theme manager that applies them to egui visuals.
//!
//! # Examples
//!
//! ```
//! use designbar::theme::ThemeManager;
//!
//! let manager = ThemeManager::new();
//! let dracula = manager.resolve("Dracula");
//! println!("Dracula sidebar: {:?}", dracula.colors.panel_background);
//! ```

use egui::Color32;
use std::collections::HashMap;

/// Theme used when nothing else is configured.
pub const DEFAULT_THEME: &str = "Dark Modern";

/// Colour palette covering every sidebar element
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Background colors
    /// Main canvas area
    pub canvas: Color32,
    /// Sidebar and properties panel
    pub panel_background: Color32,
    /// Text inputs and thumbnails
    pub input_background: Color32,

    // Foreground colors
    pub text: Color32,
    pub text_dim: Color32,

    // Interactive colors
    pub selection: Color32,
    pub hover: Color32,
    pub border: Color32,
    /// Active tab underline and primary buttons
    pub accent: Color32,

    // Status colors
    pub success: Color32,
    pub warning: Color32,
    pub destructive: Color32,
}

/// A theme definition with metadata and colour palette
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub description: String,
    pub is_light: bool,
    pub colors: ThemeColors,
}

/// Centralized theme manager providing access to all available themes
pub struct ThemeManager {
    themes: HashMap<String, Theme>,
    /// Palette returned for unknown names
    fallback: Theme,
}

impl ThemeManager {
    /// Creates a ThemeManager with all built-in themes
    pub fn new() -> Self {
        let themes = [
            dark_modern_theme(),
            light_modern_theme(),
            dracula_theme(),
            one_dark_pro_theme(),
        ]
        .into_iter()
        .map(|theme| (theme.name.clone(), theme))
        .collect();

        Self {
            themes,
            fallback: dark_modern_theme(),
        }
    }

    pub fn has_theme(&self, name: &str) -> bool {
        self.themes.contains_key(name)
    }

    /// Returns all theme names, sorted
    pub fn list_themes(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.themes.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }

    /// Looks up `name`, falling back to the default theme when it is unknown
    pub fn resolve(&self, name: &str) -> &Theme {
        self.themes.get(name).unwrap_or(&self.fallback)
    }

    /// Builds egui visuals for a theme
    pub fn visuals_for(&self, theme: &Theme) -> egui::Visuals {
        let mut visuals = if theme.is_light {
            egui::Visuals::light()
        } else {
            egui::Visuals::dark()
        };
        self.apply_theme(theme, &mut visuals);
        visuals
    }

    /// Applies a theme's colors to egui visuals
    pub fn apply_theme(&self, theme: &Theme, visuals: &mut egui::Visuals) {
        let colors = &theme.colors;

        visuals.panel_fill = colors.panel_background;
        visuals.window_fill = colors.panel_background;
        visuals.extreme_bg_color = colors.input_background;
        visuals.faint_bg_color = colors.hover;

        visuals.override_text_color = Some(colors.text);

        visuals.selection.bg_fill = colors.selection;
        visuals.selection.stroke.color = colors.accent;

        visuals.widgets.noninteractive.bg_fill = colors.panel_background;
        visuals.widgets.noninteractive.bg_stroke.color = colors.border;
        visuals.widgets.inactive.bg_fill = colors.hover;
        visuals.widgets.hovered.bg_fill = colors.hover;
        visuals.widgets.active.bg_fill = colors.selection;

        visuals.hyperlink_color = colors.accent;

        visuals.error_fg_color = colors.destructive;
        visuals.warn_fg_color = colors.warning;
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Editor dark palette
fn dark_modern_theme() -> Theme {
    Theme {
        name: "Dark Modern".to_string(),
        description: "Dark editor sidebar colors".to_string(),
        is_light: false,
        colors: ThemeColors {
            canvas: hex_to_color32("#1f1f1f"),
            panel_background: hex_to_color32("#181818"),
            input_background: hex_to_color32("#313131"),

            text: hex_to_color32("#cccccc"),
            text_dim: hex_to_color32("#9d9d9d"),

            selection: hex_to_color32("#04395e"),
            hover: hex_to_color32("#2a2d2e"),
            border: hex_to_color32("#2b2b2b"),
            accent: hex_to_color32("#0078d4"),

            success: hex_to_color32("#4ade80"),
            warning: hex_to_color32("#facc15"),
            destructive: hex_to_color32("#f85149"),
        },
    }
}

/// Editor light palette
fn light_modern_theme() -> Theme {
    Theme {
        name: "Light Modern".to_string(),
        description: "Light editor sidebar colors".to_string(),
        is_light: true,
        colors: ThemeColors {
            canvas: hex_to_color32("#ffffff"),
            panel_background: hex_to_color32("#f8f8f8"),
            input_background: hex_to_color32("#ffffff"),

            text: hex_to_color32("#3b3b3b"),
            text_dim: hex_to_color32("#767676"),

            selection: hex_to_color32("#e8e8e8"),
            hover: hex_to_color32("#f2f2f2"),
            border: hex_to_color32("#e5e5e5"),
            accent: hex_to_color32("#005fb8"),

            success: hex_to_color32("#16a34a"),
            warning: hex_to_color32("#ca8a04"),
            destructive: hex_to_color32("#c72e0f"),
        },
    }
}

/// Dracula palette
///
/// Official colors from: https://draculatheme.com/spec
fn dracula_theme() -> Theme {
    Theme {
        name: "Dracula".to_string(),
        description: "Official Dracula theme color palette".to_string(),
        is_light: false,
        colors: ThemeColors {
            canvas: hex_to_color32("#282a36"),
            panel_background: hex_to_color32("#21222c"),
            input_background: hex_to_color32("#191a21"),

            text: hex_to_color32("#f8f8f2"),
            text_dim: hex_to_color32("#6272a4"),

            selection: hex_to_color32("#44475a"),
            hover: hex_to_color32("#343746"),
            border: hex_to_color32("#191a21"),
            accent: hex_to_color32("#bd93f9"),

            success: hex_to_color32("#50fa7b"),
            warning: hex_to_color32("#f1fa8c"),
            destructive: hex_to_color32("#ff5555"),
        },
    }
}

/// One Dark Pro palette
///
/// Official colors from: https://github.com/Binaryify/OneDark-Pro
fn one_dark_pro_theme() -> Theme {
    Theme {
        name: "One Dark Pro".to_string(),
        description: "One Dark Pro color palette".to_string(),
        is_light: false,
        colors: ThemeColors {
            canvas: hex_to_color32("#282c34"),
            panel_background: hex_to_color32("#21252b"),
            input_background: hex_to_color32("#1d1f23"),

            text: hex_to_color32("#abb2bf"),
            text_dim: hex_to_color32("#5c6370"),

            selection: hex_to_color32("#2c313a"),
            hover: hex_to_color32("#2c313c"),
            border: hex_to_color32("#181a1f"),
            accent: hex_to_color32("#61afef"),

            success: hex_to_color32("#98c379"),
            warning: hex_to_color32("#e5c07b"),
            destructive: hex_to_color32("#e06c75"),
        },
    }
}

/// Converts a hex color string (like "#282a36") to Color32
pub fn hex_to_color32(hex: &str) -> Color32 {
    let hex = hex.trim_start_matches('#');

    if hex.len() == 6 {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
        Color32::from_rgb(r, g, b)
    } else {
        Color32::from_rgb(0, 0, 0) // Fallback to black
    }
}

/// Tints a colour for translucent badge backgrounds
pub fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_to_color32() {
        assert_eq!(hex_to_color32("#ff8000"), Color32::from_rgb(255, 128, 0));
        assert_eq!(hex_to_color32("bad"), Color32::from_rgb(0, 0, 0));
    }

    #[test]
    fn test_unknown_theme_falls_back() {
        let manager = ThemeManager::new();
        assert_eq!(manager.resolve("Solarized").name, DEFAULT_THEME);
        assert_eq!(manager.resolve("Dracula").name, "Dracula");
    }

    #[test]
    fn test_visuals_follow_palette() {
        let manager = ThemeManager::new();
        assert!(manager.has_theme("Light Modern"));
        assert!(!manager.has_theme("Nope"));

        let light = manager.resolve("Light Modern");
        let visuals = manager.visuals_for(light);
        assert!(!visuals.dark_mode);
        assert_eq!(visuals.panel_fill, light.colors.panel_background);
        assert_eq!(visuals.selection.bg_fill, light.colors.selection);
    }

    #[test]
    fn test_list_themes_sorted() {
        let manager = ThemeManager::new();
        assert_eq!(
            manager.list_themes(),
            vec!["Dark Modern", "Dracula", "Light Modern", "One Dark Pro"]
        );
    }
}
