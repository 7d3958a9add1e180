//! Active theme selection.

use designbar::{Theme, ThemeColors, ThemeManager, DEFAULT_THEME};

/// The built-in palettes and the name of the active one.
///
/// The active name always names a built-in theme; unknown names are
/// replaced by the default on construction and rejected on switch.
pub struct ThemeState {
    themes: ThemeManager,
    active: String,
}

impl std::fmt::Debug for ThemeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeState")
            .field("active", &self.active)
            .finish_non_exhaustive()
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeState {
    pub fn new() -> Self {
        Self::with_theme(DEFAULT_THEME)
    }

    /// Starts on `name`, or on the default theme if `name` is unknown.
    pub fn with_theme(name: &str) -> Self {
        let themes = ThemeManager::new();
        let active = if themes.has_theme(name) { name } else { DEFAULT_THEME };
        Self {
            active: active.to_string(),
            themes,
        }
    }

    // ===== Queries =====

    pub fn name(&self) -> &str {
        &self.active
    }

    pub fn theme(&self) -> &Theme {
        self.themes.resolve(&self.active)
    }

    /// Palette handed to every renderer for the current frame.
    pub fn colors(&self) -> &ThemeColors {
        &self.theme().colors
    }

    /// Names offered by the theme selector, sorted.
    pub fn names(&self) -> Vec<&str> {
        self.themes.list_themes()
    }

    pub fn is_known(&self, name: &str) -> bool {
        self.themes.has_theme(name)
    }

    /// egui visuals built from the active palette.
    pub fn visuals(&self) -> egui::Visuals {
        self.themes.visuals_for(self.theme())
    }

    // ===== Mutations =====

    /// Makes `name` active. Returns `false` and keeps the current theme if
    /// `name` is unknown.
    pub fn switch_to(&mut self, name: &str) -> bool {
        if !self.themes.has_theme(name) {
            return false;
        }
        self.active = name.to_string();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_start_theme_uses_default() {
        let state = ThemeState::with_theme("Missing");
        assert_eq!(state.name(), DEFAULT_THEME);
        assert_eq!(state.theme().name, DEFAULT_THEME);
    }

    #[test]
    fn test_switch_rejects_unknown_names() {
        let mut state = ThemeState::new();
        assert!(state.switch_to("Light Modern"));
        assert!(!state.switch_to("Neon"));
        assert_eq!(state.name(), "Light Modern");
        assert!(!state.visuals().dark_mode);
        assert_eq!(state.names().len(), 4);
    }
}
