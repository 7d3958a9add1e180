//! Theme management and persistence coordination.
//!
//! Handles theme selection, application, and persistent storage across sessions.

use designbar::DEFAULT_THEME;

use crate::app::AppState;
use crate::state::ThemeState;

const THEME_KEY: &str = "theme_preference";

/// Coordinates theme management and persistence.
pub struct ThemeCoordinator;

impl ThemeCoordinator {
    /// Loads theme preference from persistent storage during application startup.
    ///
    /// Returns the stored name if it names a built-in theme, otherwise the default.
    pub fn load_theme_from_storage(storage: Option<&dyn eframe::Storage>) -> String {
        let stored = storage.and_then(|storage| storage.get_string(THEME_KEY));
        match stored {
            Some(name) => Self::validated_theme_name(&ThemeState::new(), &name),
            None => DEFAULT_THEME.to_string(),
        }
    }

    /// Returns `name` if it is a known theme, otherwise the default theme name.
    pub fn validated_theme_name(themes: &ThemeState, name: &str) -> String {
        if themes.is_known(name) {
            name.to_string()
        } else {
            tracing::warn!(theme = name, fallback = DEFAULT_THEME, "unknown theme");
            DEFAULT_THEME.to_string()
        }
    }

    /// Saves current theme preference to persistent storage.
    pub fn save_theme_to_storage(storage: &mut dyn eframe::Storage, theme_name: &str) {
        storage.set_string(THEME_KEY, theme_name.to_string());
        storage.flush();
    }

    /// Switches the active theme, ignoring unknown names.
    pub fn change_theme(state: &mut AppState, theme_name: String) {
        if state.theme.switch_to(&theme_name) {
            tracing::info!(theme = %theme_name, "theme changed");
        } else {
            tracing::warn!(theme = %theme_name, "ignoring unknown theme");
        }
    }

    /// Applies the current theme to the egui context.
    ///
    /// Called every frame to ensure theme is correctly applied.
    pub fn apply_current_theme(ctx: &egui::Context, state: &AppState) {
        ctx.set_visuals(state.theme.visuals());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_stored_theme_falls_back() {
        let themes = ThemeState::new();
        assert_eq!(ThemeCoordinator::validated_theme_name(&themes, "Dracula"), "Dracula");
        assert_eq!(ThemeCoordinator::validated_theme_name(&themes, "Neon"), DEFAULT_THEME);
    }

    #[test]
    fn test_change_theme_ignores_unknown() {
        let mut state = AppState::new();
        ThemeCoordinator::change_theme(&mut state, "Light Modern".to_string());
        assert_eq!(state.theme.name(), "Light Modern");
        ThemeCoordinator::change_theme(&mut state, "Neon".to_string());
        assert_eq!(state.theme.name(), "Light Modern");
    }
}
