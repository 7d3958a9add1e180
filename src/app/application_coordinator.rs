//! Application-level coordination and workflow management.
//!
//! Applies panel interactions and launch options to the application state.

use designbar::SettingsAction;

use crate::app::{AppState, ThemeCoordinator};
use crate::config::Args;
use crate::ui::panel_manager::{PanelInteraction, PlaceholderAction};

/// Coordinates application-level operations and workflows.
///
/// This struct is responsible for:
/// - Routing panel interactions to the owning state component
/// - Applying command-line launch options
/// - Recording placeholder actions that have no behavior yet
pub struct ApplicationCoordinator;

impl ApplicationCoordinator {
    /// Applies launch options once, before the first frame.
    pub fn apply_launch_options(state: &mut AppState, args: &Args) {
        if let Some(tab) = args.tab {
            state.sidebar.select_tab(tab);
        }
        if let Some(theme) = &args.theme {
            let name = ThemeCoordinator::validated_theme_name(&state.theme, theme);
            state.theme.switch_to(&name);
        }
        if let Some(node_id) = &args.select {
            state.layers.select_node(node_id);
        }
    }

    /// Dispatches one panel interaction.
    pub fn handle_interaction(state: &mut AppState, interaction: PanelInteraction) {
        match interaction {
            PanelInteraction::TabSelected(tab) => {
                tracing::debug!(tab = tab.title(), "tab selected");
                state.sidebar.select_tab(tab);
            }
            PanelInteraction::SettingsToggled => {
                let shown = state.sidebar.toggle_settings();
                tracing::debug!(shown, "settings view toggled");
            }
            PanelInteraction::SettingsClosed => state.sidebar.close_settings(),
            PanelInteraction::LayerSelected { node_id } => {
                state.layers.select_node(&node_id);
            }
            PanelInteraction::LayerExpandToggled { node_id } => {
                state.layers.toggle_expanded(&node_id);
            }
            PanelInteraction::ExpandAllLayers => state.layers.expand_all(),
            PanelInteraction::CollapseAllLayers => state.layers.collapse_all(),
            PanelInteraction::SettingsActionRequested(action) => {
                Self::handle_settings_action(state, action);
            }
            PanelInteraction::ThemeChanged(theme_name) => {
                ThemeCoordinator::change_theme(state, theme_name);
            }
            PanelInteraction::Placeholder(action) => Self::record_placeholder(state, action),
        }
    }

    /// Handles the advanced section of the settings view.
    ///
    /// Reset restores the toggles. Export and import are placeholders.
    fn handle_settings_action(state: &mut AppState, action: SettingsAction) {
        match action {
            SettingsAction::ResetToDefaults => {
                state.settings.reset();
                tracing::info!("extension settings reset to defaults");
                state.status_message = Some(action.label().to_string());
            }
            SettingsAction::Export | SettingsAction::Import => {
                tracing::info!(action = action.label(), "settings action not implemented");
                state.status_message = Some(format!("{} (not available)", action.label()));
            }
        }
    }

    fn record_placeholder(state: &mut AppState, action: PlaceholderAction) {
        let description = action.describe();
        tracing::info!(action = %description, "placeholder action");
        state.status_message = Some(description);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::SidebarTab;

    #[test]
    fn test_launch_options_apply_tab_theme_and_selection() {
        let mut state = AppState::new();
        let args = Args {
            tab: Some(SidebarTab::Layers),
            theme: Some("Nope".to_string()),
            select: Some("3".to_string()),
        };
        ApplicationCoordinator::apply_launch_options(&mut state, &args);

        assert_eq!(state.sidebar.active_tab(), SidebarTab::Layers);
        assert_eq!(state.theme.name(), designbar::DEFAULT_THEME);
        assert_eq!(state.layers.selected_node(), Some("3"));
        assert_eq!(state.sync_selection(), 1);
        assert_eq!(
            state.properties.selected_element().map(|n| n.kind.as_str()),
            Some("img")
        );
    }

    #[test]
    fn test_layer_interactions_update_tree() {
        let mut state = AppState::new();
        ApplicationCoordinator::handle_interaction(
            &mut state,
            PanelInteraction::LayerExpandToggled { node_id: "2".to_string() },
        );
        assert!(!state.layers.is_expanded("2"));

        ApplicationCoordinator::handle_interaction(
            &mut state,
            PanelInteraction::LayerSelected { node_id: "4".to_string() },
        );
        assert_eq!(state.layers.selected_node(), Some("4"));

        ApplicationCoordinator::handle_interaction(&mut state, PanelInteraction::CollapseAllLayers);
        let names: Vec<&str> = state
            .layers
            .visible_rows()
            .iter()
            .map(|row| row.node.name.as_str())
            .collect();
        assert_eq!(names, vec!["App"]);
    }

    #[test]
    fn test_reset_settings_action() {
        let mut state = AppState::new();
        state.settings.auto_save = false;
        ApplicationCoordinator::handle_interaction(
            &mut state,
            PanelInteraction::SettingsActionRequested(SettingsAction::ResetToDefaults),
        );
        assert!(state.settings.auto_save);

        ApplicationCoordinator::handle_interaction(
            &mut state,
            PanelInteraction::SettingsActionRequested(SettingsAction::Export),
        );
        assert_eq!(
            state.status_message.as_deref(),
            Some("Export settings (not available)")
        );
    }

    #[test]
    fn test_settings_toggle_keeps_tab() {
        let mut state = AppState::new();
        ApplicationCoordinator::handle_interaction(
            &mut state,
            PanelInteraction::TabSelected(SidebarTab::Assets),
        );
        ApplicationCoordinator::handle_interaction(&mut state, PanelInteraction::SettingsToggled);
        assert!(state.sidebar.show_settings());
        assert_eq!(state.sidebar.active_tab(), SidebarTab::Assets);
    }

    #[test]
    fn test_settings_close_button_only_closes() {
        let mut state = AppState::new();
        ApplicationCoordinator::handle_interaction(&mut state, PanelInteraction::SettingsClosed);
        assert!(!state.sidebar.show_settings());

        ApplicationCoordinator::handle_interaction(&mut state, PanelInteraction::SettingsToggled);
        ApplicationCoordinator::handle_interaction(&mut state, PanelInteraction::SettingsClosed);
        assert!(!state.sidebar.show_settings());
        assert_eq!(state.sidebar.active_tab(), SidebarTab::Components);
    }

    #[test]
    fn test_placeholder_records_status() {
        let mut state = AppState::new();
        ApplicationCoordinator::handle_interaction(
            &mut state,
            PanelInteraction::Placeholder(PlaceholderAction::AddComponent),
        );
        assert_eq!(state.status_message.as_deref(), Some("Add Component"));
    }
}
