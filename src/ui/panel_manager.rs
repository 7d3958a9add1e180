//! Panel orchestration and layout management.
//!
//! Lays out the sidebar (tabs, active panel or settings, settings toggle), the
//! properties panel and the canvas, and funnels every panel interaction into a
//! single `PanelInteraction` for the application coordinator.

use designbar::SettingsAction;

use crate::app::AppState;
use crate::rendering::layer_renderer::LayerRowInteraction;
use crate::state::{SidebarTab, COLLAPSED_PROPERTIES_WIDTH, MAX_PANEL_WIDTH, MIN_PANEL_WIDTH};
use crate::ui::layers_panel::LayersPanelInteraction;
use crate::ui::settings_panel::SettingsPanelInteraction;
use crate::ui::tab_navigation::TabNavigationInteraction;
use crate::ui::{
    assets_panel, canvas, components_panel, layers_panel, pages_panel, properties_panel,
    settings_panel, tab_navigation,
};

/// Buttons whose only effect is a log line and a status message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaceholderAction {
    AddComponent,
    DuplicateComponent(String),
    EditComponent(String),
    DeleteComponent(String),
    NewPage,
    OpenPage(String),
    UploadAsset,
    ToggleLayerVisibility(String),
    ToggleLayerLock(String),
}

impl PlaceholderAction {
    pub fn describe(&self) -> String {
        match self {
            PlaceholderAction::AddComponent => "Add Component".to_string(),
            PlaceholderAction::DuplicateComponent(name) => format!("Duplicate {name}"),
            PlaceholderAction::EditComponent(name) => format!("Edit {name}"),
            PlaceholderAction::DeleteComponent(name) => format!("Delete {name}"),
            PlaceholderAction::NewPage => "New Page".to_string(),
            PlaceholderAction::OpenPage(name) => format!("Open page {name}"),
            PlaceholderAction::UploadAsset => "Upload Asset".to_string(),
            PlaceholderAction::ToggleLayerVisibility(id) => format!("Toggle visibility of layer {id}"),
            PlaceholderAction::ToggleLayerLock(id) => format!("Toggle lock of layer {id}"),
        }
    }
}

/// Result of panel interactions that need to be handled by the application coordinator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelInteraction {
    TabSelected(SidebarTab),
    /// Settings button in the tab strip
    SettingsToggled,
    /// Close button of the settings view
    SettingsClosed,
    LayerSelected { node_id: String },
    LayerExpandToggled { node_id: String },
    ExpandAllLayers,
    CollapseAllLayers,
    SettingsActionRequested(SettingsAction),
    ThemeChanged(String),
    Placeholder(PlaceholderAction),
}

impl From<LayerRowInteraction> for PanelInteraction {
    fn from(interaction: LayerRowInteraction) -> Self {
        match interaction {
            LayerRowInteraction::Selected { node_id } => PanelInteraction::LayerSelected { node_id },
            LayerRowInteraction::ExpandToggled { node_id } => {
                PanelInteraction::LayerExpandToggled { node_id }
            }
            LayerRowInteraction::VisibilityClicked { node_id } => {
                PanelInteraction::Placeholder(PlaceholderAction::ToggleLayerVisibility(node_id))
            }
            LayerRowInteraction::LockClicked { node_id } => {
                PanelInteraction::Placeholder(PlaceholderAction::ToggleLayerLock(node_id))
            }
        }
    }
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// Called from the eframe::App::update() implementation. Local view options
    /// (search terms, sort, view modes, open sections, drafts) are edited in
    /// place; everything else comes back as an interaction.
    pub fn render_all_panels(ctx: &egui::Context, state: &mut AppState) -> Option<PanelInteraction> {
        let mut interaction: Option<PanelInteraction> = None;
        let colors = state.theme.colors().clone();

        // Left: sidebar
        let sidebar_frame = egui::Frame::default()
            .inner_margin(egui::Margin::same(6))
            .fill(colors.panel_background);

        let sidebar = egui::SidePanel::left("sidebar")
            .default_width(state.layout.sidebar_width())
            .width_range(MIN_PANEL_WIDTH..=MAX_PANEL_WIDTH)
            .resizable(true)
            .frame(sidebar_frame)
            .show(ctx, |ui| {
                if let Some(tab_interaction) = tab_navigation::render_tab_strip(ui, &state.sidebar, &colors) {
                    interaction = Some(Self::map_tab_interaction(tab_interaction));
                }

                egui::TopBottomPanel::bottom("sidebar_settings_toggle").show_inside(ui, |ui| {
                    ui.add_space(4.0);
                    if let Some(toggle) = tab_navigation::render_settings_toggle(ui, &state.sidebar) {
                        interaction = Some(Self::map_tab_interaction(toggle));
                    }
                });

                egui::CentralPanel::default()
                    .frame(egui::Frame::NONE)
                    .show_inside(ui, |ui| {
                        if let Some(panel_interaction) = Self::render_active_panel(ui, state, &colors) {
                            interaction = Some(panel_interaction);
                        }
                    });
            });
        state.layout.set_sidebar_width(sidebar.response.rect.width());

        // Right: properties
        let properties_frame = egui::Frame::default()
            .inner_margin(egui::Margin::same(6))
            .fill(colors.panel_background);

        if state.properties.collapsed {
            egui::SidePanel::right("properties_collapsed")
                .exact_width(COLLAPSED_PROPERTIES_WIDTH)
                .resizable(false)
                .frame(properties_frame)
                .show(ctx, |ui| {
                    if ui.small_button("◀").on_hover_text("Show properties").clicked() {
                        state.properties.toggle_collapsed();
                    }
                });
        } else {
            let properties = egui::SidePanel::right("properties")
                .default_width(state.layout.properties_width())
                .width_range(MIN_PANEL_WIDTH..=MAX_PANEL_WIDTH)
                .resizable(true)
                .frame(properties_frame)
                .show(ctx, |ui| {
                    properties_panel::render_properties_panel(ui, &mut state.properties, &colors);
                });
            state.layout.set_properties_width(properties.response.rect.width());
        }

        // Center: canvas
        egui::CentralPanel::default()
            .frame(egui::Frame::default().inner_margin(egui::Margin::same(8)).fill(colors.canvas))
            .show(ctx, |ui| {
                if let Some(theme_name) = canvas::render_canvas(ui, state, &colors) {
                    interaction = Some(PanelInteraction::ThemeChanged(theme_name));
                }
            });

        interaction
    }

    /// Draws the settings view if open, otherwise the active tab's panel.
    fn render_active_panel(
        ui: &mut egui::Ui,
        state: &mut AppState,
        colors: &designbar::ThemeColors,
    ) -> Option<PanelInteraction> {
        if state.sidebar.show_settings() {
            return settings_panel::render_settings_panel(ui, &mut state.settings, colors).map(
                |settings_interaction| match settings_interaction {
                    SettingsPanelInteraction::Closed => PanelInteraction::SettingsClosed,
                    SettingsPanelInteraction::Action(action) => {
                        PanelInteraction::SettingsActionRequested(action)
                    }
                },
            );
        }

        match state.sidebar.active_tab() {
            SidebarTab::Components => {
                components_panel::render_components_panel(ui, &mut state.catalog, colors)
                    .map(PanelInteraction::Placeholder)
            }
            SidebarTab::Pages => pages_panel::render_pages_panel(ui, &mut state.catalog, colors)
                .map(PanelInteraction::Placeholder),
            SidebarTab::Assets => assets_panel::render_assets_panel(ui, &mut state.catalog, colors)
                .map(PanelInteraction::Placeholder),
            SidebarTab::Layers => layers_panel::render_layers_panel(ui, &state.layers, colors).map(
                |layers_interaction| match layers_interaction {
                    LayersPanelInteraction::Row(row) => row.into(),
                    LayersPanelInteraction::ExpandAll => PanelInteraction::ExpandAllLayers,
                    LayersPanelInteraction::CollapseAll => PanelInteraction::CollapseAllLayers,
                },
            ),
        }
    }

    fn map_tab_interaction(interaction: TabNavigationInteraction) -> PanelInteraction {
        match interaction {
            TabNavigationInteraction::TabSelected(tab) => PanelInteraction::TabSelected(tab),
            TabNavigationInteraction::SettingsToggled => PanelInteraction::SettingsToggled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_row_controls_map_to_placeholders() {
        let interaction: PanelInteraction = LayerRowInteraction::LockClicked {
            node_id: "3".to_string(),
        }
        .into();
        assert_eq!(
            interaction,
            PanelInteraction::Placeholder(PlaceholderAction::ToggleLayerLock("3".to_string()))
        );

        let interaction: PanelInteraction = LayerRowInteraction::ExpandToggled {
            node_id: "2".to_string(),
        }
        .into();
        assert_eq!(
            interaction,
            PanelInteraction::LayerExpandToggled { node_id: "2".to_string() }
        );
    }
}
