//! Centralized application state for the design sidebar.
//!
//! Composes focused state components that each manage one aspect of the
//! window: the sidebar shell, the layer tree, the catalogs, the properties
//! panel, theming and layout.

use std::sync::mpsc::{self, Receiver};

use designbar::{ChannelObserver, ExtensionSettings, LayerTreeManager, SelectionEvent};

use crate::state::{CatalogState, LayoutState, PropertiesState, SidebarState, ThemeState};

/// Main application state composed of focused state components.
pub struct AppState {
    // ===== Focused State Components =====
    /// Active tab and settings view
    pub sidebar: SidebarState,

    /// Layer tree with expansion and selection
    pub layers: LayerTreeManager,

    /// Components, pages and assets with their view options
    pub catalog: CatalogState,

    /// Element shown in the properties panel
    pub properties: PropertiesState,

    /// Session-only extension toggles
    pub settings: ExtensionSettings,

    /// Theme and styling state
    pub theme: ThemeState,

    /// Panel widths
    pub layout: LayoutState,

    // ===== Top-Level State =====
    /// Last placeholder action, shown on the canvas
    pub status_message: Option<String>,

    /// Selection notifications sent by the layer tree
    selection_events: Receiver<SelectionEvent>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates a new application state with default values.
    pub fn new() -> Self {
        Self::with_theme_and_layout(ThemeState::new(), LayoutState::new())
    }

    /// Creates a new AppState with theme and layout settings loaded from storage.
    pub fn with_theme_and_layout(theme: ThemeState, layout: LayoutState) -> Self {
        let (sender, selection_events) = mpsc::channel();
        let layers = LayerTreeManager::sample().with_observer(ChannelObserver::new(sender));

        Self {
            sidebar: SidebarState::default(),
            layers,
            catalog: CatalogState::new(),
            properties: PropertiesState::new(),
            settings: ExtensionSettings::default(),
            theme,
            layout,
            status_message: None,
            selection_events,
        }
    }

    // ===== High-Level Coordination Methods =====

    /// Moves pending selection notifications into the properties panel.
    ///
    /// Returns the number of events applied.
    pub fn sync_selection(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.selection_events.try_recv() {
            self.properties.apply_selection(event);
            applied += 1;
        }
        applied
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("sidebar", &self.sidebar)
            .field("layers", &self.layers)
            .field("theme", &self.theme)
            .field("status_message", &self.status_message)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_reaches_properties_panel() {
        let mut state = AppState::new();
        assert_eq!(state.sync_selection(), 0);
        assert!(state.properties.selected_element().is_none());

        state.layers.select_node("8");
        assert_eq!(state.sync_selection(), 1);
        assert_eq!(
            state.properties.selected_element().map(|n| n.name.as_str()),
            Some("Footer")
        );
    }
}
