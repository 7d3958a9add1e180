//! Sidebar tab and settings view state.

use clap::ValueEnum;

/// Panels reachable from the tab strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum SidebarTab {
    #[default]
    Components,
    Pages,
    Assets,
    Layers,
}

impl SidebarTab {
    pub const ALL: [SidebarTab; 4] = [
        SidebarTab::Components,
        SidebarTab::Pages,
        SidebarTab::Assets,
        SidebarTab::Layers,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            SidebarTab::Components => "Components",
            SidebarTab::Pages => "Pages",
            SidebarTab::Assets => "Assets",
            SidebarTab::Layers => "Layers",
        }
    }
}

/// State of the sidebar shell.
///
/// Responsibilities:
/// - Tracking the single active tab
/// - Tracking whether the settings view covers the active panel
#[derive(Debug, Clone, Default)]
pub struct SidebarState {
    active_tab: SidebarTab,
    show_settings: bool,
}

impl SidebarState {
    pub fn active_tab(&self) -> SidebarTab {
        self.active_tab
    }

    pub fn show_settings(&self) -> bool {
        self.show_settings
    }

    /// Makes `tab` the active panel. The settings view stays open if it was.
    pub fn select_tab(&mut self, tab: SidebarTab) {
        self.active_tab = tab;
    }

    /// Flips the settings view. Returns `true` if it is now shown.
    pub fn toggle_settings(&mut self) -> bool {
        self.show_settings = !self.show_settings;
        self.show_settings
    }

    pub fn close_settings(&mut self) {
        self.show_settings = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_components() {
        let state = SidebarState::default();
        assert_eq!(state.active_tab(), SidebarTab::Components);
        assert!(!state.show_settings());
    }

    #[test]
    fn test_settings_overlay_keeps_active_tab() {
        let mut state = SidebarState::default();
        state.select_tab(SidebarTab::Layers);
        assert!(state.toggle_settings());
        assert_eq!(state.active_tab(), SidebarTab::Layers);
        state.close_settings();
        assert!(!state.show_settings());
        assert_eq!(state.active_tab(), SidebarTab::Layers);
    }
}
