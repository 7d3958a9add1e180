//! Catalog panel state.
//!
//! Holds the sample datasets and the per-panel view options
//! (search term, sort option, view mode, open action menus).

use std::collections::HashSet;

use designbar::catalog::{query, SourceOrder};
use designbar::samples;
use designbar::{AssetEntry, ComponentEntry, ComponentSort, PageEntry, PageSort, ViewMode};

/// View options of the components panel.
#[derive(Debug, Clone, Default)]
pub struct ComponentsViewState {
    pub search_term: String,
    pub sort: ComponentSort,
    pub view_mode: ViewMode,
    /// Component ids whose action menu is open
    open_menus: HashSet<String>,
}

impl ComponentsViewState {
    pub fn is_menu_open(&self, component_id: &str) -> bool {
        self.open_menus.contains(component_id)
    }

    /// Flips the action menu of one card. Returns `true` if it is now open.
    pub fn toggle_menu(&mut self, component_id: &str) -> bool {
        if self.open_menus.remove(component_id) {
            false
        } else {
            self.open_menus.insert(component_id.to_string());
            true
        }
    }
}

/// View options of the pages panel.
#[derive(Debug, Clone, Default)]
pub struct PagesViewState {
    pub search_term: String,
    pub sort: PageSort,
}

/// View options of the assets panel.
#[derive(Debug, Clone, Default)]
pub struct AssetsViewState {
    pub search_term: String,
    pub view_mode: ViewMode,
}

/// Sample datasets plus their view options.
#[derive(Debug, Clone)]
pub struct CatalogState {
    components: Vec<ComponentEntry>,
    pages: Vec<PageEntry>,
    assets: Vec<AssetEntry>,
    pub components_view: ComponentsViewState,
    pub pages_view: PagesViewState,
    pub assets_view: AssetsViewState,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogState {
    /// Creates the catalog over the sample datasets.
    pub fn new() -> Self {
        Self {
            components: samples::sample_components(),
            pages: samples::sample_pages(),
            assets: samples::sample_assets(),
            components_view: ComponentsViewState::default(),
            pages_view: PagesViewState::default(),
            assets_view: AssetsViewState::default(),
        }
    }

    // ===== Filtered Views =====

    /// Components matching the search term, in the selected order.
    pub fn visible_components(&self) -> Vec<&ComponentEntry> {
        let view = &self.components_view;
        query(&self.components, &view.search_term, Some(&view.sort))
    }

    /// Pages matching the search term, in the selected order.
    pub fn visible_pages(&self) -> Vec<&PageEntry> {
        let view = &self.pages_view;
        query(&self.pages, &view.search_term, Some(&view.sort))
    }

    /// Assets matching the search term, in source order.
    pub fn visible_assets(&self) -> Vec<&AssetEntry> {
        query::<_, SourceOrder>(&self.assets, &self.assets_view.search_term, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_components_default_sorted_by_name() {
        let catalog = CatalogState::new();
        let names: Vec<&str> = catalog
            .visible_components()
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(
            names,
            vec!["Avatar", "Button", "Card", "Footer", "Input", "Modal", "Navbar", "Sidebar"]
        );
    }

    #[test]
    fn test_component_search_matches_category() {
        let mut catalog = CatalogState::new();
        catalog.components_view.search_term = "layout".to_string();
        catalog.components_view.sort = ComponentSort::NameDesc;
        let names: Vec<&str> = catalog
            .visible_components()
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["Sidebar", "Footer", "Card"]);
    }

    #[test]
    fn test_pages_search_by_path() {
        let mut catalog = CatalogState::new();
        catalog.pages_view.search_term = "/b".to_string();
        let names: Vec<&str> = catalog.visible_pages().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Blog"]);
    }

    #[test]
    fn test_assets_filter_by_kind_keeps_order() {
        let mut catalog = CatalogState::new();
        catalog.assets_view.search_term = "IMAGE".to_string();
        let names: Vec<&str> = catalog.visible_assets().iter().map(|a| a.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["hero-image.jpg", "logo.svg", "icon-set.svg", "background.png"]
        );
    }

    #[test]
    fn test_menu_toggle() {
        let mut view = ComponentsViewState::default();
        assert!(view.toggle_menu("1"));
        assert!(view.is_menu_open("1"));
        assert!(!view.toggle_menu("1"));
        assert!(!view.is_menu_open("1"));
    }
}
