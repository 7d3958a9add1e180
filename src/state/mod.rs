//! State management modules for the design sidebar.
//!
//! This module contains state-only logic (no UI concerns):
//! - Sidebar state (active tab, settings view toggle)
//! - Catalog state (sample datasets, search terms, sort options, view modes)
//! - Properties state (selected element, tabs, open sections, field drafts)
//! - Theme state (theme manager, current theme)
//! - Layout state (panel widths)
//!
//! Layer tree expansion and selection live in `designbar::layers`.

mod sidebar_state;
mod catalog_state;
mod properties_state;
mod theme_state;
mod layout_state;

pub use sidebar_state::{SidebarState, SidebarTab};
pub use catalog_state::{CatalogState, ComponentsViewState};
pub use properties_state::PropertiesState;
pub use theme_state::ThemeState;
pub use layout_state::{
    LayoutState, COLLAPSED_PROPERTIES_WIDTH, MAX_PANEL_WIDTH, MIN_PANEL_WIDTH,
};
