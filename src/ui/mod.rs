//! UI panel rendering subsystem
//!
//! This module contains all panel rendering logic for the design sidebar:
//! - Tab navigation (tab strip plus settings toggle)
//! - Catalog panels (components, pages, assets) with shared search and view-mode controls
//! - Layers panel (page structure tree)
//! - Settings panel (session-local extension toggles)
//! - Properties panel (styles and element settings of the selected layer)
//! - Canvas (main area placeholder and theme selector)
//! - Panel manager (panel orchestration and layout)
//!
//! Panels never apply their own clicks to shared state; they return interaction
//! values that the application coordinator applies after drawing.

pub mod tab_navigation;
pub mod catalog_controls;
pub mod components_panel;
pub mod pages_panel;
pub mod assets_panel;
pub mod layers_panel;
pub mod settings_panel;
pub mod properties_panel;
pub mod canvas;
pub mod panel_manager;
