//! UI layout state management.
//!
//! This module encapsulates the widths of the two side panels.
//! Widths are persisted between sessions by the settings coordinator.

use serde::{Deserialize, Serialize};

/// Sidebar width used by a fresh install.
pub const DEFAULT_SIDEBAR_WIDTH: f32 = 320.0;
/// Properties panel width used by a fresh install.
pub const DEFAULT_PROPERTIES_WIDTH: f32 = 320.0;
/// Width of the properties panel while collapsed to its toggle strip.
pub const COLLAPSED_PROPERTIES_WIDTH: f32 = 32.0;

pub const MIN_PANEL_WIDTH: f32 = 200.0;
pub const MAX_PANEL_WIDTH: f32 = 640.0;

/// State related to UI layout and sizing.
///
/// Responsibilities:
/// - Tracking the sidebar and properties panel widths
/// - Clamping widths to a usable range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutState {
    sidebar_width: f32,
    properties_width: f32,
}

impl Default for LayoutState {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutState {
    /// Creates a new layout state with default values.
    pub fn new() -> Self {
        Self {
            sidebar_width: DEFAULT_SIDEBAR_WIDTH,
            properties_width: DEFAULT_PROPERTIES_WIDTH,
        }
    }

    // ===== Layout Queries =====

    pub fn sidebar_width(&self) -> f32 {
        self.sidebar_width
    }

    pub fn properties_width(&self) -> f32 {
        self.properties_width
    }

    // ===== Layout Mutations =====

    /// Sets the sidebar width, clamped to the supported range.
    pub fn set_sidebar_width(&mut self, width: f32) {
        self.sidebar_width = clamp_width(width);
    }

    /// Sets the properties panel width, clamped to the supported range.
    pub fn set_properties_width(&mut self, width: f32) {
        self.properties_width = clamp_width(width);
    }
}

fn clamp_width(width: f32) -> f32 {
    if width.is_finite() {
        width.clamp(MIN_PANEL_WIDTH, MAX_PANEL_WIDTH)
    } else {
        DEFAULT_SIDEBAR_WIDTH
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widths_are_clamped() {
        let mut layout = LayoutState::new();
        layout.set_sidebar_width(50.0);
        assert_eq!(layout.sidebar_width(), MIN_PANEL_WIDTH);
        layout.set_properties_width(10_000.0);
        assert_eq!(layout.properties_width(), MAX_PANEL_WIDTH);
        layout.set_sidebar_width(f32::NAN);
        assert_eq!(layout.sidebar_width(), DEFAULT_SIDEBAR_WIDTH);
    }
}
