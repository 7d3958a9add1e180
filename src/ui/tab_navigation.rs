//! Tab strip at the top of the sidebar and the settings toggle at its bottom.

use designbar::ThemeColors;

use crate::state::{SidebarState, SidebarTab};

/// Result of tab strip interactions.
pub enum TabNavigationInteraction {
    TabSelected(SidebarTab),
    SettingsToggled,
}

/// Renders the four tabs with an underline under the active one.
pub fn render_tab_strip(
    ui: &mut egui::Ui,
    sidebar: &SidebarState,
    colors: &ThemeColors,
) -> Option<TabNavigationInteraction> {
    let mut interaction = None;
    let tab_width = ui.available_width() / SidebarTab::ALL.len() as f32;

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 0.0;
        for tab in SidebarTab::ALL {
            let is_active = sidebar.active_tab() == tab && !sidebar.show_settings();
            let text_color = if is_active { colors.text } else { colors.text_dim };
            let (rect, response) =
                ui.allocate_exact_size(egui::vec2(tab_width, 32.0), egui::Sense::click());

            if response.hovered() && !is_active {
                ui.painter().rect_filled(rect, 0.0, colors.hover);
            }
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                tab.title(),
                egui::FontId::proportional(12.0),
                text_color,
            );
            if is_active {
                let underline = egui::Rect::from_min_max(
                    egui::pos2(rect.left(), rect.bottom() - 2.0),
                    rect.right_bottom(),
                );
                ui.painter().rect_filled(underline, 0.0, colors.accent);
            }

            if response.on_hover_text(tab.title()).clicked() {
                interaction = Some(TabNavigationInteraction::TabSelected(tab));
            }
        }
    });

    interaction
}

/// Renders the settings toggle shown at the bottom of the sidebar.
pub fn render_settings_toggle(
    ui: &mut egui::Ui,
    sidebar: &SidebarState,
) -> Option<TabNavigationInteraction> {
    let label = if sidebar.show_settings() { "⚙ Hide Settings" } else { "⚙ Settings" };
    let button = egui::Button::new(label)
        .selected(sidebar.show_settings())
        .min_size(egui::vec2(ui.available_width(), 24.0));

    ui.add(button)
        .clicked()
        .then_some(TabNavigationInteraction::SettingsToggled)
}
