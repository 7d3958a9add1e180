//! Settings panel UI rendering
//!
//! Replaces the active panel while open. Toggles are edited in place and live
//! for the session only.

use designbar::settings::EXTENSION_VERSION_LABEL;
use designbar::{ExtensionSettings, SettingToggle, SettingsAction, ThemeColors};

/// Result of settings panel interactions.
pub enum SettingsPanelInteraction {
    Closed,
    Action(SettingsAction),
}

pub fn render_settings_panel(
    ui: &mut egui::Ui,
    settings: &mut ExtensionSettings,
    colors: &ThemeColors,
) -> Option<SettingsPanelInteraction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        ui.heading("Settings");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.small_button("✕").on_hover_text("Close settings").clicked() {
                interaction = Some(SettingsPanelInteraction::Closed);
            }
        });
    });
    ui.separator();

    egui::TopBottomPanel::bottom("settings_footer").show_inside(ui, |ui| {
        ui.label(egui::RichText::new(EXTENSION_VERSION_LABEL).small().color(colors.text_dim));
    });

    egui::ScrollArea::vertical()
        .id_salt("settings_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            section(ui, "Editor", colors, |ui| {
                for toggle in SettingToggle::EDITOR {
                    ui.checkbox(settings.flag_mut(toggle), toggle.label());
                }
            });
            section(ui, "Performance", colors, |ui| {
                for toggle in SettingToggle::PERFORMANCE {
                    ui.checkbox(settings.flag_mut(toggle), toggle.label());
                }
            });
            section(ui, "Advanced", colors, |ui| {
                for action in SettingsAction::ALL {
                    let button = egui::Button::new(action.label())
                        .min_size(egui::vec2(ui.available_width(), 24.0));
                    if ui.add(button).clicked() {
                        interaction = Some(SettingsPanelInteraction::Action(action));
                    }
                }
            });
        });

    interaction
}

fn section(
    ui: &mut egui::Ui,
    title: &str,
    colors: &ThemeColors,
    add_contents: impl FnOnce(&mut egui::Ui),
) {
    ui.add_space(6.0);
    ui.label(egui::RichText::new(title.to_uppercase()).small().strong().color(colors.text_dim));
    ui.add_space(2.0);
    add_contents(ui);
    ui.add_space(6.0);
}
