//! Controls shared by the catalog panels: search box, sort selector,
//! view mode toggle and the full-width primary action button.

use designbar::{ThemeColors, ViewMode};

/// Search box filling the available width.
pub fn search_box(ui: &mut egui::Ui, term: &mut String, hint: &str) {
    let edit = egui::TextEdit::singleline(term)
        .hint_text(format!("🔍 {hint}"))
        .desired_width(f32::INFINITY);
    ui.add(edit);
}

/// Combo box over a fixed set of options.
pub fn sort_selector<T: Copy + PartialEq>(
    ui: &mut egui::Ui,
    id_salt: &str,
    current: &mut T,
    options: &[T],
    label: impl Fn(&T) -> &'static str,
) {
    egui::ComboBox::from_id_salt(id_salt)
        .selected_text(label(current))
        .width(110.0)
        .show_ui(ui, |ui| {
            for option in options {
                ui.selectable_value(current, *option, label(option));
            }
        });
}

/// Three-button segmented toggle for the catalog view mode.
pub fn view_mode_toggle(ui: &mut egui::Ui, mode: &mut ViewMode) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 2.0;
        for option in ViewMode::ALL {
            let glyph = match option {
                ViewMode::List => "☰",
                ViewMode::Grid => "▦",
                ViewMode::Cards => "▤",
            };
            let button = egui::Button::new(glyph).selected(*mode == option);
            if ui.add(button).on_hover_text(option.title()).clicked() {
                *mode = option;
            }
        }
    });
}

/// Dimmed "N items" label.
pub fn count_label(ui: &mut egui::Ui, count: usize, noun: &str, colors: &ThemeColors) {
    let suffix = if count == 1 { "" } else { "s" };
    ui.label(
        egui::RichText::new(format!("{count} {noun}{suffix}"))
            .small()
            .color(colors.text_dim),
    );
}

/// Message shown when a search matches nothing.
pub fn empty_state(ui: &mut egui::Ui, term: &str, colors: &ThemeColors) {
    ui.add_space(24.0);
    ui.vertical_centered(|ui| {
        ui.label(
            egui::RichText::new(format!("No results for \"{term}\""))
                .color(colors.text_dim),
        );
    });
}

/// Full-width accent button used for each panel's primary action.
pub fn primary_action(ui: &mut egui::Ui, label: &str, colors: &ThemeColors) -> bool {
    let button = egui::Button::new(egui::RichText::new(label).color(egui::Color32::WHITE))
        .fill(colors.accent)
        .min_size(egui::vec2(ui.available_width(), 28.0));
    ui.add(button).clicked()
}
