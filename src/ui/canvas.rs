//! Main canvas placeholder with the theme selector.

use designbar::ThemeColors;

use crate::app::AppState;

/// Renders the canvas area. Returns the newly chosen theme name, if any.
pub fn render_canvas(ui: &mut egui::Ui, state: &AppState, colors: &ThemeColors) -> Option<String> {
    let mut chosen = None;

    ui.horizontal(|ui| {
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let current = state.theme.name();
            egui::ComboBox::from_id_salt("theme_selector")
                .selected_text(current)
                .show_ui(ui, |ui| {
                    for name in state.theme.names() {
                        if ui.selectable_label(name == current, name).clicked() && name != current {
                            chosen = Some(name.to_string());
                        }
                    }
                });
            ui.label("Theme");
        });
    });

    ui.centered_and_justified(|ui| {
        let mut text = egui::text::LayoutJob::default();
        text.append(
            "Main Canvas Area",
            0.0,
            egui::TextFormat::simple(egui::FontId::proportional(18.0), colors.text_dim),
        );
        if let Some(message) = &state.status_message {
            text.append(
                &format!("\n\nLast action: {message}"),
                0.0,
                egui::TextFormat::simple(egui::FontId::proportional(12.0), colors.text_dim),
            );
        }
        ui.label(text);
    });

    chosen
}
