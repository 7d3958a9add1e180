//! Properties panel UI rendering
//!
//! Shows the element delivered by the last layer selection. Styles and element
//! settings are laid out as collapsible sections built from the field tables;
//! every edit is stored as a draft keyed by element id.

use designbar::{
    ElementSettingsKind, FieldControl, FieldSpec, FieldValue, PropertySection, PropertyTab,
    StyleSelector, ThemeColors,
};

use crate::state::PropertiesState;

/// Width of the field label column
const LABEL_WIDTH: f32 = 96.0;

/// Renders the expanded panel contents.
///
/// The collapsed strip is drawn by the panel manager.
pub fn render_properties_panel(ui: &mut egui::Ui, properties: &mut PropertiesState, colors: &ThemeColors) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("Properties").strong());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.small_button("▶").on_hover_text("Collapse panel").clicked() {
                properties.toggle_collapsed();
            }
        });
    });
    ui.separator();

    let Some(element) = properties.selected_element().cloned() else {
        ui.add_space(32.0);
        ui.vertical_centered(|ui| {
            ui.label(egui::RichText::new("Select an element to edit its properties").color(colors.text_dim));
        });
        return;
    };
    let kind = ElementSettingsKind::from_kind(&element.kind);

    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(&element.name).strong());
        ui.label(egui::RichText::new(format!("<{}>", element.kind)).monospace().small().color(colors.text_dim));
    });

    ui.horizontal(|ui| {
        for tab in PropertyTab::ALL {
            ui.selectable_value(&mut properties.active_tab, tab, tab.title());
        }
    });
    ui.separator();

    // Element settings are never split by pseudo-class
    let selector = match properties.active_tab {
        PropertyTab::Styles => {
            ui.horizontal(|ui| {
                ui.label("State");
                egui::ComboBox::from_id_salt("style_selector")
                    .selected_text(properties.selector.label())
                    .show_ui(ui, |ui| {
                        for selector in StyleSelector::ALL {
                            ui.selectable_value(&mut properties.selector, selector, selector.label());
                        }
                    });
            });
            properties.selector
        }
        PropertyTab::Properties => StyleSelector::Element,
    };

    egui::ScrollArea::vertical()
        .id_salt("properties_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for &section in properties.active_tab.sections() {
                let open = properties.sections.is_open(section);
                if section_header(ui, section.title(kind), open, colors) {
                    properties.sections.toggle(section);
                }
                if open {
                    render_section_fields(ui, properties, &element.id, selector, section, kind);
                }
            }
        });
}

/// Clickable section title. Returns `true` when clicked.
fn section_header(ui: &mut egui::Ui, title: &str, open: bool, colors: &ThemeColors) -> bool {
    let chevron = if open { "▼" } else { "▶" };
    let text = egui::RichText::new(format!("{chevron}  {title}")).strong().color(colors.text);
    let button = egui::Button::new(text)
        .frame(false)
        .min_size(egui::vec2(ui.available_width(), 24.0));
    let clicked = ui.add(button).clicked();
    ui.painter().hline(
        ui.min_rect().x_range(),
        ui.cursor().top(),
        egui::Stroke::new(1.0, colors.border),
    );
    clicked
}

fn render_section_fields(
    ui: &mut egui::Ui,
    properties: &mut PropertiesState,
    element_id: &str,
    selector: StyleSelector,
    section: PropertySection,
    kind: ElementSettingsKind,
) {
    egui::Grid::new(("section_fields", section_id(section)))
        .num_columns(2)
        .min_col_width(LABEL_WIDTH)
        .spacing([8.0, 4.0])
        .show(ui, |ui| {
            for spec in section.fields(kind) {
                let value = properties.drafts.entry(element_id, selector, spec);
                render_field(ui, spec, value);
                ui.end_row();
            }
        });
    ui.add_space(6.0);
}

fn section_id(section: PropertySection) -> &'static str {
    match section {
        PropertySection::Layout => "layout",
        PropertySection::Spacing => "spacing",
        PropertySection::Size => "size",
        PropertySection::Position => "position",
        PropertySection::Typography => "typography",
        PropertySection::Colors => "colors",
        PropertySection::Borders => "borders",
        PropertySection::Visibility => "visibility",
        PropertySection::ElementProps => "element",
        PropertySection::Accessibility => "accessibility",
        PropertySection::Interactions => "interactions",
        PropertySection::CustomAttributes => "custom_attributes",
    }
}

/// One grid row: label in the first column, control in the second.
fn render_field(ui: &mut egui::Ui, spec: &FieldSpec, value: &mut FieldValue) {
    match (spec.control, value) {
        (FieldControl::Checkbox { .. }, FieldValue::Flag(flag)) => {
            ui.label("");
            ui.checkbox(flag, spec.label);
        }
        (FieldControl::Text { placeholder }, FieldValue::Text(text)) => {
            ui.label(spec.label);
            ui.add(
                egui::TextEdit::singleline(text)
                    .hint_text(placeholder)
                    .desired_width(f32::INFINITY),
            );
        }
        (FieldControl::TextArea { placeholder }, FieldValue::Text(text)) => {
            ui.label(spec.label);
            ui.add(
                egui::TextEdit::multiline(text)
                    .hint_text(placeholder)
                    .desired_rows(3)
                    .code_editor()
                    .desired_width(f32::INFINITY),
            );
        }
        (FieldControl::Select { options, .. }, FieldValue::Text(current)) => {
            ui.label(spec.label);
            let selected_label = options
                .iter()
                .find(|(value, _)| *value == current.as_str())
                .map(|(_, label)| *label)
                .unwrap_or("Select...");
            egui::ComboBox::from_id_salt(("field_select", spec.key))
                .selected_text(selected_label)
                .show_ui(ui, |ui| {
                    for (value, label) in options {
                        if ui.selectable_label(current.as_str() == *value, *label).clicked() {
                            *current = (*value).to_string();
                        }
                    }
                });
        }
        (_, value) => {
            tracing::warn!(field = spec.key, ?value, "draft value does not match field control");
            ui.label(spec.label);
            ui.label("");
        }
    }
}
