//! Components panel UI rendering
//!
//! Searchable, sortable component library shown as a list, a two-column
//! grid, or cards with an actions menu.

use designbar::{ComponentEntry, ComponentSort, ThemeColors, ViewMode};

use crate::state::ComponentsViewState;
use crate::state::CatalogState;
use crate::ui::catalog_controls;
use crate::ui::panel_manager::PlaceholderAction;

/// Renders the components panel.
pub fn render_components_panel(
    ui: &mut egui::Ui,
    catalog: &mut CatalogState,
    colors: &ThemeColors,
) -> Option<PlaceholderAction> {
    let mut action = None;
    let components: Vec<ComponentEntry> =
        catalog.visible_components().into_iter().cloned().collect();
    let view = &mut catalog.components_view;

    ui.add_space(4.0);
    catalog_controls::search_box(ui, &mut view.search_term, "Search components...");
    ui.horizontal(|ui| {
        catalog_controls::sort_selector(
            ui,
            "component_sort",
            &mut view.sort,
            &ComponentSort::ALL,
            |sort| sort.label(),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            catalog_controls::view_mode_toggle(ui, &mut view.view_mode);
        });
    });
    catalog_controls::count_label(ui, components.len(), "component", colors);
    ui.separator();

    egui::TopBottomPanel::bottom("components_footer")
        .show_separator_line(true)
        .show_inside(ui, |ui| {
            ui.add_space(4.0);
            if catalog_controls::primary_action(ui, "+ Add Component", colors) {
                action = Some(PlaceholderAction::AddComponent);
            }
        });

    egui::ScrollArea::vertical()
        .id_salt("components_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            if components.is_empty() {
                catalog_controls::empty_state(ui, &view.search_term, colors);
                return;
            }
            let card_action = match view.view_mode {
                ViewMode::Grid => render_grid(ui, &components, colors),
                ViewMode::List => render_list(ui, &components, view, colors),
                ViewMode::Cards => render_cards(ui, &components, view, colors),
            };
            if card_action.is_some() {
                action = card_action;
            }
        });

    action
}

fn render_grid(
    ui: &mut egui::Ui,
    components: &[ComponentEntry],
    colors: &ThemeColors,
) -> Option<PlaceholderAction> {
    let column_width = (ui.available_width() - 8.0) / ViewMode::Grid.columns() as f32;
    egui::Grid::new("components_grid")
        .num_columns(ViewMode::Grid.columns())
        .spacing([8.0, 8.0])
        .show(ui, |ui| {
            for (index, component) in components.iter().enumerate() {
                egui::Frame::group(ui.style())
                    .fill(colors.input_background)
                    .show(ui, |ui| {
                        ui.set_width(column_width - 16.0);
                        ui.vertical_centered(|ui| {
                            ui.label(egui::RichText::new(component.initial()).heading().color(colors.accent));
                            ui.label(egui::RichText::new(&component.name).small());
                        });
                    })
                    .response
                    .on_hover_text(&component.description);
                if (index + 1) % ViewMode::Grid.columns() == 0 {
                    ui.end_row();
                }
            }
        });
    None
}

fn render_list(
    ui: &mut egui::Ui,
    components: &[ComponentEntry],
    view: &mut ComponentsViewState,
    colors: &ThemeColors,
) -> Option<PlaceholderAction> {
    let mut action = None;
    for component in components {
        ui.horizontal(|ui| {
            ui.label(&component.name);
            ui.label(egui::RichText::new(&component.category).small().color(colors.text_dim));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.small_button("⋮").on_hover_text("Actions").clicked() {
                    view.toggle_menu(&component.id);
                }
            });
        });
        if view.is_menu_open(&component.id) {
            if let Some(card_action) = render_card_menu(ui, component, view) {
                action = Some(card_action);
            }
        }
        ui.separator();
    }
    action
}

fn render_cards(
    ui: &mut egui::Ui,
    components: &[ComponentEntry],
    view: &mut ComponentsViewState,
    colors: &ThemeColors,
) -> Option<PlaceholderAction> {
    let mut action = None;
    for component in components {
        egui::Frame::group(ui.style())
            .fill(colors.input_background)
            .stroke(egui::Stroke::new(1.0, colors.border))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(&component.name).strong());
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.small_button("⋮").on_hover_text("Actions").clicked() {
                            view.toggle_menu(&component.id);
                        }
                    });
                });
                ui.label(egui::RichText::new(&component.category).small().color(colors.accent));
                ui.label(egui::RichText::new(&component.description).small().color(colors.text_dim));

                if view.is_menu_open(&component.id) {
                    if let Some(card_action) = render_card_menu(ui, component, view) {
                        action = Some(card_action);
                    }
                }
            });
        ui.add_space(4.0);
    }
    action
}

/// Duplicate / Edit / Delete row. Choosing an item closes the menu.
fn render_card_menu(
    ui: &mut egui::Ui,
    component: &ComponentEntry,
    view: &mut ComponentsViewState,
) -> Option<PlaceholderAction> {
    let mut action = None;
    ui.horizontal(|ui| {
        let name = component.name.clone();
        if ui.small_button("Duplicate").clicked() {
            action = Some(PlaceholderAction::DuplicateComponent(name.clone()));
        }
        if ui.small_button("Edit").clicked() {
            action = Some(PlaceholderAction::EditComponent(name.clone()));
        }
        if ui.small_button("Delete").clicked() {
            action = Some(PlaceholderAction::DeleteComponent(name));
        }
    });
    if action.is_some() {
        view.toggle_menu(&component.id);
    }
    action
}
