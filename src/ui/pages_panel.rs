//! Pages panel UI rendering

use designbar::{PageEntry, PageSort, ThemeColors};

use crate::presentation::color_mapping;
use crate::state::CatalogState;
use crate::ui::catalog_controls;
use crate::ui::panel_manager::PlaceholderAction;

/// Renders the pages list with status badges.
pub fn render_pages_panel(
    ui: &mut egui::Ui,
    catalog: &mut CatalogState,
    colors: &ThemeColors,
) -> Option<PlaceholderAction> {
    let mut action = None;
    let pages: Vec<PageEntry> = catalog.visible_pages().into_iter().cloned().collect();
    let view = &mut catalog.pages_view;

    ui.add_space(4.0);
    catalog_controls::search_box(ui, &mut view.search_term, "Search pages...");
    ui.horizontal(|ui| {
        catalog_controls::sort_selector(ui, "page_sort", &mut view.sort, &PageSort::ALL, |sort| {
            sort.label()
        });
        catalog_controls::count_label(ui, pages.len(), "page", colors);
    });
    ui.separator();

    egui::TopBottomPanel::bottom("pages_footer").show_inside(ui, |ui| {
        ui.add_space(4.0);
        if catalog_controls::primary_action(ui, "+ New Page", colors) {
            action = Some(PlaceholderAction::NewPage);
        }
    });

    egui::ScrollArea::vertical()
        .id_salt("pages_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            if pages.is_empty() {
                catalog_controls::empty_state(ui, &view.search_term, colors);
                return;
            }
            for page in &pages {
                if render_page_row(ui, page, colors) {
                    action = Some(PlaceholderAction::OpenPage(page.name.clone()));
                }
            }
        });

    action
}

/// Returns `true` when the row was clicked.
fn render_page_row(ui: &mut egui::Ui, page: &PageEntry, colors: &ThemeColors) -> bool {
    let badge = color_mapping::page_status_colors(page.status, colors);
    let response = egui::Frame::NONE
        .inner_margin(egui::Margin::symmetric(6, 4))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label(&page.name);
                    ui.label(egui::RichText::new(&page.path).small().monospace().color(colors.text_dim));
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    egui::Frame::NONE
                        .fill(badge.fill)
                        .corner_radius(4.0)
                        .inner_margin(egui::Margin::symmetric(6, 2))
                        .show(ui, |ui| {
                            ui.label(egui::RichText::new(page.status.as_str()).small().color(badge.text));
                        });
                });
            });
        })
        .response
        .interact(egui::Sense::click());

    if response.hovered() {
        ui.painter().rect_stroke(
            response.rect,
            2.0,
            egui::Stroke::new(1.0, colors.border),
            egui::StrokeKind::Inside,
        );
    }
    response.clicked()
}
