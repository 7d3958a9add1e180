//! Assets panel UI rendering

use designbar::{AssetEntry, ThemeColors, ViewMode};

use crate::presentation::color_mapping;
use crate::state::CatalogState;
use crate::ui::catalog_controls;
use crate::ui::panel_manager::PlaceholderAction;

/// Renders the asset library.
pub fn render_assets_panel(
    ui: &mut egui::Ui,
    catalog: &mut CatalogState,
    colors: &ThemeColors,
) -> Option<PlaceholderAction> {
    let mut action = None;
    let assets: Vec<AssetEntry> = catalog.visible_assets().into_iter().cloned().collect();
    let view = &mut catalog.assets_view;

    ui.add_space(4.0);
    catalog_controls::search_box(ui, &mut view.search_term, "Search assets...");
    ui.horizontal(|ui| {
        catalog_controls::count_label(ui, assets.len(), "asset", colors);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            catalog_controls::view_mode_toggle(ui, &mut view.view_mode);
        });
    });
    ui.separator();

    egui::TopBottomPanel::bottom("assets_footer").show_inside(ui, |ui| {
        ui.add_space(4.0);
        if catalog_controls::primary_action(ui, "⬆ Upload Asset", colors) {
            action = Some(PlaceholderAction::UploadAsset);
        }
    });

    egui::ScrollArea::vertical()
        .id_salt("assets_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            if assets.is_empty() {
                catalog_controls::empty_state(ui, &view.search_term, colors);
                return;
            }
            match view.view_mode {
                ViewMode::Grid => {
                    let column_width = (ui.available_width() - 8.0) / 2.0;
                    egui::Grid::new("assets_grid")
                        .num_columns(2)
                        .spacing([8.0, 8.0])
                        .show(ui, |ui| {
                            for (index, asset) in assets.iter().enumerate() {
                                ui.vertical(|ui| {
                                    ui.set_width(column_width);
                                    thumbnail(ui, asset, egui::vec2(column_width, 64.0), colors);
                                    ui.label(egui::RichText::new(&asset.name).small());
                                });
                                if index % 2 == 1 {
                                    ui.end_row();
                                }
                            }
                        });
                }
                ViewMode::List | ViewMode::Cards => {
                    let thumb_size = if view.view_mode == ViewMode::Cards {
                        egui::vec2(48.0, 48.0)
                    } else {
                        egui::vec2(24.0, 24.0)
                    };
                    for asset in &assets {
                        ui.horizontal(|ui| {
                            thumbnail(ui, asset, thumb_size, colors);
                            ui.vertical(|ui| {
                                ui.label(&asset.name);
                                ui.label(
                                    egui::RichText::new(format!("{} • {}", asset.kind.as_str(), asset.size))
                                        .small()
                                        .color(colors.text_dim),
                                );
                            });
                        });
                        ui.add_space(2.0);
                    }
                }
            }
        });

    action
}

/// Placeholder thumbnail tinted by asset kind.
fn thumbnail(ui: &mut egui::Ui, asset: &AssetEntry, size: egui::Vec2, colors: &ThemeColors) {
    let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
    ui.painter()
        .rect_filled(rect, 4.0, color_mapping::asset_thumbnail_color(asset.kind, colors));
    let label = asset.kind.as_str().chars().next().unwrap_or('?').to_ascii_uppercase();
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        label,
        egui::FontId::proportional(size.y * 0.4),
        colors.text_dim,
    );
}
