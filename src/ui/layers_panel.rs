//! Layers panel UI rendering
//!
//! Shows the page structure as an indented tree. Rows come from the layer
//! tree manager in display order; clicks are returned, not applied.

use designbar::{LayerTreeManager, ThemeColors};

use crate::rendering::layer_renderer::{self, LayerRowInteraction};

/// Result of layers panel interactions.
pub enum LayersPanelInteraction {
    Row(LayerRowInteraction),
    ExpandAll,
    CollapseAll,
}

/// Footer label for the current selection.
///
/// Falls back to a generic label when the selected id is not in the tree.
pub fn selection_label(layers: &LayerTreeManager) -> Option<String> {
    layers.selected_node().map(|_| {
        let name = layers
            .selected_layer()
            .map(|node| node.name.as_str())
            .unwrap_or("Element");
        format!("Selected: {name}")
    })
}

/// Renders the layers panel: header, tree rows and selection footer.
pub fn render_layers_panel(
    ui: &mut egui::Ui,
    layers: &LayerTreeManager,
    colors: &ThemeColors,
) -> Option<LayersPanelInteraction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("Page Structure").strong());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.small_button("⊟").on_hover_text("Collapse all").clicked() {
                interaction = Some(LayersPanelInteraction::CollapseAll);
            }
            if ui.small_button("⊞").on_hover_text("Expand all").clicked() {
                interaction = Some(LayersPanelInteraction::ExpandAll);
            }
        });
    });
    ui.separator();

    egui::TopBottomPanel::bottom("layers_footer").show_inside(ui, |ui| {
        let label = selection_label(layers).unwrap_or_else(|| "Nothing selected".to_string());
        ui.label(egui::RichText::new(label).small().color(colors.text_dim));
    });

    egui::ScrollArea::vertical()
        .id_salt("layers_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.spacing_mut().item_spacing.y = 0.0;
            for row in layers.visible_rows() {
                if let Some(row_interaction) = layer_renderer::render_layer_row(ui, &row, colors) {
                    interaction = Some(LayersPanelInteraction::Row(row_interaction));
                }
            }
        });

    interaction
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_label_uses_full_tree() {
        let mut layers = LayerTreeManager::sample();
        assert_eq!(selection_label(&layers).as_deref(), Some("Selected: Hero Section"));

        layers.select_node("4");
        assert_eq!(selection_label(&layers).as_deref(), Some("Selected: Navigation"));

        layers.select_node("99");
        assert_eq!(selection_label(&layers).as_deref(), Some("Selected: Element"));
    }
}
