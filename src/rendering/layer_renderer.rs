//! Layer row rendering logic
//!
//! Paints one row of the layers panel: selection fill, branch lines, the
//! expand/collapse chevron, the layer name with its kind tag, and the
//! visibility and lock controls revealed on hover.

use eframe::egui;
use designbar::{ThemeColors, VisibleRow};

use crate::presentation::color_mapping;
use crate::rendering::text_utils::{fit_text, text_width};

/// Height of one layer row
pub const ROW_HEIGHT: f32 = 24.0;
/// Horizontal indent per tree level
pub const INDENT_WIDTH: f32 = 16.0;
/// Left padding before the first level
const BASE_PADDING: f32 = 8.0;
const CHEVRON_WIDTH: f32 = 16.0;
const CONTROL_WIDTH: f32 = 20.0;

/// Result of user interaction with a layer row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayerRowInteraction {
    /// Row body was clicked
    Selected { node_id: String },
    /// Chevron was clicked
    ExpandToggled { node_id: String },
    /// Eye control was clicked
    VisibilityClicked { node_id: String },
    /// Lock control was clicked
    LockClicked { node_id: String },
}

/// X coordinate of the vertical guide for `level`, relative to the row start.
fn guide_x(level: usize) -> f32 {
    BASE_PADDING + level as f32 * INDENT_WIDTH + CHEVRON_WIDTH / 2.0
}

/// Renders a single layer row and reports what was clicked.
///
/// Chevron and control clicks take precedence over the row click, so toggling
/// a branch never changes the selection.
pub fn render_layer_row(
    ui: &mut egui::Ui,
    row: &VisibleRow<'_>,
    colors: &ThemeColors,
) -> Option<LayerRowInteraction> {
    let node = row.node;
    let (row_rect, row_response) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), ROW_HEIGHT),
        egui::Sense::click(),
    );
    let start = row_rect.min;

    let mut interaction = None;
    if row_response.clicked() {
        interaction = Some(LayerRowInteraction::Selected {
            node_id: node.id.clone(),
        });
    }

    let hovered = ui.rect_contains_pointer(row_rect);
    if row.is_selected {
        ui.painter().rect_filled(row_rect, 0.0, colors.selection);
    } else if hovered {
        ui.painter().rect_filled(row_rect, 0.0, colors.hover);
    }

    // Branch lines
    let stroke = egui::Stroke::new(1.0, colors.text_dim.gamma_multiply(0.5));
    let painter = ui.painter();
    for level in 1..row.depth {
        if row.branch_context.get(level).copied().unwrap_or(false) {
            let x = start.x + guide_x(level - 1);
            painter.line_segment(
                [egui::pos2(x, row_rect.top()), egui::pos2(x, row_rect.bottom())],
                stroke,
            );
        }
    }
    if row.depth > 0 {
        let x = start.x + guide_x(row.depth - 1);
        let mid_y = row_rect.center().y;
        let bottom = if row.is_last_child { mid_y } else { row_rect.bottom() };
        painter.line_segment([egui::pos2(x, row_rect.top()), egui::pos2(x, bottom)], stroke);
        painter.line_segment(
            [egui::pos2(x, mid_y), egui::pos2(x + INDENT_WIDTH / 2.0, mid_y)],
            stroke,
        );
    }

    // Expand/collapse chevron
    let indent = BASE_PADDING + row.depth as f32 * INDENT_WIDTH;
    let chevron_rect = egui::Rect::from_min_size(
        egui::pos2(start.x + indent, start.y),
        egui::vec2(CHEVRON_WIDTH, ROW_HEIGHT),
    );
    if row.has_children {
        let button_id = ui.id().with(("layer_expand", &node.id));
        let button_response = ui.interact(chevron_rect, button_id, egui::Sense::click());
        if button_response.clicked() {
            interaction = Some(LayerRowInteraction::ExpandToggled {
                node_id: node.id.clone(),
            });
        }
        let symbol = if row.is_expanded { "▼" } else { "▶" };
        ui.painter().text(
            chevron_rect.center(),
            egui::Align2::CENTER_CENTER,
            symbol,
            egui::FontId::proportional(10.0),
            colors.text_dim,
        );
    }

    // Controls on the right, shown on hover or when they carry state
    let show_eye = hovered || !node.is_visible;
    let show_lock = hovered || node.is_locked;
    let controls_left = row_rect.right() - 2.0 * CONTROL_WIDTH - 4.0;
    if show_eye || show_lock {
        let eye_rect = egui::Rect::from_min_size(
            egui::pos2(controls_left, start.y),
            egui::vec2(CONTROL_WIDTH, ROW_HEIGHT),
        );
        let lock_rect = eye_rect.translate(egui::vec2(CONTROL_WIDTH, 0.0));

        if show_eye {
            let eye = ui.interact(eye_rect, ui.id().with(("layer_eye", &node.id)), egui::Sense::click());
            if eye.clicked() {
                interaction = Some(LayerRowInteraction::VisibilityClicked {
                    node_id: node.id.clone(),
                });
            }
            let glyph = if node.is_visible { "👁" } else { "◌" };
            paint_control(ui, eye_rect, glyph, eye.hovered(), colors);
        }
        if show_lock {
            let lock = ui.interact(lock_rect, ui.id().with(("layer_lock", &node.id)), egui::Sense::click());
            if lock.clicked() {
                interaction = Some(LayerRowInteraction::LockClicked {
                    node_id: node.id.clone(),
                });
            }
            let glyph = if node.is_locked { "🔒" } else { "🔓" };
            paint_control(ui, lock_rect, glyph, lock.hovered(), colors);
        }
    }

    // Name followed by the dimmed kind tag
    let font_id = egui::FontId::proportional(13.0);
    let tag_font = egui::FontId::monospace(10.0);
    let painter = ui.painter();
    let text_left = chevron_rect.right() + 4.0;
    let text_right = if show_eye || show_lock { controls_left } else { row_rect.right() };

    let tag_width = text_width(&node.kind, &tag_font, painter) + 8.0;
    let name_width = (text_right - text_left - tag_width).max(0.0);
    let name = fit_text(&node.name, name_width, &font_id, painter);
    let name_color = if node.is_visible { colors.text } else { colors.text_dim };

    let name_rect = painter.text(
        egui::pos2(text_left, row_rect.center().y),
        egui::Align2::LEFT_CENTER,
        &name,
        font_id,
        name_color,
    );
    if name_rect.right() + tag_width <= text_right {
        painter.text(
            egui::pos2(name_rect.right() + 6.0, row_rect.center().y),
            egui::Align2::LEFT_CENTER,
            &node.kind,
            tag_font,
            color_mapping::kind_tag_color(&node.kind, colors),
        );
    }

    interaction
}

fn paint_control(ui: &egui::Ui, rect: egui::Rect, glyph: &str, hovered: bool, colors: &ThemeColors) {
    let color = if hovered { colors.text } else { colors.text_dim };
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        glyph,
        egui::FontId::proportional(11.0),
        color,
    );
}
