//! Text rendering utilities
//!
//! Shared utilities for text measurement and truncation.

use eframe::egui;

const ELLIPSIS: &str = "…";

/// Horizontal padding kept free on each side of a label.
const LABEL_PADDING: f32 = 4.0;

/// Measures the width of `text` when laid out on a single line.
pub fn text_width(text: &str, font_id: &egui::FontId, painter: &egui::Painter) -> f32 {
    painter
        .layout_no_wrap(text.to_owned(), font_id.clone(), egui::Color32::WHITE)
        .size()
        .x
}

/// Shortens `text` with a trailing ellipsis so it fits `available_width`.
///
/// Returns an empty string when not even the ellipsis fits.
pub fn fit_text(
    text: &str,
    available_width: f32,
    font_id: &egui::FontId,
    painter: &egui::Painter,
) -> String {
    let max_width = available_width - 2.0 * LABEL_PADDING;
    if max_width <= 0.0 {
        return String::new();
    }
    if text_width(text, font_id, painter) <= max_width {
        return text.to_owned();
    }

    let budget = max_width - text_width(ELLIPSIS, font_id, painter);
    if budget <= 0.0 {
        return String::new();
    }

    // Byte offset where each char starts; boundaries[k] ends a k-char prefix
    let boundaries: Vec<usize> = text.char_indices().map(|(offset, _)| offset).collect();
    if boundaries.is_empty() {
        return String::new();
    }

    let (mut low, mut high) = (0usize, boundaries.len() - 1);
    while low < high {
        let mid = (low + high + 1) / 2;
        if text_width(&text[..boundaries[mid]], font_id, painter) <= budget {
            low = mid;
        } else {
            high = mid - 1;
        }
    }

    format!("{}{ELLIPSIS}", text[..boundaries[low]].trim_end())
}
