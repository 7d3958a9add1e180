//! Color mapping for badges and tags.
//!
//! Color assignment is deterministic and derived only from the active palette.

use egui::Color32;
use designbar::{with_alpha, AssetKind, PageStatus, ThemeColors};

/// Foreground and background of a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeColors {
    pub text: Color32,
    pub fill: Color32,
}

/// Badge colors for a page's publication status.
pub fn page_status_colors(status: PageStatus, colors: &ThemeColors) -> BadgeColors {
    let base = match status {
        PageStatus::Published => colors.success,
        PageStatus::Draft => colors.warning,
    };
    BadgeColors {
        text: base,
        fill: with_alpha(base, 40),
    }
}

/// Color of the monospace kind tag shown after a layer name.
///
/// Media and form elements stand out; structural containers stay dim.
pub fn kind_tag_color(kind: &str, colors: &ThemeColors) -> Color32 {
    match kind {
        "img" | "video" | "svg" => colors.success,
        "button" | "input" | "form" => colors.accent,
        _ => colors.text_dim,
    }
}

/// Fill of an asset thumbnail placeholder.
pub fn asset_thumbnail_color(kind: AssetKind, colors: &ThemeColors) -> Color32 {
    match kind {
        AssetKind::Image => with_alpha(colors.accent, 48),
        AssetKind::Document => colors.input_background,
        AssetKind::Video => with_alpha(colors.destructive, 48),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use designbar::{ThemeManager, DEFAULT_THEME};

    #[test]
    fn test_status_badges_differ() {
        let manager = ThemeManager::new();
        let colors = &manager.resolve(DEFAULT_THEME).colors;
        let published = page_status_colors(PageStatus::Published, colors);
        let draft = page_status_colors(PageStatus::Draft, colors);
        assert_eq!(published.text, colors.success);
        assert_eq!(draft.text, colors.warning);
        assert_ne!(published.fill, draft.fill);
    }

    #[test]
    fn test_kind_tags() {
        let manager = ThemeManager::new();
        let colors = &manager.resolve(DEFAULT_THEME).colors;
        assert_eq!(kind_tag_color("img", colors), colors.success);
        assert_eq!(kind_tag_color("button", colors), colors.accent);
        assert_eq!(kind_tag_color("section", colors), colors.text_dim);
    }
}
