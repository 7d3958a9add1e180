//! Static sample datasets shown by the sidebar panels.

use crate::catalog::{AssetEntry, AssetKind, ComponentEntry, PageEntry, PageStatus};
use crate::layers::{LayerNode, LayerTree};

/// Layers expanded when a layers panel opens.
pub const SAMPLE_EXPANDED_LAYERS: [&str; 3] = ["1", "2", "5"];

/// Layer selected when a layers panel opens.
pub const SAMPLE_SELECTED_LAYER: &str = "6";

/// The sample page structure.
///
/// ```text
/// App
/// ├── Header
/// │   ├── Logo
/// │   └── Navigation
/// ├── Main Content
/// │   ├── Hero Section
/// │   └── Features
/// └── Footer
/// ```
pub fn sample_layers() -> LayerTree {
    let roots = vec![LayerNode::new("1", "App", "div").with_children(vec![
        LayerNode::new("2", "Header", "header").with_children(vec![
            LayerNode::new("3", "Logo", "img"),
            LayerNode::new("4", "Navigation", "nav"),
        ]),
        LayerNode::new("5", "Main Content", "main").with_children(vec![
            LayerNode::new("6", "Hero Section", "section"),
            LayerNode::new("7", "Features", "section"),
        ]),
        LayerNode::new("8", "Footer", "footer"),
    ])];

    // Ids above are literal and unique
    LayerTree::new(roots).unwrap_or_default()
}

pub fn sample_components() -> Vec<ComponentEntry> {
    vec![
        ComponentEntry::new("1", "Button", "Form", "Primary action button"),
        ComponentEntry::new("2", "Input", "Form", "Text input field"),
        ComponentEntry::new("3", "Card", "Layout", "Content container"),
        ComponentEntry::new("4", "Modal", "Overlay", "Dialog overlay"),
        ComponentEntry::new("5", "Navbar", "Navigation", "Navigation bar"),
        ComponentEntry::new("6", "Footer", "Layout", "Page footer"),
        ComponentEntry::new("7", "Sidebar", "Layout", "Side navigation"),
        ComponentEntry::new("8", "Avatar", "Display", "User avatar"),
    ]
}

pub fn sample_pages() -> Vec<PageEntry> {
    vec![
        PageEntry::new("1", "Home", "/", PageStatus::Published),
        PageEntry::new("2", "About", "/about", PageStatus::Draft),
        PageEntry::new("3", "Contact", "/contact", PageStatus::Published),
        PageEntry::new("4", "Settings", "/settings", PageStatus::Draft),
        PageEntry::new("5", "Privacy", "/privacy", PageStatus::Published),
        PageEntry::new("6", "Blog", "/blog", PageStatus::Published),
    ]
}

pub fn sample_assets() -> Vec<AssetEntry> {
    vec![
        AssetEntry::new("1", "hero-image.jpg", AssetKind::Image, "245 KB"),
        AssetEntry::new("2", "logo.svg", AssetKind::Image, "12 KB"),
        AssetEntry::new("3", "document.pdf", AssetKind::Document, "1.2 MB"),
        AssetEntry::new("4", "video-intro.mp4", AssetKind::Video, "15 MB"),
        AssetEntry::new("5", "icon-set.svg", AssetKind::Image, "8 KB"),
        AssetEntry::new("6", "background.png", AssetKind::Image, "567 KB"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_layers_is_complete() {
        let tree = sample_layers();
        assert_eq!(tree.len(), 8);
        for id in SAMPLE_EXPANDED_LAYERS {
            assert!(tree.find(id).is_some_and(LayerNode::has_children));
        }
        assert!(tree.contains(SAMPLE_SELECTED_LAYER));
    }
}
