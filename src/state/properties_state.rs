//! Properties panel state.
//!
//! Tracks the element delivered by the selection channel and the panel's
//! own view options. Field edits are drafts only; nothing is written back
//! to the layer tree.

use designbar::{
    LayerNode, PropertyDrafts, PropertyTab, SectionState, SelectionEvent, StyleSelector,
};

/// State of the properties panel.
#[derive(Debug, Clone, Default)]
pub struct PropertiesState {
    /// Whether the panel is collapsed to its toggle strip
    pub collapsed: bool,
    pub active_tab: PropertyTab,
    /// Pseudo-class the style fields edit
    pub selector: StyleSelector,
    pub sections: SectionState,
    pub drafts: PropertyDrafts,
    selected_element: Option<LayerNode>,
}

impl PropertiesState {
    pub fn new() -> Self {
        Self::default()
    }

    // ===== Queries =====

    /// Element shown in the panel, if any.
    pub fn selected_element(&self) -> Option<&LayerNode> {
        self.selected_element.as_ref()
    }

    // ===== Mutations =====

    /// Shows the element carried by a selection event.
    ///
    /// An event for an id that is not in the tree carries no node and clears
    /// the panel back to its placeholder.
    pub fn apply_selection(&mut self, event: SelectionEvent) {
        self.selected_element = event.node;
    }

    pub fn toggle_collapsed(&mut self) {
        self.collapsed = !self.collapsed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_event_updates_element() {
        let mut state = PropertiesState::new();
        assert!(state.selected_element().is_none());

        state.apply_selection(SelectionEvent {
            id: "3".to_string(),
            node: Some(LayerNode::new("3", "Logo", "img")),
        });
        assert_eq!(state.selected_element().map(|n| n.name.as_str()), Some("Logo"));
        assert_eq!(state.selected_element().map(|n| n.kind.as_str()), Some("img"));

        state.apply_selection(SelectionEvent {
            id: "missing".to_string(),
            node: None,
        });
        assert!(state.selected_element().is_none());
    }
}
