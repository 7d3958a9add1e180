//! Layer tree state manager.
//!
//! Bundles an immutable `LayerTree`, its `LayerTreeState`, and an optional
//! selection observer. All operations are total: unknown ids are accepted and
//! simply have no matching node.

use std::fmt;

use super::node::{LayerNode, LayerTree};
use super::view_state::LayerTreeState;
use super::visibility::{collect_visible_rows, VisibleRow};
use crate::traits::SelectionObserver;

/// Owns the view state of one layers panel and reports selections.
pub struct LayerTreeManager {
    tree: LayerTree,
    state: LayerTreeState,
    observer: Option<Box<dyn SelectionObserver>>,
}

impl fmt::Debug for LayerTreeManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LayerTreeManager")
            .field("tree", &self.tree)
            .field("state", &self.state)
            .field("has_observer", &self.observer.is_some())
            .finish()
    }
}

impl LayerTreeManager {
    /// Creates a manager with the given initial view state.
    pub fn new(tree: LayerTree, state: LayerTreeState) -> Self {
        Self {
            tree,
            state,
            observer: None,
        }
    }

    /// Creates a manager over the sample page structure with its default
    /// expansion (`App`, `Header`, `Main Content`) and selection (`Hero Section`).
    pub fn sample() -> Self {
        Self::new(
            crate::samples::sample_layers(),
            LayerTreeState::with_initial(
                crate::samples::SAMPLE_EXPANDED_LAYERS.iter().copied(),
                Some(crate::samples::SAMPLE_SELECTED_LAYER),
            ),
        )
    }

    /// Attaches the observer that receives every selection.
    pub fn with_observer(mut self, observer: impl SelectionObserver + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    pub fn tree(&self) -> &LayerTree {
        &self.tree
    }

    pub fn state(&self) -> &LayerTreeState {
        &self.state
    }

    // ===== Operations =====

    /// Flips the expansion of `node_id`. Returns `true` if it is now expanded.
    pub fn toggle_expanded(&mut self, node_id: &str) -> bool {
        self.state.toggle_expanded(node_id)
    }

    /// Selects `node_id` and notifies the observer exactly once.
    ///
    /// Ids that are not in the tree are accepted as-is; the observer then
    /// receives `None` for the node.
    pub fn select_node(&mut self, node_id: &str) {
        let previous = self.state.select(node_id);
        let node = self.tree.find(node_id);

        if node.is_none() {
            tracing::warn!(node_id, "selected layer id is not in the tree");
        }
        tracing::debug!(node_id, previous = ?previous, "layer selected");

        if let Some(observer) = self.observer.as_mut() {
            observer.on_select(node_id, node);
        }
    }

    /// Expands every node that has children.
    pub fn expand_all(&mut self) {
        let ids = self.tree.parent_ids();
        self.state.expand_all(ids);
    }

    pub fn collapse_all(&mut self) {
        self.state.collapse_all();
    }

    // ===== Queries =====

    /// Returns the visible rows in pre-order for the current state.
    pub fn visible_rows(&self) -> Vec<VisibleRow<'_>> {
        collect_visible_rows(
            &self.tree,
            self.state.expanded_nodes(),
            self.state.selected_node(),
        )
    }

    pub fn is_expanded(&self, node_id: &str) -> bool {
        self.state.is_expanded(node_id)
    }

    pub fn is_selected(&self, node_id: &str) -> bool {
        self.state.is_selected(node_id)
    }

    /// Returns the selected id, whether or not it resolves to a node.
    pub fn selected_node(&self) -> Option<&str> {
        self.state.selected_node()
    }

    /// Returns the selected node if the selected id is in the tree.
    pub fn selected_layer(&self) -> Option<&LayerNode> {
        self.state.selected_node().and_then(|id| self.tree.find(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_observer_called_once_per_selection() {
        let calls: Rc<RefCell<Vec<(String, Option<String>)>>> = Rc::default();
        let sink = Rc::clone(&calls);
        let mut manager = LayerTreeManager::sample().with_observer(
            move |id: &str, node: Option<&LayerNode>| {
                sink.borrow_mut()
                    .push((id.to_string(), node.map(|n| n.name.clone())));
            },
        );

        manager.select_node("8");
        manager.select_node("missing");

        let calls = calls.borrow();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0], ("8".to_string(), Some("Footer".to_string())));
        assert_eq!(calls[1], ("missing".to_string(), None));
    }

    #[test]
    fn test_selected_layer_resolves_node() {
        let mut manager = LayerTreeManager::sample();
        assert_eq!(
            manager.selected_layer().map(|n| n.name.as_str()),
            Some("Hero Section")
        );
        manager.select_node("nope");
        assert_eq!(manager.selected_node(), Some("nope"));
        assert!(manager.selected_layer().is_none());
    }

    #[test]
    fn test_expand_all_shows_every_node() {
        let mut manager = LayerTreeManager::sample();
        manager.collapse_all();
        assert_eq!(manager.visible_rows().len(), 1);
        manager.expand_all();
        assert_eq!(manager.visible_rows().len(), manager.tree().len());
    }
}
