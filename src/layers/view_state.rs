//! Layer tree view state.
//!
//! This module encapsulates the state of one layers panel instance:
//! which nodes are expanded and which single node is selected.
//! The tree itself is not referenced here; ids are plain values.

use std::collections::HashSet;

/// Expansion and selection state for a layer tree view.
///
/// Responsibilities:
/// - Tracking expanded node ids (per node, never cascading to descendants)
/// - Tracking the single selected node id
/// - Providing intent-revealing queries for rendering
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayerTreeState {
    /// Set of expanded node ids
    expanded_nodes: HashSet<String>,
    /// Currently selected node id
    selected_node: Option<String>,
}

impl LayerTreeState {
    /// Creates a state with nothing expanded and nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a state with a fixed initial expansion set and selection.
    pub fn with_initial<I, S>(expanded: I, selected: Option<&str>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            expanded_nodes: expanded.into_iter().map(Into::into).collect(),
            selected_node: selected.map(str::to_string),
        }
    }

    // ===== Expansion Queries =====

    /// Returns the set of expanded node ids.
    pub fn expanded_nodes(&self) -> &HashSet<String> {
        &self.expanded_nodes
    }

    pub fn is_expanded(&self, node_id: &str) -> bool {
        self.expanded_nodes.contains(node_id)
    }

    // ===== Expansion Mutations =====

    /// Flips the expansion of `node_id`.
    ///
    /// Descendants keep their own membership, so re-expanding a parent brings
    /// back whatever was expanded underneath it. Unknown ids are stored like
    /// any other and have no visible effect.
    ///
    /// # Returns
    /// `true` if the node is now expanded.
    pub fn toggle_expanded(&mut self, node_id: &str) -> bool {
        if self.expanded_nodes.remove(node_id) {
            tracing::debug!(node_id, "layer collapsed");
            false
        } else {
            self.expanded_nodes.insert(node_id.to_string());
            tracing::debug!(node_id, "layer expanded");
            true
        }
    }

    /// Expands the given node.
    ///
    /// # Returns
    /// `true` if the node was newly expanded, `false` if already expanded.
    pub fn expand(&mut self, node_id: &str) -> bool {
        self.expanded_nodes.insert(node_id.to_string())
    }

    /// Collapses the given node.
    ///
    /// # Returns
    /// `true` if the node was expanded and is now collapsed.
    pub fn collapse(&mut self, node_id: &str) -> bool {
        self.expanded_nodes.remove(node_id)
    }

    /// Expands every id yielded by `node_ids`.
    pub fn expand_all<'a>(&mut self, node_ids: impl IntoIterator<Item = &'a str>) {
        for id in node_ids {
            self.expand(id);
        }
    }

    /// Collapses all nodes.
    pub fn collapse_all(&mut self) {
        self.expanded_nodes.clear();
    }

    // ===== Selection =====

    /// Returns the selected node id, if any.
    pub fn selected_node(&self) -> Option<&str> {
        self.selected_node.as_deref()
    }

    pub fn is_selected(&self, node_id: &str) -> bool {
        self.selected_node.as_deref() == Some(node_id)
    }

    /// Replaces the selection with `node_id`.
    ///
    /// # Returns
    /// The previously selected id, if any.
    pub fn select(&mut self, node_id: &str) -> Option<String> {
        self.selected_node.replace(node_id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips_membership() {
        let mut state = LayerTreeState::new();
        assert!(state.toggle_expanded("1"));
        assert!(state.is_expanded("1"));
        assert!(!state.toggle_expanded("1"));
        assert!(!state.is_expanded("1"));
    }

    #[test]
    fn test_double_toggle_restores_set() {
        let mut state = LayerTreeState::with_initial(["1", "2", "5"], Some("6"));
        let before = state.expanded_nodes().clone();
        state.toggle_expanded("2");
        state.toggle_expanded("2");
        assert_eq!(state.expanded_nodes(), &before);

        state.toggle_expanded("7");
        state.toggle_expanded("7");
        assert_eq!(state.expanded_nodes(), &before);
    }

    #[test]
    fn test_collapse_does_not_cascade() {
        let mut state = LayerTreeState::with_initial(["1", "2"], None);
        state.toggle_expanded("1");
        assert!(!state.is_expanded("1"));
        assert!(state.is_expanded("2"));
    }

    #[test]
    fn test_select_replaces_previous() {
        let mut state = LayerTreeState::with_initial(Vec::<String>::new(), Some("6"));
        let previous = state.select("8");
        assert_eq!(previous.as_deref(), Some("6"));
        assert!(state.is_selected("8"));
        assert!(!state.is_selected("6"));
    }

    #[test]
    fn test_expand_and_collapse_report_change() {
        let mut state = LayerTreeState::new();
        assert!(state.expand("1"));
        assert!(!state.expand("1"));
        assert!(state.collapse("1"));
        assert!(!state.collapse("1"));
    }

    #[test]
    fn test_expand_all_then_collapse_all() {
        let mut state = LayerTreeState::new();
        state.expand_all(["1", "2", "5"]);
        assert_eq!(state.expanded_nodes().len(), 3);
        state.collapse_all();
        assert!(state.expanded_nodes().is_empty());
    }
}
