//! Visible row collection for the layer tree.
//!
//! Rows are produced in depth-first pre-order. A node's children are visited
//! only when the node has children and its id is in the expanded set; otherwise
//! the whole subtree is skipped. The traversal never mutates state, so the same
//! tree and expansion set always yield the same rows.

use std::collections::HashSet;

use super::node::{LayerNode, LayerTree};

/// One visible row of the layer tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleRow<'a> {
    pub node: &'a LayerNode,
    /// Row position in display order
    pub row_index: usize,
    pub depth: usize,
    pub has_children: bool,
    pub is_expanded: bool,
    pub is_selected: bool,
    /// Whether this is the last child of its parent (or the last root)
    pub is_last_child: bool,
    /// For each ancestor level (0 to depth-1), whether more siblings follow
    /// below at that level. Used to draw vertical connector lines.
    pub branch_context: Vec<bool>,
}

impl VisibleRow<'_> {
    pub fn id(&self) -> &str {
        &self.node.id
    }
}

/// Collects every visible row of `tree` for the given expansion set and selection.
pub fn collect_visible_rows<'a>(
    tree: &'a LayerTree,
    expanded_nodes: &HashSet<String>,
    selected: Option<&str>,
) -> Vec<VisibleRow<'a>> {
    let mut rows = Vec::new();
    let mut branch_context = Vec::new();
    visit_siblings(
        tree.roots(),
        0,
        expanded_nodes,
        selected,
        &mut branch_context,
        &mut rows,
    );
    rows
}

fn visit_siblings<'a>(
    siblings: &'a [LayerNode],
    depth: usize,
    expanded_nodes: &HashSet<String>,
    selected: Option<&str>,
    branch_context: &mut Vec<bool>,
    rows: &mut Vec<VisibleRow<'a>>,
) {
    let count = siblings.len();
    for (index, node) in siblings.iter().enumerate() {
        let is_last_child = index + 1 == count;
        let has_children = node.has_children();
        let is_expanded = expanded_nodes.contains(&node.id);

        rows.push(VisibleRow {
            node,
            row_index: rows.len(),
            depth,
            has_children,
            is_expanded,
            is_selected: selected == Some(node.id.as_str()),
            is_last_child,
            branch_context: branch_context.clone(),
        });

        if has_children && is_expanded {
            branch_context.push(!is_last_child);
            visit_siblings(
                &node.children,
                depth + 1,
                expanded_nodes,
                selected,
                branch_context,
                rows,
            );
            branch_context.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> LayerTree {
        LayerTree::new(vec![LayerNode::new("a", "A", "div").with_children(vec![
            LayerNode::new("b", "B", "div")
                .with_children(vec![LayerNode::new("c", "C", "span")]),
            LayerNode::new("d", "D", "div"),
        ])])
        .unwrap()
    }

    fn expanded(ids: &[&str]) -> HashSet<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    fn ids<'a>(rows: &'a [VisibleRow<'_>]) -> Vec<&'a str> {
        rows.iter().map(|r| r.id()).collect()
    }

    #[test]
    fn test_collapsed_root_shows_only_root() {
        let tree = tree();
        let rows = collect_visible_rows(&tree, &HashSet::new(), None);
        assert_eq!(ids(&rows), vec!["a"]);
        assert!(rows[0].has_children);
        assert!(!rows[0].is_expanded);
    }

    #[test]
    fn test_depths_and_row_indices() {
        let tree = tree();
        let rows = collect_visible_rows(&tree, &expanded(&["a", "b"]), Some("c"));
        assert_eq!(ids(&rows), vec!["a", "b", "c", "d"]);
        let depths: Vec<usize> = rows.iter().map(|r| r.depth).collect();
        assert_eq!(depths, vec![0, 1, 2, 1]);
        let indices: Vec<usize> = rows.iter().map(|r| r.row_index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
        assert!(rows[2].is_selected);
        assert_eq!(rows.iter().filter(|r| r.is_selected).count(), 1);
    }

    #[test]
    fn test_expanded_child_under_collapsed_parent_is_hidden() {
        let tree = tree();
        let rows = collect_visible_rows(&tree, &expanded(&["b"]), None);
        assert_eq!(ids(&rows), vec!["a"]);
    }

    #[test]
    fn test_expanded_leaf_renders_as_leaf() {
        let tree = tree();
        let rows = collect_visible_rows(&tree, &expanded(&["a", "d"]), None);
        assert_eq!(ids(&rows), vec!["a", "b", "d"]);
    }

    #[test]
    fn test_branch_context() {
        let tree = tree();
        let rows = collect_visible_rows(&tree, &expanded(&["a", "b"]), None);
        // "c" sits under "b", which has a following sibling "d"
        assert_eq!(rows[2].branch_context, vec![false, true]);
        assert!(rows[2].is_last_child);
        assert!(!rows[1].is_last_child);
        assert!(rows[3].is_last_child);
    }

    #[test]
    fn test_empty_tree_has_no_rows() {
        let tree = LayerTree::new(Vec::new()).unwrap();
        assert!(collect_visible_rows(&tree, &expanded(&["a"]), Some("a")).is_empty());
    }
}
