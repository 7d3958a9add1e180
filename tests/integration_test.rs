use designbar::{
    collect_visible_rows, ChannelObserver, LayerNode, LayerTree, LayerTreeError, LayerTreeManager,
    LayerTreeState, SelectionEvent,
};
use anyhow::Result;
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;
use std::sync::mpsc;

fn names(manager: &LayerTreeManager) -> Vec<String> {
    manager
        .visible_rows()
        .iter()
        .map(|row| row.node.name.clone())
        .collect()
}

#[test]
fn test_sample_initial_rows() {
    let manager = LayerTreeManager::sample();
    assert_eq!(
        names(&manager),
        vec![
            "App",
            "Header",
            "Logo",
            "Navigation",
            "Main Content",
            "Hero Section",
            "Features",
            "Footer"
        ]
    );

    let rows = manager.visible_rows();
    let depths: Vec<usize> = rows.iter().map(|row| row.depth).collect();
    assert_eq!(depths, vec![0, 1, 2, 2, 1, 2, 2, 1]);

    let selected: Vec<&str> = rows.iter().filter(|row| row.is_selected).map(|row| row.id()).collect();
    assert_eq!(selected, vec!["6"]);
}

#[test]
fn test_collapse_and_reexpand_header() {
    let mut manager = LayerTreeManager::sample();

    assert!(!manager.toggle_expanded("2"));
    assert_eq!(
        names(&manager),
        vec!["App", "Header", "Main Content", "Hero Section", "Features", "Footer"]
    );

    assert!(manager.toggle_expanded("2"));
    assert_eq!(
        names(&manager),
        vec![
            "App",
            "Header",
            "Logo",
            "Navigation",
            "Main Content",
            "Hero Section",
            "Features",
            "Footer"
        ]
    );
}

#[test]
fn test_double_toggle_is_identity() {
    for id in ["1", "2", "3", "5", "8", "not-a-layer"] {
        let mut manager = LayerTreeManager::sample();
        let before = manager.state().clone();
        manager.toggle_expanded(id);
        manager.toggle_expanded(id);
        assert_eq!(manager.state(), &before, "double toggle of {id}");
    }
}

#[test]
fn test_expansion_is_independent_per_node() {
    let mut manager = LayerTreeManager::sample();
    manager.toggle_expanded("5");
    assert!(!manager.is_expanded("5"));
    assert!(manager.is_expanded("1"));
    assert!(manager.is_expanded("2"));

    // Collapsing an ancestor keeps the descendant's flag
    manager.toggle_expanded("1");
    assert_eq!(names(&manager), vec!["App"]);
    assert!(manager.is_expanded("2"));

    manager.toggle_expanded("1");
    assert_eq!(
        names(&manager),
        vec!["App", "Header", "Logo", "Navigation", "Main Content", "Footer"]
    );
}

#[test]
fn test_toggling_leaf_does_not_change_rows() {
    let mut manager = LayerTreeManager::sample();
    let before = names(&manager);
    assert!(manager.toggle_expanded("3"));
    assert_eq!(names(&manager), before);
    assert!(manager.is_expanded("3"));
}

#[test]
fn test_selecting_footer_notifies_observer_once() {
    let calls: Rc<RefCell<Vec<(String, Option<LayerNode>)>>> = Rc::default();
    let sink = Rc::clone(&calls);
    let mut manager = LayerTreeManager::sample().with_observer(
        move |id: &str, node: Option<&LayerNode>| {
            sink.borrow_mut().push((id.to_string(), node.cloned()));
        },
    );

    manager.select_node("8");

    let calls = calls.borrow();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "8");
    let footer = calls[0].1.as_ref().map(|node| (node.name.as_str(), node.kind.as_str()));
    assert_eq!(footer, Some(("Footer", "footer")));

    assert!(manager.is_selected("8"));
    assert!(!manager.is_selected("6"));
    let selected_rows = manager.visible_rows().iter().filter(|row| row.is_selected).count();
    assert_eq!(selected_rows, 1);
}

#[test]
fn test_selection_does_not_change_expansion() {
    let mut manager = LayerTreeManager::sample();
    let expanded_before = manager.state().expanded_nodes().clone();
    manager.select_node("3");
    manager.select_node("3");
    assert_eq!(manager.state().expanded_nodes(), &expanded_before);
    assert_eq!(manager.selected_node(), Some("3"));
}

#[test]
fn test_unknown_id_selection_is_permissive() -> Result<()> {
    let (sender, receiver) = mpsc::channel();
    let mut manager = LayerTreeManager::sample().with_observer(ChannelObserver::new(sender));

    manager.select_node("ghost");

    assert_eq!(manager.selected_node(), Some("ghost"));
    assert!(manager.selected_layer().is_none());
    assert!(manager.visible_rows().iter().all(|row| !row.is_selected));

    let event = receiver.try_recv()?;
    assert_eq!(
        event,
        SelectionEvent {
            id: "ghost".to_string(),
            node: None,
        }
    );
    assert!(receiver.try_recv().is_err());
    Ok(())
}

#[test]
fn test_traversal_is_deterministic() {
    let manager = LayerTreeManager::sample();
    let first: Vec<(String, usize, bool)> = manager
        .visible_rows()
        .iter()
        .map(|row| (row.id().to_string(), row.depth, row.is_expanded))
        .collect();
    let second: Vec<(String, usize, bool)> = manager
        .visible_rows()
        .iter()
        .map(|row| (row.id().to_string(), row.depth, row.is_expanded))
        .collect();
    assert_eq!(first, second);
}

#[test]
fn test_tree_from_json() -> Result<()> {
    let roots: Vec<LayerNode> = serde_json::from_value(serde_json::json!([
        {
            "id": "root",
            "name": "Page",
            "type": "div",
            "is_visible": true,
            "is_locked": false,
            "children": [
                { "id": "img", "name": "Banner", "type": "img", "is_visible": false, "is_locked": true }
            ]
        },
        { "id": "side", "name": "Aside", "type": "aside", "is_visible": true, "is_locked": false }
    ]))?;
    let tree = LayerTree::new(roots)?;
    assert_eq!(tree.len(), 3);
    assert_eq!(tree.ids(), vec!["root", "img", "side"]);

    let banner = tree.find("img").map(|node| (node.is_visible, node.is_locked));
    assert_eq!(banner, Some((false, true)));

    let expanded: HashSet<String> = ["root".to_string()].into_iter().collect();
    let rows = collect_visible_rows(&tree, &expanded, Some("side"));
    let summary: Vec<(&str, usize, bool, Vec<bool>)> = rows
        .iter()
        .map(|row| (row.id(), row.depth, row.is_last_child, row.branch_context.clone()))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("root", 0, false, vec![]),
            ("img", 1, true, vec![true]),
            ("side", 0, true, vec![]),
        ]
    );
    Ok(())
}

#[test]
fn test_invalid_trees_are_rejected() {
    let duplicate = LayerTree::new(vec![
        LayerNode::new("a", "First", "div"),
        LayerNode::new("b", "Second", "div").with_children(vec![LayerNode::new("a", "Again", "span")]),
    ]);
    assert_eq!(duplicate.unwrap_err(), LayerTreeError::DuplicateId("a".to_string()));

    let empty = LayerTree::new(vec![LayerNode::new("", "Nameless", "div")]);
    assert!(matches!(empty, Err(LayerTreeError::EmptyId { .. })));
}

#[test]
fn test_custom_initial_state() {
    let tree = LayerTree::new(vec![LayerNode::new("x", "Root", "div")
        .with_children(vec![LayerNode::new("y", "Child", "p")])])
    .unwrap_or_default();
    let manager = LayerTreeManager::new(tree, LayerTreeState::new());
    assert_eq!(names(&manager), vec!["Root"]);
    assert_eq!(manager.selected_node(), None);
}
