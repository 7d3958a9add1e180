//! Trait seams shared between the library and the GUI.
//!
//! - `SelectionObserver` receives layer selections from the layer tree manager
//! - `Searchable` exposes the text fields a catalog search matches against

use std::sync::mpsc::Sender;

use crate::layers::LayerNode;

/// Type alias for layer identifiers (unique within one layer tree)
pub type LayerId = String;

/// Receives the result of every `select_node` call.
///
/// Called synchronously, exactly once per selection. `node` is `None` when the
/// selected id does not resolve to a node in the tree.
pub trait SelectionObserver {
    fn on_select(&mut self, id: &str, node: Option<&LayerNode>);
}

impl<F> SelectionObserver for F
where
    F: FnMut(&str, Option<&LayerNode>),
{
    fn on_select(&mut self, id: &str, node: Option<&LayerNode>) {
        self(id, node)
    }
}

/// Selection message delivered over a channel.
///
/// Carries an owned copy of the node so the receiver does not borrow the tree.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionEvent {
    pub id: LayerId,
    pub node: Option<LayerNode>,
}

/// Forwards selections into an mpsc channel.
pub struct ChannelObserver(Sender<SelectionEvent>);

impl ChannelObserver {
    pub fn new(sender: Sender<SelectionEvent>) -> Self {
        Self(sender)
    }
}

impl SelectionObserver for ChannelObserver {
    fn on_select(&mut self, id: &str, node: Option<&LayerNode>) {
        let event = SelectionEvent {
            id: id.to_string(),
            node: node.cloned(),
        };
        // A dropped receiver only means nobody is listening anymore
        if self.0.send(event).is_err() {
            tracing::debug!(id, "selection receiver dropped");
        }
    }
}

/// Items that can be matched by a catalog search box.
pub trait Searchable {
    /// Text fields the search term is matched against (case-insensitive substring)
    fn search_fields(&self) -> Vec<&str>;

    /// Returns true if `term` matches any search field. An empty term matches everything.
    fn matches(&self, term: &str) -> bool {
        let needle = term.to_lowercase();
        self.search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}
