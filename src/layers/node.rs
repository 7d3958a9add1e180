//! Layer tree data model.
//!
//! A `LayerTree` is an ordered set of root `LayerNode`s. Children are owned by
//! their parent, so the structure is a strict hierarchy by construction; the
//! remaining invariant (ids are non-empty and unique across the whole tree) is
//! checked once in `LayerTree::new`. The tree is never mutated afterwards.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// One element in the page-structure tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerNode {
    pub id: String,
    pub name: String,
    /// Element kind tag such as `div`, `img` or `section`
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub children: Vec<LayerNode>,
    pub is_visible: bool,
    pub is_locked: bool,
}

impl LayerNode {
    /// Creates a visible, unlocked leaf node.
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: kind.into(),
            children: Vec::new(),
            is_visible: true,
            is_locked: false,
        }
    }

    /// Replaces the children of this node.
    pub fn with_children(mut self, children: Vec<LayerNode>) -> Self {
        self.children = children;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.is_visible = false;
        self
    }

    pub fn locked(mut self) -> Self {
        self.is_locked = true;
        self
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Finds a node by id in this subtree (pre-order).
    pub fn find(&self, id: &str) -> Option<&LayerNode> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }
}

/// Errors raised while building a `LayerTree`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayerTreeError {
    #[error("layer id '{0}' appears more than once")]
    DuplicateId(String),
    #[error("layer '{name}' has an empty id")]
    EmptyId { name: String },
}

/// Immutable layer hierarchy with validated ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LayerTree {
    roots: Vec<LayerNode>,
    node_count: usize,
}

impl LayerTree {
    /// Builds a tree from its root set, rejecting empty or repeated ids.
    pub fn new(roots: Vec<LayerNode>) -> Result<Self, LayerTreeError> {
        let mut seen = HashSet::new();
        let mut stack: Vec<&LayerNode> = roots.iter().rev().collect();

        while let Some(node) = stack.pop() {
            if node.id.is_empty() {
                return Err(LayerTreeError::EmptyId {
                    name: node.name.clone(),
                });
            }
            if !seen.insert(node.id.as_str()) {
                return Err(LayerTreeError::DuplicateId(node.id.clone()));
            }
            stack.extend(node.children.iter().rev());
        }

        let node_count = seen.len();
        Ok(Self { roots, node_count })
    }

    /// Returns the root nodes in display order.
    pub fn roots(&self) -> &[LayerNode] {
        &self.roots
    }

    /// Finds a node anywhere in the tree.
    pub fn find(&self, id: &str) -> Option<&LayerNode> {
        self.roots.iter().find_map(|root| root.find(id))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    /// Total number of nodes at any depth.
    pub fn len(&self) -> usize {
        self.node_count
    }

    pub fn is_empty(&self) -> bool {
        self.node_count == 0
    }

    /// All node ids in pre-order.
    pub fn ids(&self) -> Vec<&str> {
        let mut out = Vec::with_capacity(self.node_count);
        let mut stack: Vec<&LayerNode> = self.roots.iter().rev().collect();
        while let Some(node) = stack.pop() {
            out.push(node.id.as_str());
            stack.extend(node.children.iter().rev());
        }
        out
    }

    /// Ids of every node that has children, in pre-order.
    pub fn parent_ids(&self) -> Vec<&str> {
        self.ids()
            .into_iter()
            .filter(|id| self.find(id).is_some_and(LayerNode::has_children))
            .collect()
    }
}
