//! Layer tree: the page-structure hierarchy and its view state.
//!
//! - `node` - immutable `LayerNode` / `LayerTree` data model with id validation
//! - `view_state` - expansion and single-selection state (`LayerTreeState`)
//! - `visibility` - pre-order, expansion-filtered row traversal
//! - `manager` - state plus selection observer (`LayerTreeManager`)

mod node;
mod view_state;
mod visibility;
mod manager;

pub use node::{LayerNode, LayerTree, LayerTreeError};
pub use view_state::LayerTreeState;
pub use visibility::{collect_visible_rows, VisibleRow};
pub use manager::LayerTreeManager;
