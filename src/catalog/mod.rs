//! Catalog panels data: components, pages and assets.
//!
//! - `items` - entry types shown by the Components, Pages and Assets panels
//! - `query` - search filtering, sort options and view modes

mod items;
mod query;

pub use items::{AssetEntry, AssetKind, ComponentEntry, PageEntry, PageStatus};
pub use query::{query, text_cmp, ComponentSort, PageSort, SortOrder, SourceOrder, ViewMode};
