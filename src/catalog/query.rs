//! Search, sort and presentation options for catalog panels.
//!
//! Filtering is a case-insensitive substring match over each entry's search
//! fields. Sorting is stable, so entries that compare equal keep their source
//! order.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::items::{ComponentEntry, PageEntry};
use crate::traits::Searchable;

/// How catalog entries are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ViewMode {
    List,
    Grid,
    #[default]
    Cards,
}

impl ViewMode {
    pub const ALL: [ViewMode; 3] = [ViewMode::List, ViewMode::Grid, ViewMode::Cards];

    pub fn title(&self) -> &'static str {
        match self {
            ViewMode::List => "List View",
            ViewMode::Grid => "Grid View",
            ViewMode::Cards => "Card View",
        }
    }

    /// Number of columns the entries are arranged in.
    pub fn columns(&self) -> usize {
        match self {
            ViewMode::Grid => 2,
            ViewMode::List | ViewMode::Cards => 1,
        }
    }
}

/// Ordering applied to a catalog.
pub trait SortOrder<T> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// Keeps the source order. Used by catalogs without sort options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SourceOrder;

impl<T> SortOrder<T> for SourceOrder {
    fn compare(&self, _a: &T, _b: &T) -> Ordering {
        Ordering::Equal
    }
}

/// Compares display strings the way a user expects: case-folded first,
/// then the raw strings to keep the order total.
pub fn text_cmp(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Sort options for the components panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ComponentSort {
    #[default]
    NameAsc,
    NameDesc,
    Category,
}

impl ComponentSort {
    pub const ALL: [ComponentSort; 3] = [
        ComponentSort::NameAsc,
        ComponentSort::NameDesc,
        ComponentSort::Category,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ComponentSort::NameAsc => "A-Z",
            ComponentSort::NameDesc => "Z-A",
            ComponentSort::Category => "Category",
        }
    }
}

impl SortOrder<ComponentEntry> for ComponentSort {
    fn compare(&self, a: &ComponentEntry, b: &ComponentEntry) -> Ordering {
        match self {
            ComponentSort::NameAsc => text_cmp(&a.name, &b.name),
            ComponentSort::NameDesc => text_cmp(&b.name, &a.name),
            ComponentSort::Category => text_cmp(&a.category, &b.category),
        }
    }
}

/// Sort options for the pages panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PageSort {
    #[default]
    NameAsc,
    NameDesc,
    Status,
}

impl PageSort {
    pub const ALL: [PageSort; 3] = [PageSort::NameAsc, PageSort::NameDesc, PageSort::Status];

    pub fn label(&self) -> &'static str {
        match self {
            PageSort::NameAsc => "A-Z",
            PageSort::NameDesc => "Z-A",
            PageSort::Status => "Status",
        }
    }
}

impl SortOrder<PageEntry> for PageSort {
    fn compare(&self, a: &PageEntry, b: &PageEntry) -> Ordering {
        match self {
            PageSort::NameAsc => text_cmp(&a.name, &b.name),
            PageSort::NameDesc => text_cmp(&b.name, &a.name),
            PageSort::Status => text_cmp(a.status.as_str(), b.status.as_str()),
        }
    }
}

/// Filters `items` by `term` and orders the result with `sort`, if given.
pub fn query<'a, T, S>(items: &'a [T], term: &str, sort: Option<&S>) -> Vec<&'a T>
where
    T: Searchable,
    S: SortOrder<T>,
{
    let mut matched: Vec<&T> = items.iter().filter(|item| item.matches(term)).collect();
    if let Some(sort) = sort {
        matched.sort_by(|a, b| sort.compare(a, b));
    }
    matched
}
