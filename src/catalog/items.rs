//! Catalog entry types.

use serde::{Deserialize, Serialize};

use crate::traits::Searchable;

/// A reusable UI component in the components library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentEntry {
    pub id: String,
    pub name: String,
    pub category: String,
    pub description: String,
}

impl ComponentEntry {
    pub fn new(id: &str, name: &str, category: &str, description: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            category: category.to_string(),
            description: description.to_string(),
        }
    }

    /// First character of the name, used as the grid thumbnail.
    pub fn initial(&self) -> String {
        self.name.chars().next().map(String::from).unwrap_or_default()
    }
}

impl Searchable for ComponentEntry {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.category.as_str()]
    }
}

/// Publication state of a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageStatus {
    Published,
    Draft,
}

impl PageStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PageStatus::Published => "published",
            PageStatus::Draft => "draft",
        }
    }
}

/// A page of the site being designed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageEntry {
    pub id: String,
    pub name: String,
    pub path: String,
    pub status: PageStatus,
}

impl PageEntry {
    pub fn new(id: &str, name: &str, path: &str, status: PageStatus) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            path: path.to_string(),
            status,
        }
    }
}

impl Searchable for PageEntry {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.path.as_str()]
    }
}

/// Media type of an uploaded asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Image,
    Document,
    Video,
}

impl AssetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetKind::Image => "image",
            AssetKind::Document => "document",
            AssetKind::Video => "video",
        }
    }
}

/// A file in the project's asset library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetEntry {
    pub id: String,
    pub name: String,
    pub kind: AssetKind,
    /// Human-readable size label, e.g. "245 KB"
    pub size: String,
}

impl AssetEntry {
    pub fn new(id: &str, name: &str, kind: AssetKind, size: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            kind,
            size: size.to_string(),
        }
    }
}

impl Searchable for AssetEntry {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.kind.as_str()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_matches_name_or_category() {
        let button = ComponentEntry::new("1", "Button", "Form", "Primary action button");
        assert!(button.matches("butt"));
        assert!(button.matches("FORM"));
        assert!(button.matches(""));
        assert!(!button.matches("action"));
    }

    #[test]
    fn test_asset_matches_kind() {
        let clip = AssetEntry::new("4", "video-intro.mp4", AssetKind::Video, "15 MB");
        assert!(clip.matches("vid"));
        assert!(!clip.matches("image"));
    }

    #[test]
    fn test_page_status_serializes_lowercase() {
        let page = PageEntry::new("2", "About", "/about", PageStatus::Draft);
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["status"], "draft");
    }

    #[test]
    fn test_initial() {
        let card = ComponentEntry::new("3", "Card", "Layout", "Content container");
        assert_eq!(card.initial(), "C");
    }
}
