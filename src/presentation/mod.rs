//! Presentation layer for visual styling and color mapping.
//!
//! This module contains presentation logic separated from the sidebar model:
//! - Badge colors for page status
//! - Tag colors for layer kinds and asset kinds

pub mod color_mapping;
