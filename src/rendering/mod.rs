//! Rendering subsystem for custom-painted widgets
//!
//! - Layer row rendering (indented tree rows with branch lines)
//! - Text utilities (text measurement and truncation)

pub mod layer_renderer;
pub mod text_utils;
