//! Settings persistence coordination.
//!
//! Persists serializable UI preferences (panel widths) to eframe storage as
//! JSON strings. Extension toggles are session-only and never pass through here.

use serde::{Deserialize, Serialize};

use crate::state::LayoutState;

const LAYOUT_KEY: &str = "sidebar_layout";

/// Coordinates settings persistence.
pub struct SettingsCoordinator;

impl SettingsCoordinator {
    /// Loads a setting from persistent storage with a default fallback.
    ///
    /// Missing keys and values that fail to parse both yield `T::default()`.
    pub fn load_setting<T>(storage: Option<&dyn eframe::Storage>, key: &str) -> T
    where
        T: for<'de> Deserialize<'de> + Default,
    {
        let Some(json_str) = storage.and_then(|storage| storage.get_string(key)) else {
            return T::default();
        };
        match serde_json::from_str(&json_str) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(key, error = %err, "discarding unreadable stored setting");
                T::default()
            }
        }
    }

    /// Saves a setting to persistent storage.
    pub fn save_setting<T>(storage: &mut dyn eframe::Storage, key: &str, value: &T)
    where
        T: Serialize,
    {
        match serde_json::to_string(value) {
            Ok(json_str) => {
                storage.set_string(key, json_str);
                storage.flush();
            }
            Err(err) => tracing::warn!(key, error = %err, "failed to serialize setting"),
        }
    }

    /// Loads the panel widths, clamping stored values to the usable range.
    pub fn load_layout(storage: Option<&dyn eframe::Storage>) -> LayoutState {
        let stored: LayoutState = Self::load_setting(storage, LAYOUT_KEY);
        let mut layout = LayoutState::new();
        layout.set_sidebar_width(stored.sidebar_width());
        layout.set_properties_width(stored.properties_width());
        layout
    }

    pub fn save_layout(storage: &mut dyn eframe::Storage, layout: &LayoutState) {
        Self::save_setting(storage, LAYOUT_KEY, layout);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::Storage;
    use std::collections::HashMap;

    /// Simple mock storage for testing
    struct MockStorage {
        data: HashMap<String, String>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                data: HashMap::new(),
            }
        }
    }

    impl eframe::Storage for MockStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.data.get(key).cloned()
        }

        fn set_string(&mut self, key: &str, value: String) {
            self.data.insert(key.to_string(), value);
        }

        fn flush(&mut self) {}
    }

    #[test]
    fn test_save_and_load_simple() {
        let mut storage = MockStorage::new();
        SettingsCoordinator::save_setting(&mut storage, "test_key", &42i32);

        let loaded: i32 = SettingsCoordinator::load_setting(Some(&storage), "test_key");
        assert_eq!(loaded, 42);
    }

    #[test]
    fn test_missing_or_corrupt_values_use_default() {
        let mut storage = MockStorage::new();
        let loaded: i32 = SettingsCoordinator::load_setting(Some(&storage), "missing_key");
        assert_eq!(loaded, 0);

        storage.set_string("broken", "{not json".to_string());
        let loaded: i32 = SettingsCoordinator::load_setting(Some(&storage), "broken");
        assert_eq!(loaded, 0);

        let loaded: i32 = SettingsCoordinator::load_setting(None, "test_key");
        assert_eq!(loaded, 0);
    }

    #[test]
    fn test_layout_round_trip_is_clamped() {
        let mut storage = MockStorage::new();
        let mut layout = LayoutState::new();
        layout.set_sidebar_width(280.0);
        SettingsCoordinator::save_layout(&mut storage, &layout);
        assert_eq!(SettingsCoordinator::load_layout(Some(&storage)), layout);

        storage.set_string(
            LAYOUT_KEY,
            r#"{"sidebar_width":5.0,"properties_width":9000.0}"#.to_string(),
        );
        let loaded = SettingsCoordinator::load_layout(Some(&storage));
        assert_eq!(loaded.sidebar_width(), 200.0);
        assert_eq!(loaded.properties_width(), 640.0);
    }
}
