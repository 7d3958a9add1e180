//! Extension settings shown in the settings view.
//!
//! These toggles live for one session only and are never written to storage.

/// Version label shown in the settings footer.
pub const EXTENSION_VERSION_LABEL: &str = "Visual Design Extension v1.0.0";

/// Identifies one boolean setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingToggle {
    AutoSave,
    ShowCodePreview,
    LivePreview,
    CacheComponents,
    LazyLoadAssets,
}

impl SettingToggle {
    pub const EDITOR: [SettingToggle; 3] = [
        SettingToggle::AutoSave,
        SettingToggle::ShowCodePreview,
        SettingToggle::LivePreview,
    ];

    pub const PERFORMANCE: [SettingToggle; 2] =
        [SettingToggle::CacheComponents, SettingToggle::LazyLoadAssets];

    pub fn label(&self) -> &'static str {
        match self {
            SettingToggle::AutoSave => "Auto-save changes",
            SettingToggle::ShowCodePreview => "Show code preview",
            SettingToggle::LivePreview => "Enable live preview",
            SettingToggle::CacheComponents => "Cache components",
            SettingToggle::LazyLoadAssets => "Lazy load assets",
        }
    }
}

/// Placeholder actions in the advanced section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsAction {
    ResetToDefaults,
    Export,
    Import,
}

impl SettingsAction {
    pub const ALL: [SettingsAction; 3] = [
        SettingsAction::ResetToDefaults,
        SettingsAction::Export,
        SettingsAction::Import,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SettingsAction::ResetToDefaults => "Reset to defaults",
            SettingsAction::Export => "Export settings",
            SettingsAction::Import => "Import settings",
        }
    }
}

/// Session-local extension settings. Every toggle defaults to on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionSettings {
    pub auto_save: bool,
    pub show_code_preview: bool,
    pub live_preview: bool,
    pub cache_components: bool,
    pub lazy_load_assets: bool,
}

impl Default for ExtensionSettings {
    fn default() -> Self {
        Self {
            auto_save: true,
            show_code_preview: true,
            live_preview: true,
            cache_components: true,
            lazy_load_assets: true,
        }
    }
}

impl ExtensionSettings {
    /// Returns a mutable reference to the flag behind `toggle` (for checkboxes).
    pub fn flag_mut(&mut self, toggle: SettingToggle) -> &mut bool {
        match toggle {
            SettingToggle::AutoSave => &mut self.auto_save,
            SettingToggle::ShowCodePreview => &mut self.show_code_preview,
            SettingToggle::LivePreview => &mut self.live_preview,
            SettingToggle::CacheComponents => &mut self.cache_components,
            SettingToggle::LazyLoadAssets => &mut self.lazy_load_assets,
        }
    }

    pub fn flag(&self, toggle: SettingToggle) -> bool {
        match toggle {
            SettingToggle::AutoSave => self.auto_save,
            SettingToggle::ShowCodePreview => self.show_code_preview,
            SettingToggle::LivePreview => self.live_preview,
            SettingToggle::CacheComponents => self.cache_components,
            SettingToggle::LazyLoadAssets => self.lazy_load_assets,
        }
    }

    /// Restores every toggle to its default.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_restores_defaults() {
        let mut settings = ExtensionSettings::default();
        for toggle in SettingToggle::EDITOR.iter().chain(&SettingToggle::PERFORMANCE) {
            *settings.flag_mut(*toggle) = false;
            assert!(!settings.flag(*toggle));
        }
        settings.reset();
        assert_eq!(settings, ExtensionSettings::default());
        assert!(settings.lazy_load_assets);
    }
}
