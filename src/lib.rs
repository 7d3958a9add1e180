pub mod traits;
pub mod layers;
pub mod catalog;
pub mod properties;
pub mod settings;
pub mod samples;
pub mod theme;

// Export traits
pub use traits::{ChannelObserver, LayerId, Searchable, SelectionEvent, SelectionObserver};

// Export layer tree core
pub use layers::{
    collect_visible_rows, LayerNode, LayerTree, LayerTreeError,
    LayerTreeManager, LayerTreeState, VisibleRow
};

// Export catalog support
pub use catalog::{
    AssetEntry, AssetKind, ComponentEntry, ComponentSort,
    PageEntry, PageSort, PageStatus, ViewMode
};

// Export properties panel model
pub use properties::{
    ElementSettingsKind, FieldControl, FieldSpec, FieldValue,
    PropertyDrafts, PropertySection, PropertyTab, SectionState, StyleSelector
};

// Export settings
pub use settings::{ExtensionSettings, SettingToggle, SettingsAction};

// Export theme support
pub use theme::{Theme, ThemeColors, ThemeManager, DEFAULT_THEME, hex_to_color32, with_alpha};
