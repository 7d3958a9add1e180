//! Properties panel model.
//!
//! Describes the collapsible sections of the Styles and Properties tabs, the
//! fields inside each section, and the session-local drafts the user types in.
//! Which element-specific section is shown depends on the selected layer's kind.

use std::collections::{HashMap, HashSet};

/// Tabs of the properties panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PropertyTab {
    #[default]
    Styles,
    Properties,
}

impl PropertyTab {
    pub const ALL: [PropertyTab; 2] = [PropertyTab::Styles, PropertyTab::Properties];

    pub fn title(&self) -> &'static str {
        match self {
            PropertyTab::Styles => "Styles",
            PropertyTab::Properties => "Properties",
        }
    }

    /// Sections shown on this tab, top to bottom.
    pub fn sections(&self) -> &'static [PropertySection] {
        match self {
            PropertyTab::Styles => &[
                PropertySection::Layout,
                PropertySection::Spacing,
                PropertySection::Size,
                PropertySection::Position,
                PropertySection::Typography,
                PropertySection::Colors,
                PropertySection::Borders,
            ],
            PropertyTab::Properties => &[
                PropertySection::Visibility,
                PropertySection::ElementProps,
                PropertySection::Accessibility,
                PropertySection::Interactions,
                PropertySection::CustomAttributes,
            ],
        }
    }
}

/// Pseudo-class the style fields apply to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StyleSelector {
    #[default]
    Element,
    Hover,
    Focus,
    Active,
}

impl StyleSelector {
    pub const ALL: [StyleSelector; 4] = [
        StyleSelector::Element,
        StyleSelector::Hover,
        StyleSelector::Focus,
        StyleSelector::Active,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            StyleSelector::Element => "Element",
            StyleSelector::Hover => ":hover",
            StyleSelector::Focus => ":focus",
            StyleSelector::Active => ":active",
        }
    }
}

/// Element-specific settings chosen from a layer's kind tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementSettingsKind {
    Image,
    Button,
    Input,
    Generic,
}

impl ElementSettingsKind {
    pub fn from_kind(kind: &str) -> Self {
        match kind {
            "img" => ElementSettingsKind::Image,
            "button" => ElementSettingsKind::Button,
            "input" => ElementSettingsKind::Input,
            _ => ElementSettingsKind::Generic,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ElementSettingsKind::Image => "Image Settings",
            ElementSettingsKind::Button => "Button Settings",
            ElementSettingsKind::Input => "Input Settings",
            ElementSettingsKind::Generic => "Element Properties",
        }
    }
}

/// Collapsible sections across both tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertySection {
    Layout,
    Spacing,
    Size,
    Position,
    Typography,
    Colors,
    Borders,
    Visibility,
    ElementProps,
    Accessibility,
    Interactions,
    CustomAttributes,
}

impl PropertySection {
    /// Section title; the element section depends on the element kind.
    pub fn title(&self, element: ElementSettingsKind) -> &'static str {
        match self {
            PropertySection::Layout => "Layout",
            PropertySection::Spacing => "Spacing",
            PropertySection::Size => "Size",
            PropertySection::Position => "Position",
            PropertySection::Typography => "Typography",
            PropertySection::Colors => "Colors",
            PropertySection::Borders => "Borders",
            PropertySection::Visibility => "Visibility",
            PropertySection::ElementProps => element.title(),
            PropertySection::Accessibility => "Accessibility",
            PropertySection::Interactions => "Interactions",
            PropertySection::CustomAttributes => "Custom Attributes",
        }
    }

    pub fn default_open(&self) -> bool {
        matches!(
            self,
            PropertySection::Layout
                | PropertySection::Spacing
                | PropertySection::Visibility
                | PropertySection::ElementProps
        )
    }

    /// Fields of this section for the given element kind.
    pub fn fields(&self, element: ElementSettingsKind) -> &'static [FieldSpec] {
        match self {
            PropertySection::Layout => LAYOUT_FIELDS,
            PropertySection::Spacing => SPACING_FIELDS,
            PropertySection::Size => SIZE_FIELDS,
            PropertySection::Position => POSITION_FIELDS,
            PropertySection::Typography => TYPOGRAPHY_FIELDS,
            PropertySection::Colors => COLOR_FIELDS,
            PropertySection::Borders => BORDER_FIELDS,
            PropertySection::Visibility => VISIBILITY_FIELDS,
            PropertySection::ElementProps => match element {
                ElementSettingsKind::Image => IMAGE_FIELDS,
                ElementSettingsKind::Button => BUTTON_FIELDS,
                ElementSettingsKind::Input => INPUT_FIELDS,
                ElementSettingsKind::Generic => GENERIC_FIELDS,
            },
            PropertySection::Accessibility => ACCESSIBILITY_FIELDS,
            PropertySection::Interactions => INTERACTION_FIELDS,
            PropertySection::CustomAttributes => CUSTOM_ATTRIBUTE_FIELDS,
        }
    }
}

/// Input widget for one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldControl {
    Text { placeholder: &'static str },
    TextArea { placeholder: &'static str },
    /// Options are `(value, label)` pairs; `default` is a value or `None` for unset
    Select {
        options: &'static [(&'static str, &'static str)],
        default: Option<&'static str>,
    },
    Checkbox { default: bool },
}

/// One labelled field inside a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub control: FieldControl,
}

const fn text(key: &'static str, label: &'static str, placeholder: &'static str) -> FieldSpec {
    FieldSpec { key, label, control: FieldControl::Text { placeholder } }
}

const fn area(key: &'static str, label: &'static str, placeholder: &'static str) -> FieldSpec {
    FieldSpec { key, label, control: FieldControl::TextArea { placeholder } }
}

const fn select(
    key: &'static str,
    label: &'static str,
    options: &'static [(&'static str, &'static str)],
    default: Option<&'static str>,
) -> FieldSpec {
    FieldSpec { key, label, control: FieldControl::Select { options, default } }
}

const fn check(key: &'static str, label: &'static str, default: bool) -> FieldSpec {
    FieldSpec { key, label, control: FieldControl::Checkbox { default } }
}

const LAYOUT_FIELDS: &[FieldSpec] = &[
    select(
        "display",
        "Display",
        &[("block", "Block"), ("flex", "Flex"), ("grid", "Grid"), ("inline", "Inline"), ("none", "None")],
        Some("block"),
    ),
    select("flex_direction", "Flex Direction", &[("row", "Row"), ("column", "Column")], Some("row")),
    select(
        "justify",
        "Justify",
        &[("start", "Start"), ("center", "Center"), ("end", "End"), ("between", "Between")],
        Some("start"),
    ),
];

const SPACING_FIELDS: &[FieldSpec] = &[
    text("margin_top", "Margin Top", "0"),
    text("margin_right", "Margin Right", "0"),
    text("margin_bottom", "Margin Bottom", "0"),
    text("margin_left", "Margin Left", "0"),
    text("padding_top", "Padding Top", "0"),
    text("padding_right", "Padding Right", "0"),
    text("padding_bottom", "Padding Bottom", "0"),
    text("padding_left", "Padding Left", "0"),
];

const SIZE_FIELDS: &[FieldSpec] = &[
    text("width", "Width", "auto"),
    text("height", "Height", "auto"),
    text("min_width", "Min W", "0"),
    text("min_height", "Min H", "0"),
    text("max_width", "Max W", "none"),
    text("max_height", "Max H", "none"),
];

const POSITION_FIELDS: &[FieldSpec] = &[
    select(
        "position",
        "Position",
        &[
            ("static", "Static"),
            ("relative", "Relative"),
            ("absolute", "Absolute"),
            ("fixed", "Fixed"),
            ("sticky", "Sticky"),
        ],
        Some("static"),
    ),
    text("top", "Top", "auto"),
    text("right", "Right", "auto"),
    text("bottom", "Bottom", "auto"),
    text("left", "Left", "auto"),
];

const TYPOGRAPHY_FIELDS: &[FieldSpec] = &[
    select(
        "font_family",
        "Font Family",
        &[("inherit", "Inherit"), ("sans", "Sans Serif"), ("serif", "Serif"), ("mono", "Monospace")],
        Some("inherit"),
    ),
    text("font_size", "Size", "16px"),
    select(
        "font_weight",
        "Weight",
        &[("300", "Light"), ("400", "Normal"), ("500", "Medium"), ("600", "Semibold"), ("700", "Bold")],
        Some("400"),
    ),
    text("text_color", "Text Color", "#000000"),
];

const COLOR_FIELDS: &[FieldSpec] = &[
    text("background", "Background", "transparent"),
    text("border_color", "Border Color", "transparent"),
];

const BORDER_FIELDS: &[FieldSpec] = &[
    text("border_width", "Width", "0"),
    select(
        "border_style",
        "Style",
        &[("solid", "Solid"), ("dashed", "Dashed"), ("dotted", "Dotted")],
        Some("solid"),
    ),
    text("border_radius", "Radius", "0"),
];

const VISIBILITY_FIELDS: &[FieldSpec] = &[
    select(
        "visibility",
        "Visibility",
        &[("visible", "Visible"), ("hidden", "Hidden"), ("collapse", "Collapse")],
        Some("visible"),
    ),
    text("opacity", "Opacity", "1"),
    check("pointer_events", "Enable Pointer Events", true),
];

const IMAGE_FIELDS: &[FieldSpec] = &[
    text("src", "Source (src)", "https://example.com/image.jpg"),
    text("alt", "Alt Text", "Image description"),
    text("image_width", "Width", "auto"),
    text("image_height", "Height", "auto"),
    select(
        "object_fit",
        "Object Fit",
        &[("cover", "Cover"), ("contain", "Contain"), ("fill", "Fill"), ("none", "None")],
        Some("cover"),
    ),
    check("lazy_load", "Lazy Loading", false),
];

const BUTTON_FIELDS: &[FieldSpec] = &[
    text("button_text", "Text Content", "Button text"),
    select(
        "button_type",
        "Button Type",
        &[("button", "Button"), ("submit", "Submit"), ("reset", "Reset")],
        Some("button"),
    ),
    select(
        "variant",
        "Variant",
        &[
            ("default", "Default"),
            ("outline", "Outline"),
            ("secondary", "Secondary"),
            ("ghost", "Ghost"),
            ("destructive", "Destructive"),
        ],
        Some("default"),
    ),
    check("disabled", "Disabled", false),
];

const INPUT_FIELDS: &[FieldSpec] = &[
    select(
        "input_type",
        "Input Type",
        &[
            ("text", "Text"),
            ("email", "Email"),
            ("password", "Password"),
            ("number", "Number"),
            ("tel", "Phone"),
        ],
        Some("text"),
    ),
    text("placeholder", "Placeholder", "Enter placeholder text"),
    text("default_value", "Default Value", "Default input value"),
    check("required", "Required", false),
    check("readonly", "Read Only", false),
];

const GENERIC_FIELDS: &[FieldSpec] = &[
    text("element_id", "Element ID", "unique-id"),
    text("css_classes", "CSS Classes", "custom-class another-class"),
    area("text_content", "Text Content", "Element text content"),
];

const ACCESSIBILITY_FIELDS: &[FieldSpec] = &[
    text("aria_label", "ARIA Label", "Descriptive label"),
    select(
        "aria_role",
        "ARIA Role",
        &[
            ("button", "Button"),
            ("link", "Link"),
            ("heading", "Heading"),
            ("banner", "Banner"),
            ("main", "Main"),
            ("navigation", "Navigation"),
        ],
        None,
    ),
    text("tab_index", "Tab Index", "0"),
];

const INTERACTION_FIELDS: &[FieldSpec] = &[
    text("on_click", "onClick Handler", "handleClick"),
    text("on_hover", "onHover Handler", "handleHover"),
    text("href", "Link (href)", "/path-or-url"),
    check("external_link", "Open in New Tab", false),
];

const CUSTOM_ATTRIBUTE_FIELDS: &[FieldSpec] = &[
    area(
        "data_attributes",
        "Data Attributes",
        "data-testid=\"component-name\"\ndata-analytics=\"button-click\"",
    ),
    area("custom_props", "Custom Props", "customProp=\"value\"\nanotherProp={true}"),
];

/// Open/closed state of the collapsible sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionState {
    open: HashSet<PropertySection>,
}

impl Default for SectionState {
    fn default() -> Self {
        let open = PropertyTab::ALL
            .iter()
            .flat_map(|tab| tab.sections().iter().copied())
            .filter(PropertySection::default_open)
            .collect();
        Self { open }
    }
}

impl SectionState {
    pub fn is_open(&self, section: PropertySection) -> bool {
        self.open.contains(&section)
    }

    /// Flips a section. Returns `true` if it is now open.
    pub fn toggle(&mut self, section: PropertySection) -> bool {
        if self.open.remove(&section) {
            false
        } else {
            self.open.insert(section);
            true
        }
    }
}

/// A field value typed by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

impl FieldValue {
    /// Initial value for a field: selects start at their default option,
    /// checkboxes at their default flag, text inputs empty.
    pub fn initial(spec: &FieldSpec) -> Self {
        match spec.control {
            FieldControl::Text { .. } | FieldControl::TextArea { .. } => {
                FieldValue::Text(String::new())
            }
            FieldControl::Select { default, .. } => {
                FieldValue::Text(default.unwrap_or_default().to_string())
            }
            FieldControl::Checkbox { default } => FieldValue::Flag(default),
        }
    }
}

/// Draft field values keyed by (element id, style selector, field key).
///
/// Style fields are kept per selector so `:hover` edits do not overwrite the
/// base element values; element settings use `StyleSelector::Element`.
#[derive(Debug, Clone, Default)]
pub struct PropertyDrafts {
    values: HashMap<(String, StyleSelector, &'static str), FieldValue>,
}

impl PropertyDrafts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the stored value or the field's initial value.
    pub fn get(&self, element_id: &str, selector: StyleSelector, spec: &FieldSpec) -> FieldValue {
        self.values
            .get(&(element_id.to_string(), selector, spec.key))
            .cloned()
            .unwrap_or_else(|| FieldValue::initial(spec))
    }

    /// Returns the slot for a field, creating it from the initial value.
    pub fn entry(
        &mut self,
        element_id: &str,
        selector: StyleSelector,
        spec: &FieldSpec,
    ) -> &mut FieldValue {
        self.values
            .entry((element_id.to_string(), selector, spec.key))
            .or_insert_with(|| FieldValue::initial(spec))
    }

    /// Number of fields that have been touched.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_kind_mapping() {
        assert_eq!(ElementSettingsKind::from_kind("img"), ElementSettingsKind::Image);
        assert_eq!(ElementSettingsKind::from_kind("button"), ElementSettingsKind::Button);
        assert_eq!(ElementSettingsKind::from_kind("input"), ElementSettingsKind::Input);
        assert_eq!(ElementSettingsKind::from_kind("section"), ElementSettingsKind::Generic);
    }

    #[test]
    fn test_element_section_title_follows_kind() {
        let section = PropertySection::ElementProps;
        assert_eq!(section.title(ElementSettingsKind::Image), "Image Settings");
        assert_eq!(section.title(ElementSettingsKind::Generic), "Element Properties");
        assert_eq!(section.fields(ElementSettingsKind::Input)[0].key, "input_type");
    }

    #[test]
    fn test_default_open_sections() {
        let state = SectionState::default();
        assert!(state.is_open(PropertySection::Layout));
        assert!(state.is_open(PropertySection::Spacing));
        assert!(state.is_open(PropertySection::Visibility));
        assert!(state.is_open(PropertySection::ElementProps));
        assert!(!state.is_open(PropertySection::Borders));
        assert!(!state.is_open(PropertySection::CustomAttributes));
    }

    #[test]
    fn test_section_toggle_round_trip() {
        let mut state = SectionState::default();
        let before = state.clone();
        assert!(state.toggle(PropertySection::Size));
        assert!(!state.toggle(PropertySection::Size));
        assert_eq!(state, before);
    }

    #[test]
    fn test_drafts_start_from_field_defaults() {
        let mut drafts = PropertyDrafts::new();
        let display = &LAYOUT_FIELDS[0];
        assert_eq!(
            drafts.get("6", StyleSelector::Element, display),
            FieldValue::Text("block".to_string())
        );

        *drafts.entry("6", StyleSelector::Hover, display) = FieldValue::Text("flex".to_string());
        assert_eq!(
            drafts.get("6", StyleSelector::Hover, display),
            FieldValue::Text("flex".to_string())
        );
        assert_eq!(
            drafts.get("6", StyleSelector::Element, display),
            FieldValue::Text("block".to_string())
        );
        assert_eq!(drafts.len(), 1);
    }

    #[test]
    fn test_unset_select_starts_empty() {
        let role = &ACCESSIBILITY_FIELDS[1];
        assert_eq!(FieldValue::initial(role), FieldValue::Text(String::new()));
        let pointer = &VISIBILITY_FIELDS[2];
        assert_eq!(FieldValue::initial(pointer), FieldValue::Flag(true));
    }
}
