//! The closed set of widget type tags and read-only accessors over raw
//! widget specs.
//!
//! A raw spec is an arbitrary `serde_json::Value`. Nothing here fails: a
//! missing or misshapen field simply reads as absent.

use serde_json::{Map, Value};

/// Attribute bag of a raw node, or the canonical output of the normalizer.
pub type Attributes = Map<String, Value>;

// =============================================================================
// WIDGET KIND: every tag the compiler dispatches on
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetKind {
    // Containers
    Card,
    Box,
    Row,
    Col,

    // Leaves
    Text,
    Title,
    Caption,
    Image,
    Spacer,

    // Interactive
    Button,
    DatePicker,
    Select,

    // Structural substitution, no native component
    Divider,
}

impl WidgetKind {
    pub const ALL: [WidgetKind; 13] = [
        WidgetKind::Card,
        WidgetKind::Box,
        WidgetKind::Row,
        WidgetKind::Col,
        WidgetKind::Text,
        WidgetKind::Title,
        WidgetKind::Caption,
        WidgetKind::Image,
        WidgetKind::Spacer,
        WidgetKind::Button,
        WidgetKind::DatePicker,
        WidgetKind::Select,
        WidgetKind::Divider,
    ];

    /// Exact, case-sensitive lookup.
    pub fn from_tag(tag: &str) -> Option<Self> {
        WidgetKind::ALL.into_iter().find(|k| k.tag() == tag)
    }

    pub fn tag(self) -> &'static str {
        match self {
            WidgetKind::Card => "Card",
            WidgetKind::Box => "Box",
            WidgetKind::Row => "Row",
            WidgetKind::Col => "Col",
            WidgetKind::Text => "Text",
            WidgetKind::Title => "Title",
            WidgetKind::Caption => "Caption",
            WidgetKind::Image => "Image",
            WidgetKind::Spacer => "Spacer",
            WidgetKind::Button => "Button",
            WidgetKind::DatePicker => "DatePicker",
            WidgetKind::Select => "Select",
            WidgetKind::Divider => "Divider",
        }
    }

    pub fn is_container(self) -> bool {
        matches!(
            self,
            WidgetKind::Card | WidgetKind::Box | WidgetKind::Row | WidgetKind::Col
        )
    }
}

impl std::fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

// =============================================================================
// RAW NODE ACCESSORS
// =============================================================================

/// The `type` field of a node. `None` for non-objects and untagged objects.
pub fn type_tag(spec: &Value) -> Option<&Value> {
    spec.as_object()?.get("type")
}

/// Entries of `children` in input order. A non-array `children` reads as empty.
pub fn children(spec: &Value) -> impl Iterator<Item = &Value> {
    spec.get("children")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
}

/// Whether the node declares a `children` key at all, whatever its shape.
pub fn has_children_key(spec: &Value) -> bool {
    spec.as_object().is_some_and(|o| o.contains_key("children"))
}

/// Human-readable rendering of a tag value for diagnostics: strings verbatim,
/// anything else as compact JSON.
pub fn describe_tag(tag: &Value) -> String {
    match tag {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
