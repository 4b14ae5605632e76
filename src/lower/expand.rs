//! Structural substitutions: spec tags with no native component, and the
//! in-place stand-in for tags the compiler does not know.

use serde_json::{Map, Value};

use crate::ir::tokens::{Size, TextColor};
use crate::ir::types::*;

/// A Divider is a one-unit-high full-width filler box inside vertical padding.
/// Divider attributes (e.g. `flush`) have no counterpart and are ignored.
pub fn divider() -> ComponentNode {
    let line = BoxAttrs {
        height: Some(Dimension::from(1u64)),
        background: Some("surface-tertiary".to_string()),
        width: Some(Dimension::from("100%")),
        ..Default::default()
    };

    let mut sides = Map::new();
    sides.insert("top".to_string(), Value::from(2));
    sides.insert("bottom".to_string(), Value::from(2));
    let outer = BoxAttrs {
        padding: Some(Spacing::Sides(sides)),
        ..Default::default()
    };

    ComponentNode::boxed(outer, vec![ComponentNode::boxed(line, vec![])])
}

/// Diagnostic leaf standing in for an unrecognized type tag.
pub fn unknown_type(tag: &str) -> ComponentNode {
    TextAttrs::new(format!("Unknown widget type: {}", tag))
        .color(TextColor::Tertiary)
        .size(Size::Sm)
        .into_node()
}
