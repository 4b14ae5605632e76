//! Typed node assembly: canonical attribute sets → `ComponentNode`.
//!
//! Attribute maps arriving here have already been through the normalizer, so
//! every enumerated value is a known token and deserialization into the typed
//! attribute structs is expected to succeed. A failure is reported as `L003`
//! rather than patched over.

use serde::de::DeserializeOwned;
use serde_json::{Number, Value};

use crate::error::CompilerError;
use crate::ir::tokens::Justify;
use crate::ir::types::*;
use crate::parse::types::{Attributes, WidgetKind};

use super::TreeCompiler;

/// Build a non-container node from its canonical attributes.
pub fn build_leaf(
    kind: WidgetKind,
    attrs: Attributes,
    path: &str,
) -> Result<ComponentNode, CompilerError> {
    let node = match kind {
        WidgetKind::Text => ComponentNode::Text(from_attrs(kind, attrs, path)?),
        WidgetKind::Title => ComponentNode::Title(from_attrs(kind, attrs, path)?),
        WidgetKind::Caption => ComponentNode::Caption(from_attrs(kind, attrs, path)?),
        WidgetKind::Image => ComponentNode::Image(from_attrs(kind, attrs, path)?),
        WidgetKind::Spacer => ComponentNode::Spacer(from_attrs(kind, attrs, path)?),
        WidgetKind::Button => ComponentNode::Button(from_attrs(kind, attrs, path)?),
        WidgetKind::DatePicker => ComponentNode::DatePicker(from_attrs(kind, attrs, path)?),
        WidgetKind::Select => ComponentNode::Select(from_attrs(kind, attrs, path)?),
        WidgetKind::Card
        | WidgetKind::Box
        | WidgetKind::Row
        | WidgetKind::Col
        | WidgetKind::Divider => {
            return Err(CompilerError::lower(
                "L003",
                format!("'{}' is not a leaf widget", kind),
                path,
            ));
        }
    };
    Ok(node)
}

/// Build a container node from its canonical attributes and compiled children.
pub fn build_container(
    kind: WidgetKind,
    attrs: Attributes,
    children: Vec<ComponentNode>,
    path: &str,
) -> Result<ComponentNode, CompilerError> {
    let node = match kind {
        WidgetKind::Card => ComponentNode::card(from_attrs(kind, attrs, path)?, children),
        WidgetKind::Box => ComponentNode::boxed(from_attrs(kind, attrs, path)?, children),
        WidgetKind::Row => ComponentNode::row(from_attrs(kind, attrs, path)?, children),
        WidgetKind::Col => ComponentNode::col(from_attrs(kind, attrs, path)?, children),
        _ => {
            return Err(CompilerError::lower(
                "L003",
                format!("'{}' is not a container widget", kind),
                path,
            ));
        }
    };
    Ok(node)
}

fn from_attrs<T: DeserializeOwned>(
    kind: WidgetKind,
    attrs: Attributes,
    path: &str,
) -> Result<T, CompilerError> {
    serde_json::from_value(Value::Object(attrs)).map_err(|e| {
        CompilerError::lower("L003", format!("Invalid {} attributes: {}", kind, e), path)
    })
}

// =============================================================================
// CARD
// =============================================================================

/// Cancel first, Confirm second, whatever the key order in the source.
const CARD_ACTIONS: [(&str, &str, &str); 2] = [
    ("cancel", "Cancel", "outline"),
    ("confirm", "Confirm", "solid"),
];

/// Compile a Card: children in order, then a trailing button row when the
/// spec carries `confirm` and/or `cancel` descriptors.
pub fn build_card(
    compiler: &TreeCompiler<'_>,
    spec: &Value,
    attributes: &Attributes,
    path: &str,
    depth: usize,
) -> Result<ComponentNode, CompilerError> {
    let rules = compiler.rules();
    let mut children = compiler.compile_children(spec, path, depth)?;

    let mut buttons = Vec::new();
    for (key, default_label, variant) in CARD_ACTIONS {
        let Some(descriptor) = attributes.get(key) else {
            continue;
        };
        let action_path = format!("{}.{}", path, key);
        let Some(descriptor) = descriptor.as_object() else {
            return Err(CompilerError::lower(
                "L002",
                format!("Card '{}' must be an object with a label and an action", key),
                action_path,
            ));
        };

        let label = descriptor
            .get("label")
            .filter(|l| l.is_string())
            .cloned()
            .unwrap_or_else(|| Value::from(default_label));
        let mut raw = Attributes::new();
        raw.insert("label".into(), label);
        raw.insert("variant".into(), Value::from(variant));
        raw.insert("size".into(), Value::from("sm"));
        if let Some(action) = descriptor.get("action") {
            raw.insert("onClickAction".into(), action.clone());
        }

        let attrs = rules.normalize(WidgetKind::Button, &raw);
        buttons.push(build_leaf(WidgetKind::Button, attrs, &action_path)?);
    }

    if !buttons.is_empty() {
        let row = StackAttrs {
            gap: Some(Number::from(2)),
            justify: Some(Justify::End),
            ..Default::default()
        };
        children.push(ComponentNode::row(row, buttons));
    }

    build_container(
        WidgetKind::Card,
        rules.normalize(WidgetKind::Card, attributes),
        children,
        path,
    )
}
