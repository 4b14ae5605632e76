//! Node normalizer: raw attribute bag → canonical attribute set.
//!
//! For each attribute the type declares, a supplied value is resolved by:
//! keep it if acceptable, else map it through the alias table, else use the
//! rule default, else use the first allowed member. An absent attribute gets
//! the rule default or is omitted. Keys the type does not declare are dropped.

use serde_json::Value;

use crate::parse::types::{Attributes, WidgetKind};

use super::AttrRule;

/// Shown for an editable Text that has neither a value nor a placeholder.
pub const EDITABLE_PLACEHOLDER: &str = "[Editable text]";

pub(super) fn normalize_attributes(
    kind: WidgetKind,
    rules: &[AttrRule],
    raw: &Attributes,
) -> Attributes {
    let mut out = Attributes::new();

    for rule in rules {
        let value = match rule.lookup(raw) {
            Some(supplied) => normalize_present(rule, supplied),
            None => rule.default.clone(),
        };
        if let Some(value) = value {
            out.insert(rule.name.to_string(), value);
        }
    }

    if kind == WidgetKind::Text {
        apply_text_rules(raw, &mut out);
    }

    out
}

pub(super) fn normalize_present(rule: &AttrRule, supplied: &Value) -> Option<Value> {
    if rule.shape.accepts(supplied) {
        return Some(supplied.clone());
    }

    let aliased = supplied.as_str().and_then(|s| {
        rule.aliases()
            .iter()
            .find(|(from, _)| *from == s)
            .map(|(_, to)| *to)
    });
    if let Some(canonical) = aliased {
        return Some(Value::from(canonical));
    }

    if let Some(default) = &rule.default {
        return Some(default.clone());
    }

    rule.allowed().first().map(|first| Value::from(*first))
}

/// `style: "italic"` is the informal spelling of `italic: true`, and an
/// editable Text with no value shows its placeholder instead.
fn apply_text_rules(raw: &Attributes, out: &mut Attributes) {
    if !out.contains_key("italic") && raw.get("style").and_then(Value::as_str) == Some("italic") {
        out.insert("italic".to_string(), Value::Bool(true));
    }

    let value_empty = out
        .get("value")
        .and_then(Value::as_str)
        .is_none_or(str::is_empty);
    if !value_empty {
        return;
    }
    if let Some(editable) = raw.get("editable").filter(|e| !e.is_null()) {
        let placeholder = editable
            .get("placeholder")
            .and_then(Value::as_str)
            .unwrap_or(EDITABLE_PLACEHOLDER);
        out.insert("value".to_string(), Value::from(placeholder));
    }
}
