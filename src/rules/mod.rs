//! Validation rule set: per widget type, which attributes exist, what shape
//! they take, which synonyms map onto canonical values, and their defaults.
//!
//! The set is built once (`RuleSet::global`) and only ever read afterwards,
//! so concurrent compiles share it without synchronization. Callers that want
//! a different rule set construct their own and inject it into the compiler.

mod normalize;
mod table;

use std::collections::HashMap;
use std::fmt::Write as _;
use std::sync::LazyLock;

use serde_json::Value;

use crate::parse::types::{Attributes, WidgetKind};

static GLOBAL_RULES: LazyLock<RuleSet> = LazyLock::new(RuleSet::standard);

// =============================================================================
// ATTRIBUTE RULES
// =============================================================================

/// Accepted shape of an attribute value.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrShape {
    /// One of `allowed`; `aliases` maps informal synonyms to a member.
    Enum {
        allowed: &'static [&'static str],
        aliases: &'static [(&'static str, &'static str)],
    },
    Text,
    Number,
    Bool,
    /// Number or string.
    Dimension,
    /// Number, string, or per-side object.
    Spacing,
    /// Object carrying a string `type`.
    Action,
    /// Array of `{label, value}` objects with string fields.
    OptionList,
}

impl AttrShape {
    /// Whether `value` is acceptable as-is.
    pub fn accepts(&self, value: &Value) -> bool {
        match self {
            AttrShape::Enum { allowed, .. } => {
                value.as_str().is_some_and(|s| allowed.contains(&s))
            }
            AttrShape::Text => value.is_string(),
            AttrShape::Number => value.is_number(),
            AttrShape::Bool => value.is_boolean(),
            AttrShape::Dimension => value.is_number() || value.is_string(),
            AttrShape::Spacing => value.is_number() || value.is_string() || value.is_object(),
            AttrShape::Action => value
                .as_object()
                .and_then(|o| o.get("type"))
                .is_some_and(Value::is_string),
            AttrShape::OptionList => value.as_array().is_some_and(|items| {
                items.iter().all(|item| {
                    item.get("label").is_some_and(Value::is_string)
                        && item.get("value").is_some_and(Value::is_string)
                })
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AttrRule {
    /// Canonical attribute name, as emitted.
    pub name: &'static str,
    /// Other input keys read when `name` itself is absent, in priority order.
    pub source_aliases: &'static [&'static str],
    pub shape: AttrShape,
    pub default: Option<Value>,
}

impl AttrRule {
    fn new(name: &'static str, shape: AttrShape) -> Self {
        AttrRule {
            name,
            source_aliases: &[],
            shape,
            default: None,
        }
    }

    pub fn enumerated(name: &'static str, allowed: &'static [&'static str]) -> Self {
        AttrRule::new(name, AttrShape::Enum { allowed, aliases: &[] })
    }

    pub fn text(name: &'static str) -> Self {
        AttrRule::new(name, AttrShape::Text)
    }

    pub fn number(name: &'static str) -> Self {
        AttrRule::new(name, AttrShape::Number)
    }

    pub fn boolean(name: &'static str) -> Self {
        AttrRule::new(name, AttrShape::Bool)
    }

    pub fn dimension(name: &'static str) -> Self {
        AttrRule::new(name, AttrShape::Dimension)
    }

    pub fn spacing(name: &'static str) -> Self {
        AttrRule::new(name, AttrShape::Spacing)
    }

    pub fn action(name: &'static str) -> Self {
        AttrRule::new(name, AttrShape::Action)
    }

    pub fn option_list(name: &'static str) -> Self {
        AttrRule::new(name, AttrShape::OptionList)
    }

    pub fn with_default(mut self, default: Value) -> Self {
        self.default = Some(default);
        self
    }

    /// Attach a value alias table. Only meaningful on enum rules.
    pub fn with_aliases(mut self, table: &'static [(&'static str, &'static str)]) -> Self {
        if let AttrShape::Enum { aliases, .. } = &mut self.shape {
            *aliases = table;
        }
        self
    }

    pub fn read_from(mut self, keys: &'static [&'static str]) -> Self {
        self.source_aliases = keys;
        self
    }

    pub fn allowed(&self) -> &'static [&'static str] {
        match self.shape {
            AttrShape::Enum { allowed, .. } => allowed,
            _ => &[],
        }
    }

    pub fn aliases(&self) -> &'static [(&'static str, &'static str)] {
        match self.shape {
            AttrShape::Enum { aliases, .. } => aliases,
            _ => &[],
        }
    }

    /// The raw input value for this attribute: the canonical key first,
    /// then each source alias.
    pub fn lookup<'a>(&self, raw: &'a Attributes) -> Option<&'a Value> {
        raw.get(self.name)
            .or_else(|| self.source_aliases.iter().find_map(|k| raw.get(*k)))
    }
}

// =============================================================================
// RULE SET
// =============================================================================

#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: HashMap<WidgetKind, Vec<AttrRule>>,
}

impl RuleSet {
    /// The rule set the chat surface understands.
    pub fn standard() -> Self {
        let rules = WidgetKind::ALL
            .into_iter()
            .map(|kind| (kind, table::rules_for(kind)))
            .collect();
        RuleSet { rules }
    }

    /// Process-wide instance, built on first use.
    pub fn global() -> &'static RuleSet {
        &GLOBAL_RULES
    }

    pub fn from_rules(rules: HashMap<WidgetKind, Vec<AttrRule>>) -> Self {
        RuleSet { rules }
    }

    pub fn rules_for(&self, kind: WidgetKind) -> &[AttrRule] {
        self.rules.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn rule(&self, kind: WidgetKind, attr: &str) -> Option<&AttrRule> {
        self.rules_for(kind).iter().find(|r| r.name == attr)
    }

    /// Map a raw attribute bag onto the canonical attribute set for `kind`.
    /// Unknown keys are dropped.
    pub fn normalize(&self, kind: WidgetKind, raw: &Attributes) -> Attributes {
        normalize::normalize_attributes(kind, self.rules_for(kind), raw)
    }

    /// Validate-and-map a single attribute value. `None` when the attribute
    /// is unknown for `kind`, or when the value is unusable and the rule has
    /// nothing to fall back on.
    pub fn normalize_value(&self, kind: WidgetKind, attr: &str, value: &Value) -> Option<Value> {
        let rule = self.rule(kind, attr)?;
        normalize::normalize_present(rule, value)
    }

    /// Plain-text reference of every allow-list and alias mapping.
    pub fn describe(&self) -> String {
        let mut out = String::from("Widget validation reference\n");
        for kind in WidgetKind::ALL {
            let rules = self.rules_for(kind);
            if rules.is_empty() {
                continue;
            }
            let _ = writeln!(out, "\n{}:", kind);
            for rule in rules {
                let shape = match &rule.shape {
                    AttrShape::Enum { allowed, .. } => allowed.join(", "),
                    AttrShape::Text => "string".to_string(),
                    AttrShape::Number => "number".to_string(),
                    AttrShape::Bool => "boolean".to_string(),
                    AttrShape::Dimension => "number or string".to_string(),
                    AttrShape::Spacing => "number, string or per-side object".to_string(),
                    AttrShape::Action => "action object".to_string(),
                    AttrShape::OptionList => "array of {label, value}".to_string(),
                };
                let _ = write!(out, "  {}: {}", rule.name, shape);
                if let Some(default) = &rule.default {
                    let _ = write!(out, " (default {})", default);
                }
                let _ = writeln!(out);
                for (from, to) in rule.aliases() {
                    let _ = writeln!(out, "    '{}' -> '{}'", from, to);
                }
            }
        }
        out
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        RuleSet::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn enum_defaults_and_alias_targets_are_members() {
        let rules = RuleSet::standard();
        for kind in WidgetKind::ALL {
            for rule in rules.rules_for(kind) {
                let allowed = rule.allowed();
                if allowed.is_empty() {
                    continue;
                }
                if let Some(default) = &rule.default {
                    let d = default.as_str().expect("enum default must be a string");
                    assert!(allowed.contains(&d), "{kind}.{}: default {d} not allowed", rule.name);
                }
                for (from, to) in rule.aliases() {
                    assert!(allowed.contains(to), "{kind}.{}: alias target {to}", rule.name);
                    assert!(!allowed.contains(from), "{kind}.{}: alias key {from} shadows a member", rule.name);
                }
            }
        }
    }

    #[test]
    fn non_enum_defaults_match_their_shape() {
        let rules = RuleSet::standard();
        for kind in WidgetKind::ALL {
            for rule in rules.rules_for(kind) {
                if let Some(default) = &rule.default {
                    assert!(rule.shape.accepts(default), "{kind}.{} default {default}", rule.name);
                }
            }
        }
    }

    #[test]
    fn divider_has_no_rules() {
        assert!(RuleSet::standard().rules_for(WidgetKind::Divider).is_empty());
    }

    #[test]
    fn action_shape_requires_type_string() {
        assert!(AttrShape::Action.accepts(&json!({"type": "email.send"})));
        assert!(!AttrShape::Action.accepts(&json!({"payload": 1})));
        assert!(!AttrShape::Action.accepts(&json!("email.send")));
    }

    #[test]
    fn option_list_rejects_partial_entries() {
        assert!(AttrShape::OptionList.accepts(&json!([])));
        assert!(AttrShape::OptionList.accepts(&json!([{"label": "A", "value": "a"}])));
        assert!(!AttrShape::OptionList.accepts(&json!([{"label": "A"}])));
        assert!(!AttrShape::OptionList.accepts(&json!([{"label": "A", "value": 1}])));
    }

    #[test]
    fn describe_lists_aliases() {
        let text = RuleSet::standard().describe();
        assert!(text.contains("Box:"));
        assert!(text.contains("'column' -> 'col'"));
        assert!(text.contains("'primary' -> 'solid'"));
    }

    #[test]
    fn global_is_shared() {
        assert!(std::ptr::eq(RuleSet::global(), RuleSet::global()));
    }
}
