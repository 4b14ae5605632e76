//! Generic data view: arbitrary JSON rendered as a component tree by value
//! kind, with no `type` tags involved.
//!
//! Objects and arrays become panels of labelled rows, primitives become a
//! coloured literal optionally followed by a kind annotation. Anything deeper
//! than `max_depth` collapses into a single cutoff leaf.

use serde_json::{Map, Number, Value};

use crate::ir::tokens::{Align, FontFamily, FontWeight, Justify, Size, TextColor};
use crate::ir::types::*;

use super::root_attrs;

pub const DEPTH_CUTOFF_TEXT: &str = "... (max depth reached)";

/// Strings longer than this many characters are shortened for display.
const MAX_STRING_CHARS: usize = 100;
const TRUNCATED_STRING_CHARS: usize = 97;

/// Full data card: a header naming `title`, then the rendered value.
pub fn render(title: &str, data: &Value, key: &str, max_depth: usize, show_types: bool) -> ComponentNode {
    let header = ComponentNode::boxed(
        BoxAttrs {
            padding: Some(Spacing::from(4u64)),
            background: Some("surface-secondary".to_string()),
            ..Default::default()
        },
        vec![ComponentNode::row(
            StackAttrs {
                justify: Some(Justify::Between),
                align: Some(Align::Center),
                ..Default::default()
            },
            vec![
                ComponentNode::Title(TitleAttrs {
                    value: title.to_string(),
                    size: Some(Size::Lg),
                    weight: Some(FontWeight::Semibold),
                    ..Default::default()
                }),
                TextAttrs::new("JSON Data")
                    .size(Size::Xs)
                    .color(TextColor::Tertiary)
                    .weight(FontWeight::Medium)
                    .into_node(),
            ],
        )],
    );

    let body = ComponentNode::boxed(
        BoxAttrs {
            padding: Some(Spacing::from(4u64)),
            gap: Some(Number::from(3)),
            ..Default::default()
        },
        vec![render_value(data, 0, max_depth, show_types)],
    );

    ComponentNode::card(root_attrs(key, 0), vec![header, body])
}

/// Render one value found at `depth` (the data root sits at depth 0).
pub fn render_value(value: &Value, depth: usize, max_depth: usize, show_types: bool) -> ComponentNode {
    if depth > max_depth {
        return TextAttrs::new(DEPTH_CUTOFF_TEXT)
            .color(TextColor::Tertiary)
            .size(Size::Sm)
            .italic()
            .into_node();
    }

    match value {
        Value::Object(map) => render_object(map, depth, max_depth, show_types),
        Value::Array(items) => render_array(items, depth, max_depth, show_types),
        Value::Null => literal("null".to_string(), TextColor::Tertiary, FontFamily::Default, "null", show_types),
        Value::Bool(true) => literal("true".to_string(), TextColor::Accent, FontFamily::Mono, "boolean", show_types),
        Value::Bool(false) => literal("false".to_string(), TextColor::Error, FontFamily::Mono, "boolean", show_types),
        Value::Number(n) => literal(n.to_string(), TextColor::Success, FontFamily::Mono, "number", show_types),
        Value::String(s) => literal(quote_for_display(s), TextColor::Primary, FontFamily::Default, "string", show_types),
    }
}

// =============================================================================
// COMPOSITES
// =============================================================================

fn render_object(map: &Map<String, Value>, depth: usize, max_depth: usize, show_types: bool) -> ComponentNode {
    if map.is_empty() {
        return empty_marker("{}");
    }

    let rows = map
        .iter()
        .map(|(key, value)| {
            let label = TextAttrs::new(format!("{}:", key))
                .weight(FontWeight::Medium)
                .size(Size::Sm)
                .color(TextColor::Secondary)
                .into_node();
            entry_row(label, 100, render_value(value, depth + 1, max_depth, show_types))
        })
        .collect();

    panel(rows)
}

fn render_array(items: &[Value], depth: usize, max_depth: usize, show_types: bool) -> ComponentNode {
    if items.is_empty() {
        return empty_marker("[]");
    }

    let rows = items
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let label = TextAttrs::new(format!("[{}]", i))
                .weight(FontWeight::Medium)
                .size(Size::Sm)
                .color(TextColor::Tertiary)
                .family(FontFamily::Mono)
                .into_node();
            entry_row(label, 50, render_value(value, depth + 1, max_depth, show_types))
        })
        .collect();

    panel(rows)
}

fn empty_marker(text: &str) -> ComponentNode {
    TextAttrs::new(text)
        .color(TextColor::Tertiary)
        .size(Size::Sm)
        .family(FontFamily::Mono)
        .into_node()
}

/// `label | value`, the label column held at `label_width`.
fn entry_row(label: ComponentNode, label_width: u64, value: ComponentNode) -> ComponentNode {
    let label_box = BoxAttrs {
        min_width: Some(Dimension::from(label_width)),
        ..Default::default()
    };
    let value_box = BoxAttrs {
        flex: Some(Dimension::from("1")),
        ..Default::default()
    };
    ComponentNode::row(
        StackAttrs {
            gap: Some(Number::from(2)),
            align: Some(Align::Start),
            ..Default::default()
        },
        vec![
            ComponentNode::boxed(label_box, vec![label]),
            ComponentNode::boxed(value_box, vec![value]),
        ],
    )
}

fn panel(rows: Vec<ComponentNode>) -> ComponentNode {
    let frame = BoxAttrs {
        padding: Some(Spacing::from(3u64)),
        radius: Some(Dimension::from("md")),
        background: Some("surface-tertiary".to_string()),
        ..Default::default()
    };
    let column = StackAttrs {
        gap: Some(Number::from(2)),
        ..Default::default()
    };
    ComponentNode::boxed(frame, vec![ComponentNode::col(column, rows)])
}

// =============================================================================
// PRIMITIVES
// =============================================================================

/// A primitive's display text, optionally followed by its JSON kind.
fn literal(
    display: String,
    color: TextColor,
    family: FontFamily,
    kind: &str,
    show_types: bool,
) -> ComponentNode {
    let mut parts = vec![
        TextAttrs::new(display)
            .color(color)
            .size(Size::Sm)
            .family(family)
            .into_node(),
    ];
    if show_types {
        parts.push(
            TextAttrs::new(format!("({})", kind))
                .color(TextColor::Tertiary)
                .size(Size::Xs)
                .italic()
                .into_node(),
        );
    }

    ComponentNode::row(
        StackAttrs {
            gap: Some(Number::from(2)),
            align: Some(Align::Center),
            ..Default::default()
        },
        parts,
    )
}

/// Quote `s`, shortening it to its first 97 characters plus `...` when it
/// runs past 100.
pub fn quote_for_display(s: &str) -> String {
    if s.chars().count() > MAX_STRING_CHARS {
        let head: String = s.chars().take(TRUNCATED_STRING_CHARS).collect();
        format!("\"{}...\"", head)
    } else {
        format!("\"{}\"", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn texts(node: &ComponentNode) -> Vec<String> {
        let mut out = Vec::new();
        collect_texts(node, &mut out);
        out
    }

    fn collect_texts(node: &ComponentNode, out: &mut Vec<String>) {
        match node {
            ComponentNode::Text(t) => out.push(t.value.clone()),
            ComponentNode::Title(t) => out.push(t.value.clone()),
            other => other.children().iter().for_each(|c| collect_texts(c, out)),
        }
    }

    #[test]
    fn empty_composites_render_markers() {
        assert_eq!(texts(&render_value(&json!({}), 0, 3, true)), ["{}"]);
        assert_eq!(texts(&render_value(&json!([]), 0, 3, true)), ["[]"]);
    }

    #[test]
    fn primitive_colours_and_annotations() {
        let cases = [
            (json!(null), "null", TextColor::Tertiary, FontFamily::Default, "(null)"),
            (json!(true), "true", TextColor::Accent, FontFamily::Mono, "(boolean)"),
            (json!(false), "false", TextColor::Error, FontFamily::Mono, "(boolean)"),
            (json!(42), "42", TextColor::Success, FontFamily::Mono, "(number)"),
            (json!("hi"), "\"hi\"", TextColor::Primary, FontFamily::Default, "(string)"),
        ];
        for (value, display, color, family, annotation) in cases {
            let node = render_value(&value, 0, 3, true);
            let ComponentNode::Row(row) = &node else {
                panic!("expected Row for {value}");
            };
            let ComponentNode::Text(literal) = &row.children[0] else {
                panic!("expected literal Text for {value}");
            };
            assert_eq!(literal.value, display);
            assert_eq!(literal.color, Some(color));
            assert_eq!(literal.family, Some(family));
            let ComponentNode::Text(kind) = &row.children[1] else {
                panic!("expected annotation Text for {value}");
            };
            assert_eq!(kind.value, annotation);
            assert_eq!(kind.italic, Some(true));
        }
    }

    #[test]
    fn annotations_can_be_turned_off() {
        let node = render_value(&json!(1.5), 0, 3, false);
        assert_eq!(texts(&node), ["1.5"]);
    }

    #[test]
    fn long_strings_are_shortened() {
        let long = "x".repeat(150);
        let shown = quote_for_display(&long);
        assert_eq!(shown, format!("\"{}...\"", "x".repeat(97)));
        assert_eq!(quote_for_display(&"y".repeat(100)), format!("\"{}\"", "y".repeat(100)));
    }

    #[test]
    fn shortening_counts_characters_not_bytes() {
        let long = "é".repeat(101);
        assert_eq!(quote_for_display(&long), format!("\"{}...\"", "é".repeat(97)));
    }

    #[test]
    fn object_rows_keep_key_order() {
        let node = render_value(&json!({"zeta": 1, "alpha": 2}), 0, 3, false);
        assert_eq!(texts(&node), ["zeta:", "1", "alpha:", "2"]);
    }

    #[test]
    fn array_rows_are_indexed() {
        let node = render_value(&json!(["a", "b"]), 0, 3, false);
        assert_eq!(texts(&node), ["[0]", "\"a\"", "[1]", "\"b\""]);
    }

    #[test]
    fn cutoff_replaces_values_past_max_depth() {
        let node = render_value(&json!({"a": {"b": {"c": 1}}}), 0, 1, false);
        assert_eq!(texts(&node), ["a:", "b:", DEPTH_CUTOFF_TEXT]);
    }

    #[test]
    fn full_card_has_header_and_body() {
        let card = render("Profile", &json!({"id": 7}), "json_widget", 3, true);
        let ComponentNode::Card(card) = &card else {
            panic!("expected Card");
        };
        assert_eq!(card.attrs.key.as_deref(), Some("json_widget"));
        assert_eq!(card.children.len(), 2);
        assert_eq!(texts(&card.children[0]), ["Profile", "JSON Data"]);
        assert_eq!(texts(&card.children[1]), ["id:", "7", "(number)"]);
    }
}
