//! Integration tests for spec-mode compilation: raw widget spec → component tree.

#[allow(dead_code)]
mod helpers;

use helpers::*;
use std::collections::HashMap;

use serde_json::{Number, json};
use widget_compiler::ir::*;
use widget_compiler::parse::types::WidgetKind;
use widget_compiler::rules::RuleSet;
use widget_compiler::{CompileOptions, compile, compile_with_rules};

// =============================================================================
// Root wrapping
// =============================================================================

#[test]
fn non_card_root_is_wrapped_in_keyed_card() {
    let widget = compile_spec(&json!({"type": "Text", "value": "hello"}));
    let ComponentNode::Card(card) = &widget.root else {
        panic!("Expected Card root, got {:?}", widget.root);
    };
    assert_eq!(card.attrs.key.as_deref(), Some("chatkit_widget"));
    assert_eq!(card.attrs.padding, Some(Spacing::from(0u64)));
    assert_eq!(texts(&widget.root), ["hello"]);
}

#[test]
fn card_root_is_returned_as_is() {
    let widget = compile_spec(&json!({"type": "Card", "children": [{"type": "Text", "value": "x"}]}));
    let ComponentNode::Card(card) = &widget.root else {
        panic!("Expected Card root");
    };
    assert_eq!(card.attrs.key, None);
    assert_eq!(card.attrs.size, Some(Size::Md));
    assert_eq!(card.children.len(), 1);
}

#[test]
fn unshaped_input_yields_empty_card() {
    for input in [json!(null), json!("Card"), json!([1, 2]), json!({"children": []})] {
        let widget = compile_spec(&input);
        assert!(root_children(&widget).is_empty(), "input {input}");
    }
}

#[test]
fn explicit_key_is_used_for_wrapper() {
    let options = CompileOptions::spec("t").with_key("chatkit_42");
    let widget = compile(&json!({"type": "Spacer"}), &options);
    let ComponentNode::Card(card) = &widget.root else {
        panic!("Expected Card root");
    };
    assert_eq!(card.attrs.key.as_deref(), Some("chatkit_42"));
}

// =============================================================================
// Containment of unknown and malformed slots
// =============================================================================

#[test]
fn unknown_types_are_contained_in_place() {
    let spec: serde_json::Value =
        serde_json::from_str(include_str!("fixtures/mixed_unknowns.json")).unwrap();
    let widget = compile_spec(&spec);

    let [ComponentNode::Col(col)] = root_children(&widget) else {
        panic!("Expected single Col under the root card");
    };
    assert_eq!(col.children.len(), 10);
    assert_eq!(col.attrs.gap, Some(Number::from(3)));

    let names: Vec<&str> = col.children.iter().map(ComponentNode::type_name).collect();
    assert_eq!(
        names,
        ["Title", "Text", "Text", "Text", "Caption", "Box", "Spacer", "Image", "Text", "Button"]
    );

    let unknowns: Vec<String> = col
        .children
        .iter()
        .filter_map(|c| match c {
            ComponentNode::Text(t) if t.value.starts_with("Unknown widget type: ") => {
                assert_eq!(t.color, Some(TextColor::Tertiary));
                assert_eq!(t.size, Some(Size::Sm));
                Some(t.value.clone())
            }
            _ => None,
        })
        .collect();
    assert_eq!(
        unknowns,
        [
            "Unknown widget type: Chart",
            "Unknown widget type: Badge",
            "Unknown widget type: 17"
        ]
    );
}

#[test]
fn malformed_children_are_dropped() {
    let spec: serde_json::Value =
        serde_json::from_str(include_str!("fixtures/booking_form.json")).unwrap();
    let widget = compile_spec(&spec);

    let ComponentNode::Card(card) = &widget.root else {
        panic!("Expected Card root");
    };
    let names: Vec<&str> = card.children.iter().map(ComponentNode::type_name).collect();
    assert_eq!(names, ["Title", "Box", "Text", "Row"]);
}

#[test]
fn booking_form_attributes_are_normalized() {
    let spec: serde_json::Value =
        serde_json::from_str(include_str!("fixtures/booking_form.json")).unwrap();
    let widget = compile_spec(&spec);
    let ComponentNode::Card(card) = &widget.root else {
        panic!("Expected Card root");
    };

    assert_eq!(card.attrs.theme, Some(CardTheme::Light));
    assert_eq!(card.attrs.as_form, Some(true));

    let ComponentNode::Title(title) = &card.children[0] else {
        panic!("Expected Title");
    };
    assert_eq!(title.weight, Some(FontWeight::Semibold));

    let ComponentNode::Box(form) = &card.children[1] else {
        panic!("Expected Box");
    };
    assert_eq!(form.attrs.direction, Some(Direction::Row));
    let [ComponentNode::DatePicker(date), ComponentNode::Select(room)] = form.children.as_slice() else {
        panic!("Expected DatePicker and Select, got {:?}", form.children);
    };
    assert_eq!(date.variant, Some(ControlVariant::Default));
    assert_eq!(date.placeholder, "Pick a day");
    assert_eq!(room.variant, Some(ControlVariant::Outline));
    assert_eq!(
        room.options,
        [
            SelectOption { label: "Aurora".into(), value: "A1".into() },
            SelectOption { label: "Borealis".into(), value: "B2".into() },
        ]
    );

    let ComponentNode::Text(notes) = &card.children[2] else {
        panic!("Expected Text");
    };
    assert_eq!(notes.value, "[Editable text]");
}

// =============================================================================
// Card actions
// =============================================================================

#[test]
fn cancel_precedes_confirm_regardless_of_key_order() {
    for spec in [
        json!({"type": "Card", "confirm": {"label": "Yes"}, "cancel": {"label": "No"}}),
        json!({"type": "Card", "cancel": {"label": "No"}, "confirm": {"label": "Yes"}}),
    ] {
        let widget = compile_spec(&spec);
        let [ComponentNode::Row(row)] = root_children(&widget) else {
            panic!("Expected a lone action row");
        };
        assert_eq!(row.attrs.justify, Some(Justify::End));
        assert_eq!(row.attrs.gap, Some(Number::from(2)));
        assert_eq!(texts_of_buttons(&row.children), ["No", "Yes"]);
    }
}

#[test]
fn booking_form_actions_carry_payloads() {
    let spec: serde_json::Value =
        serde_json::from_str(include_str!("fixtures/booking_form.json")).unwrap();
    let widget = compile_spec(&spec);
    let Some(ComponentNode::Row(row)) = root_children(&widget).last() else {
        panic!("Expected trailing action row");
    };
    let [ComponentNode::Button(cancel), ComponentNode::Button(confirm)] = row.children.as_slice() else {
        panic!("Expected two buttons");
    };
    assert_eq!(cancel.label, "Cancel");
    assert_eq!(cancel.variant, Some(ButtonVariant::Outline));
    assert_eq!(
        cancel.on_click_action.as_ref().map(|a| a["type"].clone()),
        Some(json!("booking.cancel"))
    );
    assert_eq!(confirm.label, "Book");
    assert_eq!(confirm.variant, Some(ButtonVariant::Solid));
    assert_eq!(confirm.size, Some(Size::Sm));
    assert_eq!(
        confirm.on_click_action.as_ref().map(|a| a["payload"].clone()),
        Some(json!({"room": "A1"}))
    );
}

#[test]
fn card_without_actions_has_no_action_row() {
    let widget = compile_spec(&json!({"type": "Card", "children": [{"type": "Spacer"}]}));
    assert_eq!(type_names(&widget.root), ["Card", "Spacer"]);
}

fn texts_of_buttons(nodes: &[ComponentNode]) -> Vec<&str> {
    nodes
        .iter()
        .map(|n| match n {
            ComponentNode::Button(b) => b.label.as_str(),
            other => panic!("Expected Button, got {:?}", other),
        })
        .collect()
}

// =============================================================================
// Divider substitution
// =============================================================================

#[test]
fn divider_becomes_padded_rule() {
    let widget = compile_spec(&json!({"type": "Divider", "flush": true}));
    let [divider] = root_children(&widget) else {
        panic!("Expected one child");
    };
    insta::assert_json_snapshot!(divider, @r#"
    {
      "type": "Box",
      "padding": {
        "top": 2,
        "bottom": 2
      },
      "children": [
        {
          "type": "Box",
          "background": "surface-tertiary",
          "height": 1,
          "width": "100%",
          "children": []
        }
      ]
    }
    "#);
}

// =============================================================================
// Custom rule sets
// =============================================================================

#[test]
fn trimmed_rule_set_drops_unlisted_attributes() {
    let standard = RuleSet::standard();
    let rules: HashMap<WidgetKind, _> = WidgetKind::ALL
        .into_iter()
        .map(|kind| {
            let table = standard
                .rules_for(kind)
                .iter()
                .filter(|rule| !(kind == WidgetKind::Box && rule.name == "direction"))
                .cloned()
                .collect::<Vec<_>>();
            (kind, table)
        })
        .collect();
    let trimmed = RuleSet::from_rules(rules);

    let spec = json!({"type": "Box", "direction": "row", "gap": 1});
    let options = CompileOptions::spec("Trimmed");

    let widget = compile_with_rules(&spec, &options, &trimmed);
    let [ComponentNode::Box(plain)] = root_children(&widget) else {
        panic!("Expected a single Box");
    };
    assert_eq!(plain.attrs.direction, None);
    assert_eq!(plain.attrs.gap, Some(Number::from(1)));

    let widget = compile(&spec, &options);
    let [ComponentNode::Box(full)] = root_children(&widget) else {
        panic!("Expected a single Box");
    };
    assert_eq!(full.attrs.direction, Some(Direction::Row));
}

// =============================================================================
// Error containment
// =============================================================================

#[test]
fn excessive_nesting_yields_diagnostic_card() {
    let options = CompileOptions::spec("Deep").with_max_spec_depth(4);
    let widget = compile(&nested_cols(6), &options);

    let message = diagnostic_message(&widget).expect("diagnostic card");
    assert!(message.contains("L001"), "{message}");
    let ComponentNode::Card(card) = &widget.root else {
        panic!("Expected Card root");
    };
    assert_eq!(card.attrs.padding, Some(Spacing::from(4u64)));
    assert_eq!(card.attrs.key.as_deref(), Some("chatkit_widget"));
}

#[test]
fn nesting_within_ceiling_compiles() {
    let options = CompileOptions::spec("Deep").with_max_spec_depth(4);
    let widget = compile(&nested_cols(4), &options);
    assert_eq!(diagnostic_message(&widget), None);
    assert_eq!(texts(&widget.root), ["leaf"]);
}

#[test]
fn malformed_action_descriptor_yields_diagnostic_card() {
    let widget = compile_spec(&json!({"type": "Card", "confirm": ["Send"]}));
    let message = diagnostic_message(&widget).expect("diagnostic card");
    assert!(message.starts_with("Error rendering widget: [Lower:L002]"), "{message}");
    assert!(message.ends_with("(at $.confirm)"), "{message}");
}

#[test]
fn diagnostic_still_produces_transcript() {
    let spec = json!({"type": "Card", "cancel": 5});
    let widget = compile_spec(&spec);
    assert!(diagnostic_message(&widget).is_some());
    assert!(widget.copy_text.starts_with("Test Widget\n\nWidget Specification:\n{"));
}

#[test]
fn hostile_inputs_never_escape_compile() {
    let inputs = [
        json!({"type": "Card", "children": "not a list"}),
        json!({"type": "Text", "value": 12, "color": {"nested": true}}),
        json!({"type": "Button", "onClickAction": "go", "variant": null}),
        json!({"type": "Select", "options": "A,B"}),
        json!({"type": "Image", "src": 5, "fit": 1}),
        json!({"type": ["Card"]}),
        json!({"type": "Box", "padding": [1, 2], "children": [null, 1, "x", {"type": "Row"}]}),
        nested_cols(200),
    ];
    for input in inputs {
        let widget = compile_spec(&input);
        assert!(widget.root.is_root_container(), "input {input}");
        assert!(!widget.copy_text.is_empty());
    }
}

// =============================================================================
// Transcript
// =============================================================================

#[test]
fn transcript_pretty_prints_spec_in_input_order() {
    let widget = compile_spec(&json!({"type": "Text", "value": "hi", "color": "danger"}));
    assert_eq!(
        widget.copy_text,
        "Test Widget\n\nWidget Specification:\n{\n  \"type\": \"Text\",\n  \"value\": \"hi\",\n  \"color\": \"danger\"\n}"
    );
}
