use serde_json::Value;
use widget_compiler::ir::*;
use widget_compiler::{CompileOptions, CompiledWidget, compile};

// =============================================================================
// Compilation shortcuts
// =============================================================================

/// Compile a widget spec with default spec-mode options.
pub fn compile_spec(spec: &Value) -> CompiledWidget {
    compile(spec, &CompileOptions::spec("Test Widget"))
}

/// Compile arbitrary data in data mode.
pub fn compile_data(data: &Value, max_depth: usize) -> CompiledWidget {
    compile(data, &CompileOptions::data("Test Data", max_depth, true))
}

// =============================================================================
// Tree inspection
// =============================================================================

/// Every Text/Title/Caption value in document order.
pub fn texts(node: &ComponentNode) -> Vec<String> {
    let mut out = Vec::new();
    walk(node, &mut |n| match n {
        ComponentNode::Text(t) => out.push(t.value.clone()),
        ComponentNode::Title(t) => out.push(t.value.clone()),
        ComponentNode::Caption(t) => out.push(t.value.clone()),
        _ => {}
    });
    out
}

/// Type names of every node in document order.
pub fn type_names(node: &ComponentNode) -> Vec<&'static str> {
    let mut out = Vec::new();
    walk(node, &mut |n| out.push(n.type_name()));
    out
}

/// Pre-order walk over a subtree.
pub fn walk<'a>(node: &'a ComponentNode, visit: &mut dyn FnMut(&'a ComponentNode)) {
    visit(node);
    for child in node.children() {
        walk(child, visit);
    }
}

/// Children of the root Card; panics if the root is anything else.
pub fn root_children(widget: &CompiledWidget) -> &[ComponentNode] {
    match &widget.root {
        ComponentNode::Card(card) => &card.children,
        other => panic!("Expected Card root, got {:?}", other),
    }
}

/// The single diagnostic message, if `widget` is the error card.
pub fn diagnostic_message(widget: &CompiledWidget) -> Option<String> {
    match root_children(widget) {
        [ComponentNode::Text(t)] if t.value.starts_with("Error rendering widget: ") => Some(t.value.clone()),
        _ => None,
    }
}

/// `depth` levels of Col wrapped around a single Text.
pub fn nested_cols(depth: usize) -> Value {
    let mut spec = serde_json::json!({"type": "Text", "value": "leaf"});
    for _ in 0..depth {
        spec = serde_json::json!({"type": "Col", "children": [spec]});
    }
    spec
}
