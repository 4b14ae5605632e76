//! Render pass: raw input + options → `CompiledWidget`.
//!
//! Public API: `compile(input, options) -> CompiledWidget`
//!
//! This is the containment boundary. Whatever goes wrong below it (depth
//! ceiling, malformed Card actions, typed build failures) comes back as an
//! `Err` and is turned into a diagnostic card here. `compile` itself cannot
//! fail.

pub mod data_view;
pub mod fallback;

use serde::Serialize;
use serde_json::Value;

use crate::error::CompilerError;
use crate::ir::tokens::{FontWeight, TextColor};
use crate::ir::types::*;
use crate::lower::TreeCompiler;
use crate::options::{CompileMode, CompileOptions};
use crate::rules::RuleSet;

/// What the host streams to the chat surface: the component tree plus the
/// plain-text transcript shown where widgets cannot render.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompiledWidget {
    pub root: ComponentNode,
    pub copy_text: String,
}

/// Compile `input` against the process-wide rule set.
pub fn compile(input: &Value, options: &CompileOptions) -> CompiledWidget {
    compile_with_rules(input, options, RuleSet::global())
}

/// Compile `input` against an explicit rule set.
pub fn compile_with_rules(input: &Value, options: &CompileOptions, rules: &RuleSet) -> CompiledWidget {
    let key = options.resolved_key();

    let root = match build_root(input, options, rules) {
        Ok(root) => root,
        Err(err) => {
            tracing::warn!(
                key,
                code = %err.code,
                path = err.path.as_deref().unwrap_or("$"),
                "widget compilation failed: {}",
                err.message
            );
            diagnostic(key, &err)
        }
    };

    CompiledWidget {
        root,
        copy_text: fallback::copy_text(input, options),
    }
}

fn build_root(
    input: &Value,
    options: &CompileOptions,
    rules: &RuleSet,
) -> Result<ComponentNode, CompilerError> {
    let key = options.resolved_key();
    match options.mode {
        CompileMode::Spec => {
            let compiled = TreeCompiler::new(rules, options.max_spec_depth).compile(input)?;
            Ok(wrap_root(compiled, key))
        }
        CompileMode::Data => Ok(data_view::render(
            &options.title,
            input,
            key,
            options.max_depth,
            options.show_types,
        )),
    }
}

// =============================================================================
// ROOT WRAPPING
// =============================================================================

/// A Card root is handed back untouched; anything else (including nothing)
/// goes inside an unpadded keyed Card.
pub fn wrap_root(compiled: Option<ComponentNode>, key: &str) -> ComponentNode {
    match compiled {
        Some(node) if node.is_root_container() => node,
        other => ComponentNode::card(root_attrs(key, 0), other.into_iter().collect()),
    }
}

/// Stand-in tree for a failed compilation.
pub fn diagnostic(key: &str, err: &CompilerError) -> ComponentNode {
    let message = TextAttrs::new(format!("Error rendering widget: {}", err))
        .color(TextColor::Error)
        .weight(FontWeight::Medium)
        .into_node();
    ComponentNode::card(root_attrs(key, 4), vec![message])
}

pub(crate) fn root_attrs(key: &str, padding: u64) -> CardAttrs {
    CardAttrs {
        key: Some(key.to_string()),
        padding: Some(Spacing::from(padding)),
        ..Default::default()
    }
}
