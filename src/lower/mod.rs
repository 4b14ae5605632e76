//! Lowering phase: raw widget spec → typed `ComponentNode` tree.
//!
//! Walks the spec depth-first, normalizes each node's attributes against the
//! rule set, recursively compiles children in order and assembles typed
//! nodes. Malformed slots compile to `None` and are dropped by their parent;
//! unknown tags become a diagnostic leaf in place. `Err` is reserved for
//! failures the containment boundary in `render` has to absorb.

pub mod builder;
pub mod expand;

use serde_json::Value;

use crate::error::CompilerError;
use crate::ir::types::ComponentNode;
use crate::parse::types::{self as raw, WidgetKind};
use crate::rules::RuleSet;

/// Depth-first compiler over raw widget specs.
pub struct TreeCompiler<'r> {
    rules: &'r RuleSet,
    max_depth: usize,
}

impl<'r> TreeCompiler<'r> {
    /// `max_depth` bounds container nesting; the root sits at depth 0.
    pub fn new(rules: &'r RuleSet, max_depth: usize) -> Self {
        TreeCompiler { rules, max_depth }
    }

    pub fn rules(&self) -> &'r RuleSet {
        self.rules
    }

    /// Compile one spec. `Ok(None)` means the spec has no recognizable shape
    /// (not an object, or no `type`).
    pub fn compile(&self, spec: &Value) -> Result<Option<ComponentNode>, CompilerError> {
        self.compile_at(spec, "$", 0)
    }

    pub(crate) fn compile_at(
        &self,
        spec: &Value,
        path: &str,
        depth: usize,
    ) -> Result<Option<ComponentNode>, CompilerError> {
        let Some(tag) = raw::type_tag(spec) else {
            tracing::debug!(path, "dropping widget slot without a type tag");
            return Ok(None);
        };

        if depth > self.max_depth {
            return Err(CompilerError::lower(
                "L001",
                format!("Widget nesting exceeds the maximum depth of {}", self.max_depth),
                path,
            ));
        }

        let Some(kind) = tag.as_str().and_then(WidgetKind::from_tag) else {
            let described = raw::describe_tag(tag);
            tracing::debug!(path, tag = %described, "unknown widget type");
            return Ok(Some(expand::unknown_type(&described)));
        };

        // Both accessors above only succeed on objects.
        let Some(attributes) = spec.as_object() else {
            return Ok(None);
        };

        let node = match kind {
            WidgetKind::Divider => expand::divider(),
            WidgetKind::Card => builder::build_card(self, spec, attributes, path, depth)?,
            _ if kind.is_container() => {
                let children = self.compile_children(spec, path, depth)?;
                builder::build_container(kind, self.rules.normalize(kind, attributes), children, path)?
            }
            _ => builder::build_leaf(kind, self.rules.normalize(kind, attributes), path)?,
        };

        Ok(Some(node))
    }

    /// Compile `children` in input order, dropping slots that compile to `None`.
    pub(crate) fn compile_children(
        &self,
        spec: &Value,
        path: &str,
        depth: usize,
    ) -> Result<Vec<ComponentNode>, CompilerError> {
        let mut compiled = Vec::new();
        for (i, child) in raw::children(spec).enumerate() {
            let child_path = format!("{}.children[{}]", path, i);
            if let Some(node) = self.compile_at(child, &child_path, depth + 1)? {
                compiled.push(node);
            }
        }
        Ok(compiled)
    }
}
