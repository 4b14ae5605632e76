//! Compile options.
//!
//! Hosts may hand these over as JSON (camelCase, every field optional):
//! `{"title": "Inbox", "mode": "data", "maxDepth": 4}`.

use serde::{Deserialize, Serialize};

pub const DEFAULT_TITLE: &str = "Widget";
pub const DEFAULT_SPEC_KEY: &str = "chatkit_widget";
pub const DEFAULT_DATA_KEY: &str = "json_widget";
pub const DEFAULT_DATA_DEPTH: usize = 3;
pub const DEFAULT_MAX_SPEC_DEPTH: usize = 64;

/// How the input is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CompileMode {
    /// Widget-shaped input with explicit `type` tags.
    #[default]
    Spec,
    /// Arbitrary JSON, rendered by value kind.
    Data,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompileOptions {
    /// Heading of the fallback transcript (and of the data view).
    pub title: String,
    /// Root card key; defaults per mode.
    pub key: Option<String>,
    pub mode: CompileMode,
    /// Data mode: deepest level rendered before the cutoff leaf.
    pub max_depth: usize,
    /// Data mode: annotate primitives with their JSON kind.
    pub show_types: bool,
    /// Spec mode: nesting ceiling.
    pub max_spec_depth: usize,
}

impl Default for CompileOptions {
    fn default() -> Self {
        CompileOptions {
            title: DEFAULT_TITLE.to_string(),
            key: None,
            mode: CompileMode::Spec,
            max_depth: DEFAULT_DATA_DEPTH,
            show_types: true,
            max_spec_depth: DEFAULT_MAX_SPEC_DEPTH,
        }
    }
}

impl CompileOptions {
    pub fn spec(title: impl Into<String>) -> Self {
        CompileOptions {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn data(title: impl Into<String>, max_depth: usize, show_types: bool) -> Self {
        CompileOptions {
            title: title.into(),
            mode: CompileMode::Data,
            max_depth,
            show_types,
            ..Default::default()
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn with_max_spec_depth(mut self, depth: usize) -> Self {
        self.max_spec_depth = depth;
        self
    }

    pub fn resolved_key(&self) -> &str {
        match (&self.key, self.mode) {
            (Some(key), _) => key,
            (None, CompileMode::Spec) => DEFAULT_SPEC_KEY,
            (None, CompileMode::Data) => DEFAULT_DATA_KEY,
        }
    }
}
