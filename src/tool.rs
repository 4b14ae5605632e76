//! Tool-call entry points.
//!
//! An assistant hands over its widget (or data) as a JSON string inside a
//! tool call. These functions parse that string, derive a card key from it,
//! compile, and return the widget together with a small summary the
//! assistant gets back as the tool result.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::CompilerError;
use crate::options::{CompileOptions, DEFAULT_DATA_DEPTH};
use crate::parse::{self, types as raw};
use crate::render::{self, CompiledWidget};

const STATUS_SUCCESS: &str = "success";

// =============================================================================
// REQUESTS
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetToolRequest {
    pub title: String,
    pub widget_json: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonDataToolRequest {
    pub title: String,
    pub json_data: String,
    #[serde(default = "default_data_depth")]
    pub max_depth: usize,
    #[serde(default = "default_show_types")]
    pub show_types: bool,
}

fn default_data_depth() -> usize {
    DEFAULT_DATA_DEPTH
}

fn default_show_types() -> bool {
    true
}

impl JsonDataToolRequest {
    pub fn new(title: impl Into<String>, json_data: impl Into<String>) -> Self {
        JsonDataToolRequest {
            title: title.into(),
            json_data: json_data.into(),
            max_depth: DEFAULT_DATA_DEPTH,
            show_types: true,
        }
    }
}

// =============================================================================
// RESULTS
// =============================================================================

/// Compiled widget plus the summary returned to the caller of the tool.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolOutput<S> {
    pub widget: CompiledWidget,
    pub summary: S,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WidgetToolSummary {
    pub title: String,
    pub status: String,
    /// The input's `type` tag, or `"unknown"`.
    pub widget_type: String,
    pub has_children: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JsonToolSummary {
    pub title: String,
    pub status: String,
    /// Top-level keys, when the data is an object.
    pub data_keys: Option<Vec<String>>,
    /// Entry count, when the data is an object or an array.
    pub data_length: Option<usize>,
}

// =============================================================================
// ENTRY POINTS
// =============================================================================

pub fn render_widget_tool(
    request: &WidgetToolRequest,
) -> Result<ToolOutput<WidgetToolSummary>, CompilerError> {
    tracing::info!(title = %request.title, "widget tool invoked");

    let spec = parse::parse(&request.widget_json, "widget JSON")?;
    let key = format!("chatkit_{}", key_suffix(&request.widget_json));
    let options = CompileOptions::spec(request.title.clone()).with_key(key);
    let widget = render::compile(&spec, &options);

    let summary = WidgetToolSummary {
        title: request.title.clone(),
        status: STATUS_SUCCESS.to_string(),
        widget_type: raw::type_tag(&spec)
            .map(raw::describe_tag)
            .unwrap_or_else(|| "unknown".to_string()),
        has_children: raw::has_children_key(&spec),
    };
    tracing::info!(
        key = options.resolved_key(),
        widget_type = %summary.widget_type,
        nodes = widget.root.node_count(),
        "widget compiled"
    );

    Ok(ToolOutput { widget, summary })
}

pub fn render_json_data_tool(
    request: &JsonDataToolRequest,
) -> Result<ToolOutput<JsonToolSummary>, CompilerError> {
    tracing::info!(title = %request.title, max_depth = request.max_depth, "json data tool invoked");

    let data = parse::parse(&request.json_data, "JSON")?;
    let key = format!("json_{}", key_suffix(&request.json_data));
    let options = CompileOptions::data(request.title.clone(), request.max_depth, request.show_types)
        .with_key(key);
    let widget = render::compile(&data, &options);

    let summary = JsonToolSummary {
        title: request.title.clone(),
        status: STATUS_SUCCESS.to_string(),
        data_keys: data.as_object().map(|o| o.keys().cloned().collect()),
        data_length: match &data {
            Value::Object(o) => Some(o.len()),
            Value::Array(a) => Some(a.len()),
            _ => None,
        },
    };
    tracing::info!(
        key = options.resolved_key(),
        nodes = widget.root.node_count(),
        "json data widget compiled"
    );

    Ok(ToolOutput { widget, summary })
}

/// Stable four-digit-or-less suffix derived from the raw input text.
fn key_suffix(input: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    input.hash(&mut hasher);
    hasher.finish() % 10_000
}
