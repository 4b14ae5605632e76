//! WASM entry points for browser use.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::error::CompilerError;
use crate::options::{CompileMode, CompileOptions};
use crate::render::{self, CompiledWidget};
use crate::rules::RuleSet;
use crate::tool::{self, JsonDataToolRequest, WidgetToolRequest};

/// Compile a widget spec or data blob under JSON-encoded `CompileOptions`
/// (pass `"{}"` for the defaults).
/// Returns `{status: "success", widget}` or `{status: "errors", errors}`.
#[wasm_bindgen]
pub fn compile_widget(input_json: &str, options_json: &str) -> JsValue {
    to_js(&compile_widget_inner(input_json, options_json))
}

fn compile_widget_inner(input_json: &str, options_json: &str) -> CompileResult<CompiledWidget> {
    let options = match serde_json::from_str::<CompileOptions>(options_json) {
        Ok(o) => o,
        Err(e) => {
            return CompileResult::failed(CompilerError::parse(
                "P001",
                format!("Invalid compile options: {}", e),
            ));
        }
    };

    let what = match options.mode {
        CompileMode::Spec => "widget JSON",
        CompileMode::Data => "JSON",
    };
    match crate::parse::parse(input_json, what) {
        Ok(input) => CompileResult::Success {
            widget: render::compile(&input, &options),
        },
        Err(e) => CompileResult::failed(e),
    }
}

/// Tool-style spec rendering: derived key plus a summary.
#[wasm_bindgen]
pub fn render_widget_json(title: &str, widget_json: &str) -> JsValue {
    let request = WidgetToolRequest {
        title: title.to_string(),
        widget_json: widget_json.to_string(),
    };
    to_js(&CompileResult::from(tool::render_widget_tool(&request)))
}

/// Tool-style data rendering: derived key plus a summary.
#[wasm_bindgen]
pub fn render_json_data(title: &str, json_data: &str, max_depth: usize, show_types: bool) -> JsValue {
    let request = JsonDataToolRequest {
        title: title.to_string(),
        json_data: json_data.to_string(),
        max_depth,
        show_types,
    };
    to_js(&CompileResult::from(tool::render_json_data_tool(&request)))
}

/// Human-readable reference of every type's allowed values and aliases.
#[wasm_bindgen]
pub fn describe_rules() -> String {
    RuleSet::global().describe()
}

/// Maps become plain objects, not JS `Map`s.
fn to_js<T: Serialize>(value: &T) -> JsValue {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .unwrap_or(JsValue::NULL)
}

// ---------------------------------------------------------------------------
// DTOs for serialization to JS
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct ErrorDto {
    code: String,
    phase: String,
    message: String,
    path: Option<String>,
}

impl From<CompilerError> for ErrorDto {
    fn from(e: CompilerError) -> Self {
        ErrorDto {
            code: e.code,
            phase: e.phase.to_string(),
            message: e.message,
            path: e.path,
        }
    }
}

#[derive(Serialize)]
#[serde(tag = "status")]
enum CompileResult<T> {
    #[serde(rename = "success")]
    Success { widget: T },
    #[serde(rename = "errors")]
    Errors { errors: Vec<ErrorDto> },
}

impl<T> CompileResult<T> {
    fn failed(err: CompilerError) -> Self {
        CompileResult::Errors {
            errors: vec![ErrorDto::from(err)],
        }
    }
}

impl<T> From<Result<T, CompilerError>> for CompileResult<T> {
    fn from(result: Result<T, CompilerError>) -> Self {
        match result {
            Ok(widget) => CompileResult::Success { widget },
            Err(e) => CompileResult::failed(e),
        }
    }
}
