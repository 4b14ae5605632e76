//! Plain-text transcript of the input, for surfaces that cannot show widgets.

use serde_json::Value;

use crate::options::{CompileMode, CompileOptions};

/// `<title>`, a blank line, then the input pretty-printed with two-space
/// indentation (spec mode adds a `Widget Specification:` heading).
pub fn copy_text(input: &Value, options: &CompileOptions) -> String {
    let title = &options.title;
    match (options.mode, serde_json::to_string_pretty(input)) {
        (CompileMode::Spec, Ok(json)) => format!("{}\n\nWidget Specification:\n{}", title, json),
        (CompileMode::Data, Ok(json)) => format!("{}\n\n{}", title, json),
        (CompileMode::Spec, Err(e)) => {
            tracing::debug!(error = %e, "could not serialize widget specification");
            format!("{}\n\nChatKit widget (could not serialize specification)", title)
        }
        (CompileMode::Data, Err(e)) => {
            tracing::debug!(error = %e, "could not serialize widget data");
            format!("{}\n\nJSON data (could not serialize for display)", title)
        }
    }
}
