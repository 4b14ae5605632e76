//! Parse phase: untrusted JSON text → `serde_json::Value` + tag/shape accessors.

pub mod types;

pub use types::*;

use serde_json::Value;

use crate::error::CompilerError;

/// Deserialize a widget spec or data blob from its JSON text. `what` names
/// the input in the error message ("widget JSON", "JSON").
pub fn parse(json: &str, what: &str) -> Result<Value, CompilerError> {
    serde_json::from_str::<Value>(json)
        .map_err(|e| CompilerError::parse("P001", format!("Invalid {}: {}", what, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_json() {
        let value = parse(r#"{"type": "Text", "value": "hi"}"#, "widget JSON").unwrap();
        assert_eq!(value["type"], "Text");
    }

    #[test]
    fn parse_preserves_key_order() {
        let value = parse(r#"{"zeta": 1, "alpha": 2, "mid": 3}"#, "JSON").unwrap();
        let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn parse_invalid_json_returns_p001() {
        let err = parse("not valid json", "widget JSON").unwrap_err();
        assert_eq!(err.code, "P001");
        assert!(err.message.starts_with("Invalid widget JSON: "));
        assert_eq!(err.phase, crate::error::Phase::Parse);
    }
}
