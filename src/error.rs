//! Unified compiler error type used across all phases.
//!
//! None of these ever reach the caller of `render::compile`: the containment
//! boundary turns them into a diagnostic widget. They do surface from the
//! `parse` and `tool` entry points, where the input is still a string.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Phase {
    Parse,
    Lower,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Parse => write!(f, "Parse"),
            Phase::Lower => write!(f, "Lower"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("[{phase}:{code}] {message}{}", at_path(.path))]
pub struct CompilerError {
    pub code: String,
    pub phase: Phase,
    pub message: String,
    /// Location in the input, e.g. `$.children[2]`.
    pub path: Option<String>,
}

fn at_path(path: &Option<String>) -> String {
    match path {
        Some(p) => format!(" (at {})", p),
        None => String::new(),
    }
}

impl CompilerError {
    pub fn parse(code: &str, message: impl Into<String>) -> Self {
        CompilerError {
            code: code.into(),
            phase: Phase::Parse,
            message: message.into(),
            path: None,
        }
    }

    pub fn lower(code: &str, message: impl Into<String>, path: impl Into<String>) -> Self {
        CompilerError {
            code: code.into(),
            phase: Phase::Lower,
            message: message.into(),
            path: Some(path.into()),
        }
    }
}
