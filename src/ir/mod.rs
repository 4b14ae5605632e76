//! Typed output of the widget compiler.

pub mod tokens;
pub mod types;

pub use tokens::*;
pub use types::*;
