pub mod error;
pub mod ir;
pub mod lower;
pub mod options;
pub mod parse;
pub mod render;
pub mod rules;
pub mod samples;
pub mod tool;
pub mod wasm;

pub use error::CompilerError;
pub use options::{CompileMode, CompileOptions};
pub use render::{CompiledWidget, compile, compile_with_rules};
