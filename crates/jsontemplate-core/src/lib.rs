// Core modules
pub mod config;
pub mod error;
pub mod template;

// Re-export commonly used types
pub use config::CompileOptions;
pub use error::{JsonTemplateError, Result};
pub use template::{compile, expand, CompileError, ExpandError, Template};
