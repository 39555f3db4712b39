use thiserror::Error;

use crate::template::error::{CompileError, ExpandError};

#[derive(Error, Debug)]
pub enum JsonTemplateError {
    // Template errors
    #[error("COMPILE_ERROR: {0}")]
    Compile(#[from] CompileError),

    #[error("EXPAND_ERROR: {0}")]
    Expand(#[from] ExpandError),

    // Input errors
    #[error("JSON_ERROR: {0}")]
    Json(#[from] serde_json::Error),

    // IO errors
    #[error("IO_ERROR: {0}")]
    IoError(#[from] std::io::Error),
}

impl JsonTemplateError {
    /// Stable name of the error kind, e.g. `BadFormatter` or `UndefinedVariable`
    pub fn kind(&self) -> &'static str {
        match self {
            JsonTemplateError::Compile(e) => e.kind(),
            JsonTemplateError::Expand(e) => e.kind(),
            JsonTemplateError::Json(_) => "JsonError",
            JsonTemplateError::IoError(_) => "IoError",
        }
    }
}

pub type Result<T> = std::result::Result<T, JsonTemplateError>;
