use anyhow::Error;
use jsontemplate_core::{CompileError, ExpandError, JsonTemplateError};
use std::io::{self, Write};

/// Write expanded text to stdout exactly as produced
pub fn print_expansion(s: &str) -> io::Result<()> {
    let mut out = io::stdout().lock();
    out.write_all(s.as_bytes())?;
    out.flush()
}

pub fn print_text(s: &str) -> io::Result<()> {
    let mut out = io::stdout().lock();
    writeln!(out, "{s}")
}

/// Stable kind name for an error raised anywhere in a command
pub fn error_kind(e: &Error) -> &'static str {
    if let Some(e) = e.downcast_ref::<JsonTemplateError>() {
        e.kind()
    } else if let Some(e) = e.downcast_ref::<CompileError>() {
        e.kind()
    } else if let Some(e) = e.downcast_ref::<ExpandError>() {
        e.kind()
    } else if e.downcast_ref::<serde_json::Error>().is_some() {
        "JsonError"
    } else if e.downcast_ref::<io::Error>().is_some() {
        "IoError"
    } else {
        "Error"
    }
}

/// Report a failed command on stderr: `EXCEPTION: <kind>`, then the detail
pub fn print_exception(e: &Error) {
    let mut err = io::stderr().lock();
    // Nothing sensible is left to do if stderr itself is gone
    let _ = writeln!(err, "EXCEPTION: {}", error_kind(e));
    let _ = writeln!(err, "{:#}", e);
}
