//! CLI command implementations

pub mod check;
pub mod harness;
pub mod render;

use jsontemplate_core::template::{FormatterResolver, NoFormatters, PrintfFormatters};

/// Formatter resolver selected by `--more-formatters`
pub fn resolver(more_formatters: bool) -> Box<dyn FormatterResolver> {
    if more_formatters {
        Box::new(PrintfFormatters)
    } else {
        Box::new(NoFormatters)
    }
}
