//! Check command - compile a template file without expanding it

use anyhow::{Context, Result};
use colored::Colorize;
use jsontemplate_core::Template;
use std::path::Path;

use crate::output::print_text;

/// Compile a template file and report the result
///
/// # Arguments
///
/// * `path` - Template file, header options allowed
/// * `more_formatters` - Also resolve `printf` formatters
/// * `verbose` - Print the compiled options as well
pub fn run(path: &Path, more_formatters: bool, verbose: bool) -> Result<()> {
    let resolver = super::resolver(more_formatters);
    let template = Template::from_template_file(path, resolver.as_ref())
        .with_context(|| format!("failed to compile {}", path.display()))?;

    if verbose {
        let options = template.options();
        print_text(&format!(
            "{} meta {:?}, format char {:?}, default formatter {}",
            "→".cyan(),
            options.meta,
            options.format_char,
            options.default_formatter.as_deref().unwrap_or("none")
        ))?;
    }
    print_text(&format!(
        "{} {} compiles ({} statements)",
        "✓".green().bold(),
        path.display(),
        template.program().statement_count()
    ))?;
    Ok(())
}
