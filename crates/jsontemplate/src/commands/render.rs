//! Render command - expand a template file against JSON data

use anyhow::{Context, Result};
use jsontemplate_core::template::compile;
use jsontemplate_core::{CompileOptions, JsonTemplateError, Template};
use serde_json::Value;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use crate::output::print_expansion;

/// Expand a template and print the result
///
/// # Arguments
///
/// * `template_file` - Template file, header options allowed
/// * `inline` - Template text given on the command line, default options
/// * `data` - JSON data file; stdin is read when `None`
/// * `more_formatters` - Also resolve `printf` formatters
pub fn run(
    template_file: Option<PathBuf>,
    inline: Option<String>,
    data: Option<PathBuf>,
    more_formatters: bool,
) -> Result<()> {
    let resolver = super::resolver(more_formatters);
    let template = match (template_file, inline) {
        (_, Some(text)) => compile(&text, resolver.as_ref(), &CompileOptions::default())
            .map_err(JsonTemplateError::from)?,
        (Some(path), None) => Template::from_template_file(&path, resolver.as_ref())
            .with_context(|| format!("failed to compile {}", path.display()))?,
        (None, None) => anyhow::bail!("no template given"),
    };

    let data = read_data(data)?;
    let text = template.expand(&data).map_err(JsonTemplateError::from)?;
    print_expansion(&text)?;
    Ok(())
}

fn read_data(path: Option<PathBuf>) -> Result<Value> {
    let text = match path {
        Some(path) => fs::read_to_string(&path)
            .map_err(JsonTemplateError::from)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .map_err(JsonTemplateError::from)?;
            text
        }
    };
    if text.trim().is_empty() {
        return Ok(Value::Object(Default::default()));
    }
    Ok(serde_json::from_str(&text).map_err(JsonTemplateError::from)?)
}
