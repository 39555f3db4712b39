//! Description file harness - expand one template described by a JSON file

use anyhow::{Context, Result};
use jsontemplate_core::{compile, CompileOptions, JsonTemplateError};
use log::debug;
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::Path;

use crate::output::print_expansion;

/// Contents of a description file
#[derive(Debug, Deserialize)]
pub struct Description {
    pub template: String,

    #[serde(default)]
    pub options: CompileOptions,

    #[serde(default)]
    pub dictionary: Value,
}

impl Description {
    /// Read and parse a description file
    pub fn load(path: &Path) -> Result<Self, JsonTemplateError> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}

/// Compile the described template and print its expansion
///
/// # Arguments
///
/// * `path` - Description file with `template`, `options` and `dictionary`
/// * `more_formatters` - Also resolve `printf` formatters
pub fn run(path: &Path, more_formatters: bool) -> Result<()> {
    let description = Description::load(path)
        .with_context(|| format!("failed to load description {}", path.display()))?;
    debug!("description options: {:?}", description.options);

    let resolver = super::resolver(more_formatters);
    let template = compile(&description.template, resolver.as_ref(), &description.options)
        .map_err(JsonTemplateError::from)?;
    let text = template
        .expand(&description.dictionary)
        .map_err(JsonTemplateError::from)?;

    print_expansion(&text)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_description_defaults() {
        let description: Description =
            serde_json::from_value(json!({"template": "{x}"})).unwrap();
        assert_eq!(description.options, CompileOptions::default());
        assert_eq!(description.dictionary, Value::Null);
    }

    #[test]
    fn test_description_requires_template() {
        let result: Result<Description, _> = serde_json::from_value(json!({"dictionary": {}}));
        assert!(result.is_err());
    }
}
