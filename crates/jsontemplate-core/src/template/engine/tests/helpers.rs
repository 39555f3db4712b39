//! Shared test helpers for engine tests

use serde_json::{json, Value};

use crate::config::CompileOptions;
use crate::template::compile::{compile, Template};
use crate::template::error::ExpandError;
use crate::template::formatters::NoFormatters;

/// Compile with default options, panicking on compile errors
pub(super) fn template(text: &str) -> Template {
    Template::new(text).unwrap_or_else(|e| panic!("failed to compile {:?}: {}", text, e))
}

/// Compile with `options`, panicking on compile errors
pub(super) fn template_with(text: &str, options: &CompileOptions) -> Template {
    compile(text, &NoFormatters, options)
        .unwrap_or_else(|e| panic!("failed to compile {:?}: {}", text, e))
}

/// Compile with default options and expand
pub(super) fn render(text: &str, data: &Value) -> Result<String, ExpandError> {
    template(text).expand(data)
}

/// A small address book with nested sections and lists
pub(super) fn people_data() -> Value {
    json!({
        "title": "Contacts",
        "owner": {"name": "Ann", "email": "ann@example.com"},
        "people": [
            {"name": "Bob", "phone": "555-1234", "tags": ["friend", "work"]},
            {"name": "Cleo", "phone": null, "tags": []},
            {"name": "Dan", "phone": "555-9876", "tags": ["family"]}
        ],
        "empty": []
    })
}
