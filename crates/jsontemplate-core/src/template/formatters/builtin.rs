//! Built-in formatters

use lazy_static::lazy_static;
use serde_json::Value;
use std::collections::HashMap;
use url::form_urlencoded;

use super::{to_text, Formatter};

/// Names of every built-in formatter
pub const BUILTIN_NAMES: [&str; 7] = [
    "str",
    "raw",
    "html",
    "htmltag",
    "html-attr-value",
    "size",
    "url-params",
];

lazy_static! {
    /// Read-only table of built-in formatters, initialized on first use
    static ref BUILTIN_FORMATTERS: HashMap<&'static str, Formatter> = {
        let mut table = HashMap::new();
        table.insert("str", Formatter::new("str", |v: &Value| Value::String(to_text(v))));
        table.insert("raw", Formatter::new("raw", |v: &Value| v.clone()));
        table.insert("html", Formatter::new("html", html));
        // Shares the html escaping under its own name
        table.insert("htmltag", Formatter::new("htmltag", html));
        table.insert(
            "html-attr-value",
            Formatter::new("html-attr-value", |v: &Value| {
                Value::String(escape_html_attr_value(&to_text(v)))
            }),
        );
        table.insert("size", Formatter::new("size", size));
        table.insert("url-params", Formatter::new("url-params", url_params));
        table
    };
}

/// Look up a built-in formatter by name
pub fn builtin(name: &str) -> Option<Formatter> {
    BUILTIN_FORMATTERS.get(name).cloned()
}

/// Escape `&`, `<` and `>`
pub fn escape_html(text: &str) -> String {
    // & first, so the entities below are not escaped twice
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escape for use inside a quoted attribute value
pub fn escape_html_attr_value(text: &str) -> String {
    escape_html(text)
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

fn html(value: &Value) -> Value {
    Value::String(escape_html(&to_text(value)))
}

/// Number of elements of a list or object, characters of anything else
fn size(value: &Value) -> Value {
    let len = match value {
        Value::Array(items) => items.len(),
        Value::Object(map) => map.len(),
        other => to_text(other).chars().count(),
    };
    Value::String(len.to_string())
}

/// Encode an object as `application/x-www-form-urlencoded` parameters
fn url_params(value: &Value) -> Value {
    let encoded = match value {
        Value::Object(map) => {
            let mut serializer = form_urlencoded::Serializer::new(String::new());
            for (key, param) in map {
                serializer.append_pair(key, &to_text(param));
            }
            serializer.finish()
        }
        other => form_urlencoded::byte_serialize(to_text(other).as_bytes()).collect(),
    };
    Value::String(encoded)
}
