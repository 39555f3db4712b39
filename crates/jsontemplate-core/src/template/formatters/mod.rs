//! Formatter registry
//!
//! A formatter is a named, pure transform from one JSON value to another.
//! Names in a substitution's chain are resolved at compile time: the external
//! resolver is consulted first, then the built-in table.

mod builtin;
mod printf;

use serde_json::Value;
use std::fmt;
use std::sync::Arc;

use crate::template::error::CompileError;

pub use builtin::{builtin, escape_html, escape_html_attr_value, BUILTIN_NAMES};
pub use printf::PrintfFormatters;

type FormatFn = dyn Fn(&Value) -> Value + Send + Sync;

/// A named value transform
///
/// Cloning is cheap: clones share the same function.
#[derive(Clone)]
pub struct Formatter {
    name: Arc<str>,
    func: Arc<FormatFn>,
}

impl Formatter {
    pub fn new<F>(name: impl Into<Arc<str>>, func: F) -> Self
    where
        F: Fn(&Value) -> Value + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            func: Arc::new(func),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Apply the transform to a value
    pub fn apply(&self, value: &Value) -> Value {
        (self.func)(value)
    }
}

impl fmt::Debug for Formatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Formatter").field(&self.name).finish()
    }
}

/// Source of formatters consulted before the built-ins
pub trait FormatterResolver {
    /// Map a formatter name to a formatter, or `None` if this source does not
    /// know the name
    fn resolve(&self, name: &str) -> Option<Formatter>;
}

impl<F> FormatterResolver for F
where
    F: Fn(&str) -> Option<Formatter>,
{
    fn resolve(&self, name: &str) -> Option<Formatter> {
        self(name)
    }
}

/// Resolver that knows no formatters, leaving only the built-ins
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFormatters;

impl FormatterResolver for NoFormatters {
    fn resolve(&self, _name: &str) -> Option<Formatter> {
        None
    }
}

/// Resolver that tries each of its resolvers in order
#[derive(Default)]
pub struct ChainedResolver {
    resolvers: Vec<Box<dyn FormatterResolver + Send + Sync>>,
}

impl ChainedResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, resolver: impl FormatterResolver + Send + Sync + 'static) -> Self {
        self.resolvers.push(Box::new(resolver));
        self
    }
}

impl FormatterResolver for ChainedResolver {
    fn resolve(&self, name: &str) -> Option<Formatter> {
        self.resolvers.iter().find_map(|r| r.resolve(name))
    }
}

/// Resolve a formatter name: external resolver first, then the built-ins
///
/// # Errors
///
/// Returns `CompileError::BadFormatter` if neither source knows the name.
pub fn resolve(resolver: &dyn FormatterResolver, name: &str) -> Result<Formatter, CompileError> {
    resolver
        .resolve(name)
        .or_else(|| builtin(name))
        .ok_or_else(|| CompileError::BadFormatter {
            name: name.to_string(),
        })
}

/// Textual representation of a value
///
/// Strings are used as-is, null is empty, everything else is compact JSON.
pub fn to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_resolve_builtin() {
        let formatter = resolve(&NoFormatters, "html").unwrap();
        assert_eq!(formatter.name(), "html");
        assert_eq!(formatter.apply(&json!("<b>")), json!("&lt;b&gt;"));
    }

    #[test]
    fn test_resolve_unknown() {
        match resolve(&NoFormatters, "bogus") {
            Err(CompileError::BadFormatter { name }) => assert_eq!(name, "bogus"),
            other => panic!("Expected BadFormatter, got {:?}", other),
        }
    }

    #[test]
    fn test_external_resolver_consulted_first() {
        let shout = |name: &str| {
            (name == "html").then(|| {
                Formatter::new("html", |v: &Value| Value::String(to_text(v).to_uppercase()))
            })
        };
        let formatter = resolve(&shout, "html").unwrap();
        assert_eq!(formatter.apply(&json!("<b>")), json!("<B>"));

        // Names the resolver does not know still fall back to built-ins
        let formatter = resolve(&shout, "raw").unwrap();
        assert_eq!(formatter.apply(&json!("<b>")), json!("<b>"));
    }

    #[test]
    fn test_chained_resolver_order() {
        let first = |name: &str| {
            (name == "x").then(|| Formatter::new("x", |_: &Value| json!("first")))
        };
        let second = |name: &str| {
            (name == "x" || name == "y").then(|| Formatter::new(name, |_: &Value| json!("second")))
        };
        let chain = ChainedResolver::new().with(first).with(second);

        assert_eq!(chain.resolve("x").unwrap().apply(&json!(1)), json!("first"));
        assert_eq!(chain.resolve("y").unwrap().apply(&json!(1)), json!("second"));
        assert!(chain.resolve("z").is_none());
    }

    #[test]
    fn test_to_text() {
        assert_eq!(to_text(&json!("a")), "a");
        assert_eq!(to_text(&json!(5)), "5");
        assert_eq!(to_text(&json!(1.5)), "1.5");
        assert_eq!(to_text(&json!(true)), "true");
        assert_eq!(to_text(&Value::Null), "");
        assert_eq!(to_text(&json!([1, 2])), "[1,2]");
    }
}
