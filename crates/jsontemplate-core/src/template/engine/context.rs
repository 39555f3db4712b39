//! Scope stack used during expansion

use serde_json::Value;

use crate::template::program::Path;

/// Stack of data values entered by sections, innermost last
///
/// Lookups treat a key bound to null the same as a missing key.
pub(crate) struct ScopedContext<'d> {
    stack: Vec<&'d Value>,
}

impl<'d> ScopedContext<'d> {
    pub fn new(data: &'d Value) -> Self {
        Self { stack: vec![data] }
    }

    pub fn push(&mut self, value: &'d Value) {
        self.stack.push(value);
    }

    pub fn pop(&mut self) {
        // The data the context was created with stays in place
        if self.stack.len() > 1 {
            self.stack.pop();
        }
    }

    /// Innermost scope value
    pub fn cursor(&self) -> &'d Value {
        // Never empty: pop keeps the bottom scope
        self.stack[self.stack.len() - 1]
    }

    /// Resolve a path, or `None` if it is missing or null
    pub fn lookup(&self, path: &Path) -> Option<&'d Value> {
        let value = match path {
            Path::Cursor => self.cursor(),
            Path::Relative(segments) => descend(self.cursor(), segments)?,
            Path::Scoped(segments) => {
                let (first, rest) = segments.split_first()?;
                let scope = self
                    .stack
                    .iter()
                    .rev()
                    .copied()
                    .find_map(|scope| non_null(scope.as_object()?.get(first)?))?;
                descend(scope, rest)?
            }
        };
        non_null(value)
    }
}

fn descend<'d>(mut value: &'d Value, segments: &[String]) -> Option<&'d Value> {
    for segment in segments {
        value = value.as_object()?.get(segment)?;
    }
    Some(value)
}

fn non_null(value: &Value) -> Option<&Value> {
    (!value.is_null()).then_some(value)
}
