//! Expansion engine
//!
//! Walks a compiled program against a JSON dictionary. The engine keeps no
//! state between calls, so one program can be expanded from many threads at
//! once.

mod context;

use log::debug;
use serde_json::Value;

use crate::config::consts::clause;
use crate::template::error::ExpandError;
use crate::template::formatters::to_text;
use crate::template::program::{Path, Section, Statement, Substitution};

use context::ScopedContext;

/// Expand a program into a string
///
/// # Errors
///
/// Returns the first `ExpandError` encountered; no partial output is returned.
pub fn expand_program(program: &Section, data: &Value) -> Result<String, ExpandError> {
    let mut output = String::new();
    render_program(program, data, &mut |chunk: &str| output.push_str(chunk))?;
    debug!("expanded {} statement(s) into {} byte(s)", program.statement_count(), output.len());
    Ok(output)
}

/// Expand a program, passing each output chunk to `callback` in order
///
/// Chunks emitted before an error are not retracted; callers that need
/// all-or-nothing output must discard what they received on `Err`.
pub fn render_program(
    program: &Section,
    data: &Value,
    callback: &mut dyn FnMut(&str),
) -> Result<(), ExpandError> {
    let mut expander = Expander {
        context: ScopedContext::new(data),
        callback,
    };
    expander.execute(program.statements())
}

/// Truthiness of a section value
///
/// Null, `false`, zero, and empty strings and lists are false. An object is
/// true if at least one of its values is not null.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => map.values().any(|v| !v.is_null()),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

struct Expander<'d, 'c> {
    context: ScopedContext<'d>,
    callback: &'c mut dyn FnMut(&str),
}

impl<'d> Expander<'d, '_> {
    fn execute(&mut self, statements: &[Statement]) -> Result<(), ExpandError> {
        for statement in statements {
            match statement {
                Statement::Literal(text) => (self.callback)(text.as_str()),
                Statement::Substitution(sub) => self.substitute(sub)?,
                Statement::Section(section) => self.section(section)?,
                Statement::RepeatedSection(section) => self.repeated_section(section)?,
            }
        }
        Ok(())
    }

    fn execute_clause(&mut self, section: &Section, name: &str) -> Result<(), ExpandError> {
        match section.clause(name) {
            Some(statements) => self.execute(statements),
            None => Ok(()),
        }
    }

    fn section_value(&self, section: &Section) -> Option<&'d Value> {
        match section.name() {
            Some(path) => self.context.lookup(path),
            None => self.context.lookup(&Path::Cursor),
        }
    }

    fn substitute(&mut self, sub: &Substitution) -> Result<(), ExpandError> {
        let value =
            self.context
                .lookup(sub.name())
                .ok_or_else(|| ExpandError::UndefinedVariable {
                    name: sub.name().to_string(),
                })?;

        let (first, rest) =
            sub.formatters()
                .split_first()
                .ok_or_else(|| ExpandError::NoFormatter {
                    name: sub.name().to_string(),
                })?;

        let formatted = rest
            .iter()
            .fold(first.apply(value), |value, formatter| formatter.apply(&value));
        (self.callback)(&to_text(&formatted));
        Ok(())
    }

    fn section(&mut self, section: &Section) -> Result<(), ExpandError> {
        match self.section_value(section) {
            Some(value) if is_truthy(value) => {
                self.context.push(value);
                let result = self.execute(section.statements());
                self.context.pop();
                result
            }
            _ => self.execute_clause(section, clause::OR),
        }
    }

    fn repeated_section(&mut self, section: &Section) -> Result<(), ExpandError> {
        // Any false value counts as empty and runs the `or` clause
        let items = match self.section_value(section) {
            Some(Value::Array(items)) if !items.is_empty() => items,
            Some(other) if is_truthy(other) => {
                return Err(ExpandError::ExpectedList {
                    name: section
                        .name()
                        .map(ToString::to_string)
                        .unwrap_or_default(),
                    found: type_name(other),
                })
            }
            _ => return self.execute_clause(section, clause::OR),
        };

        let last = items.len() - 1;
        for (i, item) in items.iter().enumerate() {
            self.context.push(item);
            let mut result = self.execute(section.statements());
            if result.is_ok() && i != last {
                result = self.execute_clause(section, clause::ALTERNATES_WITH);
            }
            self.context.pop();
            result?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
