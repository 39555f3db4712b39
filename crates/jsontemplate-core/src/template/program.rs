//! Program model: statements and the sections that hold them

use std::collections::BTreeMap;
use std::fmt;

use crate::config::consts::CURSOR;
use crate::template::formatters::Formatter;

/// A name identifying a value relative to the current scope
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Path {
    /// `@`: the innermost scope value itself
    Cursor,

    /// `.a.b`: looked up in the innermost scope only
    Relative(Vec<String>),

    /// `a.b`: first segment searched from the innermost scope outwards
    Scoped(Vec<String>),
}

impl Path {
    /// Parse a dotted name, or `None` if any segment is empty
    pub fn parse(name: &str) -> Option<Self> {
        if name == CURSOR {
            return Some(Path::Cursor);
        }

        let (relative, rest) = match name.strip_prefix('.') {
            Some(rest) => (true, rest),
            None => (false, name),
        };
        let segments: Vec<String> = rest.split('.').map(str::to_string).collect();
        if segments.iter().any(|s| s.is_empty() || s.contains(char::is_whitespace)) {
            return None;
        }

        Some(if relative {
            Path::Relative(segments)
        } else {
            Path::Scoped(segments)
        })
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Path::Cursor => f.write_str(CURSOR),
            Path::Relative(segments) => write!(f, ".{}", segments.join(".")),
            Path::Scoped(segments) => f.write_str(&segments.join(".")),
        }
    }
}

/// A value substitution with its resolved formatter chain
#[derive(Debug, Clone)]
pub struct Substitution {
    name: Path,
    formatters: Vec<Formatter>,
}

impl Substitution {
    pub fn new(name: Path, formatters: Vec<Formatter>) -> Self {
        Self { name, formatters }
    }

    pub fn name(&self) -> &Path {
        &self.name
    }

    /// Formatters, applied left to right
    pub fn formatters(&self) -> &[Formatter] {
        &self.formatters
    }
}

/// A single program statement
#[derive(Debug, Clone)]
pub enum Statement {
    /// Literal template text
    Literal(String),

    /// `{name|formatter}`
    Substitution(Substitution),

    /// `{.section name}`: included once if the value is truthy
    Section(Section),

    /// `{.repeated section name}`: included once per list element
    RepeatedSection(Section),
}

/// A block of statements: the default clause plus any named clauses
///
/// Only the builder mutates a section; once the program is finished the tree
/// is read-only.
#[derive(Debug, Clone, Default)]
pub struct Section {
    name: Option<Path>,
    default_clause: Vec<Statement>,
    named_clauses: BTreeMap<String, Vec<Statement>>,
}

impl Section {
    /// The unnamed section at the root of every program
    pub fn root() -> Self {
        Self::default()
    }

    pub fn named(name: Path) -> Self {
        Self {
            name: Some(name),
            ..Self::default()
        }
    }

    /// Section name; `None` only for the root
    pub fn name(&self) -> Option<&Path> {
        self.name.as_ref()
    }

    pub fn is_root(&self) -> bool {
        self.name.is_none()
    }

    /// Statements of the default clause
    pub fn statements(&self) -> &[Statement] {
        &self.default_clause
    }

    /// Statements of a named clause, if declared
    pub fn clause(&self, name: &str) -> Option<&[Statement]> {
        self.named_clauses.get(name).map(Vec::as_slice)
    }

    pub fn clause_names(&self) -> impl Iterator<Item = &str> {
        self.named_clauses.keys().map(String::as_str)
    }

    /// Declare an empty named clause; `false` if it already exists
    pub(crate) fn declare_clause(&mut self, name: &str) -> bool {
        if self.named_clauses.contains_key(name) {
            return false;
        }
        self.named_clauses.insert(name.to_string(), Vec::new());
        true
    }

    /// Append to the named clause, or to the default clause for `None`
    pub(crate) fn push(&mut self, clause: Option<&str>, statement: Statement) {
        let target = match clause {
            Some(name) => self.named_clauses.entry(name.to_string()).or_default(),
            None => &mut self.default_clause,
        };
        target.push(statement);
    }

    /// Total number of statements in this section and all nested sections
    pub fn statement_count(&self) -> usize {
        self.default_clause
            .iter()
            .chain(self.named_clauses.values().flatten())
            .map(|statement| match statement {
                Statement::Section(body) | Statement::RepeatedSection(body) => {
                    1 + body.statement_count()
                }
                _ => 1,
            })
            .sum()
    }
}
