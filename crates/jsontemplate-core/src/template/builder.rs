//! Program builder
//!
//! Receives a linear stream of build events from the parser and assembles the
//! section tree. Open sections live on an ownership stack; closing a section
//! moves it into its parent as a `Section` or `RepeatedSection` statement.

use log::trace;

use crate::config::consts::clause;
use crate::template::error::CompileError;
use crate::template::formatters::{self, FormatterResolver};
use crate::template::program::{Path, Section, Statement, Substitution};

/// A section under construction
struct Scope {
    section: Section,
    repeated: bool,
    /// Named clause receiving appends; `None` for the default clause
    clause: Option<String>,
}

impl Scope {
    fn new(section: Section, repeated: bool) -> Self {
        Self {
            section,
            repeated,
            clause: None,
        }
    }

    fn label(&self) -> String {
        self.section
            .name()
            .map(ToString::to_string)
            .unwrap_or_default()
    }
}

/// Stack-based constructor for a program tree
///
/// A builder is used for a single compilation and consumed by
/// [`into_root`](Self::into_root).
pub struct ProgramBuilder<'r> {
    stack: Vec<Scope>,
    resolver: &'r dyn FormatterResolver,
    default_formatter: Option<String>,
}

impl<'r> ProgramBuilder<'r> {
    /// Create a builder holding a fresh root section
    ///
    /// # Arguments
    ///
    /// * `resolver` - Consulted before the built-in formatters
    /// * `default_formatter` - Applied to substitutions that name no formatter
    pub fn new(resolver: &'r dyn FormatterResolver, default_formatter: Option<&str>) -> Self {
        Self {
            stack: vec![Scope::new(Section::root(), false)],
            resolver,
            default_formatter: default_formatter.map(str::to_string),
        }
    }

    /// Number of open scopes, including the root
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    fn current(&mut self) -> &mut Scope {
        // The root is never popped
        let last = self.stack.len() - 1;
        &mut self.stack[last]
    }

    /// Append a statement to the active clause of the current section
    pub fn append(&mut self, statement: Statement) {
        let scope = self.current();
        scope.section.push(scope.clause.as_deref(), statement);
    }

    /// Append literal text
    pub fn append_literal(&mut self, text: &str) {
        self.append(Statement::Literal(text.to_string()));
    }

    /// Resolve a formatter chain and append a substitution
    ///
    /// An empty chain uses the default formatter.
    ///
    /// # Errors
    ///
    /// - `InvalidName` if `name` is not a valid path
    /// - `BadFormatter` if any formatter name cannot be resolved
    /// - `MissingFormatter` if the chain is empty and no default is set
    pub fn append_substitution(
        &mut self,
        name: &str,
        formatter_names: &[&str],
    ) -> Result<(), CompileError> {
        let path = parse_path(name)?;

        let formatters = if formatter_names.is_empty() {
            let default = self.default_formatter.as_deref().ok_or_else(|| {
                CompileError::MissingFormatter {
                    name: name.to_string(),
                }
            })?;
            vec![formatters::resolve(self.resolver, default)?]
        } else {
            formatter_names
                .iter()
                .map(|f| formatters::resolve(self.resolver, f))
                .collect::<Result<Vec<_>, _>>()?
        };

        trace!("substitution {} with {} formatter(s)", path, formatters.len());
        self.append(Statement::Substitution(Substitution::new(path, formatters)));
        Ok(())
    }

    /// Open a section or repeated section and make it current
    pub fn new_section(&mut self, repeated: bool, name: &str) -> Result<(), CompileError> {
        let path = parse_path(name)?;
        trace!("open {}section {}", if repeated { "repeated " } else { "" }, path);
        self.stack.push(Scope::new(Section::named(path), repeated));
        Ok(())
    }

    /// Declare a named clause on the current section and append to it
    ///
    /// # Errors
    ///
    /// - `ClauseOutsideSection` at the root
    /// - `ClauseNotAllowed` for `alternates with` in a non-repeated section
    /// - `DuplicateClause` if the section already declares `name`
    pub fn new_clause(&mut self, name: &str) -> Result<(), CompileError> {
        if self.stack.len() == 1 {
            return Err(CompileError::ClauseOutsideSection {
                clause: name.to_string(),
            });
        }

        let scope = self.current();
        if name == clause::ALTERNATES_WITH && !scope.repeated {
            return Err(CompileError::ClauseNotAllowed {
                section: scope.label(),
                clause: name.to_string(),
            });
        }
        if !scope.section.declare_clause(name) {
            return Err(CompileError::DuplicateClause {
                section: scope.label(),
                clause: name.to_string(),
            });
        }

        trace!("clause '{}' in section {}", name, scope.label());
        scope.clause = Some(name.to_string());
        Ok(())
    }

    /// Close the current section, moving it into its parent
    ///
    /// # Errors
    ///
    /// Returns `UnmatchedEnd` if only the root is open.
    pub fn end_section(&mut self) -> Result<(), CompileError> {
        if self.stack.len() == 1 {
            return Err(CompileError::UnmatchedEnd);
        }

        let Some(closed) = self.stack.pop() else {
            return Err(CompileError::UnmatchedEnd);
        };
        trace!("close section {}", closed.label());
        let statement = if closed.repeated {
            Statement::RepeatedSection(closed.section)
        } else {
            Statement::Section(closed.section)
        };
        self.append(statement);
        Ok(())
    }

    /// Finish building and return the root section
    ///
    /// # Errors
    ///
    /// Returns `UnclosedSection` if any section is still open.
    pub fn into_root(mut self) -> Result<Section, CompileError> {
        if self.stack.len() != 1 {
            return Err(CompileError::UnclosedSection {
                open: self.stack.len() - 1,
            });
        }
        match self.stack.pop() {
            Some(root) => Ok(root.section),
            None => Err(CompileError::UnclosedSection { open: 0 }),
        }
    }
}

fn parse_path(name: &str) -> Result<Path, CompileError> {
    Path::parse(name).ok_or_else(|| CompileError::InvalidName {
        name: name.to_string(),
    })
}
