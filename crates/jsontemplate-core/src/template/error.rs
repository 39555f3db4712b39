//! Template error types

use thiserror::Error;

/// Errors raised while compiling template text into a program
///
/// All of them abort compilation; no partially built program is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    /// Formatter name unknown to both the external resolver and the built-ins
    #[error("'{name}' is not a valid formatter")]
    BadFormatter {
        /// The formatter name that failed to resolve
        name: String,
    },

    /// Substitution without formatters while no default formatter is set
    #[error("no formatter given for '{name}' and no default formatter is set")]
    MissingFormatter {
        /// The substitution name
        name: String,
    },

    /// Malformed template text
    #[error("syntax error at line {line}: {message}")]
    Syntax {
        /// Error message
        message: String,
        /// Line number where the error occurred
        line: usize,
    },

    /// Substitution or section name that is not a valid path
    #[error("invalid name '{name}'")]
    InvalidName {
        /// The rejected name
        name: String,
    },

    /// A clause declared twice in the same section
    #[error("section '{section}' already has an '{clause}' clause")]
    DuplicateClause {
        /// Name of the section
        section: String,
        /// Name of the clause
        clause: String,
    },

    /// A clause the current section kind cannot hold
    #[error("'{clause}' clause is not allowed in section '{section}'")]
    ClauseNotAllowed {
        /// Name of the section
        section: String,
        /// Name of the clause
        clause: String,
    },

    /// A clause declared on the root of the program
    #[error("'{clause}' clause declared outside of any section")]
    ClauseOutsideSection {
        /// Name of the clause
        clause: String,
    },

    /// Section end with no open section
    #[error("section end without a matching section start")]
    UnmatchedEnd,

    /// Sections still open when the program was finished
    #[error("{open} section(s) left open")]
    UnclosedSection {
        /// Number of sections left open
        open: usize,
    },

    /// Invalid compile options
    #[error("invalid configuration: {message}")]
    Configuration {
        /// Error message
        message: String,
    },
}

impl CompileError {
    /// Stable name of the error kind, as reported by the command line tool
    pub fn kind(&self) -> &'static str {
        match self {
            CompileError::BadFormatter { .. } => "BadFormatter",
            CompileError::MissingFormatter { .. } => "MissingFormatter",
            CompileError::Configuration { .. } => "ConfigurationError",
            CompileError::Syntax { .. }
            | CompileError::InvalidName { .. }
            | CompileError::DuplicateClause { .. }
            | CompileError::ClauseNotAllowed { .. }
            | CompileError::ClauseOutsideSection { .. }
            | CompileError::UnmatchedEnd
            | CompileError::UnclosedSection { .. } => "TemplateSyntaxError",
        }
    }
}

/// Errors raised while expanding a compiled program against data
///
/// Expansion stops at the first error and returns no output.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExpandError {
    /// Name not found in any scope, or bound to null
    #[error("'{name}' is not defined")]
    UndefinedVariable {
        /// The name that could not be resolved
        name: String,
    },

    /// Repeated section over a value that is not a list
    #[error("expected a list for repeated section '{name}', got {found}")]
    ExpectedList {
        /// Name of the repeated section
        name: String,
        /// JSON type of the value found instead
        found: &'static str,
    },

    /// Substitution with an empty formatter chain
    #[error("no formatter to apply to '{name}'")]
    NoFormatter {
        /// The substitution name
        name: String,
    },
}

impl ExpandError {
    /// Stable name of the error kind, as reported by the command line tool
    pub fn kind(&self) -> &'static str {
        match self {
            ExpandError::UndefinedVariable { .. } => "UndefinedVariable",
            ExpandError::ExpectedList { .. } | ExpandError::NoFormatter { .. } => {
                "EvaluationError"
            }
        }
    }
}
