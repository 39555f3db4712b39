//! Template module - JSON Template compiler and expansion engine
//!
//! Template text is compiled once into a program (a tree of sections and
//! statements), then expanded any number of times against JSON data.
//!
//! ## Philosophy
//!
//! - **Compile once, expand many**: the compiled [`Template`] is immutable and
//!   can be shared across threads
//! - **Fail fast**: unknown formatters and unbalanced sections are compile
//!   errors, never expansion errors
//! - **Scoped lookup**: names are searched from the innermost section outwards
//!
//! ## Syntax
//!
//! With the default `{}` meta delimiters and `|` format character:
//!
//! - Substitution: `{name}`, `{name|html}`, `{a.b.c}`, `{.relative}`, `{@}`
//! - Comments: `{# anything}`
//! - Sections: `{.section name}` ... `{.or}` ... `{.end}`
//! - Repeated sections: `{.repeated section name}` ... `{.alternates with}` ...
//!   `{.or}` ... `{.end}`
//! - Literals: `{.meta-left}`, `{.meta-right}`, `{.space}`

pub mod builder;
pub mod compile;
pub mod engine;
pub mod error;
pub mod formatters;
pub mod header;
pub mod program;

mod parse;
mod tokenize;

pub use builder::ProgramBuilder;
pub use compile::{compile, expand, Template};
pub use engine::{expand_program, render_program};
pub use error::{CompileError, ExpandError};
pub use formatters::{
    ChainedResolver, Formatter, FormatterResolver, NoFormatters, PrintfFormatters,
};
pub use program::{Path, Section, Statement, Substitution};
