//! Compiling template text and the compiled `Template`

use log::debug;
use serde_json::Value;
use std::fs;
use std::path::Path;

use crate::config::CompileOptions;
use crate::template::builder::ProgramBuilder;
use crate::template::engine::{expand_program, render_program};
use crate::template::error::{CompileError, ExpandError};
use crate::template::formatters::{FormatterResolver, NoFormatters};
use crate::template::header::split_header;
use crate::template::parse::parse_template;
use crate::template::program::Section;

/// A compiled template
///
/// Immutable once built; expand it any number of times, from any thread.
#[derive(Debug, Clone)]
pub struct Template {
    program: Section,
    options: CompileOptions,
}

impl Template {
    /// Compile with default options and only the built-in formatters
    pub fn new(text: &str) -> Result<Self, CompileError> {
        compile(text, &NoFormatters, &CompileOptions::default())
    }

    /// Compile text that may start with header option lines
    ///
    /// Header options replace the defaults; see [`split_header`].
    pub fn parse_with_header(
        text: &str,
        resolver: &dyn FormatterResolver,
    ) -> Result<Self, CompileError> {
        let (options, body) = split_header(text)?;
        compile(body, resolver, &options)
    }

    /// Read and compile a template file, honoring its header options
    pub fn from_template_file(
        path: impl AsRef<Path>,
        resolver: &dyn FormatterResolver,
    ) -> crate::Result<Self> {
        let text = fs::read_to_string(path.as_ref())?;
        debug!("compiling template file {}", path.as_ref().display());
        Ok(Self::parse_with_header(&text, resolver)?)
    }

    /// Root section of the compiled program
    pub fn program(&self) -> &Section {
        &self.program
    }

    /// Options the template was compiled with
    pub fn options(&self) -> &CompileOptions {
        &self.options
    }

    /// Expand against a dictionary
    ///
    /// # Errors
    ///
    /// Returns the first `ExpandError` encountered; no partial output is
    /// returned.
    pub fn expand(&self, data: &Value) -> Result<String, ExpandError> {
        expand_program(&self.program, data)
    }

    /// Expand against a dictionary, streaming output chunks to `callback`
    ///
    /// # Errors
    ///
    /// Returns the first `ExpandError` encountered. Chunks already passed to
    /// `callback` are not taken back, so discard them when this returns
    /// `Err`; use [`Template::expand`] for all-or-nothing output.
    pub fn render<F>(&self, data: &Value, mut callback: F) -> Result<(), ExpandError>
    where
        F: FnMut(&str),
    {
        render_program(&self.program, data, &mut callback)
    }
}

/// Compile template text into a [`Template`]
///
/// # Arguments
///
/// * `text` - Template body, without header options
/// * `resolver` - Consulted before the built-in formatters
/// * `options` - Meta delimiters, format character and default formatter
///
/// # Errors
///
/// Returns the first `CompileError` encountered; nothing partially built is
/// returned.
///
/// # Examples
///
/// ```
/// use jsontemplate_core::template::{compile, NoFormatters};
/// use jsontemplate_core::CompileOptions;
/// use serde_json::json;
///
/// let options = CompileOptions::new().with_meta("[]");
/// let template = compile("Hello [name|html]", &NoFormatters, &options).unwrap();
/// assert_eq!(template.expand(&json!({"name": "<you>"})).unwrap(), "Hello &lt;you&gt;");
/// ```
pub fn compile(
    text: &str,
    resolver: &dyn FormatterResolver,
    options: &CompileOptions,
) -> Result<Template, CompileError> {
    options.validate()?;

    let mut builder = ProgramBuilder::new(resolver, options.default_formatter.as_deref());
    parse_template(text, options, &mut builder)?;
    let program = builder.into_root()?;

    debug!(
        "compiled template: {} statement(s), meta {:?}",
        program.statement_count(),
        options.meta
    );
    Ok(Template {
        program,
        options: options.clone(),
    })
}

/// Compile with default options and expand in one step
///
/// # Examples
///
/// ```
/// use serde_json::json;
///
/// let text = jsontemplate_core::expand("Hello {name}", &json!({"name": "World"})).unwrap();
/// assert_eq!(text, "Hello World");
/// ```
pub fn expand(text: &str, data: &Value) -> crate::Result<String> {
    Ok(Template::new(text)?.expand(data)?)
}
