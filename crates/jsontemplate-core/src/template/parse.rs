//! Directive parsing
//!
//! Classifies each directive produced by the tokenizer and drives a
//! [`ProgramBuilder`] with the resulting build events.

use log::trace;

use crate::config::consts::clause;
use crate::config::CompileOptions;
use crate::template::builder::ProgramBuilder;
use crate::template::error::CompileError;
use crate::template::tokenize::{TokenKind, TokenStream};

/// A classified directive
#[derive(Debug, Clone, PartialEq)]
enum Directive<'a> {
    /// `{# ...}`
    Comment,

    /// `{.meta-left}`, `{.meta-right}`, `{.space}`
    Literal(&'a str),

    /// `{.section name}` or `{.repeated section name}`
    Section { repeated: bool, name: &'a str },

    /// `{.or}`, `{.alternates with}`
    Clause(&'static str),

    /// `{.end}`
    End,

    /// `{name|formatter|...}`
    Substitution {
        name: &'a str,
        formatters: Vec<&'a str>,
    },
}

/// Classify directive content, or describe why it is malformed
fn classify<'a>(
    content: &'a str,
    meta_left: &'a str,
    meta_right: &'a str,
    format_char: char,
) -> Result<Directive<'a>, String> {
    if content.starts_with('#') {
        return Ok(Directive::Comment);
    }

    let trimmed = content.trim();
    if let Some(keyword) = trimmed.strip_prefix('.') {
        let words: Vec<&str> = keyword.split_whitespace().collect();
        match words[..] {
            ["meta-left"] => return Ok(Directive::Literal(meta_left)),
            ["meta-right"] => return Ok(Directive::Literal(meta_right)),
            ["space"] => return Ok(Directive::Literal(" ")),
            ["end"] => return Ok(Directive::End),
            ["or"] => return Ok(Directive::Clause(clause::OR)),
            ["alternates", "with"] => return Ok(Directive::Clause(clause::ALTERNATES_WITH)),
            ["section", name] => {
                return Ok(Directive::Section {
                    repeated: false,
                    name,
                })
            }
            ["repeated", "section", name] => {
                return Ok(Directive::Section {
                    repeated: true,
                    name,
                })
            }
            ["section", ..] | ["repeated", "section", ..] => {
                return Err(format!("invalid section directive {:?}", content));
            }
            // Anything else is a relative name such as `.url`
            _ => {}
        }
    }

    let mut parts = trimmed.split(format_char).map(str::trim);
    let name = parts.next().unwrap_or_default();
    if name.is_empty() {
        return Err(format!("missing name in {:?}", content));
    }
    let formatters: Vec<&str> = parts.collect();
    if formatters.iter().any(|f| f.is_empty()) {
        return Err(format!("empty formatter name in {:?}", content));
    }
    Ok(Directive::Substitution { name, formatters })
}

/// Parse template text, feeding each statement to `builder`
///
/// The builder is left holding only the root section on success.
///
/// # Errors
///
/// - `Configuration` if the meta delimiters are invalid
/// - `Syntax` for malformed directives and unbalanced sections, with the line
///   number where the problem was found
/// - Any error raised by the builder, such as `BadFormatter`
pub(crate) fn parse_template(
    text: &str,
    options: &CompileOptions,
    builder: &mut ProgramBuilder<'_>,
) -> Result<(), CompileError> {
    let (meta_left, meta_right) = options.meta_delimiters()?;

    for token in TokenStream::new(text, meta_left, meta_right) {
        let (content, newline) = match token.kind {
            TokenKind::Text(text) => {
                builder.append_literal(text);
                continue;
            }
            TokenKind::Directive { content, newline } => (content, newline),
        };

        let directive = classify(content, meta_left, meta_right, options.format_char).map_err(
            |message| CompileError::Syntax {
                message,
                line: token.line,
            },
        )?;
        trace!("line {}: {:?}", token.line, directive);

        match directive {
            Directive::Comment => {}
            Directive::Literal(text) => builder.append_literal(text),
            Directive::Section { repeated, name } => builder.new_section(repeated, name)?,
            Directive::Clause(name) => builder.new_clause(name)?,
            Directive::End => {
                if builder.depth() == 1 {
                    return Err(CompileError::Syntax {
                        message: format!("got too many {}.end{} statements", meta_left, meta_right),
                        line: token.line,
                    });
                }
                builder.end_section()?;
            }
            Directive::Substitution { name, formatters } => {
                builder.append_substitution(name, &formatters)?;
                // Only substitutions keep the newline that follows them
                if newline {
                    builder.append_literal("\n");
                }
            }
        }
    }

    if builder.depth() > 1 {
        return Err(CompileError::Syntax {
            message: format!(
                "got too few {}.end{} statements ({} section(s) left open)",
                meta_left,
                meta_right,
                builder.depth() - 1
            ),
            line: text.lines().count().max(1),
        });
    }
    Ok(())
}
