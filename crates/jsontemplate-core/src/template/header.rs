//! Template file headers
//!
//! A template file may start with option lines such as `meta: <>` or
//! `default-formatter html`, followed by exactly one blank line before the
//! body. A file whose first line is not an option line has no header.

use log::debug;

use crate::config::consts::header;
use crate::config::CompileOptions;
use crate::template::error::CompileError;

/// Split a header off template text
///
/// Returns the options, starting from `CompileOptions::default()` with each
/// header line applied, and the body that follows the header.
///
/// # Errors
///
/// Returns `CompileError::Configuration` if option lines are not followed by a
/// blank line, or if a `format-char` value is not a single character.
pub fn split_header(text: &str) -> Result<(CompileOptions, &str), CompileError> {
    let mut options = CompileOptions::default();
    let mut found = false;
    let mut rest = text;

    loop {
        let (line, after) = match rest.find('\n') {
            Some(i) => (&rest[..i], &rest[i + 1..]),
            None => (rest, ""),
        };

        match parse_option_line(line) {
            Some((name, value)) => {
                apply_option(&mut options, &name, value)?;
                found = true;
                rest = after;
                if after.is_empty() {
                    // Header with no body
                    return Ok((options, after));
                }
            }
            None if !found => return Ok((options, text)),
            None if line.trim().is_empty() => {
                debug!("template header: {:?}", options);
                return Ok((options, after));
            }
            None => {
                return Err(CompileError::Configuration {
                    message: format!(
                        "must be one blank line between template options and body (got {:?})",
                        line
                    ),
                });
            }
        }
    }
}

/// Recognize `name value` or `name: value` for a known option name
fn parse_option_line(line: &str) -> Option<(String, &str)> {
    let end = line
        .find(|c: char| !(c.is_ascii_alphabetic() || c == '-'))
        .unwrap_or(line.len());
    if end == 0 {
        return None;
    }

    let name = line[..end].to_ascii_lowercase();
    if ![header::META, header::FORMAT_CHAR, header::DEFAULT_FORMATTER].contains(&name.as_str()) {
        return None;
    }

    let rest = &line[end..];
    let rest = rest.strip_prefix(':').unwrap_or(rest);
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    Some((name, rest.trim()))
}

fn apply_option(options: &mut CompileOptions, name: &str, value: &str) -> Result<(), CompileError> {
    match name {
        header::META => options.meta = value.to_string(),
        header::FORMAT_CHAR => {
            let mut chars = value.chars();
            options.format_char = match (chars.next(), chars.next()) {
                (Some(c), None) => c,
                _ => {
                    return Err(CompileError::Configuration {
                        message: format!("format-char must be a single character (got {:?})", value),
                    })
                }
            };
        }
        _ => {
            options.default_formatter = if value.eq_ignore_ascii_case(header::NONE) {
                None
            } else {
                Some(value.to_string())
            };
        }
    }
    Ok(())
}
