use serde::{Deserialize, Serialize};

use crate::config::consts::{defaults, FORMAT_CHARS};
use crate::template::error::CompileError;

/// Options controlling how template text is compiled
///
/// Deserializes from the `options` object of a description file. Missing keys
/// take their defaults; an explicit `null` for `default_formatter` disables
/// implicit formatting, so every substitution must name a formatter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompileOptions {
    /// Delimiter pair, e.g. `{}` or `[[]]`
    pub meta: String,

    /// Separator between a name and its formatters
    #[serde(alias = "format-char")]
    pub format_char: char,

    /// Formatter used for substitutions that name none
    #[serde(alias = "default-formatter")]
    pub default_formatter: Option<String>,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            meta: defaults::META.to_string(),
            format_char: defaults::FORMAT_CHAR,
            default_formatter: Some(defaults::DEFAULT_FORMATTER.to_string()),
        }
    }
}

impl CompileOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_meta(mut self, meta: impl Into<String>) -> Self {
        self.meta = meta.into();
        self
    }

    pub fn with_format_char(mut self, format_char: char) -> Self {
        self.format_char = format_char;
        self
    }

    /// Set the default formatter; `None` requires explicit formatters
    pub fn with_default_formatter(mut self, name: Option<&str>) -> Self {
        self.default_formatter = name.map(str::to_string);
        self
    }

    /// Split `meta` into its left and right halves
    ///
    /// # Errors
    ///
    /// Returns `CompileError::Configuration` if `meta` is empty or has an odd
    /// number of characters.
    pub fn meta_delimiters(&self) -> Result<(&str, &str), CompileError> {
        let count = self.meta.chars().count();
        if count == 0 {
            return Err(CompileError::Configuration {
                message: "meta must not be empty".to_string(),
            });
        }
        if count % 2 == 1 {
            return Err(CompileError::Configuration {
                message: format!("{:?} has an odd number of metacharacters", self.meta),
            });
        }

        let split = self
            .meta
            .char_indices()
            .nth(count / 2)
            .map(|(i, _)| i)
            .unwrap_or(self.meta.len());
        Ok(self.meta.split_at(split))
    }

    /// Check every option before compilation starts
    pub fn validate(&self) -> Result<(), CompileError> {
        self.meta_delimiters()?;

        if !FORMAT_CHARS.contains(&self.format_char) {
            return Err(CompileError::Configuration {
                message: format!(
                    "only format characters : and | are accepted (got {:?})",
                    self.format_char
                ),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let options = CompileOptions::default();
        assert_eq!(options.meta, "{}");
        assert_eq!(options.format_char, '|');
        assert_eq!(options.default_formatter.as_deref(), Some("str"));
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_meta_split() {
        let options = CompileOptions::new().with_meta("[[]]");
        assert_eq!(options.meta_delimiters().unwrap(), ("[[", "]]"));

        let options = CompileOptions::new().with_meta("<>");
        assert_eq!(options.meta_delimiters().unwrap(), ("<", ">"));
    }

    #[test]
    fn test_meta_odd_length_rejected() {
        let options = CompileOptions::new().with_meta("m");
        match options.validate() {
            Err(CompileError::Configuration { message }) => {
                assert!(message.contains("odd number"));
            }
            other => panic!("Expected Configuration error, got {:?}", other),
        }
    }

    #[test]
    fn test_meta_empty_rejected() {
        let options = CompileOptions::new().with_meta("");
        assert!(matches!(
            options.validate(),
            Err(CompileError::Configuration { .. })
        ));
    }

    #[test]
    fn test_format_char_rejected() {
        let options = CompileOptions::new().with_format_char('!');
        assert!(matches!(
            options.validate(),
            Err(CompileError::Configuration { .. })
        ));
        assert!(CompileOptions::new().with_format_char(':').validate().is_ok());
    }

    #[test]
    fn test_deserialize_missing_keys_use_defaults() {
        let options: CompileOptions = serde_json::from_value(json!({})).unwrap();
        assert_eq!(options, CompileOptions::default());
    }

    #[test]
    fn test_deserialize_null_default_formatter() {
        let options: CompileOptions = serde_json::from_value(json!({
            "meta": "[]",
            "format_char": ":",
            "default_formatter": null
        }))
        .unwrap();
        assert_eq!(options.meta, "[]");
        assert_eq!(options.format_char, ':');
        assert_eq!(options.default_formatter, None);
    }

    #[test]
    fn test_deserialize_dashed_keys() {
        let options: CompileOptions = serde_json::from_value(json!({
            "format-char": ":",
            "default-formatter": "html"
        }))
        .unwrap();
        assert_eq!(options.format_char, ':');
        assert_eq!(options.default_formatter.as_deref(), Some("html"));
    }
}
