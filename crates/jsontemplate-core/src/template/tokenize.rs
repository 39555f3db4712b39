//! Tokenization of template text
//!
//! Splits template text into literal runs and meta-delimited directives in a
//! single forward pass.

/// Token classification
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum TokenKind<'a> {
    /// Literal text between directives
    Text(&'a str),

    /// Content between the meta delimiters
    Directive {
        content: &'a str,
        /// The directive was directly followed by a newline, included in the
        /// token length
        newline: bool,
    },
}

/// A single token with position and classification
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Token<'a> {
    /// Token classification
    pub kind: TokenKind<'a>,
    /// Absolute byte position of the token in the template
    pub start: usize,
    /// Total length in bytes, including delimiters
    pub length: usize,
    /// Line number where the token starts (for error messages)
    pub line: usize,
}

/// Iterator over the tokens of a template
///
/// A directive is the meta-left marker, at least one character that is not a
/// newline, and the first meta-right marker after that character on the same
/// line. A meta-left marker without a closer on its line is literal text.
///
/// # Performance
///
/// - **Forward-only**: when an opener finds no closer on its line, scanning
///   resumes at the end of that line, since no later opener on the same line
///   can find one either
/// - **Zero-copy**: tokens borrow from the template text
pub(crate) struct TokenStream<'a> {
    text: &'a str,
    meta_left: &'a str,
    meta_right: &'a str,
    /// Current byte position
    pos: usize,
    /// Current line number
    line: usize,
    /// Directive found while emitting the text before it
    pending: Option<Token<'a>>,
}

impl<'a> TokenStream<'a> {
    pub fn new(text: &'a str, meta_left: &'a str, meta_right: &'a str) -> Self {
        Self {
            text,
            meta_left,
            meta_right,
            pos: 0,
            line: 1,
            pending: None,
        }
    }

    /// Find the next directive at or after `from`, as (start, content end, end)
    fn find_directive(&self, mut from: usize) -> Option<(usize, usize, usize)> {
        while let Some(offset) = self.text[from..].find(self.meta_left) {
            let open = from + offset;
            let content_start = open + self.meta_left.len();
            let line_end = self.text[content_start..]
                .find('\n')
                .map_or(self.text.len(), |i| content_start + i);

            // Content holds at least one character
            let first = self.text[content_start..line_end].chars().next();
            if let Some(first) = first {
                let search_start = content_start + first.len_utf8();
                if let Some(close) = self.text[search_start..line_end].find(self.meta_right) {
                    let content_end = search_start + close;
                    return Some((open, content_end, content_end + self.meta_right.len()));
                }
            }

            if line_end >= self.text.len() {
                return None;
            }
            from = line_end + 1;
        }
        None
    }

    fn advance(&mut self, token: &Token<'a>) {
        let consumed = &self.text[token.start..token.start + token.length];
        self.line += consumed.matches('\n').count();
        self.pos = token.start + token.length;
    }
}

impl<'a> Iterator for TokenStream<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        if let Some(token) = self.pending.take() {
            self.advance(&token);
            return Some(token);
        }
        if self.pos >= self.text.len() {
            return None;
        }

        let Some((open, content_end, close_end)) = self.find_directive(self.pos) else {
            let token = Token {
                kind: TokenKind::Text(&self.text[self.pos..]),
                start: self.pos,
                length: self.text.len() - self.pos,
                line: self.line,
            };
            self.advance(&token);
            return Some(token);
        };

        let newline = self.text[close_end..].starts_with('\n');
        let directive_line = self.line + self.text[self.pos..open].matches('\n').count();
        let directive = Token {
            kind: TokenKind::Directive {
                content: &self.text[open + self.meta_left.len()..content_end],
                newline,
            },
            start: open,
            length: close_end - open + usize::from(newline),
            line: directive_line,
        };

        if open == self.pos {
            self.advance(&directive);
            return Some(directive);
        }

        let text = Token {
            kind: TokenKind::Text(&self.text[self.pos..open]),
            start: self.pos,
            length: open - self.pos,
            line: self.line,
        };
        self.advance(&text);
        self.pending = Some(directive);
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds<'a>(text: &'a str, left: &'a str, right: &'a str) -> Vec<TokenKind<'a>> {
        TokenStream::new(text, left, right).map(|t| t.kind).collect()
    }

    fn directive(content: &str, newline: bool) -> TokenKind<'_> {
        TokenKind::Directive { content, newline }
    }

    #[test]
    fn test_text_only() {
        assert_eq!(kinds("Hello", "{", "}"), vec![TokenKind::Text("Hello")]);
        assert!(kinds("", "{", "}").is_empty());
    }

    #[test]
    fn test_text_and_directive() {
        assert_eq!(
            kinds("Hello {name}!", "{", "}"),
            vec![
                TokenKind::Text("Hello "),
                directive("name", false),
                TokenKind::Text("!"),
            ]
        );
    }

    #[test]
    fn test_adjacent_directives() {
        assert_eq!(
            kinds("{a}{b|html}", "{", "}"),
            vec![directive("a", false), directive("b|html", false)]
        );
    }

    #[test]
    fn test_trailing_newline_attached() {
        let tokens: Vec<_> = TokenStream::new("{.end}\nx", "{", "}").collect();
        assert_eq!(tokens[0].kind, directive(".end", true));
        assert_eq!(tokens[0].length, 7);
        assert_eq!(tokens[1].kind, TokenKind::Text("x"));
        assert_eq!(tokens[1].line, 2);
    }

    #[test]
    fn test_multichar_meta() {
        assert_eq!(
            kinds("Hello {{# Comment}} There", "{{", "}}"),
            vec![
                TokenKind::Text("Hello "),
                directive("# Comment", false),
                TokenKind::Text(" There"),
            ]
        );
    }

    #[test]
    fn test_directive_does_not_span_lines() {
        assert_eq!(
            kinds("a { b\n c } d", "{", "}"),
            vec![TokenKind::Text("a { b\n c } d")]
        );
    }

    #[test]
    fn test_empty_directive_is_text() {
        assert_eq!(kinds("a {} b", "{", "}"), vec![TokenKind::Text("a {} b")]);
    }

    #[test]
    fn test_unclosed_then_closed_on_next_line() {
        assert_eq!(
            kinds("x { y\n{z}", "{", "}"),
            vec![TokenKind::Text("x { y\n"), directive("z", false)]
        );
    }

    #[test]
    fn test_line_numbers() {
        let tokens: Vec<_> = TokenStream::new("a\nb\n[c] [d]\n[e]", "[", "]")
            .filter(|t| matches!(t.kind, TokenKind::Directive { .. }))
            .collect();
        let lines: Vec<_> = tokens.iter().map(|t| t.line).collect();
        assert_eq!(lines, vec![3, 3, 4]);
    }

    #[test]
    fn test_tokens_cover_input() {
        let text = "[# c]\nHello [name|html]\n[.section s]x[.end]\n";
        let total: usize = TokenStream::new(text, "[", "]").map(|t| t.length).sum();
        assert_eq!(total, text.len());
    }
}
