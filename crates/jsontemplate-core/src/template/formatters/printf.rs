//! `printf`-style formatters, e.g. `{num|printf %.3f}`

use serde_json::Value;

use super::{to_text, Formatter, FormatterResolver};

const PREFIX: &str = "printf ";

/// Resolver for formatter names of the form `printf <format>`
///
/// Supports `%s`, `%d`/`%i`, `%f`, `%x`/`%X` and `%%`, with optional `-` and
/// `0` flags, a width and a precision. A value that cannot be read as a number
/// is printed as text by numeric conversions.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrintfFormatters;

impl FormatterResolver for PrintfFormatters {
    fn resolve(&self, name: &str) -> Option<Formatter> {
        let pieces = parse_format(name.strip_prefix(PREFIX)?)?;
        Some(Formatter::new(name, move |value: &Value| {
            Value::String(render(&pieces, value))
        }))
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Piece {
    Literal(String),
    Conversion(Spec),
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Spec {
    left_align: bool,
    zero_pad: bool,
    width: Option<usize>,
    precision: Option<usize>,
    kind: Kind,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Kind {
    Str,
    Int,
    Float,
    Hex { upper: bool },
}

/// Parse a format string, or `None` if it contains an unknown conversion
fn parse_format(format: &str) -> Option<Vec<Piece>> {
    let mut pieces = Vec::new();
    let mut literal = String::new();
    let mut chars = format.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            literal.push(c);
            continue;
        }
        if chars.peek() == Some(&'%') {
            chars.next();
            literal.push('%');
            continue;
        }

        let mut spec = Spec {
            left_align: false,
            zero_pad: false,
            width: None,
            precision: None,
            kind: Kind::Str,
        };
        while let Some(&flag) = chars.peek() {
            match flag {
                '-' => spec.left_align = true,
                '0' => spec.zero_pad = true,
                _ => break,
            }
            chars.next();
        }
        spec.width = take_number(&mut chars);
        if chars.peek() == Some(&'.') {
            chars.next();
            spec.precision = Some(take_number(&mut chars).unwrap_or(0));
        }
        spec.kind = match chars.next()? {
            's' => Kind::Str,
            'd' | 'i' => Kind::Int,
            'f' => Kind::Float,
            'x' => Kind::Hex { upper: false },
            'X' => Kind::Hex { upper: true },
            _ => return None,
        };

        if !literal.is_empty() {
            pieces.push(Piece::Literal(std::mem::take(&mut literal)));
        }
        pieces.push(Piece::Conversion(spec));
    }

    if !literal.is_empty() {
        pieces.push(Piece::Literal(literal));
    }
    Some(pieces)
}

fn take_number(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> Option<usize> {
    let mut digits = String::new();
    while let Some(&c) = chars.peek() {
        if !c.is_ascii_digit() {
            break;
        }
        digits.push(c);
        chars.next();
    }
    digits.parse().ok()
}

fn render(pieces: &[Piece], value: &Value) -> String {
    let mut out = String::new();
    for piece in pieces {
        match piece {
            Piece::Literal(text) => out.push_str(text),
            Piece::Conversion(spec) => out.push_str(&convert(spec, value)),
        }
    }
    out
}

fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn convert(spec: &Spec, value: &Value) -> String {
    let (body, numeric) = match (spec.kind, as_number(value)) {
        (Kind::Str, _) | (_, None) => {
            let text = to_text(value);
            let text = match spec.precision {
                Some(p) if spec.kind == Kind::Str => text.chars().take(p).collect(),
                _ => text,
            };
            (text, false)
        }
        (Kind::Int, Some(n)) => (format!("{}", n.trunc() as i64), true),
        (Kind::Float, Some(n)) => (format!("{:.*}", spec.precision.unwrap_or(6), n), true),
        (Kind::Hex { upper }, Some(n)) => {
            let n = n.trunc() as i64;
            let digits = if upper {
                format!("{:X}", n.unsigned_abs())
            } else {
                format!("{:x}", n.unsigned_abs())
            };
            let sign = if n < 0 { "-" } else { "" };
            (format!("{}{}", sign, digits), true)
        }
    };
    pad(spec, body, numeric)
}

fn pad(spec: &Spec, body: String, numeric: bool) -> String {
    let len = body.chars().count();
    let width = match spec.width {
        Some(w) if w > len => w,
        _ => return body,
    };
    let fill = width - len;

    if spec.left_align {
        format!("{}{}", body, " ".repeat(fill))
    } else if spec.zero_pad && numeric {
        match body.strip_prefix('-') {
            Some(rest) => format!("-{}{}", "0".repeat(fill), rest),
            None => format!("{}{}", "0".repeat(fill), body),
        }
    } else {
        format!("{}{}", " ".repeat(fill), body)
    }
}
