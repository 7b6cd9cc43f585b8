//! Trivia-preserving lexer for EDN source
//!
//! This lexer is designed for CST construction: it preserves ALL source
//! information so the tree can reproduce the input byte-for-byte.
//!
//! - Whitespace runs (spaces, tabs, commas) become `Whitespace` tokens
//! - Every line break becomes its own `Newline` token
//! - `;` comments become `CommentLine` tokens (newline excluded)
//!
//! Malformed input is never dropped: an unterminated string or a malformed
//! number is emitted as an `Error` token covering its text, alongside a
//! [`LexerError`].

use crate::cst::EdnSyntaxKind;
use std::ops::Range;

/// Byte range in the source
pub type CstSpan = Range<usize>;

/// A lexer error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexerError {
    pub message: String,
    pub span: CstSpan,
}

impl LexerError {
    pub fn new(message: impl Into<String>, span: CstSpan) -> Self {
        Self {
            message: message.into(),
            span,
        }
    }
}

/// A token with its syntax kind and span
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CstToken {
    pub kind: EdnSyntaxKind,
    pub text: String,
    pub span: CstSpan,
}

impl CstToken {
    pub fn new(kind: EdnSyntaxKind, text: impl Into<String>, span: CstSpan) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }
}

/// Result returned by the lexer
pub type CstLexResult = (Vec<CstToken>, Vec<LexerError>);

/// Characters that end a symbol, keyword, number or character-literal name
fn is_terminator(c: char) -> bool {
    c.is_whitespace()
        || matches!(c, ',' | '{' | '}' | '[' | ']' | '(' | ')' | '"' | ';')
}

fn next_char(input: &str, at: usize) -> Option<(char, usize)> {
    input[at..].chars().next().map(|c| (c, c.len_utf8()))
}

fn span(start: usize, end: usize) -> CstSpan {
    start..end
}

/// Lex input preserving all trivia for CST construction
///
/// Guarantees that the concatenation of all token texts equals the input, so
/// `parse(source).text() == source` holds downstream.
pub fn lex_with_trivia(input: &str) -> CstLexResult {
    let mut tokens = Vec::new();
    let mut errors = Vec::new();

    let len = input.len();
    let mut i = 0usize;

    while i < len {
        let (current, size) = match next_char(input, i) {
            Some(c) => c,
            None => break,
        };
        let start = i;

        match current {
            // One token per line break so line numbers fall out of a token count
            '\n' => {
                tokens.push(CstToken::new(
                    EdnSyntaxKind::Newline,
                    "\n",
                    span(start, i + size),
                ));
                i += size;
            }
            '\r' => {
                let mut end = i + size;
                if let Some(('\n', nl_size)) = next_char(input, end) {
                    end += nl_size;
                }
                tokens.push(CstToken::new(
                    EdnSyntaxKind::Newline,
                    &input[start..end],
                    span(start, end),
                ));
                i = end;
            }

            // Whitespace run; commas are whitespace in EDN
            c if (c.is_whitespace() || c == ',') && c != '\n' && c != '\r' => {
                let mut end = i + size;
                while let Some((next, next_size)) = next_char(input, end) {
                    if (next.is_whitespace() || next == ',') && next != '\n' && next != '\r' {
                        end += next_size;
                    } else {
                        break;
                    }
                }
                tokens.push(CstToken::new(
                    EdnSyntaxKind::Whitespace,
                    &input[start..end],
                    span(start, end),
                ));
                i = end;
            }

            // Line comment, newline excluded
            ';' => {
                let mut end = i + size;
                while let Some((c, step)) = next_char(input, end) {
                    if c == '\n' || c == '\r' {
                        break;
                    }
                    end += step;
                }
                tokens.push(CstToken::new(
                    EdnSyntaxKind::CommentLine,
                    &input[start..end],
                    span(start, end),
                ));
                i = end;
            }

            '{' => {
                tokens.push(CstToken::new(EdnSyntaxKind::LBrace, "{", span(start, i + size)));
                i += size;
            }
            '}' => {
                tokens.push(CstToken::new(EdnSyntaxKind::RBrace, "}", span(start, i + size)));
                i += size;
            }
            '[' => {
                tokens.push(CstToken::new(
                    EdnSyntaxKind::LBracket,
                    "[",
                    span(start, i + size),
                ));
                i += size;
            }
            ']' => {
                tokens.push(CstToken::new(
                    EdnSyntaxKind::RBracket,
                    "]",
                    span(start, i + size),
                ));
                i += size;
            }
            '(' => {
                tokens.push(CstToken::new(EdnSyntaxKind::LParen, "(", span(start, i + size)));
                i += size;
            }
            ')' => {
                tokens.push(CstToken::new(EdnSyntaxKind::RParen, ")", span(start, i + size)));
                i += size;
            }

            // `#{` opens a set; any other `#...` form is lexed as a symbol
            // (tagged literals and discards keep their text either way)
            '#' => {
                if let Some(('{', brace_size)) = next_char(input, i + size) {
                    let end = i + size + brace_size;
                    tokens.push(CstToken::new(
                        EdnSyntaxKind::HashLBrace,
                        "#{",
                        span(start, end),
                    ));
                    i = end;
                } else {
                    let end = consume_until_terminator(input, i + size);
                    tokens.push(CstToken::new(
                        EdnSyntaxKind::Symbol,
                        &input[start..end],
                        span(start, end),
                    ));
                    i = end;
                }
            }

            // String literal with escapes
            '"' => {
                let mut end = i + size;
                let mut terminated = false;
                while let Some((c, step)) = next_char(input, end) {
                    end += step;
                    match c {
                        '\\' => {
                            if let Some((_, esc_size)) = next_char(input, end) {
                                end += esc_size;
                            }
                        }
                        '"' => {
                            terminated = true;
                            break;
                        }
                        _ => {}
                    }
                }
                if terminated {
                    tokens.push(CstToken::new(
                        EdnSyntaxKind::String,
                        &input[start..end],
                        span(start, end),
                    ));
                } else {
                    errors.push(LexerError::new(
                        "unterminated string literal",
                        span(start, end),
                    ));
                    tokens.push(CstToken::new(
                        EdnSyntaxKind::Error,
                        &input[start..end],
                        span(start, end),
                    ));
                }
                i = end;
            }

            // Keyword: `:name`, `:ns/name`, also tolerates `::name`
            ':' => {
                let end = consume_until_terminator(input, i + size);
                tokens.push(CstToken::new(
                    EdnSyntaxKind::Keyword,
                    &input[start..end],
                    span(start, end),
                ));
                i = end;
            }

            // Character literal: `\a`, `\newline`
            '\\' => {
                let mut end = i + size;
                match next_char(input, end) {
                    Some((c, step)) if c.is_alphanumeric() => {
                        end += step;
                        while let Some((next, next_size)) = next_char(input, end) {
                            if next.is_alphanumeric() {
                                end += next_size;
                            } else {
                                break;
                            }
                        }
                        tokens.push(CstToken::new(
                            EdnSyntaxKind::Char,
                            &input[start..end],
                            span(start, end),
                        ));
                    }
                    Some((c, step)) if !is_terminator(c) => {
                        end += step;
                        tokens.push(CstToken::new(
                            EdnSyntaxKind::Char,
                            &input[start..end],
                            span(start, end),
                        ));
                    }
                    _ => {
                        errors.push(LexerError::new(
                            "dangling character literal",
                            span(start, end),
                        ));
                        tokens.push(CstToken::new(
                            EdnSyntaxKind::Error,
                            &input[start..end],
                            span(start, end),
                        ));
                    }
                }
                i = end;
            }

            // Number: digits, or a sign immediately followed by a digit
            c if c.is_ascii_digit()
                || ((c == '+' || c == '-')
                    && next_char(input, i + size)
                        .map(|(n, _)| n.is_ascii_digit())
                        .unwrap_or(false)) =>
            {
                let (end, kind) = lex_number(input, start);
                if kind == EdnSyntaxKind::Error {
                    errors.push(LexerError::new("malformed number", span(start, end)));
                }
                tokens.push(CstToken::new(kind, &input[start..end], span(start, end)));
                i = end;
            }

            // Everything else is a symbol; `true`/`false`/`nil` get their own kinds
            _ => {
                let end = consume_until_terminator(input, i);
                let text = &input[start..end];
                let kind = match text {
                    "true" => EdnSyntaxKind::True,
                    "false" => EdnSyntaxKind::False,
                    "nil" => EdnSyntaxKind::Nil,
                    _ => EdnSyntaxKind::Symbol,
                };
                tokens.push(CstToken::new(kind, text, span(start, end)));
                i = end;
            }
        }
    }

    (tokens, errors)
}

fn consume_until_terminator(input: &str, mut at: usize) -> usize {
    while let Some((c, step)) = next_char(input, at) {
        if is_terminator(c) {
            break;
        }
        at += step;
    }
    at
}

/// Lex a number starting at `start`, returning its end offset and kind
///
/// A fraction or an exponent makes it a `Decimal`; trailing garbage that is
/// not a terminator (e.g. `1abc`) makes the whole run an `Error` token.
fn lex_number(input: &str, start: usize) -> (usize, EdnSyntaxKind) {
    let mut at = start;
    let mut decimal = false;

    if let Some((c, step)) = next_char(input, at)
        && (c == '+' || c == '-')
    {
        at += step;
    }
    at = consume_digits(input, at);

    if let Some(('.', step)) = next_char(input, at)
        && next_char(input, at + step)
            .map(|(n, _)| n.is_ascii_digit())
            .unwrap_or(false)
    {
        decimal = true;
        at = consume_digits(input, at + step);
    }

    if let Some((c, step)) = next_char(input, at)
        && (c == 'e' || c == 'E')
    {
        let mut exp = at + step;
        if let Some((sign, sign_size)) = next_char(input, exp)
            && (sign == '+' || sign == '-')
        {
            exp += sign_size;
        }
        if next_char(input, exp)
            .map(|(n, _)| n.is_ascii_digit())
            .unwrap_or(false)
        {
            decimal = true;
            at = consume_digits(input, exp);
        }
    }

    match next_char(input, at) {
        Some((c, _)) if !is_terminator(c) => {
            (consume_until_terminator(input, at), EdnSyntaxKind::Error)
        }
        _ if decimal => (at, EdnSyntaxKind::Decimal),
        _ => (at, EdnSyntaxKind::Integer),
    }
}

fn consume_digits(input: &str, mut at: usize) -> usize {
    while let Some((c, step)) = next_char(input, at) {
        if c.is_ascii_digit() {
            at += step;
        } else {
            break;
        }
    }
    at
}
